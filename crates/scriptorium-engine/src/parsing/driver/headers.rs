use super::DocumentDriver;
use crate::error::{DiagnosticKind, ParseError};
use crate::parsing::kinds::{HeaderLine, ShortcutDef, shortcut_marker};
use crate::parsing::lines::{LineClass, LineKind};
use crate::parsing::shortcuts::ShortcutIssue;
use crate::settings::Settings;

impl DocumentDriver<'_> {
    pub(super) fn scan_header(&mut self, line: &LineClass) -> Result<(), ParseError> {
        if !matches!(line.kind, LineKind::Header) {
            return Ok(());
        }
        match HeaderLine::parse(&line.text, line.number)? {
            Some(HeaderLine::Title(title)) => {
                log::info!("Adding TITLE header attribute {title:?}");
                self.header.push(Settings::TITLE, title);
            }
            Some(HeaderLine::Tag { tag, value }) => {
                if !self.settings.knows_tag(&tag) {
                    log::warn!("line {}: header tag {tag:?} is not configured", line.number);
                }
                log::info!("Adding {tag} header attribute {value:?}");
                self.header.push(&tag, value);
            }
            None => {}
        }
        Ok(())
    }

    /// Shortcut markers are recognised anywhere; definitions only while a
    /// block is open.
    pub(super) fn scan_shortcuts(&mut self, line: &LineClass) {
        let Some(content) = line.content() else {
            return;
        };

        if let Some(id) = shortcut_marker(&content.body) {
            self.shortcuts.open_block(id);
            return;
        }
        if !self.shortcuts.is_open() || !content.shapes.shortcut_definition {
            return;
        }
        let Some(def) = ShortcutDef::parse(&content.body) else {
            return;
        };

        match self.shortcuts.define(def, self.settings, &self.header) {
            Ok(()) => {}
            Err(issue @ ShortcutIssue::UnknownProperty(_)) => {
                self.diagnose(line, DiagnosticKind::UnresolvedReference, issue.to_string());
            }
            Err(issue) => log::warn!("line {}: {issue}", line.number),
        }
    }
}
