//! # Document Driver
//!
//! Consumes classified lines one at a time and owns all mutable parse state:
//! the live flags, breadcrumbs, shortcut registry and the entity graph.
//!
//! Per line:
//!
//! 1. On content lines, check the missing-relation heuristic and the
//!    breadcrumb depth (climbing back up restores the targets recorded at the
//!    new depth). Comments and headers carry no depth.
//! 2. Strip the scope marker (not inside tables) and look for shortcut lines.
//! 3. Inside a table, read the line as table content and stop.
//! 4. Otherwise run, in order: peopla attribute scan (only while a peopla is
//!    open), table header scan, header scan, peopla declaration scan.
//! 5. A blank line with no open peopla resets the per-object state.

mod attributes;
mod declarations;
mod headers;
mod state;
mod tables;

pub use attributes::FALLBACK_ACTION;

use crate::error::{Diagnostic, DiagnosticKind, ParseError};
use crate::export::RecordSet;
use crate::models::{Bundle, DataPoint, DataTable, DocumentGraph, EntityRef, Header, PeoplaId};
use crate::parsing::ParsedDocument;
use crate::parsing::lines::{ContentLine, LineClass, extract_scope};
use crate::parsing::shortcuts::ShortcutRegistry;
use crate::settings::Settings;

use state::ParseState;

pub struct DocumentDriver<'s> {
    settings: &'s Settings,
    state: ParseState,
    graph: DocumentGraph,
    header: Header,
    shortcuts: ShortcutRegistry,
    tables: Vec<DataTable>,
    data_points: Vec<DataPoint>,
    diagnostics: Vec<Diagnostic>,
}

impl<'s> DocumentDriver<'s> {
    pub fn new(settings: &'s Settings) -> Self {
        Self {
            settings,
            state: ParseState::default(),
            graph: DocumentGraph::default(),
            header: Header::default(),
            shortcuts: ShortcutRegistry::default(),
            tables: Vec::new(),
            data_points: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn push(&mut self, line: &LineClass) -> Result<(), ParseError> {
        if let Some(content) = line.content() {
            self.check_missing_relation(line, content);
            self.set_breadcrumb_depth(content.depth());
        }

        let (_, scope) = extract_scope(&line.text, self.state.table_live);
        self.state.scope = scope;

        if self.state.table_live {
            self.scan_table_line(line);
        } else {
            self.scan_shortcuts(line);
            if self.state.peopla_live {
                self.scan_peopla_attributes(line)?;
            }
            self.scan_table_header(line)?;
            self.scan_header(line)?;
            self.scan_peopla_declaration(line)?;
        }

        if !self.state.peopla_live && line.is_blank() {
            self.reset();
        }

        log::trace!(
            "[{:04}] {:?}\n       {}",
            line.number,
            line.text,
            self.state.describe(self.shortcuts.is_open())
        );
        Ok(())
    }

    pub fn finish(mut self) -> ParsedDocument {
        if self.state.table_live {
            log::warn!("document ended inside a table");
        }
        self.shortcuts.freeze();

        let records = RecordSet::from_data_points(&self.data_points);
        ParsedDocument {
            header: self.header,
            graph: self.graph,
            shortcuts: self.shortcuts.frozen().clone(),
            tables: self.tables,
            data_points: self.data_points,
            records,
            diagnostics: self.diagnostics,
        }
    }

    /// Climbing back onto a nested peopla without a relation line in between
    /// leaves the relation unknown. Open relation and group context is
    /// dropped until the next root peopla.
    fn check_missing_relation(&mut self, line: &LineClass, content: &ContentLine) {
        let depth = content.depth();
        let previous = self.state.previous_depth.replace(depth);
        if let Some(previous) = previous
            && depth < previous
            && depth > 0
            && content.shapes.peopla
        {
            self.state.missing_relation = true;
            self.state.relation_live = false;
            self.state.action_group_live = false;
            self.diagnose(
                line,
                DiagnosticKind::AmbiguousContext,
                format!(
                    "missing relation before peopla at depth {depth} \
                     (previous line at depth {previous})"
                ),
            );
        }
    }

    fn set_breadcrumb_depth(&mut self, depth: usize) {
        if depth < self.state.breadcrumb_depth {
            log::debug!(
                "Climbing from depth {} to {depth}, restoring targets",
                self.state.breadcrumb_depth
            );
            self.state.targets = self.state.target_crumbs.get(depth).cloned().unwrap_or_default();
        }
        self.state.breadcrumb_depth = depth;
    }

    fn reset(&mut self) {
        self.shortcuts.freeze();
        let state = &mut self.state;
        state.table_live = false;
        state.close_relation();
        state.leaf_peopla = None;
        state.leaf_action_group = None;
        state.breadcrumb_depth = 0;
        state.pedigree_indent = None;
    }

    fn diagnose(&mut self, line: &LineClass, kind: DiagnosticKind, message: String) {
        log::warn!("line {}: {message}", line.number);
        self.diagnostics.push(Diagnostic {
            line: line.number,
            span: line.span,
            kind,
            message,
        });
    }

    fn update_peopla(&mut self, id: PeoplaId, label: &str, attributes: Bundle, line: usize) {
        let peopla = self.graph.peopla_mut(id);
        log::debug!("Adding [{label}] attributes to {}", peopla.name);
        peopla.actions.update(label, attributes, line);
        peopla.evidence.record(line);
    }

    fn update_entity(&mut self, entity: EntityRef, label: &str, attributes: Bundle, line: usize) {
        match entity {
            EntityRef::Peopla(id) => self.update_peopla(id, label, attributes, line),
            EntityRef::ActionGroup(id) => {
                let group = self.graph.action_group_mut(id);
                log::debug!("Adding [{label}] attributes to {} action group", group.kind);
                group.actions.update(label, attributes, line);
                group.evidence.record(line);
            }
        }
    }
}
