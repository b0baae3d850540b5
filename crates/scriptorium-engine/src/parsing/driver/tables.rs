use super::DocumentDriver;
use crate::error::{DiagnosticKind, ParseError};
use crate::models::DataTable;
use crate::parsing::kinds::{TableHeader, TableLine};
use crate::parsing::lines::LineClass;

impl DocumentDriver<'_> {
    /// Opens a table. Shortcut references must already be frozen; unknown
    /// ones are reported and left out of the defaults.
    pub(super) fn scan_table_header(&mut self, line: &LineClass) -> Result<(), ParseError> {
        let Some(header) = TableHeader::parse(&line.text) else {
            return Ok(());
        };
        if header.columns.is_empty() {
            return Err(ParseError::malformed(line.number, "table header", &line.text));
        }

        let (defaults, missing) = self.shortcuts.resolve(&header.shortcuts);
        for id in missing {
            self.diagnose(
                line,
                DiagnosticKind::UnresolvedReference,
                format!("table references undefined shortcut ^{id}"),
            );
        }

        self.tables.push(DataTable::new(header.columns, defaults));
        self.state.peopla_live = false;
        self.state.table_live = true;
        Ok(())
    }

    pub(super) fn scan_table_line(&mut self, line: &LineClass) {
        match TableLine::classify(&line.text) {
            TableLine::End => {
                log::debug!("line {}: end of table", line.number);
                self.state.table_live = false;
            }
            TableLine::LineBreak | TableLine::Comment => {}
            TableLine::Blank => {
                log::warn!("line {}: blank line inside a table, closing it", line.number);
                self.state.table_live = false;
            }
            TableLine::Ids {
                local_id,
                global_id,
            } => match self.data_points.last_mut() {
                Some(point) => {
                    if local_id.is_some() {
                        point.local_id = local_id;
                    }
                    if global_id.is_some() {
                        point.global_id = global_id;
                    }
                }
                None => self.diagnose(
                    line,
                    DiagnosticKind::UnresolvedReference,
                    "identifier line before any table row".to_string(),
                ),
            },
            TableLine::Row(cells) => {
                if let Some(table) = self.tables.last() {
                    self.data_points.push(table.row(cells));
                }
            }
        }
    }
}
