//! Flat, delimited export of table rows.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::models::DataPoint;

/// One row per data point. Columns are the union of every row's flattened
/// keys, followed by the identifier columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordSet {
    pub columns: Vec<String>,
    pub rows: Vec<BTreeMap<String, String>>,
}

impl RecordSet {
    pub const LOCAL_ID: &'static str = "local_id";
    pub const GLOBAL_ID: &'static str = "global_id";

    pub fn from_data_points(points: &[DataPoint]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut rows = Vec::with_capacity(points.len());

        for point in points {
            let mut row = point.flatten();
            for key in row.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
            row.insert(Self::LOCAL_ID.to_string(), point.local_id.clone().unwrap_or_default());
            row.insert(Self::GLOBAL_ID.to_string(), point.global_id.clone().unwrap_or_default());
            rows.push(row);
        }

        if !rows.is_empty() {
            columns.push(Self::LOCAL_ID.to_string());
            columns.push(Self::GLOBAL_ID.to_string());
        }
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Writes a header line and one line per row. Missing cells are empty.
    pub fn write_delimited<W: Write>(&self, mut out: W, separator: char) -> std::io::Result<()> {
        let sep = separator.to_string();
        writeln!(out, "{}", self.columns.join(&sep))?;
        for row in &self.rows {
            let cells: Vec<&str> = self
                .columns
                .iter()
                .map(|c| row.get(c).map(String::as_str).unwrap_or(""))
                .collect();
            writeln!(out, "{}", cells.join(&sep))?;
        }
        Ok(())
    }

    pub fn to_delimited(&self, separator: char) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_delimited(&mut buf, separator);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bundle, DataTable};
    use pretty_assertions::assert_eq;

    fn points() -> Vec<DataPoint> {
        let table = DataTable::new(vec!["NAME".into(), "PAID:AMOUNT".into()], Bundle::new());
        let mut first = table.row(vec!["Kerr".into(), "3s".into()]);
        first.global_id = Some("g-1".into());
        let second = table.row(vec!["Orr".into()]);
        vec![first, second]
    }

    #[test]
    fn columns_are_flattened_then_ids() {
        let records = RecordSet::from_data_points(&points());

        assert_eq!(records.columns, vec!["NAME", "PAID_AMOUNT", "local_id", "global_id"]);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn writes_tab_separated() {
        let records = RecordSet::from_data_points(&points());

        assert_eq!(
            records.to_delimited('\t'),
            "NAME\tPAID_AMOUNT\tlocal_id\tglobal_id\nKerr\t3s\t\tg-1\nOrr\t\t\t\n"
        );
    }

    #[test]
    fn empty_input_has_no_columns() {
        let records = RecordSet::from_data_points(&[]);
        assert!(records.is_empty());
        assert_eq!(records.to_delimited(','), "\n");
    }
}
