use std::collections::BTreeMap;

use serde::Serialize;

use super::value::{Bundle, Value, flatten_bundle};

/// Column layout of a tabular block, with defaults contributed by shortcuts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataTable {
    /// Column names. `KEY:SUB` writes the cell into `KEY`'s nested bundle.
    pub columns: Vec<String>,
    pub defaults: Bundle,
}

impl DataTable {
    pub const SUBKEY_SEPARATOR: char = ':';

    pub fn new(columns: Vec<String>, defaults: Bundle) -> Self {
        log::info!("Creating a table with {} columns", columns.len());
        Self { columns, defaults }
    }

    /// Builds a row. Missing cells become empty strings and surplus cells are
    /// dropped, so every row has exactly one cell per column.
    pub fn row(&self, mut values: Vec<String>) -> DataPoint {
        values.resize(self.columns.len(), String::new());

        let mut cells = self.defaults.clone();
        for (column, value) in self.columns.iter().zip(&values) {
            match column.split_once(Self::SUBKEY_SEPARATOR) {
                Some((key, sub)) => {
                    let entry = cells
                        .entry(key.to_string())
                        .or_insert_with(|| Value::Nested(Bundle::new()));
                    if !matches!(entry, Value::Nested(_)) {
                        *entry = Value::Nested(Bundle::new());
                    }
                    if let Value::Nested(inner) = entry {
                        inner.insert(sub.to_string(), Value::text(value.as_str()));
                    }
                }
                None => {
                    cells.insert(column.clone(), Value::text(value.as_str()));
                }
            }
        }

        DataPoint {
            values,
            cells,
            local_id: None,
            global_id: None,
        }
    }
}

/// One parsed table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    /// Raw cell values, one per column.
    pub values: Vec<String>,
    pub cells: Bundle,
    pub local_id: Option<String>,
    pub global_id: Option<String>,
}

impl DataPoint {
    /// Cells with nested keys joined by `_`.
    pub fn flatten(&self) -> BTreeMap<String, String> {
        flatten_bundle(&self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(columns: &[&str]) -> DataTable {
        DataTable::new(columns.iter().map(|c| c.to_string()).collect(), Bundle::new())
    }

    #[test]
    fn pads_short_rows() {
        let point = table(&["COL1", "COL2", "COL3"]).row(vec!["a".into()]);
        assert_eq!(point.values, vec!["a", "", ""]);
        assert_eq!(point.cells["COL3"], Value::from(""));
    }

    #[test]
    fn truncates_long_rows() {
        let point = table(&["COL1"]).row(vec!["a".into(), "b".into()]);
        assert_eq!(point.values, vec!["a"]);
        assert_eq!(point.cells.len(), 1);
    }

    #[test]
    fn subkey_columns_nest() {
        let point = table(&["NAME", "PAID:AMOUNT", "PAID:DATE"])
            .row(vec!["Kerr".into(), "3s".into(), "1767".into()]);

        assert_eq!(
            point.flatten(),
            BTreeMap::from([
                ("NAME".to_string(), "Kerr".to_string()),
                ("PAID_AMOUNT".to_string(), "3s".to_string()),
                ("PAID_DATE".to_string(), "1767".to_string()),
            ])
        );
    }

    #[test]
    fn row_values_override_defaults() {
        let defaults = Bundle::from([
            ("PLACE".to_string(), Value::from("Paisley")),
            ("NAME".to_string(), Value::from("unknown")),
        ]);
        let point = DataTable::new(vec!["NAME".into()], defaults).row(vec!["Kerr".into()]);

        assert_eq!(point.cells["NAME"], Value::from("Kerr"));
        assert_eq!(point.cells["PLACE"], Value::from("Paisley"));
    }
}
