use serde::Serialize;

/// One cell; `None` when the source file had no value (or no such column).
pub type Cell = Option<String>;
pub type Row = Vec<Cell>;

/// Minimal column-labelled table of text cells.
///
/// Cells stay untyped; the derivations in `summary` and `insights` interpret
/// the columns they need.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns, rows: Vec::new() }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Append a row, padding with empty cells or dropping extras to fit the width.
    pub fn push_row(&mut self, mut row: Row) {
        row.resize(self.columns.len(), None);
        self.rows.push(row);
    }

    /// Set `name` to `value` on every row, adding the column if needed.
    pub fn set_constant_column(&mut self, name: &str, value: &str) {
        match self.column_index(name) {
            Some(idx) => {
                for row in &mut self.rows {
                    row[idx] = Some(value.to_string());
                }
            }
            None => {
                self.columns.push(name.to_string());
                for row in &mut self.rows {
                    row.push(Some(value.to_string()));
                }
            }
        }
    }

    /// Concatenate `other` below `self`. The result has the union of both
    /// column sets in first-appearance order; cells a side lacked are empty.
    pub fn append(&mut self, other: Table) {
        if self.columns.is_empty() && self.rows.is_empty() {
            *self = other;
            return;
        }

        let mut mapping = Vec::with_capacity(other.columns.len());
        for name in &other.columns {
            let idx = match self.column_index(name) {
                Some(idx) => idx,
                None => {
                    self.columns.push(name.clone());
                    for row in &mut self.rows {
                        row.push(None);
                    }
                    self.columns.len() - 1
                }
            };
            mapping.push(idx);
        }

        let width = self.columns.len();
        for row in other.rows {
            let mut aligned: Row = vec![None; width];
            for (cell, &idx) in row.into_iter().zip(&mapping) {
                aligned[idx] = cell;
            }
            self.rows.push(aligned);
        }
    }

    /// Cell text at (`row`, `column`); `None` for empty cells.
    pub fn get(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column)?.as_deref()
    }

    /// Iterate the values of one column.
    pub fn column_values(&self, column: usize) -> impl Iterator<Item = Option<&str>> + '_ {
        self.rows.iter().map(move |row| row.get(column).and_then(|c| c.as_deref()))
    }
}
