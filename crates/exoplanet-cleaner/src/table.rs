//! In-memory CSV table
//!
//! A small column-addressed table over string cells. Cells parse to floats
//! on demand; an empty or unparsable cell reads as missing, matching how
//! the survey exports encode nulls.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// A CSV table: header row plus string cells.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Read a CSV file. Lines starting with `#` are skipped; NASA archive
    /// exports carry a comment preamble.
    pub fn read_csv(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .comment(Some(b'#'))
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("failed to open '{}'", path.display()))?;

        let columns: Vec<String> = reader
            .headers()
            .context("failed to read CSV header")?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.context("failed to read CSV record")?;
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            // Short records pad out with empty cells
            row.resize(columns.len(), String::new());
            rows.push(row);
        }

        Ok(Self { columns, rows })
    }

    /// Write the table to a CSV file.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("failed to create '{}'", path.display()))?;

        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Rename columns per `map` (old name to new name). Unknown names are
    /// left alone.
    pub fn rename_columns(&mut self, map: &HashMap<&str, &str>) {
        for column in &mut self.columns {
            if let Some(new_name) = map.get(column.as_str()) {
                *column = new_name.to_string();
            }
        }
    }

    /// The raw string cell, or None for an out-of-range index.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let i = self.column_index(column)?;
        self.rows.get(row).map(|r| r[i].as_str())
    }

    /// The cell parsed as a float. Empty and unparsable cells are missing.
    pub fn value(&self, row: usize, column: &str) -> Option<f64> {
        parse_cell(self.cell(row, column)?)
    }

    pub fn set_cell(&mut self, row: usize, column: &str, value: String) {
        if let Some(i) = self.column_index(column) {
            if let Some(r) = self.rows.get_mut(row) {
                r[i] = value;
            }
        }
    }

    /// Append a column. `values` must have one entry per row.
    pub fn add_column(&mut self, name: &str, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());
        self.columns.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
    }

    /// Overwrite an existing column or append a new one.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) {
        match self.column_index(name) {
            Some(i) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[i] = value;
                }
            }
            None => self.add_column(name, values),
        }
    }

    /// Keep only rows where `keep` returns true.
    pub fn retain_rows<F: FnMut(usize) -> bool>(&mut self, mut keep: F) {
        let mut index = 0;
        let mut kept = Vec::with_capacity(self.rows.len());
        for row in self.rows.drain(..) {
            if keep(index) {
                kept.push(row);
            }
            index += 1;
        }
        self.rows = kept;
    }

    /// Median of the column's parsable values. None when the column is
    /// absent or entirely missing.
    pub fn median(&self, column: &str) -> Option<f64> {
        let i = self.column_index(column)?;
        let mut values: Vec<f64> = self
            .rows
            .iter()
            .filter_map(|r| parse_cell(&r[i]))
            .collect();
        if values.is_empty() {
            return None;
        }
        values.sort_by(f64::total_cmp);
        let mid = values.len() / 2;
        if values.len() % 2 == 1 {
            Some(values[mid])
        } else {
            Some((values[mid - 1] + values[mid]) / 2.0)
        }
    }

    /// Sort rows by the given comparison over row indices' cells.
    pub fn sort_rows_by_value(&mut self, column: &str) {
        if let Some(i) = self.column_index(column) {
            self.rows.sort_by(|a, b| {
                let x = parse_cell(&a[i]).unwrap_or(f64::NAN);
                let y = parse_cell(&b[i]).unwrap_or(f64::NAN);
                x.total_cmp(&y)
            });
        }
    }
}

/// Parse a cell to a float; empty or malformed cells are missing.
pub fn parse_cell(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Render a float the way the rest of the pipeline reads it back.
pub fn format_value(value: f64) -> String {
    value.to_string()
}
