//! Stats table loaded from a delimited file
//!
//! Columns are looked up by header name because the scraper's header has
//! changed across seasons. Cells stay raw strings until extraction so a
//! bad value can be reported with its column and row.

use crate::{HoopsError, Result};
use std::io::Read;
use std::path::Path;

/// An in-memory copy of the input table: one header row plus data rows.
#[derive(Debug, Clone)]
pub struct StatTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl StatTable {
    /// Load a table from a delimited file
    pub fn from_path<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(file, delimiter)
    }

    /// Load a table from any reader
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        log::debug!("Loaded table: {} columns, {} rows", headers.len(), rows.len());

        Ok(StatTable { headers, rows })
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column headers in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Index of a named column
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| {
                HoopsError::Schema(format!(
                    "column '{}' not found (available: {})",
                    name,
                    self.headers.join(", ")
                ))
            })
    }

    /// Raw cell value, if the row and column exist
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col)).map(|s| s.as_str())
    }

    /// Parse one cell of a named column as a number
    pub fn numeric_cell(&self, row: usize, name: &str) -> Result<f64> {
        let col = self.column_index(name)?;
        let raw = self.cell(row, col).ok_or_else(|| {
            HoopsError::Schema(format!("row {} has no value for column '{}'", row, name))
        })?;
        raw.parse::<f64>().map_err(|_| {
            HoopsError::Schema(format!(
                "non-numeric value '{}' in column '{}' at row {}",
                raw, name, row
            ))
        })
    }

    /// Parse an entire named column as numbers
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        let col = self.column_index(name)?;
        let mut values = Vec::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            let raw = row.get(col).map(|s| s.as_str()).unwrap_or("");
            let value = raw.parse::<f64>().map_err(|_| {
                HoopsError::Schema(format!(
                    "non-numeric value '{}' in column '{}' at row {}",
                    raw, name, i
                ))
            })?;
            values.push(value);
        }
        Ok(values)
    }

    /// A named column as strings
    pub fn string_column(&self, name: &str) -> Result<Vec<String>> {
        let col = self.column_index(name)?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(col).cloned().unwrap_or_default())
            .collect())
    }

    /// Indices of rows whose named column equals `value`, in file order
    pub fn rows_where(&self, name: &str, value: &str) -> Result<Vec<usize>> {
        let col = self.column_index(name)?;
        Ok(self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.get(col).map(|c| c == value).unwrap_or(false))
            .map(|(i, _)| i)
            .collect())
    }

    /// Indices of rows whose named column does NOT equal `value`
    pub fn rows_where_not(&self, name: &str, value: &str) -> Result<Vec<usize>> {
        let col = self.column_index(name)?;
        Ok(self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.get(col).map(|c| c != value).unwrap_or(true))
            .map(|(i, _)| i)
            .collect())
    }
}
