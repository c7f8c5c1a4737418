// Reference table - merged country data plus compiled per-record matchers

use crate::error::Result;
use crate::model::scheme;
use crate::model::value::{self, SchemeValue};
use polars::prelude::*;
use regex::Regex;

/// Immutable country reference table.
///
/// One row per country/region; one compiled case-insensitive matcher per row,
/// 1:1 with the `regex` column. Built once by the loader and never mutated,
/// so shared read-only use is safe.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    frame: DataFrame,
    matchers: Vec<Regex>,
}

impl ReferenceTable {
    pub(crate) fn new(frame: DataFrame, matchers: Vec<Regex>) -> Self {
        debug_assert_eq!(frame.height(), matchers.len());
        Self { frame, matchers }
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn matchers(&self) -> &[Regex] {
        &self.matchers
    }

    /// Column names, i.e. the valid classification schemes.
    pub fn schemes(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Resolve a scheme alias against this table's columns.
    pub fn resolve_scheme(&self, name: &str) -> Result<String> {
        let columns = self.frame.get_column_names();
        let columns: Vec<&str> = columns.iter().map(|column| column.as_str()).collect();
        scheme::resolve_scheme(name, &columns)
    }

    /// Projected cell value for a row.
    pub fn value(&self, row: usize, column: &str) -> Result<SchemeValue> {
        let cell = self.frame.column(column)?.get(row)?;
        Ok(SchemeValue::from_any(&cell))
    }

    /// Cell rendered as a code string for exact matching; `None` for nulls.
    pub fn code(&self, row: usize, column: &str) -> Result<Option<String>> {
        let cell = self.frame.column(column)?.get(row)?;
        Ok(value::code_string(&cell))
    }

    /// Rows whose cell in `column` equals `needle`, anchored and
    /// case-insensitive.
    pub fn rows_matching_code(&self, column: &str, needle: &str) -> Result<Vec<usize>> {
        let col = self.frame.column(column)?;
        let needle = needle.to_lowercase();
        let mut rows = Vec::new();
        for row in 0..self.frame.height() {
            if let Some(code) = value::code_string(&col.get(row)?) {
                if code.to_lowercase() == needle {
                    rows.push(row);
                }
            }
        }
        Ok(rows)
    }

    /// Rows whose compiled pattern finds `needle`. Every matcher is scanned
    /// so simultaneous matches stay observable.
    pub fn rows_matching_pattern(&self, needle: &str) -> Vec<usize> {
        self.matchers
            .iter()
            .enumerate()
            .filter(|(_, matcher)| matcher.is_match(needle))
            .map(|(row, _)| row)
            .collect()
    }
}
