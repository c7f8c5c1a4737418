//! Reference table loader.
//!
//! Loads one or more tabular data sources (the bundled dataset or
//! user-supplied UTF-8 tab-separated files), merges them in order,
//! deduplicates the unique key columns keeping the last occurrence, and
//! compiles each record's regex pattern into a case-insensitive matcher.

use crate::error::{CoreError, Result};
use crate::model::scheme::{NAME_OFFICIAL, NAME_SHORT, REGEX};
use crate::model::table::ReferenceTable;
use crate::model::value;
use polars::prelude::*;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// Columns that must stay unique across the merged table.
pub const UNIQUE_KEY_COLUMNS: [&str; 3] = [NAME_SHORT, NAME_OFFICIAL, REGEX];

// Bundled reference dataset, resolved once at engine construction.
const BUNDLED_DATA: &str = include_str!("../../data/country_data.tsv");

/// A reference data source: an in-memory frame or a TSV file on disk.
#[derive(Debug, Clone)]
pub enum TableSource {
    Frame(DataFrame),
    Path(PathBuf),
}

impl From<DataFrame> for TableSource {
    fn from(frame: DataFrame) -> Self {
        TableSource::Frame(frame)
    }
}

impl From<PathBuf> for TableSource {
    fn from(path: PathBuf) -> Self {
        TableSource::Path(path)
    }
}

impl From<&Path> for TableSource {
    fn from(path: &Path) -> Self {
        TableSource::Path(path.to_path_buf())
    }
}

/// Load and merge the base source plus any additional sources into a
/// compiled [`ReferenceTable`]. Additional rows are appended after the base
/// rows, so later data wins on key collisions.
pub fn load(base: TableSource, additional: &[TableSource]) -> Result<ReferenceTable> {
    let mut merged = load_source(&base)?;
    for source in additional {
        let frame = load_source(source)?;
        merged = merged
            .vstack(&frame)
            .map_err(|e| CoreError::Merge { source: e })?;
    }

    report_duplicates(&merged, "merged data", Severity::Warning)?;
    let deduped = dedup_keep_last(merged)?;
    let matchers = compile_matchers(&deduped)?;
    debug!(rows = deduped.height(), "reference table loaded");
    Ok(ReferenceTable::new(deduped, matchers))
}

/// The bundled default dataset as a frame.
pub fn bundled_frame() -> Result<DataFrame> {
    let cursor = Cursor::new(BUNDLED_DATA.as_bytes().to_vec());
    let frame = tsv_options().into_reader_with_file_handle(cursor).finish()?;
    normalize_to_strings(frame)
}

fn load_source(source: &TableSource) -> Result<DataFrame> {
    let (frame, name) = match source {
        TableSource::Frame(frame) => (frame.clone(), "in-memory frame".to_string()),
        TableSource::Path(path) => (read_tsv(path)?, path.display().to_string()),
    };
    let frame = normalize_to_strings(frame)?;
    report_duplicates(&frame, &name, Severity::Error)?;
    Ok(frame)
}

fn read_tsv(path: &Path) -> Result<DataFrame> {
    tsv_options()
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|e| CoreError::DataLoad {
            path: path.to_path_buf(),
            source: e,
        })
}

fn tsv_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_separator(b'\t'))
}

// Sources may arrive with mixed dtypes (numeric columns, all-null columns).
// Casting everything to strings keeps vstack schemas compatible; value
// coercion re-derives integers at projection time.
fn normalize_to_strings(frame: DataFrame) -> Result<DataFrame> {
    let mut columns = Vec::with_capacity(frame.width());
    for column in frame.get_columns() {
        columns.push(column.cast(&DataType::String)?);
    }
    Ok(DataFrame::new(columns)?)
}

enum Severity {
    Error,
    Warning,
}

fn report_duplicates(frame: &DataFrame, source_name: &str, severity: Severity) -> Result<()> {
    for column in UNIQUE_KEY_COLUMNS {
        let duplicates = duplicate_values(frame, column)?;
        if duplicates.is_empty() {
            continue;
        }
        match severity {
            Severity::Error => error!(
                source = source_name,
                column,
                duplicates = ?duplicates,
                "duplicated values in unique key column"
            ),
            Severity::Warning => warn!(
                source = source_name,
                column,
                duplicates = ?duplicates,
                "duplicated values in unique key column, keeping last occurrence"
            ),
        }
    }
    Ok(())
}

fn duplicate_values(frame: &DataFrame, column: &str) -> Result<Vec<String>> {
    let col = frame.column(column)?;
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut duplicates = Vec::new();
    for row in 0..frame.height() {
        if let Some(code) = value::code_string(&col.get(row)?) {
            let count = counts.entry(code.clone()).or_insert(0);
            *count += 1;
            if *count == 2 {
                duplicates.push(code);
            }
        }
    }
    Ok(duplicates)
}

// Deduplicate on each key column independently, in declaration order,
// keeping the last occurrence in scan order.
fn dedup_keep_last(frame: DataFrame) -> Result<DataFrame> {
    let mut frame = frame;
    for column in UNIQUE_KEY_COLUMNS {
        frame = keep_last_on(frame, column)?;
    }
    Ok(frame)
}

fn keep_last_on(frame: DataFrame, column: &str) -> Result<DataFrame> {
    let last: HashMap<String, usize> = {
        let col = frame.column(column)?;
        let mut last = HashMap::new();
        for row in 0..frame.height() {
            if let Some(code) = value::code_string(&col.get(row)?) {
                last.insert(code, row);
            }
        }
        last
    };

    let col = frame.column(column)?;
    let mut keep: Vec<IdxSize> = Vec::with_capacity(frame.height());
    for row in 0..frame.height() {
        let retained = match value::code_string(&col.get(row)?) {
            Some(code) => last.get(&code) == Some(&row),
            None => true,
        };
        if retained {
            keep.push(row as IdxSize);
        }
    }

    if keep.len() == frame.height() {
        return Ok(frame);
    }
    Ok(frame.take(&IdxCa::from_vec("keep".into(), keep))?)
}

fn compile_matchers(frame: &DataFrame) -> Result<Vec<Regex>> {
    let patterns = frame.column(REGEX)?.str()?;
    let names = frame.column(NAME_SHORT)?.str()?;
    let mut matchers = Vec::with_capacity(frame.height());
    for row in 0..frame.height() {
        let record = || names.get(row).unwrap_or_default().to_string();
        // A blank pattern would compile and match every input, so a record
        // without one is a load failure rather than a silent match-all.
        let pattern = match patterns.get(row) {
            Some(pattern) if !pattern.trim().is_empty() => pattern,
            _ => return Err(CoreError::MissingPattern(record())),
        };
        let matcher = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| CoreError::PatternCompile {
                record: record(),
                source: e,
            })?;
        matchers.push(matcher);
    }
    Ok(matchers)
}
