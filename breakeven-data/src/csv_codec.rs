//! CSV export and import of a [`BusinessModel`].
//!
//! ## Format
//!
//! A two-column table with a literal `key,value` header. Every key is the
//! dotted path of one leaf field and every value is quoted:
//!
//! ```csv
//! key,value
//! costs.personnel.exp-barista-40h.salary,"3000"
//! revenue.daily.high-season-daily.tableTurnover,"2.5"
//! ```
//!
//! Label fields are left out of exports but accepted on import. Values are
//! converted by the type the [`Schema`] records for the key, so numeric
//! fields stay numbers even when the cell holds garbage (it becomes 0).
//! Keys the schema does not know are rejected.

use std::fmt;
use std::io::{Read, Write};

use breakeven_core::{BusinessModel, Schema, is_label_key};
use thiserror::Error;
use tracing::{debug, info, warn};

pub const HEADER: &str = "key,value";

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Renders `model` as CSV text with `\n` line endings.
pub fn export_to_string(model: &BusinessModel) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for (key, value) in model.flatten() {
        if is_label_key(&key) {
            continue;
        }
        out.push_str(&key);
        out.push(',');
        out.push_str(&quote(&value.to_string()));
        out.push('\n');
    }
    out
}

/// Writes the export of `model` to `writer`.
pub fn write_export<W: Write>(
    model: &BusinessModel,
    mut writer: W,
) -> Result<(), CodecError> {
    writer.write_all(export_to_string(model).as_bytes())?;
    writer.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Import
// ---------------------------------------------------------------------------

/// One `key,value` pair read from an import file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    /// 1-based line the row starts on.
    pub line: u64,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NoDelimiter,
    EmptyKey,
    UnknownKey,
    Unreadable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::NoDelimiter => f.write_str("no delimiter"),
            Self::EmptyKey => f.write_str("empty key"),
            Self::UnknownKey => f.write_str("unknown key"),
            Self::Unreadable(msg) => write!(f, "unreadable row: {msg}"),
        }
    }
}

/// A row that was not applied, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub key: String,
    pub reason: SkipReason,
}

/// Rows read from import text, before they touch a model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRows {
    pub rows: Vec<CsvRow>,
    pub skipped: Vec<SkippedRow>,
}

/// Outcome of merging rows into a model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub applied: usize,
    pub skipped: Vec<SkippedRow>,
}

/// Splits import text into rows.
///
/// The first record is the header and is discarded. Blank lines are ignored
/// and `\r\n` endings are accepted. Everything after the first delimiter is
/// the value, so unquoted commas survive.
pub fn parse_rows(text: &str) -> ParsedRows {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut parsed = ParsedRows::default();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                let line = err.position().map(|p| p.line()).unwrap_or_default();
                warn!(line, error = %err, "skipping unreadable import row");
                parsed.skipped.push(SkippedRow {
                    line,
                    key: String::new(),
                    reason: SkipReason::Unreadable(err.to_string()),
                });
                continue;
            }
        };

        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let key = record.get(0).unwrap_or_default().trim().to_string();
        let reason = if record.len() < 2 {
            Some(SkipReason::NoDelimiter)
        } else if key.is_empty() {
            Some(SkipReason::EmptyKey)
        } else {
            None
        };
        if let Some(reason) = reason {
            debug!(line, %reason, "skipping import row");
            parsed.skipped.push(SkippedRow { line, key, reason });
            continue;
        }

        let value = record.iter().skip(1).collect::<Vec<_>>().join(",");
        parsed.rows.push(CsvRow { line, key, value });
    }
    parsed
}

/// Applies `rows` to `model`, converting each value by its schema type.
///
/// Rows are applied in order, so a later row for the same key wins.
pub fn import_rows(
    model: &mut BusinessModel,
    schema: &Schema,
    rows: &[CsvRow],
) -> ImportReport {
    let mut report = ImportReport::default();
    for row in rows {
        let applied = match schema.resolve(&row.key, &row.value) {
            Some((path, value)) => model.set_field(&path, value).is_ok(),
            None => false,
        };
        if applied {
            report.applied += 1;
            continue;
        }
        warn!(line = row.line, key = %row.key, "rejecting unknown import key");
        report.skipped.push(SkippedRow {
            line: row.line,
            key: row.key.clone(),
            reason: SkipReason::UnknownKey,
        });
    }
    report
}

/// Parses `text` and merges it into `model`.
///
/// Rows skipped while parsing are listed in the report ahead of rows the
/// schema rejected.
pub fn import_from_str(
    model: &mut BusinessModel,
    schema: &Schema,
    text: &str,
) -> ImportReport {
    let parsed = parse_rows(text);
    let mut report = import_rows(model, schema, &parsed.rows);
    let mut skipped = parsed.skipped;
    skipped.append(&mut report.skipped);
    report.skipped = skipped;

    info!(
        applied = report.applied,
        skipped = report.skipped.len(),
        "imported model values"
    );
    report
}

/// Reads import text from `reader` and merges it into `model`.
pub fn import_from_reader<R: Read>(
    model: &mut BusinessModel,
    schema: &Schema,
    mut reader: R,
) -> Result<ImportReport, CodecError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(import_from_str(model, schema, &text))
}
