//! Delimited-text parsing into header-keyed row maps.
//!
//! Marketplace exports arrive as CSV, TSV, pipe- or semicolon-delimited
//! text, usually without telling us which. The parser tries each
//! candidate delimiter and keeps the one producing the most consistent
//! column count, then turns every data row into a map from header label
//! to a typed cell. Truly empty cells are dropped from the map, so
//! "key absent" is the single no-value condition callers check.

use std::collections::BTreeMap;

use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

use msku_model::{ReconError, Result};

/// Delimiters tried during inference, in preference order.
pub const DELIMITER_CANDIDATES: [u8; 4] = [b',', b'\t', b'|', b';'];

/// A parsed cell: numeric-looking values are typed at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Types a raw cell. Returns `None` for empty cells so they stay
    /// absent from the row map.
    fn from_raw(raw: &str) -> Option<Self> {
        let trimmed = raw.trim().trim_matches('\u{feff}');
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Some(Self::Number(n)),
            _ => Some(Self::Text(trimmed.to_string())),
        }
    }

    /// True for text cells that are empty after trimming. The parser
    /// never stores these, but programmatically built rows can.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }

    /// The cell rendered back to a string. Integral numbers print
    /// without a trailing `.0` so SKU-ish numeric cells stay usable
    /// as identifiers.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => {
                format!("{}", *n as i64)
            }
            Self::Number(n) => format!("{n}"),
            Self::Text(text) => text.trim().to_string(),
        }
    }

    /// Total integer coercion: integral numbers and integer-parsing
    /// text succeed, everything else is `None` and the caller applies
    /// its documented default.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => Some(*n as i64),
            Self::Number(_) => None,
            Self::Text(text) => text.trim().parse::<i64>().ok(),
        }
    }
}

/// One data row: header label to typed cell, empty cells absent.
pub type Row = BTreeMap<String, CellValue>;

/// A parsed table: ordered headers plus rows in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl RawTable {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parses raw delimited text into a [`RawTable`].
///
/// The first row is the header; blank lines are skipped silently.
/// Binary content, and input that no candidate delimiter can tokenize,
/// is a [`ReconError::Parse`]. Empty input yields an empty table.
pub fn parse_table(text: &str) -> Result<RawTable> {
    if text.trim().is_empty() {
        return Ok(RawTable::default());
    }
    // NUL bytes mean binary content (a misnamed spreadsheet or archive),
    // not a delimited export.
    if text.contains('\u{0}') {
        return Err(ReconError::Parse("binary content".to_string()));
    }
    let delimiter = infer_delimiter(text)?;
    debug!(delimiter = %(delimiter as char), "delimiter inferred");
    let records = tokenize(text, delimiter)
        .map_err(|error| ReconError::Parse(error.to_string()))?;
    Ok(build_table(&records))
}

/// Picks the candidate delimiter whose tokenization gives the most
/// consistent column count (highest share of rows at the modal count,
/// wider tables winning ties).
fn infer_delimiter(text: &str) -> Result<u8> {
    let mut best: Option<(u8, f64, usize)> = None;
    let mut last_error = None;
    for candidate in DELIMITER_CANDIDATES {
        let records = match tokenize(text, candidate) {
            Ok(records) => records,
            Err(error) => {
                last_error = Some(error);
                continue;
            }
        };
        if records.is_empty() {
            continue;
        }
        let (consistency, modal_width) = column_consistency(&records);
        let better = match best {
            None => true,
            Some((_, best_consistency, best_width)) => {
                consistency > best_consistency
                    || (consistency == best_consistency && modal_width > best_width)
            }
        };
        if better {
            best = Some((candidate, consistency, modal_width));
        }
    }
    match best {
        Some((delimiter, _, _)) => Ok(delimiter),
        None => Err(ReconError::Parse(match last_error {
            Some(error) => error.to_string(),
            None => "no tokenizable rows".to_string(),
        })),
    }
}

fn tokenize(text: &str, delimiter: u8) -> std::result::Result<Vec<StringRecord>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());
    reader.records().collect()
}

/// Share of rows at the modal field count, plus the modal count itself.
fn column_consistency(records: &[StringRecord]) -> (f64, usize) {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.len()).or_insert(0) += 1;
    }
    let (modal_width, modal_freq) = counts
        .into_iter()
        .max_by_key(|&(width, freq)| (freq, width))
        .unwrap_or((0, 0));
    (modal_freq as f64 / records.len() as f64, modal_width)
}

fn build_table(records: &[StringRecord]) -> RawTable {
    let mut iter = records.iter().filter(|record| !is_blank_record(record));
    let Some(header_record) = iter.next() else {
        return RawTable::default();
    };
    let headers: Vec<String> = header_record
        .iter()
        .map(|header| header.trim().trim_matches('\u{feff}').to_string())
        .collect();
    let mut rows = Vec::new();
    for record in iter {
        let mut row = Row::new();
        for (idx, raw) in record.iter().enumerate() {
            let Some(header) = headers.get(idx) else {
                continue;
            };
            if let Some(value) = CellValue::from_raw(raw) {
                row.insert(header.clone(), value);
            }
        }
        if row.is_empty() {
            continue;
        }
        rows.push(row);
    }
    RawTable { headers, rows }
}

fn is_blank_record(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_comma() {
        let table = parse_table("SKU,Quantity\nA1,2\nB2,3\n").unwrap();
        assert_eq!(table.headers, vec!["SKU", "Quantity"]);
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn infers_pipe_over_comma() {
        let text = "SKU|Product Name|Quantity\nA1|Bottle, 1L|2\nB2|Mug|1\n";
        let table = parse_table(text).unwrap();
        assert_eq!(table.headers.len(), 3);
        assert_eq!(
            table.rows[0].get("Product Name"),
            Some(&CellValue::Text("Bottle, 1L".to_string()))
        );
    }

    #[test]
    fn infers_tab_and_semicolon() {
        let tabbed = parse_table("SKU\tQty\nA1\t2\n").unwrap();
        assert_eq!(tabbed.headers, vec!["SKU", "Qty"]);
        let semi = parse_table("SKU;Qty\nA1;2\nB2;5\n").unwrap();
        assert_eq!(semi.rows.len(), 2);
    }

    #[test]
    fn numeric_cells_are_typed() {
        let table = parse_table("SKU,Qty,Price\nA1,2,19.99\n").unwrap();
        let row = &table.rows[0];
        assert_eq!(row.get("Qty"), Some(&CellValue::Number(2.0)));
        assert_eq!(row.get("Price"), Some(&CellValue::Number(19.99)));
        assert_eq!(row.get("SKU"), Some(&CellValue::Text("A1".to_string())));
    }

    #[test]
    fn empty_cells_are_absent() {
        let table = parse_table("SKU,Qty,Status\nA1,,Delivered\n").unwrap();
        let row = &table.rows[0];
        assert!(!row.contains_key("Qty"));
        assert!(row.contains_key("Status"));
    }

    #[test]
    fn blank_lines_and_blank_rows_skipped() {
        let table = parse_table("SKU,Qty\n\nA1,2\n,\nB2,3\n").unwrap();
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn empty_input_is_empty_table() {
        let table = parse_table("   \n  ").unwrap();
        assert!(table.is_empty());
        assert!(table.headers.is_empty());
    }

    #[test]
    fn integral_number_displays_without_fraction() {
        assert_eq!(CellValue::Number(42.0).display(), "42");
        assert_eq!(CellValue::Number(2.5).display(), "2.5");
    }

    #[test]
    fn binary_content_is_a_parse_failure() {
        let error = parse_table("PK\u{3}\u{4}\u{0}\u{0}not a csv").unwrap_err();
        assert_eq!(error.reason(), "parse_failure");
    }

    #[test]
    fn cells_serialize_untagged() {
        let table = parse_table("SKU,Qty\nA1,2\n").unwrap();
        let json = serde_json::to_string(&table.rows[0]).expect("serialize row");
        assert_eq!(json, r#"{"Qty":2.0,"SKU":"A1"}"#);
        let round: Row = serde_json::from_str(&json).expect("deserialize row");
        assert_eq!(round, table.rows[0]);
    }

    #[test]
    fn as_int_is_total() {
        assert_eq!(CellValue::Number(3.0).as_int(), Some(3));
        assert_eq!(CellValue::Number(3.5).as_int(), None);
        assert_eq!(CellValue::Text("7".to_string()).as_int(), Some(7));
        assert_eq!(CellValue::Text("seven".to_string()).as_int(), None);
    }
}
