//! Column resolution over ordered alias lists.
//!
//! Header spelling varies by marketplace and by export tooling, so every
//! call site carries an ordered list of acceptable column names. The
//! first alias whose cell is present and non-blank wins. Alias lists are
//! fixed per-call-site policy, never runtime configuration.

use crate::table::{CellValue, Row};

/// Returns the first alias whose value is present and non-blank.
#[must_use]
pub fn resolve<'a>(row: &'a Row, aliases: &[&str]) -> Option<&'a CellValue> {
    aliases
        .iter()
        .find_map(|alias| row.get(*alias).filter(|value| !value.is_blank()))
}

/// Resolves to a trimmed string rendering of the cell.
#[must_use]
pub fn resolve_string(row: &Row, aliases: &[&str]) -> Option<String> {
    resolve(row, aliases).map(CellValue::display)
}

/// Resolves to an integer; `None` when the column is missing or the
/// cell does not coerce. Callers apply their documented default.
#[must_use]
pub fn resolve_int(row: &Row, aliases: &[&str]) -> Option<i64> {
    resolve(row, aliases).and_then(CellValue::as_int)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, CellValue)]) -> Row {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn first_matching_alias_wins() {
        let row = row(&[
            ("sku", CellValue::Text("lower".to_string())),
            ("SKU", CellValue::Text("upper".to_string())),
        ]);
        let value = resolve_string(&row, &["SKU", "sku"]);
        assert_eq!(value.as_deref(), Some("upper"));
    }

    #[test]
    fn blank_values_are_skipped() {
        let row = row(&[
            ("SKU", CellValue::Text("  ".to_string())),
            ("sku", CellValue::Text("A1".to_string())),
        ]);
        let value = resolve_string(&row, &["SKU", "sku"]);
        assert_eq!(value.as_deref(), Some("A1"));
    }

    #[test]
    fn absent_key_resolves_to_none() {
        let row = row(&[("Qty", CellValue::Number(2.0))]);
        assert!(resolve(&row, &["SKU", "sku"]).is_none());
        assert_eq!(resolve_int(&row, &["Qty", "qty"]), Some(2));
    }
}
