//! Marketplace classification from column names.

use msku_ingest::RawTable;
use msku_model::Marketplace;

/// Decides which marketplace schema produced an order table by
/// inspecting its column names, case-folded.
///
/// The header row is authoritative; the first data row is only a
/// fallback for programmatically built tables, since a blank cell there
/// drops the key from the row map. Decision order matters: the MSKU
/// check runs before the generic SKU check so Meesho exports (whose
/// "MSKU" header also contains "sku") classify correctly. An empty
/// table is `Unknown`.
#[must_use]
pub fn classify(table: &RawTable) -> Marketplace {
    let columns: Vec<String> = if table.headers.is_empty() {
        let Some(first) = table.rows.first() else {
            return Marketplace::Unknown;
        };
        first.keys().map(|name| name.to_lowercase()).collect()
    } else {
        table.headers.iter().map(|name| name.to_lowercase()).collect()
    };
    let any_contains =
        |needles: &[&str]| columns.iter().any(|column| needles.iter().any(|n| column.contains(n)));
    if any_contains(&["msku"]) {
        Marketplace::Meesho
    } else if any_contains(&["asin", "amazon"]) {
        Marketplace::Amazon
    } else if any_contains(&["flipkart", "fsn"]) {
        Marketplace::Flipkart
    } else if any_contains(&["sku"]) {
        Marketplace::Generic
    } else {
        Marketplace::Unknown
    }
}
