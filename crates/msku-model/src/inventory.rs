//! Inventory ledger items.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Whether an item currently has sellable stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    /// Status implied by a stock level: in stock iff positive.
    #[must_use]
    pub fn from_stock(stock: i64) -> Self {
        if stock > 0 {
            Self::InStock
        } else {
            Self::OutOfStock
        }
    }
}

/// One canonical product in the working ledger.
///
/// `current_stock` is the only field mutated after load (by
/// reconciliation, and by reset which restores it from the snapshot
/// copy). Everything else is fixed at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Canonical MSKU, also the ledger key.
    pub msku: String,
    pub product_name: String,
    /// Human-readable summary of where stock sits, e.g. "BLR7: 4, DEL4: 2".
    pub location_summary: String,
    pub status: StockStatus,
    /// Mutable sellable stock, clamped at zero by reconciliation.
    pub current_stock: i64,
    /// Stock level at load time; reported in updates and never mutated.
    pub original_stock: i64,
    /// Opening stock as declared on the inventory sheet.
    pub opening_stock: i64,
    pub declared_buffer_stock: i64,
    /// Sum of all positive per-location stock cells.
    pub aggregated_location_stock: i64,
    /// Stock broken down by warehouse location code.
    pub per_location_stock: BTreeMap<String, i64>,
}
