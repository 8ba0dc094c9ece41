//! Reconciliation outputs and read-only query views.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::inventory::{InventoryItem, StockStatus};
use crate::mapping::{ComboComponent, MappingRecord};
use crate::marketplace::Marketplace;
use crate::orders::ProcessedOrderLine;

/// Net effect of one reconciliation pass on one MSKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryUpdate {
    pub msku: String,
    /// The item's load-time stock, not its pre-decrement current stock.
    pub original_stock: i64,
    pub sold_quantity: i64,
    pub new_stock: i64,
    /// Actual decrement applied after clamping at zero.
    pub stock_reduced: i64,
    pub location_summary: String,
    /// The ledger item's load-time status. Meaningless when
    /// `not_found_in_ledger` is set; such records carry a placeholder
    /// and are excluded from the out-of-stock count.
    pub status: StockStatus,
    pub is_out_of_stock: bool,
    /// The MSKU had no ledger entry. Reported, not treated as an error.
    pub not_found_in_ledger: bool,
}

/// Per-marketplace slice of a processing run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceBreakdown {
    pub orders_processed: usize,
    pub unique_mskus: usize,
    pub total_quantity: i64,
    pub unmapped_skus: usize,
}

/// Headline counts for a processing run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileSummary {
    pub total_orders_processed: usize,
    pub unique_mskus_affected: usize,
    pub total_quantity_sold: i64,
    pub unmapped_skus_count: usize,
    pub out_of_stock_items_count: usize,
    pub marketplaces: BTreeMap<Marketplace, MarketplaceBreakdown>,
}

/// A per-file failure that did not abort the rest of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileError {
    pub file: String,
    /// Short machine-readable reason code.
    pub reason: String,
    /// Human-readable detail.
    pub detail: String,
}

/// Full output of one processing request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileResponse {
    pub summary: ReconcileSummary,
    /// Sorted by sold quantity descending, stable on first-seen MSKU.
    pub inventory_updates: Vec<InventoryUpdate>,
    /// Truncated to the first 100 lines; a response-size cap, not a
    /// processing limit.
    pub processed_orders: Vec<ProcessedOrderLine>,
    pub processed_orders_total: usize,
    /// Deduplicated original SKUs that resolved to no canonical product.
    pub unmapped_skus: Vec<String>,
    /// Order files that failed to parse while their siblings proceeded.
    pub file_errors: Vec<FileError>,
}

/// Mapping table view, capped at the first 100 entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingView {
    pub entries: Vec<MappingRecord>,
    pub total: usize,
}

/// Combo table view (uncapped; combo tables are small).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboView {
    pub combos: BTreeMap<String, Vec<ComboComponent>>,
}

/// Ledger view, capped at the first 100 items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerView {
    pub items: Vec<InventoryItem>,
    pub total: usize,
}

/// One MSKU whose working stock differs from its snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry {
    pub msku: String,
    pub snapshot_stock: i64,
    pub current_stock: i64,
    /// `current_stock - snapshot_stock`; negative for decrements.
    pub delta: i64,
}
