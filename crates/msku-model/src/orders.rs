//! Per-row processing output.

use serde::{Deserialize, Serialize};

use crate::marketplace::Marketplace;

/// One canonical product touched by one source order row.
///
/// A combo order yields one line per component, each flagged with
/// `is_combo_component`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedOrderLine {
    pub marketplace: Marketplace,
    /// SKU exactly as it appeared in the order row.
    pub original_sku: String,
    /// Canonical MSKU after normalization (or the component MSKU for
    /// combo expansions).
    pub mapped_msku: String,
    /// Units sold of this canonical product: order quantity times the
    /// component's units-per-combo.
    pub quantity: i64,
    pub status: Option<String>,
    pub order_date: Option<String>,
    pub customer_location: Option<String>,
    pub product_name: Option<String>,
    /// True iff the source row expanded into more than one component.
    pub is_combo_component: bool,
}
