//! SKU mapping and combo definition records.

use serde::{Deserialize, Serialize};

/// One raw-SKU to canonical-MSKU mapping from the master sheet.
///
/// Identity rows (raw SKU equal to its MSKU after trimming) are never
/// stored; lookup already falls back to identity for unmapped SKUs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRecord {
    /// Marketplace-specific SKU as listed on the sheet.
    pub raw_sku: String,
    /// Canonical master SKU this listing resolves to.
    pub canonical_msku: String,
    /// Status column carried through from the master sheet. Read at
    /// load time but never used to filter; kept as a hook for future
    /// status-based filtering.
    pub status: Option<String>,
}

/// One constituent product of a combo listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboComponent {
    /// Canonical MSKU of the component product.
    pub msku: String,
    /// Units of this component shipped per combo sold (currently
    /// always 1; the field exists so weighted combos stay expressible).
    pub units_per_combo: i64,
}

impl ComboComponent {
    #[must_use]
    pub fn single(msku: impl Into<String>) -> Self {
        Self {
            msku: msku.into(),
            units_per_combo: 1,
        }
    }
}
