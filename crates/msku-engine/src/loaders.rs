//! Table builders for the three master-data loads.
//!
//! Each builder consumes a parsed table wholesale and returns a fresh
//! map; loads are full replacements, never merges across files. Within
//! one file a later row overwrites an earlier row with the same key.
//! Rows missing required fields are skipped silently, per the
//! silent-skip error policy.

use std::collections::BTreeMap;

use tracing::{debug, info};

use msku_ingest::{RawTable, resolve_int, resolve_string};
use msku_model::{ComboComponent, InventoryItem, MappingRecord, StockStatus};

use crate::aliases;

/// Builds the raw-SKU to canonical-MSKU table from master-sheet rows.
///
/// Identity rows are skipped: lookup falls back to identity anyway, so
/// storing them would only bloat the table. The status column is read
/// and carried on the record but never filtered on.
#[must_use]
pub fn build_mappings(table: &RawTable) -> BTreeMap<String, MappingRecord> {
    let mut mappings = BTreeMap::new();
    let mut skipped = 0usize;
    for row in &table.rows {
        let sku = resolve_string(row, aliases::MAPPING_SKU);
        let msku = resolve_string(row, aliases::MAPPING_MSKU);
        let status = resolve_string(row, aliases::MAPPING_STATUS);
        let (Some(sku), Some(msku)) = (sku, msku) else {
            skipped += 1;
            continue;
        };
        let raw_sku = sku.trim().to_string();
        let canonical_msku = msku.trim().to_string();
        if raw_sku == canonical_msku {
            skipped += 1;
            continue;
        }
        mappings.insert(
            raw_sku.clone(),
            MappingRecord {
                raw_sku,
                canonical_msku,
                status,
            },
        );
    }
    info!(loaded = mappings.len(), skipped, "mapping table built");
    mappings
}

/// Builds the combo table from combo-definition rows.
///
/// A row is an active definition when its status is absent or equals
/// "combo"/"active" case-insensitively. Component slots 1..=14 are
/// scanned; a row with no populated slot is discarded. A repeated combo
/// SKU replaces the previous component list entirely.
#[must_use]
pub fn build_combos(table: &RawTable) -> BTreeMap<String, Vec<ComboComponent>> {
    let mut combos = BTreeMap::new();
    let mut skipped = 0usize;
    for row in &table.rows {
        let Some(combo_sku) = resolve_string(row, aliases::COMBO_SKU) else {
            skipped += 1;
            continue;
        };
        let status = resolve_string(row, aliases::COMBO_STATUS);
        let active = match status {
            None => true,
            Some(status) => {
                let folded = status.trim().to_lowercase();
                folded == "combo" || folded == "active"
            }
        };
        if !active {
            skipped += 1;
            continue;
        }
        let mut components = Vec::new();
        for slot in 1..=aliases::COMBO_SLOT_COUNT {
            let slot_aliases = aliases::combo_slot_aliases(slot);
            let slot_refs: Vec<&str> = slot_aliases.iter().map(String::as_str).collect();
            if let Some(component) = resolve_string(row, &slot_refs) {
                let msku = component.trim().to_string();
                if !msku.is_empty() {
                    components.push(ComboComponent::single(msku));
                }
            }
        }
        if components.is_empty() {
            debug!(combo = %combo_sku, "combo row with no components discarded");
            skipped += 1;
            continue;
        }
        combos.insert(combo_sku.trim().to_string(), components);
    }
    info!(loaded = combos.len(), skipped, "combo table built");
    combos
}

/// Builds the working ledger from current-inventory rows.
///
/// Opening stock, when explicitly nonzero, always wins over summed
/// per-location stock; a zero opening stock falls back to the location
/// total when one exists.
#[must_use]
pub fn build_ledger(table: &RawTable) -> BTreeMap<String, InventoryItem> {
    let mut ledger = BTreeMap::new();
    let mut skipped = 0usize;
    for row in &table.rows {
        let Some(msku) = resolve_string(row, aliases::INVENTORY_MSKU) else {
            skipped += 1;
            continue;
        };
        let msku = msku.trim().to_string();
        let product_name = resolve_string(row, aliases::INVENTORY_PRODUCT_NAME)
            .unwrap_or_else(|| "Unknown Product".to_string());
        let opening_stock = resolve_int(row, aliases::INVENTORY_OPENING_STOCK).unwrap_or(0);
        let declared_buffer_stock = resolve_int(row, aliases::INVENTORY_BUFFER_STOCK).unwrap_or(0);

        let mut per_location_stock = BTreeMap::new();
        let mut location_total = 0i64;
        for code in aliases::LOCATION_CODES.iter().copied() {
            let Some(stock) = resolve_int(row, &[code]) else {
                continue;
            };
            if stock > 0 {
                location_total += stock;
                per_location_stock.insert(code.to_string(), stock);
            }
        }
        let location_summary = per_location_stock
            .iter()
            .map(|(code, stock)| format!("{code}: {stock}"))
            .collect::<Vec<_>>()
            .join(", ");

        let current_stock = if opening_stock == 0 && location_total > 0 {
            location_total
        } else {
            opening_stock
        };
        let item = InventoryItem {
            msku: msku.clone(),
            product_name,
            location_summary,
            status: StockStatus::from_stock(current_stock),
            current_stock,
            original_stock: current_stock,
            opening_stock,
            declared_buffer_stock,
            aggregated_location_stock: location_total,
            per_location_stock,
        };
        ledger.insert(msku, item);
    }
    info!(loaded = ledger.len(), skipped, "inventory ledger built");
    ledger
}
