//! The reconciliation engine.
//!
//! One `ReconEngine` owns the mapping, combo, ledger, and snapshot
//! tables for the lifetime of a run. Its only mutators are the load
//! methods, `reconcile`, and `reset`; processing an order table is
//! read-only. The engine itself is single-threaded by design — callers
//! in a concurrent setting must serialize access behind one lock, since
//! interleaved decrements against the shared ledger would be wrong.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info, warn};

use msku_ingest::{RawTable, parse_table};
use msku_model::{
    ComboComponent, ComboView, DiffEntry, FileError, InventoryItem, InventoryUpdate, LedgerView,
    MappingRecord, MappingView, Marketplace, MarketplaceBreakdown, ProcessedOrderLine,
    ReconError, ReconcileResponse, ReconcileSummary, Result, StockStatus,
};

use crate::batch::{BatchOutcome, SoldTotals};
use crate::classify::classify;
use crate::extract::extract_order;
use crate::gate::should_process;

/// Response-size cap on processed order lines.
pub const PROCESSED_ORDERS_CAP: usize = 100;
/// Entry cap on the mapping and ledger views.
pub const VIEW_CAP: usize = 100;

/// One raw order export handed to a processing request.
#[derive(Debug, Clone)]
pub struct OrderSource {
    /// Label used in per-file error reporting, typically the file name.
    pub name: String,
    /// Raw delimited text.
    pub text: String,
}

/// Owns all reconciliation state. See the module docs for the
/// concurrency contract.
#[derive(Debug, Default)]
pub struct ReconEngine {
    mappings: BTreeMap<String, MappingRecord>,
    combos: BTreeMap<String, Vec<ComboComponent>>,
    ledger: BTreeMap<String, InventoryItem>,
    snapshot: BTreeMap<String, InventoryItem>,
}

impl ReconEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the mapping table wholesale. Returns the entry count.
    pub fn load_mappings(&mut self, table: &RawTable) -> usize {
        self.mappings = crate::loaders::build_mappings(table);
        self.mappings.len()
    }

    /// Replaces the combo table wholesale. Returns the combo count.
    pub fn load_combos(&mut self, table: &RawTable) -> usize {
        self.combos = crate::loaders::build_combos(table);
        self.combos.len()
    }

    /// Replaces the ledger wholesale and snapshots it. Returns the item count.
    pub fn load_inventory(&mut self, table: &RawTable) -> usize {
        self.ledger = crate::loaders::build_ledger(table);
        self.snapshot = self.ledger.clone();
        self.ledger.len()
    }

    #[must_use]
    pub fn has_mappings(&self) -> bool {
        !self.mappings.is_empty()
    }

    /// Maps a raw SKU to its canonical MSKU.
    ///
    /// Meesho SKUs are already canonical and pass through unchanged.
    /// For everything else the mapping table is consulted by trimmed
    /// SKU; unmapped SKUs fall back to identity rather than failing.
    #[must_use]
    pub fn normalize(&self, sku: &str, marketplace: Marketplace) -> String {
        if marketplace == Marketplace::Meesho {
            return sku.to_string();
        }
        let trimmed = sku.trim();
        match self.mappings.get(trimmed) {
            Some(record) => record.canonical_msku.clone(),
            None => trimmed.to_string(),
        }
    }

    /// Expands a raw SKU into its canonical components.
    ///
    /// The combo table is checked first by the normalized MSKU, then by
    /// the raw SKU, so combos may be keyed either way. A non-combo SKU
    /// yields a single synthetic component with one unit.
    #[must_use]
    pub fn expand(&self, sku: &str, marketplace: Marketplace) -> Vec<ComboComponent> {
        let normalized = self.normalize(sku, marketplace);
        if let Some(components) = self.combos.get(normalized.trim()) {
            return components.clone();
        }
        if let Some(components) = self.combos.get(sku.trim()) {
            return components.clone();
        }
        vec![ComboComponent::single(normalized)]
    }

    /// Runs extraction, gating, expansion, and aggregation over one
    /// order table. Read-only; the ledger is untouched until
    /// [`Self::reconcile`].
    #[must_use]
    pub fn process_table(&self, marketplace: Marketplace, table: &RawTable) -> BatchOutcome {
        let mut lines = Vec::new();
        let mut totals = SoldTotals::new();
        let mut unmapped_skus = BTreeSet::new();
        let mut orders_processed = 0usize;
        let mut rows_skipped = 0usize;

        for row in &table.rows {
            let order = extract_order(marketplace, row);
            if !should_process(order.status.as_deref()) {
                debug!(status = order.status.as_deref().unwrap_or("<none>"), "row gated out");
                rows_skipped += 1;
                continue;
            }
            let Some(sku) = order.sku else {
                rows_skipped += 1;
                continue;
            };
            if order.quantity <= 0 {
                rows_skipped += 1;
                continue;
            }
            let components = self.expand(&sku, marketplace);
            let is_combo = components.len() > 1;
            orders_processed += 1;
            for component in components {
                if component.msku.is_empty() {
                    unmapped_skus.insert(sku.clone());
                    continue;
                }
                let quantity = component.units_per_combo * order.quantity;
                totals.add(&component.msku, quantity);
                lines.push(ProcessedOrderLine {
                    marketplace,
                    original_sku: sku.clone(),
                    mapped_msku: component.msku,
                    quantity,
                    status: order.status.clone(),
                    order_date: order.order_date.clone(),
                    customer_location: order.customer_location.clone(),
                    product_name: order.product_name.clone(),
                    is_combo_component: is_combo,
                });
            }
        }
        debug!(
            marketplace = %marketplace,
            orders = orders_processed,
            skipped = rows_skipped,
            mskus = totals.len(),
            "batch processed"
        );
        BatchOutcome {
            marketplace,
            lines,
            totals,
            unmapped_skus,
            orders_processed,
            rows_skipped,
        }
    }

    /// Applies aggregated sold quantities to the working ledger.
    ///
    /// Stock is clamped at zero. MSKUs with no ledger entry produce an
    /// update with `not_found_in_ledger` set rather than an error. The
    /// result is sorted by sold quantity descending; ties keep
    /// first-seen order.
    pub fn reconcile(&mut self, totals: &SoldTotals) -> Vec<InventoryUpdate> {
        let mut updates = Vec::new();
        for (msku, sold_quantity) in totals.iter() {
            match self.ledger.get_mut(msku) {
                Some(item) => {
                    let before = item.current_stock;
                    let new_stock = (before - sold_quantity).max(0);
                    item.current_stock = new_stock;
                    updates.push(InventoryUpdate {
                        msku: msku.to_string(),
                        original_stock: item.original_stock,
                        sold_quantity,
                        new_stock,
                        stock_reduced: before - new_stock,
                        location_summary: item.location_summary.clone(),
                        status: item.status,
                        is_out_of_stock: new_stock == 0,
                        not_found_in_ledger: false,
                    });
                }
                None => {
                    updates.push(InventoryUpdate {
                        msku: msku.to_string(),
                        original_stock: 0,
                        sold_quantity,
                        new_stock: 0,
                        stock_reduced: 0,
                        location_summary: String::new(),
                        status: StockStatus::OutOfStock,
                        is_out_of_stock: false,
                        not_found_in_ledger: true,
                    });
                }
            }
        }
        updates.sort_by(|a, b| b.sold_quantity.cmp(&a.sold_quantity));
        info!(updates = updates.len(), "ledger reconciled");
        updates
    }

    /// Restores the working ledger from the load-time snapshot.
    /// Idempotent. Returns the number of items restored.
    pub fn reset(&mut self) -> usize {
        self.ledger = self.snapshot.clone();
        info!(items = self.ledger.len(), "ledger reset from snapshot");
        self.ledger.len()
    }

    /// Drives a full multi-file processing request: parse, classify,
    /// process, reconcile, summarize.
    ///
    /// Requires a loaded mapping table; this is checked before any file
    /// is parsed. A file that fails to parse is reported in
    /// `file_errors` while its siblings still process.
    pub fn process_request(&mut self, sources: &[OrderSource]) -> Result<ReconcileResponse> {
        if self.mappings.is_empty() {
            return Err(ReconError::MissingMasterData);
        }

        #[derive(Default)]
        struct MarketStats {
            orders: usize,
            mskus: BTreeSet<String>,
            quantity: i64,
            unmapped: BTreeSet<String>,
        }

        let mut combined = SoldTotals::new();
        let mut lines: Vec<ProcessedOrderLine> = Vec::new();
        let mut unmapped: BTreeSet<String> = BTreeSet::new();
        let mut file_errors: Vec<FileError> = Vec::new();
        let mut per_marketplace: BTreeMap<Marketplace, MarketStats> = BTreeMap::new();
        let mut total_orders = 0usize;

        for source in sources {
            let table = match parse_table(&source.text) {
                Ok(table) => table,
                Err(error) => {
                    warn!(file = %source.name, %error, "order file failed to parse");
                    file_errors.push(FileError {
                        file: source.name.clone(),
                        reason: error.reason().to_string(),
                        detail: error.to_string(),
                    });
                    continue;
                }
            };
            let marketplace = classify(&table);
            info!(file = %source.name, %marketplace, rows = table.rows.len(), "processing order file");
            let outcome = self.process_table(marketplace, &table);

            let stats = per_marketplace.entry(marketplace).or_default();
            stats.orders += outcome.orders_processed;
            stats.quantity += outcome.totals.total_quantity();
            for (msku, _) in outcome.totals.iter() {
                stats.mskus.insert(msku.to_string());
            }
            stats.unmapped.extend(outcome.unmapped_skus.iter().cloned());

            total_orders += outcome.orders_processed;
            combined.absorb(&outcome.totals);
            unmapped.extend(outcome.unmapped_skus);
            lines.extend(outcome.lines);
        }

        let inventory_updates = self.reconcile(&combined);
        let out_of_stock_items_count = inventory_updates
            .iter()
            .filter(|update| update.is_out_of_stock)
            .count();

        let marketplaces = per_marketplace
            .into_iter()
            .map(|(marketplace, stats)| {
                (
                    marketplace,
                    MarketplaceBreakdown {
                        orders_processed: stats.orders,
                        unique_mskus: stats.mskus.len(),
                        total_quantity: stats.quantity,
                        unmapped_skus: stats.unmapped.len(),
                    },
                )
            })
            .collect();

        let summary = ReconcileSummary {
            total_orders_processed: total_orders,
            unique_mskus_affected: combined.len(),
            total_quantity_sold: combined.total_quantity(),
            unmapped_skus_count: unmapped.len(),
            out_of_stock_items_count,
            marketplaces,
        };

        let processed_orders_total = lines.len();
        lines.truncate(PROCESSED_ORDERS_CAP);

        Ok(ReconcileResponse {
            summary,
            inventory_updates,
            processed_orders: lines,
            processed_orders_total,
            unmapped_skus: unmapped.into_iter().collect(),
            file_errors,
        })
    }

    /// Mapping table view: first 100 entries plus the total count.
    #[must_use]
    pub fn mapping_view(&self) -> MappingView {
        MappingView {
            entries: self.mappings.values().take(VIEW_CAP).cloned().collect(),
            total: self.mappings.len(),
        }
    }

    /// Full combo table view.
    #[must_use]
    pub fn combo_view(&self) -> ComboView {
        ComboView {
            combos: self.combos.clone(),
        }
    }

    /// Ledger view: first 100 items plus the total count.
    #[must_use]
    pub fn ledger_view(&self) -> LedgerView {
        LedgerView {
            items: self.ledger.values().take(VIEW_CAP).cloned().collect(),
            total: self.ledger.len(),
        }
    }

    /// MSKUs whose working stock differs from the snapshot, largest
    /// absolute decrease first.
    #[must_use]
    pub fn diff_view(&self) -> Vec<DiffEntry> {
        let mut entries: Vec<DiffEntry> = self
            .ledger
            .iter()
            .filter_map(|(msku, item)| {
                let snapshot_stock = self
                    .snapshot
                    .get(msku)
                    .map_or(item.current_stock, |snap| snap.current_stock);
                if item.current_stock == snapshot_stock {
                    return None;
                }
                Some(DiffEntry {
                    msku: msku.clone(),
                    snapshot_stock,
                    current_stock: item.current_stock,
                    delta: item.current_stock - snapshot_stock,
                })
            })
            .collect();
        entries.sort_by_key(|entry| entry.delta);
        entries
    }
}
