//! Per-batch accumulation types.

use std::collections::{BTreeSet, HashMap};

use msku_model::{Marketplace, ProcessedOrderLine};

/// Per-MSKU sold quantities in first-seen order.
///
/// Map iteration order would lose the stable tie order the reconciler
/// promises, so insertion order is tracked explicitly.
#[derive(Debug, Default, Clone)]
pub struct SoldTotals {
    order: Vec<String>,
    totals: HashMap<String, i64>,
}

impl SoldTotals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds quantity to an MSKU's running total.
    pub fn add(&mut self, msku: &str, quantity: i64) {
        match self.totals.get_mut(msku) {
            Some(total) => *total += quantity,
            None => {
                self.order.push(msku.to_string());
                self.totals.insert(msku.to_string(), quantity);
            }
        }
    }

    /// Folds another totals map in, preserving this map's first-seen order.
    pub fn absorb(&mut self, other: &Self) {
        for (msku, quantity) in other.iter() {
            self.add(msku, quantity);
        }
    }

    #[must_use]
    pub fn get(&self, msku: &str) -> i64 {
        self.totals.get(msku).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn total_quantity(&self) -> i64 {
        self.totals.values().sum()
    }

    /// Iterates entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.order
            .iter()
            .map(|msku| (msku.as_str(), self.totals[msku]))
    }
}

/// Output of processing one order table.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub marketplace: Marketplace,
    /// One line per canonical product touched by each accepted row.
    pub lines: Vec<ProcessedOrderLine>,
    pub totals: SoldTotals,
    /// Original SKUs whose expansion produced no canonical product.
    pub unmapped_skus: BTreeSet<String>,
    /// Rows that passed the gate and expanded.
    pub orders_processed: usize,
    /// Rows dropped by the status gate or missing sku/quantity.
    pub rows_skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_keep_first_seen_order() {
        let mut totals = SoldTotals::new();
        totals.add("M2", 1);
        totals.add("M1", 2);
        totals.add("M2", 3);
        let entries: Vec<_> = totals.iter().collect();
        assert_eq!(entries, vec![("M2", 4), ("M1", 2)]);
    }

    #[test]
    fn absorb_merges_without_reordering() {
        let mut left = SoldTotals::new();
        left.add("M1", 1);
        let mut right = SoldTotals::new();
        right.add("M2", 5);
        right.add("M1", 2);
        left.absorb(&right);
        let entries: Vec<_> = left.iter().collect();
        assert_eq!(entries, vec![("M1", 3), ("M2", 5)]);
        assert_eq!(left.total_quantity(), 8);
    }
}
