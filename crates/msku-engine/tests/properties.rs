//! Property tests for the reconciliation laws.

use proptest::prelude::*;

use msku_engine::{ReconEngine, SoldTotals, should_process};
use msku_ingest::parse_table;
use msku_model::Marketplace;

fn engine_with_stock(stock: i64) -> ReconEngine {
    let mut engine = ReconEngine::new();
    let text = format!("msku,Opening Stock\nM1,{stock}\n");
    engine.load_inventory(&parse_table(&text).unwrap());
    engine
}

proptest! {
    #[test]
    fn meesho_normalize_is_identity(sku in ".*") {
        let engine = ReconEngine::new();
        prop_assert_eq!(engine.normalize(&sku, Marketplace::Meesho), sku);
    }

    #[test]
    fn unmapped_skus_pass_through_trimmed(sku in "[A-Za-z0-9-]{1,20}") {
        let engine = ReconEngine::new();
        let padded = format!("  {sku} ");
        prop_assert_eq!(engine.normalize(&padded, Marketplace::Amazon), sku);
    }

    #[test]
    fn reconcile_never_goes_negative(stock in 0i64..1000, sold in 0i64..5000) {
        let mut engine = engine_with_stock(stock);
        let mut totals = SoldTotals::new();
        totals.add("M1", sold);
        let updates = engine.reconcile(&totals);
        prop_assert!(updates[0].new_stock >= 0);
        prop_assert_eq!(updates[0].stock_reduced, sold.min(stock));
        // A second pass over the mutated ledger still cannot underflow.
        let updates = engine.reconcile(&totals);
        prop_assert!(updates[0].new_stock >= 0);
    }

    #[test]
    fn reset_round_trips_any_reconcile_sequence(
        stock in 0i64..500,
        sells in proptest::collection::vec(0i64..200, 0..8),
    ) {
        let mut engine = engine_with_stock(stock);
        for sold in sells {
            let mut totals = SoldTotals::new();
            totals.add("M1", sold);
            engine.reconcile(&totals);
        }
        engine.reset();
        prop_assert!(engine.diff_view().is_empty());
        let view = engine.ledger_view();
        prop_assert_eq!(view.items[0].current_stock, stock);
    }

    #[test]
    fn negative_status_always_vetoes(
        prefix in "[a-z ]{0,10}",
        positive in proptest::sample::select(vec!["delivered", "shipped", "completed"]),
        negative in proptest::sample::select(vec!["cancelled", "returned", "refunded", "rejected", "failed"]),
    ) {
        let status = format!("{prefix}{positive} {negative}");
        prop_assert!(!should_process(Some(&status)));
    }
}
