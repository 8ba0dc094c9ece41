//! SKU normalization, combo expansion, and inventory reconciliation.
//!
//! The pipeline for one processing request:
//! parse → classify → extract → gate → normalize/expand → aggregate →
//! reconcile. [`ReconEngine`] owns the mapping, combo, ledger, and
//! snapshot tables and exposes load, process, reconcile, and reset as
//! its only mutators.

pub mod aliases;
pub mod batch;
pub mod classify;
pub mod engine;
pub mod extract;
pub mod gate;
pub mod loaders;

pub use batch::{BatchOutcome, SoldTotals};
pub use classify::classify;
pub use engine::{OrderSource, PROCESSED_ORDERS_CAP, ReconEngine, VIEW_CAP};
pub use extract::{ExtractedOrder, extract_order};
pub use gate::should_process;
