pub mod error;
pub mod inventory;
pub mod mapping;
pub mod marketplace;
pub mod orders;
pub mod response;

pub use error::{ReconError, Result};
pub use inventory::{InventoryItem, StockStatus};
pub use mapping::{ComboComponent, MappingRecord};
pub use marketplace::Marketplace;
pub use orders::ProcessedOrderLine;
pub use response::{
    ComboView, DiffEntry, FileError, InventoryUpdate, LedgerView, MappingView,
    MarketplaceBreakdown, ReconcileResponse, ReconcileSummary,
};
