//! Inventory domain module.
//!
//! Business rules for the equipment and supply inventory: the item record,
//! reorder thresholds, low-stock evaluation, list filtering/sorting and the
//! tabular report projection. Pure logic only (no IO, no HTTP, no storage).

pub mod item;
pub mod query;
pub mod reorder;
pub mod report;
pub mod stock;

pub use item::{Category, InventoryItem, InventoryItemId, MaintenanceSchedule, NewInventoryItem, Price};
pub use query::{InventoryQuery, SortKey};
pub use reorder::{ReorderField, ReorderThreshold};
pub use report::{InventoryRow, LowStockRow, ReportKind, ReportTable, TabularRow};
pub use stock::{LowStockEntry, LowStockEvaluation, SeverityCounts, StockSeverity, evaluate};
