//! Tabular report projections.
//!
//! These types only shape data. Turning a [`ReportTable`] into a document
//! (CSV, PDF, ...) is done by a renderer outside this crate.

use serde::Serialize;

use crate::item::InventoryItem;
use crate::stock::LowStockEvaluation;

/// Shown in place of a reorder level that has never been set.
pub const NOT_SET: &str = "Not set";

/// A fixed-column report row.
pub trait TabularRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

/// Full inventory listing row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRow {
    pub item_name: String,
    pub category: String,
    pub quantity: u32,
    pub supplier: String,
    pub price: String,
    pub maintenance_schedule: String,
    pub reorder_level: String,
}

impl From<&InventoryItem> for InventoryRow {
    fn from(item: &InventoryItem) -> Self {
        Self {
            item_name: item.name().to_string(),
            category: item.category().to_string(),
            quantity: item.quantity(),
            supplier: item.supplier().to_string(),
            price: item.price().formatted(),
            maintenance_schedule: item.maintenance_schedule().to_string(),
            reorder_level: match item.reorder_level() {
                0 => NOT_SET.to_string(),
                level => level.to_string(),
            },
        }
    }
}

impl TabularRow for InventoryRow {
    const HEADERS: &'static [&'static str] = &[
        "Item Name",
        "Category",
        "Quantity",
        "Supplier",
        "Price",
        "Maintenance Schedule",
        "Reorder Level",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.item_name.clone(),
            self.category.clone(),
            self.quantity.to_string(),
            self.supplier.clone(),
            self.price.clone(),
            self.maintenance_schedule.clone(),
            self.reorder_level.clone(),
        ]
    }
}

/// Low-stock alert row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockRow {
    pub item_name: String,
    pub category: String,
    pub supplier: String,
    pub quantity: u32,
    pub reorder_level: u32,
    pub reorder_amount: u32,
}

impl From<&InventoryItem> for LowStockRow {
    fn from(item: &InventoryItem) -> Self {
        Self {
            item_name: item.name().to_string(),
            category: item.category().to_string(),
            supplier: item.supplier().to_string(),
            quantity: item.quantity(),
            reorder_level: item.reorder_level(),
            reorder_amount: item.reorder_amount(),
        }
    }
}

impl TabularRow for LowStockRow {
    const HEADERS: &'static [&'static str] = &[
        "Item Name",
        "Category",
        "Supplier",
        "Current Qty",
        "Reorder Level",
        "Reorder Amount",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.item_name.clone(),
            self.category.clone(),
            self.supplier.clone(),
            self.quantity.to_string(),
            self.reorder_level.to_string(),
            self.reorder_amount.to_string(),
        ]
    }
}

/// Which report a table represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    Inventory,
    LowStock,
}

impl ReportKind {
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Inventory => "Inventory Report",
            ReportKind::LowStock => "Low Stock Alerts Report",
        }
    }

    /// File name without extension.
    pub fn file_stem(&self) -> &'static str {
        match self {
            ReportKind::Inventory => "inventory_report",
            ReportKind::LowStock => "low_stock_alerts_report",
        }
    }
}

/// Header + rows, ready for any renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    pub kind: ReportKind,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn from_rows<R: TabularRow>(kind: ReportKind, rows: &[R]) -> Self {
        Self {
            kind,
            headers: R::HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: rows.iter().map(|r| r.cells()).collect(),
        }
    }

    /// Full listing of `items` in the given order.
    pub fn inventory<'a>(items: impl IntoIterator<Item = &'a InventoryItem>) -> Self {
        let rows: Vec<InventoryRow> = items.into_iter().map(InventoryRow::from).collect();
        Self::from_rows(ReportKind::Inventory, &rows)
    }

    /// Low-stock alert listing in evaluation order.
    pub fn low_stock(evaluation: &LowStockEvaluation) -> Self {
        let rows: Vec<LowStockRow> = evaluation
            .items
            .iter()
            .map(|entry| LowStockRow::from(&entry.item))
            .collect();
        Self::from_rows(ReportKind::LowStock, &rows)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::tests::stocked;
    use crate::reorder::{ReorderField, ReorderThreshold};
    use crate::stock::evaluate;

    #[test]
    fn inventory_row_formats_price_and_placeholder() {
        let unset = stocked("Rake", 4, 0);
        let row = InventoryRow::from(&unset);
        assert_eq!(row.price, "Rs.1250.00");
        assert_eq!(row.reorder_level, NOT_SET);
        assert_eq!(row.category, "Gardening Tools & Equipment");
        assert_eq!(row.maintenance_schedule, "Every Week");

        let set = stocked("Rake", 4, 6);
        assert_eq!(InventoryRow::from(&set).reorder_level, "6");
    }

    #[test]
    fn inventory_table_keeps_caller_order() {
        let items = vec![stocked("Rake", 4, 0), stocked("Axe", 1, 0)];
        let table = ReportTable::inventory(&items);

        assert_eq!(table.kind, ReportKind::Inventory);
        assert_eq!(table.headers.len(), InventoryRow::HEADERS.len());
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][0], "Rake");
        assert_eq!(table.rows[1][0], "Axe");
        assert!(table.rows.iter().all(|r| r.len() == table.headers.len()));
    }

    #[test]
    fn low_stock_table_carries_reorder_amount() {
        let mut item = stocked("Gloves", 2, 5);
        item.set_threshold(ReorderField::Amount, ReorderThreshold::new(25).unwrap());
        let items = vec![item, stocked("Hose", 9, 5)];

        let table = ReportTable::low_stock(&evaluate(&items));
        assert_eq!(table.kind, ReportKind::LowStock);
        assert_eq!(table.headers[3], "Current Qty");
        assert_eq!(
            table.rows,
            vec![vec![
                "Gloves".to_string(),
                "Gardening Tools & Equipment".to_string(),
                "Lanka Agro".to_string(),
                "2".to_string(),
                "5".to_string(),
                "25".to_string(),
            ]]
        );
    }

    #[test]
    fn empty_input_gives_header_only_table() {
        let table = ReportTable::inventory(&Vec::<InventoryItem>::new());
        assert!(table.is_empty());
        assert_eq!(table.headers[0], "Item Name");
    }
}
