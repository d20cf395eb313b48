//! Low-stock evaluation.
//!
//! An item is low on stock when it has a reorder level set (non-zero) and its
//! quantity is at or below that level. Low items are bucketed by absolute
//! quantity:
//!
//! | Bucket   | Quantity |
//! |----------|----------|
//! | critical | ≤ 1      |
//! | warning  | 2 – 3    |
//! | notice   | > 3      |
//!
//! An item with reorder level 0 is never low, even at quantity 0.

use serde::Serialize;

use crate::item::InventoryItem;

/// Urgency bucket of a low-stock item. Ordered so that `max` is the most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StockSeverity {
    Notice,
    Warning,
    Critical,
}

impl StockSeverity {
    pub fn for_quantity(quantity: u32) -> Self {
        match quantity {
            0..=1 => StockSeverity::Critical,
            2..=3 => StockSeverity::Warning,
            _ => StockSeverity::Notice,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockSeverity::Notice => "notice",
            StockSeverity::Warning => "warning",
            StockSeverity::Critical => "critical",
        }
    }
}

/// Whether the item needs reordering.
pub fn is_low_stock(item: &InventoryItem) -> bool {
    item.reorder_level() > 0 && item.quantity() <= item.reorder_level()
}

/// A low-stock item with its bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowStockEntry {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub severity: StockSeverity,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub warning: usize,
    pub notice: usize,
}

impl SeverityCounts {
    fn record(&mut self, severity: StockSeverity) {
        match severity {
            StockSeverity::Critical => self.critical += 1,
            StockSeverity::Warning => self.warning += 1,
            StockSeverity::Notice => self.notice += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.warning + self.notice
    }
}

/// Result of evaluating an item list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowStockEvaluation {
    /// Low items in input order.
    pub items: Vec<LowStockEntry>,
    pub counts: SeverityCounts,
    /// Most urgent bucket present; `None` when nothing is low.
    pub overall: Option<StockSeverity>,
}

impl LowStockEvaluation {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Alert banner text, e.g.
    /// `Stock Alerts: 1 critical (≤1 unit), 2 warning (2-3 units) need reordering!`
    pub fn notification(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let mut parts = Vec::with_capacity(3);
        if self.counts.critical > 0 {
            parts.push(format!("{} critical (≤1 unit)", self.counts.critical));
        }
        if self.counts.warning > 0 {
            parts.push(format!("{} warning (2-3 units)", self.counts.warning));
        }
        if self.counts.notice > 0 {
            parts.push(format!("{} notice (>3 units)", self.counts.notice));
        }

        Some(format!("Stock Alerts: {} need reordering!", parts.join(", ")))
    }
}

/// Classify every item; non-low items are dropped. Input is not modified.
pub fn evaluate<'a>(items: impl IntoIterator<Item = &'a InventoryItem>) -> LowStockEvaluation {
    let mut counts = SeverityCounts::default();
    let mut overall: Option<StockSeverity> = None;

    let items: Vec<LowStockEntry> = items
        .into_iter()
        .filter(|item| is_low_stock(item))
        .map(|item| {
            let severity = StockSeverity::for_quantity(item.quantity());
            counts.record(severity);
            overall = overall.max(Some(severity));
            LowStockEntry {
                item: item.clone(),
                severity,
            }
        })
        .collect();

    LowStockEvaluation {
        items,
        counts,
        overall,
    }
}
