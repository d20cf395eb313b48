//! Filtering and ordering of item lists before evaluation or reporting.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::Deserialize;

use greenscape_core::DomainError;

use crate::item::InventoryItem;

/// Sentinel accepted by the supplier/category dropdown filters to mean "any".
const ANY: &str = "all";

/// Ordering applied to a filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum SortKey {
    /// Most depleted first (quantity ÷ reorder level, ascending).
    Urgency,
    Name,
    Quantity,
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "urgency" => Ok(SortKey::Urgency),
            "name" => Ok(SortKey::Name),
            "quantity" => Ok(SortKey::Quantity),
            other => Err(DomainError::validation(format!(
                "unknown sort key '{other}' (expected urgency, name or quantity)"
            ))),
        }
    }
}

impl TryFrom<String> for SortKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Filters and sort key for an inventory listing. All parts are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InventoryQuery {
    /// Case-insensitive substring matched against every displayed field.
    pub search: Option<String>,
    /// Exact supplier match.
    pub supplier: Option<String>,
    /// Exact category match (display name, e.g. `Other`).
    pub category: Option<String>,
    pub sort: Option<SortKey>,
}

impl InventoryQuery {
    pub fn matches(&self, item: &InventoryItem) -> bool {
        if let Some(needle) = active(&self.search) {
            let needle = needle.to_lowercase();
            if !searchable_fields(item)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
            {
                return false;
            }
        }

        if let Some(supplier) = active_choice(&self.supplier) {
            if item.supplier() != supplier {
                return false;
            }
        }

        if let Some(category) = active_choice(&self.category) {
            if item.category().as_str() != category {
                return false;
            }
        }

        true
    }

    /// Filter, then order. Without a sort key the input order is kept.
    pub fn apply(&self, items: Vec<InventoryItem>) -> Vec<InventoryItem> {
        let mut out: Vec<InventoryItem> = items.into_iter().filter(|i| self.matches(i)).collect();
        if let Some(key) = self.sort {
            sort_items(&mut out, key);
        }
        out
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn active_choice(value: &Option<String>) -> Option<&str> {
    active(value).filter(|v| *v != ANY)
}

fn searchable_fields(item: &InventoryItem) -> [String; 8] {
    [
        item.name().to_string(),
        item.category().as_str().to_string(),
        item.quantity().to_string(),
        item.supplier().to_string(),
        item.price().formatted(),
        item.maintenance_schedule().as_str().to_string(),
        item.reorder_level().to_string(),
        item.reorder_amount().to_string(),
    ]
}

/// Stable sort by `key`.
///
/// Urgency is undefined for items without a reorder level; those are placed
/// after every item that has one, keeping their relative order.
pub fn sort_items(items: &mut [InventoryItem], key: SortKey) {
    match key {
        SortKey::Urgency => items.sort_by(|a, b| compare_urgency(a.urgency(), b.urgency())),
        SortKey::Name => items.sort_by(|a, b| {
            a.name()
                .to_lowercase()
                .cmp(&b.name().to_lowercase())
                .then_with(|| a.name().cmp(b.name()))
        }),
        SortKey::Quantity => items.sort_by_key(|i| i.quantity()),
    }
}

fn compare_urgency(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
