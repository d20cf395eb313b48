//! Reorder threshold updates (single-field patches of level or amount).

use core::num::NonZeroU32;

use serde_json::Value as JsonValue;

use greenscape_core::{DomainError, DomainResult};

use crate::item::InventoryItem;

/// Which reorder threshold a patch targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderField {
    Level,
    Amount,
}

impl ReorderField {
    /// JSON field carrying the new value in a request body.
    pub fn wire_name(&self) -> &'static str {
        match self {
            ReorderField::Level => "reorderLevel",
            ReorderField::Amount => "reorderAmount",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ReorderField::Level => "Reorder level",
            ReorderField::Amount => "Reorder amount",
        }
    }
}

/// A validated threshold value: a whole number strictly greater than zero.
///
/// The stored fields accept 0 (meaning "unset"), but a patch never does, so a
/// threshold cannot be cleared through this path once set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderThreshold(NonZeroU32);

impl ReorderThreshold {
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    /// Validate a raw JSON value taken from a request body.
    pub fn parse(field: ReorderField, raw: &JsonValue) -> DomainResult<Self> {
        let not_positive =
            || DomainError::validation(format!("{} must be a positive number", field.label()));

        let JsonValue::Number(number) = raw else {
            return Err(not_positive());
        };

        if let Some(value) = number.as_u64() {
            let value = u32::try_from(value).map_err(|_| {
                DomainError::validation(format!("{} is too large", field.label()))
            })?;
            return Self::new(value).ok_or_else(not_positive);
        }

        // Float-backed numbers such as `5.0` or `1e2` still count when whole.
        match number.as_f64() {
            Some(value) if value.is_finite() && value > 0.0 => {
                if value.fract() != 0.0 {
                    return Err(DomainError::validation(format!(
                        "{} must be a whole number",
                        field.label()
                    )));
                }
                if value > f64::from(u32::MAX) {
                    return Err(DomainError::validation(format!(
                        "{} is too large",
                        field.label()
                    )));
                }
                Self::new(value as u32).ok_or_else(not_positive)
            }
            _ => Err(not_positive()),
        }
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl InventoryItem {
    /// Replace one reorder threshold on this item.
    pub fn set_threshold(&mut self, field: ReorderField, value: ReorderThreshold) {
        match field {
            ReorderField::Level => self.set_reorder_level(value.get()),
            ReorderField::Amount => self.set_reorder_amount(value.get()),
        }
    }
}
