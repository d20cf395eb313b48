//! Helpers for partial-update payloads.
//!
//! A clearable field in a patch is an `Option<Option<T>>`:
//! absent keeps the current value, `null` clears it, a value replaces it.

use serde::{Deserialize, Deserializer};

/// Deserializer for clearable patch fields.
///
/// Pair with `#[serde(default, deserialize_with = "greenscape_core::patch::nullable")]`;
/// serde only calls it when the key is present, so `null` becomes `Some(None)`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Apply one clearable patch field to its slot.
pub fn merge<T>(slot: &mut Option<T>, change: Option<Option<T>>) {
    if let Some(value) = change {
        *slot = value;
    }
}
