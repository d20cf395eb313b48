//! Usage log: which project consumed how much of an inventory item.

pub mod record;

pub use record::{NewUsageRecord, UsagePatch, UsageRecord, UsageRecordId};
