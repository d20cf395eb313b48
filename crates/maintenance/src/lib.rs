//! Maintenance log.
//!
//! Records of repairs, inspections and cleanings performed on inventory
//! items. An entry references its item by a copied id/name only.

pub mod record;

pub use record::{
    MaintenancePatch, MaintenanceRecord, MaintenanceRecordId, MaintenanceStatus, MaintenanceType,
    NewMaintenanceRecord,
};
