use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use greenscape_core::patch::{merge, nullable};
use greenscape_core::{DomainError, DomainResult, Entity, text};

greenscape_core::uuid_newtype!(
    /// Maintenance record identifier.
    pub struct MaintenanceRecordId,
    "MaintenanceRecordId"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaintenanceType {
    Repair,
    Replacement,
    Inspection,
    Cleaning,
}

impl MaintenanceType {
    /// Repairs and replacements always cost something; the others may be free.
    pub fn requires_cost(&self) -> bool {
        matches!(self, MaintenanceType::Repair | MaintenanceType::Replacement)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaintenanceStatus {
    Pending,
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
}

/// Input for logging a maintenance job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMaintenanceRecord {
    pub item_id: String,
    pub item_name: String,
    pub maintenance_type: MaintenanceType,
    pub maintenance_date: NaiveDate,
    pub performed_by: String,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub next_maintenance_date: Option<NaiveDate>,
    pub status: MaintenanceStatus,
}

/// Partial update: absent fields keep their current value. `cost` and
/// `nextMaintenanceDate` are cleared by an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenancePatch {
    pub item_id: Option<String>,
    pub item_name: Option<String>,
    pub maintenance_type: Option<MaintenanceType>,
    pub maintenance_date: Option<NaiveDate>,
    pub performed_by: Option<String>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub cost: Option<Option<f64>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_maintenance_date: Option<Option<NaiveDate>>,
    pub status: Option<MaintenanceStatus>,
}

/// Entity: MaintenanceRecord.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    id: MaintenanceRecordId,
    item_id: String,
    item_name: String,
    maintenance_type: MaintenanceType,
    maintenance_date: NaiveDate,
    performed_by: String,
    cost: Option<f64>,
    next_maintenance_date: Option<NaiveDate>,
    status: MaintenanceStatus,
}

impl MaintenanceRecord {
    pub fn create(id: MaintenanceRecordId, input: NewMaintenanceRecord) -> DomainResult<Self> {
        let record = Self {
            id,
            item_id: input.item_id,
            item_name: input.item_name,
            maintenance_type: input.maintenance_type,
            maintenance_date: input.maintenance_date,
            performed_by: input.performed_by,
            cost: input.cost,
            next_maintenance_date: input.next_maintenance_date,
            status: input.status,
        };
        record.validated()
    }

    /// Merge `patch` into this record. On error the record is left untouched.
    pub fn apply(&mut self, patch: MaintenancePatch) -> DomainResult<()> {
        let mut next = self.clone();
        if let Some(v) = patch.item_id {
            next.item_id = v;
        }
        if let Some(v) = patch.item_name {
            next.item_name = v;
        }
        if let Some(v) = patch.maintenance_type {
            next.maintenance_type = v;
        }
        if let Some(v) = patch.maintenance_date {
            next.maintenance_date = v;
        }
        if let Some(v) = patch.performed_by {
            next.performed_by = v;
        }
        merge(&mut next.cost, patch.cost);
        merge(&mut next.next_maintenance_date, patch.next_maintenance_date);
        if let Some(v) = patch.status {
            next.status = v;
        }

        *self = next.validated()?;
        Ok(())
    }

    fn validated(self) -> DomainResult<Self> {
        let item_id = text::required("item id", &self.item_id)?;
        let item_name = text::required("item name", &self.item_name)?;
        let performed_by = text::required("performed by", &self.performed_by)?;

        match self.cost {
            Some(cost) if !cost.is_finite() || cost < 0.0 => {
                return Err(DomainError::validation("cost must be a non-negative number"));
            }
            None if self.maintenance_type.requires_cost() => {
                return Err(DomainError::validation(format!(
                    "cost is required for {:?} maintenance",
                    self.maintenance_type
                )));
            }
            _ => {}
        }

        Ok(Self {
            item_id,
            item_name,
            performed_by,
            ..self
        })
    }

    pub fn id_typed(&self) -> MaintenanceRecordId {
        self.id
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn maintenance_type(&self) -> MaintenanceType {
        self.maintenance_type
    }

    pub fn maintenance_date(&self) -> NaiveDate {
        self.maintenance_date
    }

    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    pub fn next_maintenance_date(&self) -> Option<NaiveDate> {
        self.next_maintenance_date
    }

    pub fn status(&self) -> MaintenanceStatus {
        self.status
    }
}

impl Entity for MaintenanceRecord {
    type Id = MaintenanceRecordId;

    const COLLECTION: &'static str = "maintenance";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
