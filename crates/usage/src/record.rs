use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use greenscape_core::patch::{merge, nullable};
use greenscape_core::{DomainResult, Entity, text};

greenscape_core::uuid_newtype!(
    /// Usage record identifier.
    pub struct UsageRecordId,
    "UsageRecordId"
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUsageRecord {
    pub project_name: String,
    pub item_id: String,
    pub item_name: String,
    pub quantity_used: u32,
    pub date_of_usage: NaiveDate,
    pub used_by: String,
    #[serde(default)]
    pub purpose: Option<String>,
}

/// Partial update: absent fields keep their current value; `purpose: null`
/// clears the purpose.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsagePatch {
    pub project_name: Option<String>,
    pub item_id: Option<String>,
    pub item_name: Option<String>,
    pub quantity_used: Option<u32>,
    pub date_of_usage: Option<NaiveDate>,
    pub used_by: Option<String>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub purpose: Option<Option<String>>,
}

/// Entity: UsageRecord.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    id: UsageRecordId,
    project_name: String,
    item_id: String,
    item_name: String,
    quantity_used: u32,
    date_of_usage: NaiveDate,
    used_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    purpose: Option<String>,
}

impl UsageRecord {
    pub fn create(id: UsageRecordId, input: NewUsageRecord) -> DomainResult<Self> {
        Self {
            id,
            project_name: input.project_name,
            item_id: input.item_id,
            item_name: input.item_name,
            quantity_used: input.quantity_used,
            date_of_usage: input.date_of_usage,
            used_by: input.used_by,
            purpose: input.purpose,
        }
        .validated()
    }

    /// Merge `patch` into this record. On error the record is left untouched.
    pub fn apply(&mut self, patch: UsagePatch) -> DomainResult<()> {
        let mut next = self.clone();
        if let Some(v) = patch.project_name {
            next.project_name = v;
        }
        if let Some(v) = patch.item_id {
            next.item_id = v;
        }
        if let Some(v) = patch.item_name {
            next.item_name = v;
        }
        if let Some(v) = patch.quantity_used {
            next.quantity_used = v;
        }
        if let Some(v) = patch.date_of_usage {
            next.date_of_usage = v;
        }
        if let Some(v) = patch.used_by {
            next.used_by = v;
        }
        merge(&mut next.purpose, patch.purpose);

        *self = next.validated()?;
        Ok(())
    }

    fn validated(self) -> DomainResult<Self> {
        Ok(Self {
            project_name: text::required("project name", &self.project_name)?,
            item_id: text::required("item id", &self.item_id)?,
            item_name: text::required("item name", &self.item_name)?,
            used_by: text::required("used by", &self.used_by)?,
            purpose: text::optional(self.purpose),
            ..self
        })
    }

    pub fn id_typed(&self) -> UsageRecordId {
        self.id
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn quantity_used(&self) -> u32 {
        self.quantity_used
    }

    pub fn purpose(&self) -> Option<&str> {
        self.purpose.as_deref()
    }
}

impl Entity for UsageRecord {
    type Id = UsageRecordId;

    const COLLECTION: &'static str = "usage";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenscape_core::DomainError;

    fn new_usage() -> NewUsageRecord {
        NewUsageRecord {
            project_name: "Kandy Villa Garden".to_string(),
            item_id: "664f1c".to_string(),
            item_name: "Fertilizer".to_string(),
            quantity_used: 12,
            date_of_usage: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            used_by: "Kasun".to_string(),
            purpose: Some("  ".to_string()),
        }
    }

    #[test]
    fn create_normalizes_blank_purpose() {
        let record = UsageRecord::create(UsageRecordId::new(), new_usage()).unwrap();
        assert_eq!(record.purpose(), None);

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("purpose").is_none());
        assert_eq!(json["dateOfUsage"], "2025-02-01");
        assert_eq!(json["quantityUsed"], 12);
    }

    #[test]
    fn create_requires_project_name() {
        let mut input = new_usage();
        input.project_name = String::new();
        let err = UsageRecord::create(UsageRecordId::new(), input).unwrap_err();
        assert_eq!(err, DomainError::validation("project name is required"));
    }

    #[test]
    fn patch_keeps_untouched_fields() {
        let mut record = UsageRecord::create(UsageRecordId::new(), new_usage()).unwrap();
        record
            .apply(UsagePatch {
                quantity_used: Some(20),
                purpose: Some(Some("top dressing".to_string())),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(record.quantity_used(), 20);
        assert_eq!(record.purpose(), Some("top dressing"));
        assert_eq!(record.project_name(), "Kandy Villa Garden");
        assert_eq!(record.item_id(), "664f1c");
    }

    #[test]
    fn invalid_patch_leaves_record_unchanged() {
        let mut record = UsageRecord::create(UsageRecordId::new(), new_usage()).unwrap();
        let before = record.clone();
        assert!(
            record
                .apply(UsagePatch {
                    used_by: Some(" ".to_string()),
                    quantity_used: Some(3),
                    ..Default::default()
                })
                .is_err()
        );
        assert_eq!(record, before);
    }

    #[test]
    fn null_purpose_clears_it() {
        let mut input = new_usage();
        input.purpose = Some("weeding".to_string());
        let mut record = UsageRecord::create(UsageRecordId::new(), input).unwrap();

        record.apply(serde_json::from_str(r#"{"quantityUsed":4}"#).unwrap()).unwrap();
        assert_eq!(record.purpose(), Some("weeding"));

        record.apply(serde_json::from_str(r#"{"purpose":null}"#).unwrap()).unwrap();
        assert_eq!(record.purpose(), None);
    }
}
