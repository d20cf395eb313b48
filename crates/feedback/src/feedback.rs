use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use greenscape_core::{DomainError, DomainResult, Entity, text};

greenscape_core::uuid_newtype!(
    /// Feedback entry identifier.
    pub struct FeedbackId,
    "FeedbackId"
);

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFeedback {
    pub employee_name: String,
    pub employee_email: String,
    pub department: String,
    pub rating: u8,
    pub feedback: String,
}

/// Entity: an employee's feedback entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    id: FeedbackId,
    employee_name: String,
    employee_email: String,
    department: String,
    rating: u8,
    feedback: String,
    date: DateTime<Utc>,
}

impl Feedback {
    pub fn submit(id: FeedbackId, input: NewFeedback, date: DateTime<Utc>) -> DomainResult<Self> {
        if !(MIN_RATING..=MAX_RATING).contains(&input.rating) {
            return Err(DomainError::validation(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }
        Ok(Self {
            id,
            employee_name: text::required("employee name", &input.employee_name)?,
            employee_email: text::email("employee email", &input.employee_email)?,
            department: text::required("department", &input.department)?,
            rating: input.rating,
            feedback: text::required("feedback", &input.feedback)?,
            date,
        })
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn department(&self) -> &str {
        &self.department
    }
}

impl Entity for Feedback {
    type Id = FeedbackId;

    const COLLECTION: &'static str = "feedback";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Most recent entry first.
pub fn newest_first(entries: &mut [Feedback]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}
