use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use greenscape_core::patch::{merge, nullable};
use greenscape_core::{DomainError, DomainResult, Entity, text};

greenscape_core::uuid_newtype!(
    /// Appointment identifier.
    pub struct AppointmentId,
    "AppointmentId"
);

/// Human-facing booking reference, `APPT-0001`, `APPT-0002`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AppointmentCode(u32);

impl AppointmentCode {
    const PREFIX: &'static str = "APPT-";

    pub fn new(number: u32) -> DomainResult<Self> {
        if number == 0 {
            return Err(DomainError::validation("appointment number starts at 1"));
        }
        Ok(Self(number))
    }

    /// One past the highest code issued so far; `APPT-0001` for an empty book.
    pub fn next_after<'a>(issued: impl IntoIterator<Item = &'a AppointmentCode>) -> Self {
        issued
            .into_iter()
            .max()
            .map_or(Self(1), |last| Self(last.0.saturating_add(1)))
    }

    pub fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for AppointmentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", Self::PREFIX, self.0)
    }
}

impl FromStr for AppointmentCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .strip_prefix(Self::PREFIX)
            .and_then(|digits| digits.parse::<u32>().ok())
            .ok_or_else(|| DomainError::invalid_id(format!("appointment code: '{s}'")))?;
        Self::new(number)
    }
}

impl TryFrom<String> for AppointmentCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AppointmentCode> for String {
    fn from(code: AppointmentCode) -> Self {
        code.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteAnalysisStatus {
    #[default]
    Pending,
    Completed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    Ongoing,
    Hold,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "Not Started",
            ProjectStatus::Ongoing => "Ongoing",
            ProjectStatus::Hold => "Hold",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Booking request submitted by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub service_type: String,
    #[serde(default)]
    pub additional_info: Option<String>,
    #[serde(default)]
    pub receive_updates: bool,
}

/// Back-office follow-up fields. Absent fields are kept; `siteVisitDate` and
/// `projectId` are cleared by an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentInfoPatch {
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub site_visit_date: Option<Option<NaiveDate>>,
    pub site_analysis_status: Option<SiteAnalysisStatus>,
    pub project_status: Option<ProjectStatus>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub project_id: Option<Option<String>>,
}

/// Subject and body of a customer email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub subject: &'static str,
    pub text: String,
}

const SIGNATURE: &str = "Best Regards,\nLandscaping Services";

/// Entity: Appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    id: AppointmentId,
    appointment_id: AppointmentCode,
    name: String,
    email: String,
    phone: String,
    address: String,
    city: String,
    service_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    additional_info: Option<String>,
    receive_updates: bool,
    created_at: DateTime<Utc>,
    #[serde(default)]
    site_visit_date: Option<NaiveDate>,
    #[serde(default)]
    site_analysis_status: SiteAnalysisStatus,
    #[serde(default)]
    project_status: ProjectStatus,
    #[serde(default)]
    project_id: Option<String>,
}

impl Appointment {
    /// Book a new appointment. Follow-up fields start at their defaults.
    pub fn book(
        id: AppointmentId,
        code: AppointmentCode,
        input: NewAppointment,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Ok(Self {
            id,
            appointment_id: code,
            name: text::required("name", &input.name)?,
            email: text::email("email", &input.email)?,
            phone: text::required("phone", &input.phone)?,
            address: text::required("address", &input.address)?,
            city: text::required("city", &input.city)?,
            service_type: text::required("service type", &input.service_type)?,
            additional_info: text::optional(input.additional_info),
            receive_updates: input.receive_updates,
            created_at,
            site_visit_date: None,
            site_analysis_status: SiteAnalysisStatus::default(),
            project_status: ProjectStatus::default(),
            project_id: None,
        })
    }

    pub fn schedule_site_visit(&mut self, date: NaiveDate) {
        self.site_visit_date = Some(date);
    }

    pub fn set_project_status(&mut self, status: ProjectStatus) {
        self.project_status = status;
    }

    pub fn update_info(&mut self, patch: AppointmentInfoPatch) {
        merge(&mut self.site_visit_date, patch.site_visit_date);
        if let Some(status) = patch.site_analysis_status {
            self.site_analysis_status = status;
        }
        if let Some(status) = patch.project_status {
            self.project_status = status;
        }
        if let Some(project_id) = patch.project_id {
            self.project_id = text::optional(project_id);
        }
    }

    /// Sent to the customer right after booking.
    pub fn confirmation_notice(&self) -> Notice {
        Notice {
            subject: "Appointment Confirmation",
            text: format!(
                "Hello {},\n\nYour appointment for {} has been booked successfully.\n\
                 Reference: {}\nAddress: {}, {}\nPhone: {}\n\n\
                 We will contact you soon!\n\n{SIGNATURE}",
                self.name, self.service_type, self.appointment_id, self.address, self.city, self.phone
            ),
        }
    }

    /// Sent once a site visit is on the calendar; `None` until then.
    pub fn site_visit_notice(&self) -> Option<Notice> {
        let date = self.site_visit_date?;
        Some(Notice {
            subject: "Site Visit Scheduled",
            text: format!(
                "Hello {},\n\nYour site visit for {} has been scheduled.\n\
                 Site Visit Date: {}\nAddress: {}, {}\nContact: {}\n\n\
                 Please be available on the scheduled date. Let us know if you have any questions.\n\n{SIGNATURE}",
                self.name,
                self.service_type,
                date.format("%Y-%m-%d"),
                self.address,
                self.city,
                self.phone
            ),
        })
    }

    /// Case-insensitive match on the booking email.
    pub fn booked_by(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }

    pub fn id_typed(&self) -> AppointmentId {
        self.id
    }

    pub fn code(&self) -> AppointmentCode {
        self.appointment_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn site_visit_date(&self) -> Option<NaiveDate> {
        self.site_visit_date
    }

    pub fn site_analysis_status(&self) -> SiteAnalysisStatus {
        self.site_analysis_status
    }

    pub fn project_status(&self) -> ProjectStatus {
        self.project_status
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }
}

impl Entity for Appointment {
    type Id = AppointmentId;

    const COLLECTION: &'static str = "appointments";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Most recent booking first; equal timestamps keep their order.
pub fn newest_first(appointments: &mut [Appointment]) {
    appointments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
