//! Customer appointments and the service catalogue they are booked against.
//!
//! Bookings carry a sequential `APPT-NNNN` reference alongside their id and
//! produce the customer emails sent on booking and site-visit scheduling.

pub mod appointment;
pub mod service;

pub use appointment::{
    Appointment, AppointmentCode, AppointmentId, AppointmentInfoPatch, NewAppointment, Notice,
    ProjectStatus, SiteAnalysisStatus, newest_first,
};
pub use service::{Service, ServiceDetails, ServiceId};
