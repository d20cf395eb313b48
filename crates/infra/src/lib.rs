//! Infrastructure layer: configuration, document storage, report rendering
//! and outbound mail.

pub mod config;
pub mod mail;
pub mod render;
pub mod store;

pub use config::{AppConfig, ConfigError, MailConfig};
pub use mail::{DisabledMailer, HttpMailRelay, InMemoryOutbox, MailError, Mailer, OutgoingMail, ReportDocument};
pub use render::{CsvRenderer, RenderError, ReportRenderer};
pub use store::{DocumentStore, InMemoryDocumentStore, PostgresDocumentStore, StoreError};
