//! Outbound email: report attachments and customer notices.
//!
//! Delivery goes through [`Mailer::send`]. The production adapter posts
//! to an HTTP mail relay; tests swap in [`InMemoryOutbox`].

pub mod outbox;
pub mod relay;

use async_trait::async_trait;
use thiserror::Error;

use greenscape_inventory::ReportKind;

pub use outbox::InMemoryOutbox;
pub use relay::HttpMailRelay;

/// A rendered report ready to attach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub kind: ReportKind,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ReportDocument {
    /// A PDF produced elsewhere (e.g. by the browser) for the low-stock report.
    pub fn low_stock_pdf(bytes: Vec<u8>) -> Self {
        Self {
            kind: ReportKind::LowStock,
            file_name: format!("{}.pdf", ReportKind::LowStock.file_stem()),
            content_type: "application/pdf".to_string(),
            bytes,
        }
    }

    pub fn subject(&self) -> &'static str {
        self.kind.title()
    }

    pub fn body(&self) -> String {
        format!("Please find attached the {}.", self.kind.title().to_lowercase())
    }
}

/// One message to deliver, with at most one attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub attachment: Option<ReportDocument>,
}

impl OutgoingMail {
    /// Report email: subject and body are derived from the report kind.
    pub fn report(document: ReportDocument, to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: document.subject().to_string(),
            text: document.body(),
            attachment: Some(document),
        }
    }

    /// Plain-text notice without attachment.
    pub fn notice(to: impl Into<String>, subject: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            text: text.into(),
            attachment: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Email configuration error")]
    NotConfigured,

    #[error("mail transport failed: {0}")]
    Transport(String),

    #[error("mail relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError>;
}

/// Stand-in used when no relay is configured; every send fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledMailer;

#[async_trait]
impl Mailer for DisabledMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        tracing::warn!(to = %mail.to, subject = %mail.subject, "mail requested but no mail relay is configured");
        Err(MailError::NotConfigured)
    }
}
