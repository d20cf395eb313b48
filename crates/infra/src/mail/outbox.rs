use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::{MailError, Mailer, OutgoingMail};

/// Captures outgoing mail instead of delivering it (tests/dev).
#[derive(Debug, Default)]
pub struct InMemoryOutbox {
    sent: Mutex<Vec<OutgoingMail>>,
}

impl InMemoryOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything sent so far, oldest first. A poisoned lock still yields the
    /// messages recorded before the panic.
    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Mailer for InMemoryOutbox {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(mail.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::mail::ReportDocument;

    #[tokio::test]
    async fn outbox_records_each_send() {
        let outbox = InMemoryOutbox::new();
        let doc = ReportDocument::low_stock_pdf(vec![7]);
        outbox.send(&OutgoingMail::report(doc.clone(), "a@greenscape.lk")).await.unwrap();
        outbox.send(&OutgoingMail::report(doc.clone(), "b@greenscape.lk")).await.unwrap();

        let sent = outbox.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].to, "b@greenscape.lk");
        assert_eq!(sent[0].attachment, Some(doc));
    }

    #[tokio::test]
    async fn poisoned_outbox_still_reports_sent_mail() {
        let outbox = Arc::new(InMemoryOutbox::new());
        outbox
            .send(&OutgoingMail::notice("a@greenscape.lk", "Site Visit Scheduled", "Hello"))
            .await
            .unwrap();

        let poisoner = outbox.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.sent.lock().unwrap();
            panic!("poison the outbox lock");
        })
        .join();
        assert!(outbox.sent.is_poisoned());

        let sent = outbox.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Site Visit Scheduled");
    }
}
