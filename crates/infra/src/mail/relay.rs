use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use tracing::instrument;

use crate::config::MailConfig;

use super::{MailError, Mailer, OutgoingMail};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Attachment<'a> {
    filename: &'a str,
    content_type: &'a str,
    content: String,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
    attachments: Vec<Attachment<'a>>,
}

fn message<'a>(from: &'a str, mail: &'a OutgoingMail) -> Message<'a> {
    Message {
        from,
        to: &mail.to,
        subject: &mail.subject,
        text: &mail.text,
        attachments: mail
            .attachment
            .iter()
            .map(|doc| Attachment {
                filename: &doc.file_name,
                content_type: &doc.content_type,
                content: STANDARD.encode(&doc.bytes),
            })
            .collect(),
    }
}

/// Sends mail through a JSON-over-HTTP relay with a bearer key.
///
/// Every request is bounded by [`MailConfig::timeout`].
#[derive(Debug, Clone)]
pub struct HttpMailRelay {
    client: reqwest::Client,
    config: MailConfig,
}

impl HttpMailRelay {
    pub fn new(config: MailConfig) -> Result<Self, MailError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MailError::Transport(format!("building http client: {e}")))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl Mailer for HttpMailRelay {
    #[instrument(skip(self, mail), fields(to = %mail.to, subject = %mail.subject), err)]
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        let response = self
            .client
            .post(&self.config.relay_url)
            .bearer_auth(&self.config.api_key)
            .json(&message(&self.config.from, mail))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MailError::Transport(format!(
                        "relay did not answer within {:?}",
                        self.config.timeout
                    ))
                } else {
                    MailError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!("mail sent");
        Ok(())
    }
}
