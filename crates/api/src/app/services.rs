//! Infrastructure wiring: stores, report renderer, mailer and assistant.

use std::sync::Arc;

use greenscape_appointments::{Appointment, Service};
use greenscape_assistant::Assistant;
use greenscape_feedback::Feedback;
use greenscape_finance::{Invoice, MinorTransaction, Transaction};
use greenscape_infra::{
    AppConfig, CsvRenderer, DisabledMailer, DocumentStore, HttpMailRelay, InMemoryDocumentStore,
    MailError, Mailer, OutgoingMail, PostgresDocumentStore, ReportRenderer, StoreError,
};
use greenscape_inventory::{InventoryItem, InventoryItemId, InventoryQuery};
use greenscape_maintenance::MaintenanceRecord;
use greenscape_usage::UsageRecord;

use crate::app::errors::ApiError;

/// Failure while wiring services at startup.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Mail(#[from] MailError),
}

/// Shared handles used by every route. Cheap to clone behind an `Arc`.
pub struct AppServices {
    pub inventories: Arc<dyn DocumentStore<InventoryItem>>,
    pub maintenance: Arc<dyn DocumentStore<MaintenanceRecord>>,
    pub usage: Arc<dyn DocumentStore<UsageRecord>>,
    pub appointments: Arc<dyn DocumentStore<Appointment>>,
    pub services: Arc<dyn DocumentStore<Service>>,
    pub feedback: Arc<dyn DocumentStore<Feedback>>,
    pub transactions: Arc<dyn DocumentStore<Transaction>>,
    pub minor_transactions: Arc<dyn DocumentStore<MinorTransaction>>,
    pub invoices: Arc<dyn DocumentStore<Invoice>>,
    pub renderer: Arc<dyn ReportRenderer>,
    pub mailer: Arc<dyn Mailer>,
    pub assistant: Assistant,
}

impl AppServices {
    /// Wire every collection to one store and render reports as CSV.
    pub fn with_store<S>(store: Arc<S>, mailer: Arc<dyn Mailer>) -> Self
    where
        S: DocumentStore<InventoryItem>
            + DocumentStore<MaintenanceRecord>
            + DocumentStore<UsageRecord>
            + DocumentStore<Appointment>
            + DocumentStore<Service>
            + DocumentStore<Feedback>
            + DocumentStore<Transaction>
            + DocumentStore<MinorTransaction>
            + DocumentStore<Invoice>
            + 'static,
    {
        Self {
            inventories: store.clone(),
            maintenance: store.clone(),
            usage: store.clone(),
            appointments: store.clone(),
            services: store.clone(),
            feedback: store.clone(),
            transactions: store.clone(),
            minor_transactions: store.clone(),
            invoices: store,
            renderer: Arc::new(CsvRenderer),
            mailer,
            assistant: Assistant::default(),
        }
    }

    /// In-memory storage (dev/test).
    pub fn in_memory(mailer: Arc<dyn Mailer>) -> Self {
        Self::with_store(Arc::new(InMemoryDocumentStore::new()), mailer)
    }

    /// Postgres when `DATABASE_URL` is set, in-memory otherwise; relay mail
    /// when configured.
    pub async fn from_config(config: &AppConfig) -> Result<Self, StartupError> {
        let mailer: Arc<dyn Mailer> = match &config.mail {
            Some(mail) => Arc::new(HttpMailRelay::new(mail.clone())?),
            None => {
                tracing::warn!("mail relay not configured; report emails will fail");
                Arc::new(DisabledMailer)
            }
        };

        match &config.database_url {
            Some(url) => {
                let store = PostgresDocumentStore::connect(url).await?;
                tracing::info!("using postgres document store");
                Ok(Self::with_store(Arc::new(store), mailer))
            }
            None => {
                tracing::info!("DATABASE_URL not set; using in-memory document store");
                Ok(Self::in_memory(mailer))
            }
        }
    }

    /// Load every item, then filter and order per `query`.
    pub async fn query_inventory(&self, query: &InventoryQuery) -> Result<Vec<InventoryItem>, StoreError> {
        let items = self.inventories.list().await?;
        Ok(query.apply(items))
    }

    /// Fetch an item or fail with NotFound.
    pub async fn inventory_item(&self, id: &InventoryItemId) -> Result<InventoryItem, ApiError> {
        self.inventories
            .get(id)
            .await?
            .ok_or_else(|| greenscape_core::DomainError::not_found("Inventory item not found").into())
    }

    /// Send a customer notice without failing the caller; delivery problems
    /// are logged. Returns whether the mail went out.
    pub async fn notify(&self, mail: OutgoingMail) -> bool {
        match self.mailer.send(&mail).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, to = %mail.to, subject = %mail.subject, "customer notice not sent");
                false
            }
        }
    }
}
