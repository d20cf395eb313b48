use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use greenscape_core::{DomainError, DomainResult, Entity, text};

greenscape_core::uuid_newtype!(
    /// Invoice identifier.
    pub struct InvoiceId,
    "InvoiceId"
);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub product: String,
    pub quantity: u32,
    pub price: f64,
}

impl InvoiceLine {
    fn validated(self) -> DomainResult<Self> {
        if self.quantity == 0 {
            return Err(DomainError::validation("item quantity must be greater than 0"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::validation("item price must be a non-negative number"));
        }
        Ok(Self {
            product: text::required("item product", &self.product)?,
            ..self
        })
    }

    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoice {
    pub buyer: String,
    pub total_amount: f64,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub items: Vec<InvoiceLine>,
    #[serde(default)]
    pub status: InvoiceStatus,
}

/// Partial update: absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePatch {
    pub buyer: Option<String>,
    pub total_amount: Option<f64>,
    pub invoice_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub items: Option<Vec<InvoiceLine>>,
    pub status: Option<InvoiceStatus>,
}

/// Entity: Invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    id: InvoiceId,
    buyer: String,
    total_amount: f64,
    invoice_date: NaiveDate,
    due_date: NaiveDate,
    items: Vec<InvoiceLine>,
    status: InvoiceStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Invoice {
    pub fn issue(id: InvoiceId, input: NewInvoice, now: DateTime<Utc>) -> DomainResult<Self> {
        Self {
            id,
            buyer: input.buyer,
            total_amount: input.total_amount,
            invoice_date: input.invoice_date,
            due_date: input.due_date,
            items: input.items,
            status: input.status,
            created_at: now,
            updated_at: now,
        }
        .validated()
    }

    /// Merge `patch`; on error the invoice is left untouched.
    pub fn apply(&mut self, patch: InvoicePatch, now: DateTime<Utc>) -> DomainResult<()> {
        let mut next = self.clone();
        if let Some(v) = patch.buyer {
            next.buyer = v;
        }
        if let Some(v) = patch.total_amount {
            next.total_amount = v;
        }
        if let Some(v) = patch.invoice_date {
            next.invoice_date = v;
        }
        if let Some(v) = patch.due_date {
            next.due_date = v;
        }
        if let Some(v) = patch.items {
            next.items = v;
        }
        if let Some(v) = patch.status {
            next.status = v;
        }
        next.updated_at = now;

        *self = next.validated()?;
        Ok(())
    }

    fn validated(self) -> DomainResult<Self> {
        let buyer = text::required("buyer", &self.buyer)?;
        if !self.total_amount.is_finite() || self.total_amount < 0.0 {
            return Err(DomainError::validation("total amount must be a non-negative number"));
        }
        if self.due_date < self.invoice_date {
            return Err(DomainError::validation("due date cannot be before the invoice date"));
        }
        let items = self
            .items
            .into_iter()
            .map(InvoiceLine::validated)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self { buyer, items, ..self })
    }

    /// Sum of the line totals, independent of the stated `totalAmount`.
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(InvoiceLine::line_total).sum()
    }

    pub fn status(&self) -> InvoiceStatus {
        self.status
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn items(&self) -> &[InvoiceLine] {
        &self.items
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    const COLLECTION: &'static str = "invoices";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
