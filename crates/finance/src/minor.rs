use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use greenscape_core::{DomainResult, Entity, text};

use crate::transaction::positive_amount;

greenscape_core::uuid_newtype!(
    /// Petty-cash transaction identifier.
    pub struct MinorTransactionId,
    "MinorTransactionId"
);

/// Petty-cash entry. Kind and method are free text here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMinorTransaction {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: String,
    pub subtype: String,
    pub amount: f64,
    pub description: String,
    #[serde(rename = "payer_payee")]
    pub payer_payee: String,
    pub method: String,
}

/// Entity: MinorTransaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinorTransaction {
    id: MinorTransactionId,
    date: NaiveDate,
    #[serde(rename = "type")]
    kind: String,
    subtype: String,
    amount: f64,
    description: String,
    #[serde(rename = "payer_payee")]
    payer_payee: String,
    method: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl MinorTransaction {
    pub fn create(
        id: MinorTransactionId,
        input: NewMinorTransaction,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Ok(Self {
            id,
            date: input.date,
            kind: text::required("type", &input.kind)?,
            subtype: text::required("subtype", &input.subtype)?,
            amount: positive_amount("amount", input.amount)?,
            description: text::required("description", &input.description)?,
            payer_payee: text::required("payer/payee", &input.payer_payee)?,
            method: text::required("method", &input.method)?,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace every field; `createdAt` is kept.
    pub fn replace(&mut self, input: NewMinorTransaction, now: DateTime<Utc>) -> DomainResult<()> {
        let created_at = self.created_at;
        *self = Self {
            created_at,
            ..Self::create(self.id, input, now)?
        };
        Ok(())
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Entity for MinorTransaction {
    type Id = MinorTransactionId;

    const COLLECTION: &'static str = "minor_transactions";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
