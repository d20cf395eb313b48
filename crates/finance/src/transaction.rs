use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use greenscape_core::{DomainError, DomainResult, Entity, text};

greenscape_core::uuid_newtype!(
    /// Financial transaction identifier.
    pub struct TransactionId,
    "TransactionId"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
}

/// Money amounts are finite and strictly positive.
pub(crate) fn positive_amount(field: &str, amount: f64) -> DomainResult<f64> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(DomainError::validation(format!("{field} must be greater than 0")));
    }
    Ok(amount)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub subtype: String,
    pub amount: f64,
    pub description: String,
    #[serde(rename = "payer_payee")]
    pub payer_payee: String,
    pub method: PaymentMethod,
}

/// Partial update: absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPatch {
    pub date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
    pub subtype: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
    #[serde(rename = "payer_payee")]
    pub payer_payee: Option<String>,
    pub method: Option<PaymentMethod>,
}

/// Entity: a ledger entry with a typed kind and payment method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    id: TransactionId,
    date: NaiveDate,
    #[serde(rename = "type")]
    kind: TransactionType,
    subtype: String,
    amount: f64,
    description: String,
    #[serde(rename = "payer_payee")]
    payer_payee: String,
    method: PaymentMethod,
}

impl Transaction {
    pub fn create(id: TransactionId, input: NewTransaction) -> DomainResult<Self> {
        Self {
            id,
            date: input.date,
            kind: input.kind,
            subtype: input.subtype,
            amount: input.amount,
            description: input.description,
            payer_payee: input.payer_payee,
            method: input.method,
        }
        .validated()
    }

    /// Merge `patch` into this transaction. On error nothing changes.
    pub fn apply(&mut self, patch: TransactionPatch) -> DomainResult<()> {
        let mut next = self.clone();
        if let Some(v) = patch.date {
            next.date = v;
        }
        if let Some(v) = patch.kind {
            next.kind = v;
        }
        if let Some(v) = patch.subtype {
            next.subtype = v;
        }
        if let Some(v) = patch.amount {
            next.amount = v;
        }
        if let Some(v) = patch.description {
            next.description = v;
        }
        if let Some(v) = patch.payer_payee {
            next.payer_payee = v;
        }
        if let Some(v) = patch.method {
            next.method = v;
        }

        *self = next.validated()?;
        Ok(())
    }

    fn validated(self) -> DomainResult<Self> {
        Ok(Self {
            subtype: text::required("subtype", &self.subtype)?,
            amount: positive_amount("amount", self.amount)?,
            description: text::required("description", &self.description)?,
            payer_payee: text::required("payer/payee", &self.payer_payee)?,
            ..self
        })
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Entity for Transaction {
    type Id = TransactionId;

    const COLLECTION: &'static str = "transactions";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
