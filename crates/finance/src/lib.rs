//! Finance records: ledger transactions, petty-cash entries and invoices.

pub mod invoice;
pub mod minor;
pub mod transaction;

pub use invoice::{Invoice, InvoiceId, InvoiceLine, InvoicePatch, InvoiceStatus, NewInvoice};
pub use minor::{MinorTransaction, MinorTransactionId, NewMinorTransaction};
pub use transaction::{
    NewTransaction, PaymentMethod, Transaction, TransactionId, TransactionPatch, TransactionType,
};
