use async_trait::async_trait;

use super::transactions_model::{NewTransaction, Transaction};
use crate::errors::Result;

/// Trait for transaction repository operations.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Lists transactions for a member, most recent first.
    fn list_for_member(&self, member_id: &str) -> Result<Vec<Transaction>>;

    /// Appends a transaction record.
    async fn create(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    /// Assigns a server-issued invoice number (`INV-<year>-NNNN`) to an
    /// existing transaction. The per-year sequence is advanced inside the
    /// storage layer's write transaction, so numbers are unique.
    async fn assign_invoice(&self, transaction_id: &str) -> Result<Transaction>;
}

/// Trait for transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    fn get_member_transactions(&self, member_id: &str) -> Result<Vec<Transaction>>;

    async fn record_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    async fn assign_invoice(&self, transaction_id: &str) -> Result<Transaction>;
}
