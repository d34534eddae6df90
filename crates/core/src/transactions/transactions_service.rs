use log::debug;
use std::sync::Arc;

use super::transactions_model::{NewTransaction, Transaction};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::Result;

/// Service for the financial transaction ledger.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl TransactionServiceTrait for TransactionService {
    fn get_member_transactions(&self, member_id: &str) -> Result<Vec<Transaction>> {
        self.repository.list_for_member(member_id)
    }

    async fn record_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        new_transaction.validate()?;
        self.repository.create(new_transaction).await
    }

    async fn assign_invoice(&self, transaction_id: &str) -> Result<Transaction> {
        debug!("Assigning invoice number to transaction {}", transaction_id);
        self.repository.assign_invoice(transaction_id).await
    }
}
