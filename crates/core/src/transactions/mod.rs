//! Transactions module - immutable financial records.

mod transactions_model;
mod transactions_model_tests;
mod transactions_service;
mod transactions_traits;

pub use transactions_model::{NewTransaction, PaymentMethod, RowOperation, Transaction};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
