use async_trait::async_trait;
use chrono::{Datelike, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::model::TransactionDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::transactions;
use gymtrack_core::constants::INVOICE_PREFIX;
use gymtrack_core::errors::{DatabaseError, Error};
use gymtrack_core::transactions::{NewTransaction, Transaction, TransactionRepositoryTrait};
use gymtrack_core::Result;

pub struct TransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TransactionRepository { pool, writer }
    }
}

/// Appends a transaction row on the given connection. Shared with the
/// enrollment committer so the payment record participates in the
/// enrollment's transaction.
pub(crate) fn insert_transaction(
    conn: &mut SqliteConnection,
    new_transaction: NewTransaction,
) -> Result<Transaction> {
    let row = TransactionDB::from_new(
        Uuid::new_v4().to_string(),
        new_transaction,
        Utc::now().naive_utc(),
    );
    let result_db: TransactionDB = diesel::insert_into(transactions::table)
        .values(&row)
        .returning(TransactionDB::as_returning())
        .get_result(conn)
        .map_err(StorageError::from)?;
    result_db.into_domain()
}

/// Issues the next invoice number for the given year: `INV-<year>-NNNN`.
///
/// The sequence is derived from the highest number already issued that
/// year. Callers must run this inside the writer's transaction; the single
/// writer is what makes the read-then-assign race-free.
fn next_invoice_number(conn: &mut SqliteConnection, year: i32) -> Result<String> {
    let prefix = format!("{INVOICE_PREFIX}-{year}-");
    let pattern = format!("{prefix}%");

    let issued: Vec<Option<String>> = transactions::table
        .filter(transactions::invoice_number.like(pattern))
        .select(transactions::invoice_number)
        .load(conn)
        .map_err(StorageError::from)?;

    let max_seq = issued
        .into_iter()
        .flatten()
        .filter_map(|n| n.strip_prefix(&prefix).and_then(|s| s.parse::<u32>().ok()))
        .max()
        .unwrap_or(0);

    Ok(format!("{prefix}{:04}", max_seq + 1))
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn list_for_member(&self, member_id: &str) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .filter(transactions::member_id.eq(member_id))
            .order(transactions::created_at.desc())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(TransactionDB::into_domain).collect()
    }

    async fn create(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                insert_transaction(conn, new_transaction)
            })
            .await
    }

    async fn assign_invoice(&self, transaction_id: &str) -> Result<Transaction> {
        let transaction_id = transaction_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                let current = transactions::table
                    .find(&transaction_id)
                    .first::<TransactionDB>(conn)
                    .optional()
                    .map_err(StorageError::from)?
                    .ok_or_else(|| {
                        Error::Database(DatabaseError::NotFound(format!(
                            "Transaction {transaction_id}"
                        )))
                    })?;

                // Already-numbered transactions keep their number.
                if current.invoice_number.is_some() {
                    return current.into_domain();
                }

                let invoice = next_invoice_number(conn, Utc::now().year())?;
                let result_db: TransactionDB =
                    diesel::update(transactions::table.find(&transaction_id))
                        .set(transactions::invoice_number.eq(Some(invoice)))
                        .returning(TransactionDB::as_returning())
                        .get_result(conn)
                        .map_err(StorageError::from)?;
                result_db.into_domain()
            })
            .await
    }
}
