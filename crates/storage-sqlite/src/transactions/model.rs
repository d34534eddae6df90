//! Database models for transactions.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::utils::{format_datetime, format_decimal, parse_datetime, parse_decimal};
use gymtrack_core::transactions::{NewTransaction, PaymentMethod, RowOperation, Transaction};
use gymtrack_core::Result;

/// Database model for transactions. Rows are append-only.
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TransactionDB {
    pub id: String,
    pub member_id: String,
    pub amount: String,
    pub discount_percent: String,
    pub discount_amount: String,
    pub final_amount: String,
    pub payment_method: String,
    pub row_operation: String,
    pub invoice_number: Option<String>,
    pub created_at: String,
}

impl TransactionDB {
    pub fn into_domain(self) -> Result<Transaction> {
        Ok(Transaction {
            id: self.id,
            member_id: self.member_id,
            amount: parse_decimal(&self.amount)?,
            discount_percent: parse_decimal(&self.discount_percent)?,
            discount_amount: parse_decimal(&self.discount_amount)?,
            final_amount: parse_decimal(&self.final_amount)?,
            payment_method: PaymentMethod::from_str(&self.payment_method)?,
            row_operation: RowOperation::from_str(&self.row_operation)?,
            invoice_number: self.invoice_number,
            created_at: parse_datetime(&self.created_at)?,
        })
    }

    pub fn from_new(
        id: String,
        new_transaction: NewTransaction,
        created_at: chrono::NaiveDateTime,
    ) -> Self {
        Self {
            id,
            member_id: new_transaction.member_id,
            amount: format_decimal(new_transaction.amount),
            discount_percent: format_decimal(new_transaction.discount_percent),
            discount_amount: format_decimal(new_transaction.discount_amount),
            final_amount: format_decimal(new_transaction.final_amount),
            payment_method: new_transaction.payment_method.as_str().to_string(),
            row_operation: new_transaction.row_operation.as_str().to_string(),
            invoice_number: None,
            created_at: format_datetime(created_at),
        }
    }
}
