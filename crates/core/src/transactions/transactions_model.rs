//! Transaction domain models.
//!
//! Transactions are append-only. Corrections and soft deletes are new rows
//! carrying the `U`/`D` row-operation tag, never physical updates.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{errors::ValidationError, Error, Result};

/// How the member paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    Card,
    Cash,
    BankTransfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Cash => "cash",
            PaymentMethod::BankTransfer => "bank-transfer",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "card" => Ok(PaymentMethod::Card),
            "cash" => Ok(PaymentMethod::Cash),
            "bank-transfer" => Ok(PaymentMethod::BankTransfer),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown payment method: {other}"
            )))),
        }
    }
}

/// Row-operation tag distinguishing insert/update/soft-delete semantics,
/// used in lieu of physical deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RowOperation {
    #[default]
    #[serde(rename = "I")]
    Insert,
    #[serde(rename = "U")]
    Update,
    #[serde(rename = "D")]
    Delete,
}

impl RowOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowOperation::Insert => "I",
            RowOperation::Update => "U",
            RowOperation::Delete => "D",
        }
    }
}

impl FromStr for RowOperation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "I" => Ok(RowOperation::Insert),
            "U" => Ok(RowOperation::Update),
            "D" => Ok(RowOperation::Delete),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown row operation: {other}"
            )))),
        }
    }
}

/// An immutable financial record tied to a member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub member_id: String,
    /// Gross amount, i.e. the package price.
    pub amount: Decimal,
    pub discount_percent: Decimal,
    pub discount_amount: Decimal,
    pub final_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub row_operation: RowOperation,
    /// Server-issued, assigned after creation by a decoupled screen.
    pub invoice_number: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for recording a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub member_id: String,
    pub amount: Decimal,
    pub discount_percent: Decimal,
    pub discount_amount: Decimal,
    pub final_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub row_operation: RowOperation,
}

impl NewTransaction {
    /// Validates internal consistency of the amounts.
    pub fn validate(&self) -> Result<()> {
        if self.amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Transaction amount cannot be negative".to_string(),
            )));
        }
        if self.amount - self.discount_amount != self.final_amount {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Final amount does not match amount minus discount".to_string(),
            )));
        }
        Ok(())
    }
}
