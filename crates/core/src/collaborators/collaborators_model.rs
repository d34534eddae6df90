//! Data shapes exchanged with external collaborators, plus the pure
//! helpers for credential and object naming.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A transactional email (login credentials, verification links).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Structured input for the document renderer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DocumentPayload {
    MemberSummary(MemberSummaryDocument),
    Invoice(InvoiceDocument),
}

/// Personal + medical + plan fields for the membership summary document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberSummaryDocument {
    pub member_name: String,
    pub nic: String,
    pub email: String,
    pub package_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub fitness_goals: Vec<String>,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
}

/// Invoice fields for the invoice document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDocument {
    pub invoice_number: String,
    pub member_name: String,
    pub amount: Decimal,
    pub discount_amount: Decimal,
    pub final_amount: Decimal,
    pub payment_method: String,
    pub issued_at: DateTime<Utc>,
}

/// Derives the temporary password handed to the auth collaborator: the
/// first whitespace-delimited token of the display name, lowercased.
pub fn temp_password_from_name(name: &str) -> String {
    name.split_whitespace()
        .next()
        .unwrap_or("member")
        .to_lowercase()
}

/// Time-based unique object name for profile image uploads, preserving
/// the original file name for traceability.
pub fn unique_object_name(file_name: &str, now: DateTime<Utc>) -> String {
    let sanitized: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!(
        "profile-images/{}-{}",
        now.format("%Y%m%d%H%M%S%3f"),
        sanitized
    )
}
