//! Package domain models.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shared pricing/duration template referenced by packages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageType {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    /// Membership duration in calendar months.
    pub duration_months: u32,
    /// Optional daily access window (e.g. off-peak plans).
    pub window_start: Option<NaiveTime>,
    pub window_end: Option<NaiveTime>,
}

/// A purchasable membership plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub package_type_id: String,
    /// Declared member capacity; a value above 1 makes this a shared
    /// package and triggers the ownership decision during onboarding.
    pub max_members: u32,
}

/// A package joined with its package type, as presented at plan selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageDetails {
    pub package: Package,
    pub package_type: PackageType,
}

impl PackageDetails {
    pub fn price(&self) -> Decimal {
        self.package_type.price
    }

    pub fn duration_months(&self) -> u32 {
        self.package_type.duration_months
    }

    /// Shared packages require the registrant to resolve ownership;
    /// single-member packages never open that decision.
    pub fn requires_ownership_decision(&self) -> bool {
        self.package.max_members > 1
    }
}

/// Associates a member with a purchased package for a date range.
///
/// The end date is always `start_date` advanced by the package type's
/// month count using calendar arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageAssignment {
    pub id: String,
    pub member_id: String,
    pub package_id: String,
    pub trainer_id: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl PackageAssignment {
    /// Whether this assignment covers the given date.
    pub fn is_current_on(&self, date: NaiveDate) -> bool {
        self.end_date >= date
    }
}

/// Input model for creating a package assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPackageAssignment {
    pub member_id: String,
    pub package_id: String,
    pub trainer_id: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Ownership row linking a primary member to at most one dependent under
/// a shared package purchase.
///
/// A row is only ever created with a primary member; the dependent is set
/// later by the dependent enrollment path. A member is primary XOR
/// dependent for a given row, never both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageRelation {
    pub id: String,
    pub package_id: String,
    pub primary_member_id: String,
    pub dependent_member_id: Option<String>,
    pub created_at: NaiveDateTime,
}

/// A primary owner whose relation row has no dependent yet, as offered in
/// the searchable owner list of the dependent enrollment path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OpenOwner {
    pub relation_id: String,
    pub member_id: String,
    pub member_name: String,
    pub package_id: String,
}
