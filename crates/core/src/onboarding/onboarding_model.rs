//! Onboarding workflow state and the pure payment arithmetic.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::onboarding_errors::OnboardingError;
use crate::medical::MedicalIntake;
use crate::members::{Gender, Member};
use crate::packages::{PackageAssignment, PackageRelation};
use crate::transactions::{PaymentMethod, Transaction};
use crate::Result;

/// Named steps of the onboarding wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OnboardingStep {
    #[default]
    PersonalInfo,
    Medical,
    Plan,
    Payment,
    Done,
}

impl OnboardingStep {
    /// The step reached by navigating back. The first step and the
    /// terminal step stay put; completed runs are never reopened.
    pub fn previous(&self) -> OnboardingStep {
        match self {
            OnboardingStep::PersonalInfo => OnboardingStep::PersonalInfo,
            OnboardingStep::Medical => OnboardingStep::PersonalInfo,
            OnboardingStep::Plan => OnboardingStep::Medical,
            OnboardingStep::Payment => OnboardingStep::Plan,
            OnboardingStep::Done => OnboardingStep::Done,
        }
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OnboardingStep::PersonalInfo => "PERSONAL_INFO",
            OnboardingStep::Medical => "MEDICAL",
            OnboardingStep::Plan => "PLAN",
            OnboardingStep::Payment => "PAYMENT",
            OnboardingStep::Done => "DONE",
        };
        f.write_str(name)
    }
}

/// Whether the wizard registers a new member or edits an existing one.
///
/// Edit mode is the two-step flow: personal info and medical changes
/// persist immediately and the workflow completes after the medical step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum OnboardingMode {
    Create,
    Edit { member_id: String },
}

/// Identity fields captured at the first step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub nic: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
}

/// Ownership decision for the selected package.
///
/// Single-member packages are always `Sole`. Shared packages require
/// either `Primary` (this registrant owns the purchase) or `DependentOf`
/// (the registrant joins an existing owner's open relation row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Ownership {
    Sole,
    Primary,
    DependentOf { owner_id: String },
}

impl Ownership {
    pub fn is_dependent(&self) -> bool {
        matches!(self, Ownership::DependentOf { .. })
    }
}

/// Plan selection captured at the third step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanSelection {
    pub package_id: String,
    pub trainer_id: Option<String>,
    pub ownership: Ownership,
}

/// Discount selection: fixed tiers or an arbitrary custom percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", content = "percent", rename_all = "camelCase")]
pub enum Discount {
    #[default]
    None,
    Tier5,
    Tier10,
    Custom(Decimal),
}

impl Discount {
    pub fn percent(&self) -> Decimal {
        match self {
            Discount::None => Decimal::ZERO,
            Discount::Tier5 => Decimal::from(5),
            Discount::Tier10 => Decimal::from(10),
            Discount::Custom(p) => *p,
        }
    }

    /// A custom percentage must lie within [0, 100].
    pub fn validate(&self) -> Result<()> {
        let p = self.percent();
        if p < Decimal::ZERO || p > Decimal::ONE_HUNDRED {
            return Err(OnboardingError::InvalidDiscount(p).into());
        }
        Ok(())
    }
}

/// Payment details captured at the final step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInput {
    pub discount: Discount,
    pub payment_method: PaymentMethod,
    pub start_date: NaiveDate,
}

/// Derived payment amounts. Never stored as intermediate state; always
/// recomputed from the plan price and the discount inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBreakdown {
    pub amount: Decimal,
    pub discount_percent: Decimal,
    pub discount_amount: Decimal,
    pub final_amount: Decimal,
}

/// Computes the discount and final amounts for a plan price.
pub fn compute_discount(price: Decimal, percent: Decimal) -> PaymentBreakdown {
    let discount_amount = price * percent / Decimal::ONE_HUNDRED;
    PaymentBreakdown {
        amount: price,
        discount_percent: percent,
        discount_amount,
        final_amount: price - discount_amount,
    }
}

/// Client-held accumulation of the wizard's inputs.
///
/// Fully serializable so an in-progress registration can be parked and
/// resumed; discarded on completion or abandonment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingState {
    pub mode: OnboardingMode,
    pub step: OnboardingStep,
    pub personal: Option<PersonalInfo>,
    /// Object-storage path of an already-uploaded profile image. Kept
    /// across back-navigation and reused; uploads are not retracted.
    pub image_path: Option<String>,
    pub medical: Option<MedicalIntake>,
    pub plan: Option<PlanSelection>,
    pub payment: Option<PaymentInput>,
}

impl OnboardingState {
    pub fn new(mode: OnboardingMode) -> Self {
        Self {
            mode,
            step: OnboardingStep::PersonalInfo,
            personal: None,
            image_path: None,
            medical: None,
            plan: None,
            payment: None,
        }
    }

    /// Guards a transition against out-of-order submissions.
    pub fn expect_step(&self, expected: OnboardingStep) -> Result<()> {
        if self.step != expected {
            return Err(OnboardingError::WrongStep {
                expected,
                actual: self.step,
            }
            .into());
        }
        Ok(())
    }

    /// Navigates back one step. Accumulated data is kept, so moving
    /// forward again does not re-enter anything.
    pub fn back(mut self) -> Self {
        self.step = self.step.previous();
        self
    }
}

/// A profile image handed to the object-storage collaborator.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Everything the committer needs to persist one enrollment atomically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub personal: PersonalInfo,
    pub image_path: Option<String>,
    pub medical: MedicalIntake,
    pub package_id: String,
    pub trainer_id: Option<String>,
    pub ownership: Ownership,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub payment_method: PaymentMethod,
    pub breakdown: PaymentBreakdown,
    pub joined_at: NaiveDateTime,
}

/// The rows written by a successful enrollment commit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentReceipt {
    pub member: Member,
    pub assignment: PackageAssignment,
    pub transaction: Transaction,
    /// `Some` for primary and dependent enrollments, `None` for sole use.
    pub relation: Option<PackageRelation>,
}
