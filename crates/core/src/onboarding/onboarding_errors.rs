use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use super::onboarding_model::OnboardingStep;

/// Failures specific to the onboarding workflow.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OnboardingError {
    #[error("Unexpected workflow step: expected {expected}, got {actual}")]
    WrongStep {
        expected: OnboardingStep,
        actual: OnboardingStep,
    },

    #[error("Personal information has not been captured yet")]
    MissingPersonalInfo,

    #[error("Medical intake has not been captured yet")]
    MissingMedical,

    #[error("No plan has been selected")]
    MissingPlan,

    /// A shared package was selected but no ownership decision was made.
    #[error("This package is shared; choose primary ownership or an existing owner")]
    OwnershipRequired,

    /// An ownership decision was supplied for a single-member package.
    #[error("This package admits a single member; no ownership decision applies")]
    OwnershipNotApplicable,

    /// The chosen owner's relation row already has a dependent (or the
    /// owner does not exist).
    #[error("Member {0} has no open owner slot for a dependent")]
    OwnerUnavailable(String),

    #[error("Discount percentage {0} is outside 0-100")]
    InvalidDiscount(Decimal),

    #[error("Plan start date {start} is outside the allowed window [{min}, {max}]")]
    StartDateOutOfRange {
        start: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },
}
