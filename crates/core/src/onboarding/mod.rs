//! Onboarding module - the multi-step member registration workflow.
//!
//! The workflow is an explicit, serializable state machine
//! (`PersonalInfo -> Medical -> Plan -> Payment -> Done`). Each transition
//! takes the previous state and an input and returns a new state or a
//! validation error. Nothing is persisted until the terminal commit, which
//! runs as a single storage transaction.

mod onboarding_errors;
mod onboarding_model;
mod onboarding_model_tests;
mod onboarding_service;
mod onboarding_traits;

pub use onboarding_errors::OnboardingError;
pub use onboarding_model::{
    compute_discount, Discount, Enrollment, EnrollmentReceipt, ImageUpload, OnboardingMode,
    OnboardingState, OnboardingStep, Ownership, PaymentBreakdown, PaymentInput, PersonalInfo,
    PlanSelection,
};
pub use onboarding_service::OnboardingService;
pub use onboarding_traits::{EnrollmentRepositoryTrait, OnboardingServiceTrait};
