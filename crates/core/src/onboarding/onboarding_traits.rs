use async_trait::async_trait;

use super::onboarding_model::{
    Discount, Enrollment, EnrollmentReceipt, ImageUpload, OnboardingState, PaymentBreakdown,
    PaymentInput, PersonalInfo, PlanSelection,
};
use crate::medical::MedicalIntake;
use crate::packages::{OpenOwner, PackageDetails};
use crate::Result;

/// The terminal persistence step of the onboarding workflow.
///
/// Implementations must apply every write of an enrollment - member,
/// medical profile, package assignment, transaction, ownership relation -
/// inside one atomic transaction: a failure anywhere rolls back the
/// whole enrollment, leaving no partial state behind.
#[async_trait]
pub trait EnrollmentRepositoryTrait: Send + Sync {
    async fn commit_enrollment(&self, enrollment: Enrollment) -> Result<EnrollmentReceipt>;
}

/// The onboarding workflow orchestrator.
///
/// Every transition consumes the previous state and returns the next one
/// (or an error, leaving the caller's state untouched).
#[async_trait]
pub trait OnboardingServiceTrait: Send + Sync {
    /// Step 1: validates identity uniqueness, uploads the optional profile
    /// image, and stores the personal payload. In edit mode the member
    /// record is updated immediately.
    async fn submit_personal_info(
        &self,
        state: OnboardingState,
        input: PersonalInfo,
        image: Option<ImageUpload>,
    ) -> Result<OnboardingState>;

    /// Step 2: validates and stores the medical questionnaire. In edit
    /// mode this persists directly and completes the workflow.
    async fn submit_medical(
        &self,
        state: OnboardingState,
        intake: MedicalIntake,
    ) -> Result<OnboardingState>;

    /// Plans offered at step 3, joined with their package types.
    fn available_plans(&self) -> Result<Vec<PackageDetails>>;

    /// Owners with an open dependent slot, for the dependent sub-path.
    fn open_owners(&self) -> Result<Vec<OpenOwner>>;

    /// Step 3: validates the ownership decision against the package's
    /// member capacity and stores the selection.
    async fn select_plan(
        &self,
        state: OnboardingState,
        selection: PlanSelection,
    ) -> Result<OnboardingState>;

    /// Pure derived amounts for the payment screen; recomputed whenever
    /// the discount inputs or the resolved plan change.
    fn payment_preview(
        &self,
        state: &OnboardingState,
        discount: &Discount,
    ) -> Result<PaymentBreakdown>;

    /// Step 4: validates payment inputs and commits the enrollment
    /// atomically, then kicks off the non-blocking post-commit actions
    /// (auth account, credentials email).
    async fn submit_payment(
        &self,
        state: OnboardingState,
        payment: PaymentInput,
    ) -> Result<(OnboardingState, EnrollmentReceipt)>;

    /// Signed, time-limited URL for a stored profile image.
    async fn profile_image_url(&self, image_path: &str) -> Result<String>;
}
