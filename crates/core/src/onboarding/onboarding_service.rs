use chrono::Utc;
use log::{debug, error, info};
use std::sync::Arc;

use super::onboarding_errors::OnboardingError;
use super::onboarding_model::{
    compute_discount, Discount, Enrollment, EnrollmentReceipt, ImageUpload, OnboardingMode,
    OnboardingState, OnboardingStep, Ownership, PaymentBreakdown, PaymentInput, PersonalInfo,
    PlanSelection,
};
use super::onboarding_traits::{EnrollmentRepositoryTrait, OnboardingServiceTrait};
use crate::collaborators::{
    temp_password_from_name, unique_object_name, AuthProviderTrait, EmailMessage, MailerTrait,
    ObjectStorageTrait,
};
use crate::constants::SIGNED_URL_TTL_SECS;
use crate::medical::{MedicalIntake, MedicalServiceTrait};
use crate::members::{MemberServiceTrait, MemberUpdate};
use crate::packages::{OpenOwner, PackageDetails, PackageServiceTrait};
use crate::utils::date_utils::{add_months, start_date_window};
use crate::Result;

/// Orchestrator for the onboarding wizard.
///
/// Holds no mutable state of its own; all accumulation lives in the
/// [`OnboardingState`] passed through each transition.
pub struct OnboardingService {
    members: Arc<dyn MemberServiceTrait>,
    medical: Arc<dyn MedicalServiceTrait>,
    packages: Arc<dyn PackageServiceTrait>,
    enrollments: Arc<dyn EnrollmentRepositoryTrait>,
    auth: Arc<dyn AuthProviderTrait>,
    object_storage: Arc<dyn ObjectStorageTrait>,
    mailer: Arc<dyn MailerTrait>,
}

impl OnboardingService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        members: Arc<dyn MemberServiceTrait>,
        medical: Arc<dyn MedicalServiceTrait>,
        packages: Arc<dyn PackageServiceTrait>,
        enrollments: Arc<dyn EnrollmentRepositoryTrait>,
        auth: Arc<dyn AuthProviderTrait>,
        object_storage: Arc<dyn ObjectStorageTrait>,
        mailer: Arc<dyn MailerTrait>,
    ) -> Self {
        Self {
            members,
            medical,
            packages,
            enrollments,
            auth,
            object_storage,
            mailer,
        }
    }

    /// Uploads a profile image under a time-based unique name and returns
    /// the stored path.
    async fn upload_image(&self, image: ImageUpload) -> Result<String> {
        let object_name = unique_object_name(&image.file_name, Utc::now());
        self.object_storage.upload(&object_name, image.bytes).await
    }

    /// Account creation and the credentials email. Both are best-effort:
    /// the enrollment already stands, so failures are logged and swallowed.
    async fn provision_login(&self, receipt: &EnrollmentReceipt) {
        let member = &receipt.member;
        let temp_password = temp_password_from_name(&member.name);

        let auth_user_id = match self.auth.create_account(&member.email, &temp_password).await {
            Ok(id) => id,
            Err(e) => {
                error!(
                    "Auth account creation failed for member {}: {}",
                    member.id, e
                );
                return;
            }
        };

        if let Err(e) = self
            .members
            .link_auth_account(&member.id, &auth_user_id)
            .await
        {
            error!(
                "Failed to link auth account {} to member {}: {}",
                auth_user_id, member.id, e
            );
        }

        let message = EmailMessage {
            to: member.email.clone(),
            subject: "Your gym membership login".to_string(),
            body: format!(
                "Welcome, {}! Sign in with your email and the temporary password \"{}\", \
                 then change it on first login.",
                member.name, temp_password
            ),
        };
        if let Err(e) = self.mailer.send(message).await {
            error!("Failed to send credentials email to {}: {}", member.email, e);
        }
    }
}

#[async_trait::async_trait]
impl OnboardingServiceTrait for OnboardingService {
    async fn submit_personal_info(
        &self,
        mut state: OnboardingState,
        input: PersonalInfo,
        image: Option<ImageUpload>,
    ) -> Result<OnboardingState> {
        state.expect_step(OnboardingStep::PersonalInfo)?;

        // Reuse the member input validation rules.
        let probe = MemberUpdate {
            id: Some("probe".to_string()),
            name: input.name.clone(),
            nic: input.nic.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            date_of_birth: input.date_of_birth,
            gender: input.gender,
            address: input.address.clone(),
            role: Default::default(),
            status: Default::default(),
            image_path: None,
        };
        probe.validate()?;

        if state.mode == OnboardingMode::Create {
            self.members.verify_identity(&input.email, &input.nic).await?;
        }

        if let Some(image) = image {
            let stored = self.upload_image(image).await?;
            debug!("Stored profile image at {}", stored);
            state.image_path = Some(stored);
        }

        if let OnboardingMode::Edit { member_id } = &state.mode {
            let existing = self.members.get_member(member_id)?;
            let update = MemberUpdate {
                id: Some(member_id.clone()),
                name: input.name.clone(),
                nic: input.nic.clone(),
                email: input.email.clone(),
                phone: input.phone.clone(),
                date_of_birth: input.date_of_birth,
                gender: input.gender,
                address: input.address.clone(),
                role: existing.role,
                status: existing.status,
                image_path: state.image_path.clone().or(existing.image_path),
            };
            self.members.update_member(update).await?;
        }

        state.personal = Some(input);
        state.step = OnboardingStep::Medical;
        Ok(state)
    }

    async fn submit_medical(
        &self,
        mut state: OnboardingState,
        intake: MedicalIntake,
    ) -> Result<OnboardingState> {
        state.expect_step(OnboardingStep::Medical)?;
        intake.validate()?;

        match &state.mode {
            OnboardingMode::Edit { member_id } => {
                // Two-step mode: persist directly and finish.
                self.medical.upsert_medical(member_id, intake.clone()).await?;
                state.medical = Some(intake);
                state.step = OnboardingStep::Done;
            }
            OnboardingMode::Create => {
                state.medical = Some(intake);
                state.step = OnboardingStep::Plan;
            }
        }
        Ok(state)
    }

    fn available_plans(&self) -> Result<Vec<PackageDetails>> {
        self.packages.list_packages()
    }

    fn open_owners(&self) -> Result<Vec<OpenOwner>> {
        self.packages.list_open_owners()
    }

    async fn select_plan(
        &self,
        mut state: OnboardingState,
        selection: PlanSelection,
    ) -> Result<OnboardingState> {
        state.expect_step(OnboardingStep::Plan)?;

        let details = self.packages.get_package(&selection.package_id)?;
        if details.requires_ownership_decision() {
            match &selection.ownership {
                Ownership::Sole => return Err(OnboardingError::OwnershipRequired.into()),
                Ownership::Primary => {}
                Ownership::DependentOf { owner_id } => {
                    let open = self.packages.list_open_owners()?;
                    if !open.iter().any(|o| &o.member_id == owner_id) {
                        return Err(OnboardingError::OwnerUnavailable(owner_id.clone()).into());
                    }
                }
            }
        } else if selection.ownership != Ownership::Sole {
            return Err(OnboardingError::OwnershipNotApplicable.into());
        }

        state.plan = Some(selection);
        state.step = OnboardingStep::Payment;
        Ok(state)
    }

    fn payment_preview(
        &self,
        state: &OnboardingState,
        discount: &Discount,
    ) -> Result<PaymentBreakdown> {
        discount.validate()?;
        let plan = state.plan.as_ref().ok_or(OnboardingError::MissingPlan)?;
        let details = self.packages.get_package(&plan.package_id)?;
        Ok(compute_discount(details.price(), discount.percent()))
    }

    async fn submit_payment(
        &self,
        mut state: OnboardingState,
        payment: PaymentInput,
    ) -> Result<(OnboardingState, EnrollmentReceipt)> {
        state.expect_step(OnboardingStep::Payment)?;
        payment.discount.validate()?;

        let today = Utc::now().date_naive();
        let (min, max) = start_date_window(today);
        if payment.start_date < min || payment.start_date > max {
            return Err(OnboardingError::StartDateOutOfRange {
                start: payment.start_date,
                min,
                max,
            }
            .into());
        }

        let personal = state
            .personal
            .clone()
            .ok_or(OnboardingError::MissingPersonalInfo)?;
        let medical = state
            .medical
            .clone()
            .ok_or(OnboardingError::MissingMedical)?;
        let plan = state.plan.clone().ok_or(OnboardingError::MissingPlan)?;

        let details = self.packages.get_package(&plan.package_id)?;
        let breakdown = compute_discount(details.price(), payment.discount.percent());
        let end_date = add_months(payment.start_date, details.duration_months());

        let enrollment = Enrollment {
            personal,
            image_path: state.image_path.clone(),
            medical,
            package_id: plan.package_id.clone(),
            trainer_id: plan.trainer_id.clone(),
            ownership: plan.ownership.clone(),
            start_date: payment.start_date,
            end_date,
            payment_method: payment.payment_method,
            breakdown,
            joined_at: Utc::now().naive_utc(),
        };

        let receipt = self.enrollments.commit_enrollment(enrollment).await?;
        info!(
            "Enrollment committed for member {} on package {}",
            receipt.member.id, plan.package_id
        );

        self.provision_login(&receipt).await;

        state.payment = Some(payment);
        state.step = OnboardingStep::Done;
        Ok((state, receipt))
    }

    async fn profile_image_url(&self, image_path: &str) -> Result<String> {
        self.object_storage
            .signed_url(image_path, SIGNED_URL_TTL_SECS)
            .await
    }
}
