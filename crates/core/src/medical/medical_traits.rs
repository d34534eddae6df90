use async_trait::async_trait;

use super::medical_model::{MedicalIntake, MedicalProfile};
use crate::errors::Result;

/// Trait for medical profile repository operations.
#[async_trait]
pub trait MedicalRepositoryTrait: Send + Sync {
    /// Loads the profile for a member, if one exists.
    fn get_for_member(&self, member_id: &str) -> Result<Option<MedicalProfile>>;

    /// Creates the profile on first submission, updates it thereafter.
    async fn upsert(&self, member_id: &str, intake: MedicalIntake) -> Result<MedicalProfile>;
}

/// Trait for medical profile service operations.
#[async_trait]
pub trait MedicalServiceTrait: Send + Sync {
    fn get_medical_profile(&self, member_id: &str) -> Result<Option<MedicalProfile>>;

    /// Validates and persists the questionnaire for an existing member.
    /// This is the terminal step of the two-step edit flow.
    async fn upsert_medical(&self, member_id: &str, intake: MedicalIntake)
        -> Result<MedicalProfile>;
}
