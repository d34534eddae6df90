use log::debug;
use std::sync::Arc;

use super::medical_model::{MedicalIntake, MedicalProfile};
use super::medical_traits::{MedicalRepositoryTrait, MedicalServiceTrait};
use crate::errors::Result;

/// Service for managing medical profiles.
pub struct MedicalService {
    repository: Arc<dyn MedicalRepositoryTrait>,
}

impl MedicalService {
    pub fn new(repository: Arc<dyn MedicalRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl MedicalServiceTrait for MedicalService {
    fn get_medical_profile(&self, member_id: &str) -> Result<Option<MedicalProfile>> {
        self.repository.get_for_member(member_id)
    }

    async fn upsert_medical(
        &self,
        member_id: &str,
        intake: MedicalIntake,
    ) -> Result<MedicalProfile> {
        intake.validate()?;
        debug!("Upserting medical profile for member {}", member_id);
        self.repository.upsert(member_id, intake).await
    }
}
