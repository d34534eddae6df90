use log::debug;
use std::sync::Arc;

use super::schedules_model::{NewScheduleExercise, ScheduleExercise, WorkoutSchedule};
use super::schedules_traits::{ScheduleRepositoryTrait, ScheduleServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::Error;

/// Service for workout schedules.
pub struct ScheduleService {
    repository: Arc<dyn ScheduleRepositoryTrait>,
}

impl ScheduleService {
    pub fn new(repository: Arc<dyn ScheduleRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl ScheduleServiceTrait for ScheduleService {
    fn get_schedule(
        &self,
        member_id: &str,
    ) -> Result<Option<(WorkoutSchedule, Vec<ScheduleExercise>)>> {
        self.repository.get_for_member(member_id)
    }

    async fn replace_schedule(
        &self,
        member_id: &str,
        exercises: Vec<NewScheduleExercise>,
    ) -> Result<WorkoutSchedule> {
        if exercises.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "A schedule needs at least one exercise".to_string(),
            )));
        }
        for exercise in &exercises {
            exercise.validate()?;
        }
        debug!(
            "Replacing schedule for member {} with {} exercises",
            member_id,
            exercises.len()
        );
        self.repository.replace(member_id, exercises).await
    }
}
