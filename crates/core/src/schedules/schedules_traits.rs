use async_trait::async_trait;

use super::schedules_model::{NewScheduleExercise, ScheduleExercise, WorkoutSchedule};
use crate::errors::Result;

/// Trait for workout schedule repository operations.
#[async_trait]
pub trait ScheduleRepositoryTrait: Send + Sync {
    /// Loads a member's schedule and its exercise rows, if one exists.
    fn get_for_member(
        &self,
        member_id: &str,
    ) -> Result<Option<(WorkoutSchedule, Vec<ScheduleExercise>)>>;

    /// Replaces a member's schedule: deletes all existing exercise rows and
    /// the schedule row, then inserts the new rows under a freshly generated
    /// schedule identifier - all within one storage transaction, so a failed
    /// insert can never leave the member without a schedule.
    async fn replace(
        &self,
        member_id: &str,
        exercises: Vec<NewScheduleExercise>,
    ) -> Result<WorkoutSchedule>;
}

/// Trait for workout schedule service operations.
#[async_trait]
pub trait ScheduleServiceTrait: Send + Sync {
    fn get_schedule(
        &self,
        member_id: &str,
    ) -> Result<Option<(WorkoutSchedule, Vec<ScheduleExercise>)>>;

    async fn replace_schedule(
        &self,
        member_id: &str,
        exercises: Vec<NewScheduleExercise>,
    ) -> Result<WorkoutSchedule>;
}
