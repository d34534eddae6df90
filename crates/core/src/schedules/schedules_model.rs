//! Workout schedule domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Links a member to their current schedule identifier.
///
/// Replacing a schedule issues a fresh identifier; the old one and all
/// rows under it are removed in the same transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSchedule {
    pub schedule_id: String,
    pub member_id: String,
    pub created_at: NaiveDateTime,
}

/// One exercise row within a schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleExercise {
    pub id: String,
    pub schedule_id: String,
    pub day_of_week: String,
    pub exercise: String,
    pub sets: u32,
    pub reps: u32,
}

/// Input model for one exercise row of a replacement schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewScheduleExercise {
    pub day_of_week: String,
    pub exercise: String,
    pub sets: u32,
    pub reps: u32,
}

impl NewScheduleExercise {
    pub fn validate(&self) -> Result<()> {
        if self.exercise.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "exercise".to_string(),
            )));
        }
        if self.day_of_week.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "dayOfWeek".to_string(),
            )));
        }
        if self.sets == 0 || self.reps == 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Sets and reps must be at least 1".to_string(),
            )));
        }
        Ok(())
    }
}
