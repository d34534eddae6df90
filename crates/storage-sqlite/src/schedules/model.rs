//! Database models for workout schedules.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{format_datetime, parse_datetime};
use gymtrack_core::schedules::{NewScheduleExercise, ScheduleExercise, WorkoutSchedule};
use gymtrack_core::Result;

/// Database model for the schedule header row.
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::workout_schedules)]
#[diesel(primary_key(schedule_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct WorkoutScheduleDB {
    pub schedule_id: String,
    pub member_id: String,
    pub created_at: String,
}

impl WorkoutScheduleDB {
    pub fn into_domain(self) -> Result<WorkoutSchedule> {
        Ok(WorkoutSchedule {
            schedule_id: self.schedule_id,
            member_id: self.member_id,
            created_at: parse_datetime(&self.created_at)?,
        })
    }

    pub fn new_row(schedule_id: String, member_id: String, now: chrono::NaiveDateTime) -> Self {
        Self {
            schedule_id,
            member_id,
            created_at: format_datetime(now),
        }
    }
}

/// Database model for one exercise row.
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::schedule_exercises)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ScheduleExerciseDB {
    pub id: String,
    pub schedule_id: String,
    pub day_of_week: String,
    pub exercise: String,
    pub sets: i32,
    pub reps: i32,
}

impl ScheduleExerciseDB {
    pub fn into_domain(self) -> ScheduleExercise {
        ScheduleExercise {
            id: self.id,
            schedule_id: self.schedule_id,
            day_of_week: self.day_of_week,
            exercise: self.exercise,
            sets: self.sets as u32,
            reps: self.reps as u32,
        }
    }

    pub fn from_new(id: String, schedule_id: String, input: NewScheduleExercise) -> Self {
        Self {
            id,
            schedule_id,
            day_of_week: input.day_of_week,
            exercise: input.exercise,
            sets: input.sets as i32,
            reps: input.reps as i32,
        }
    }
}
