use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::model::{ScheduleExerciseDB, WorkoutScheduleDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{schedule_exercises, workout_schedules};
use gymtrack_core::schedules::{
    NewScheduleExercise, ScheduleExercise, ScheduleRepositoryTrait, WorkoutSchedule,
};
use gymtrack_core::Result;

pub struct ScheduleRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ScheduleRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ScheduleRepository { pool, writer }
    }
}

#[async_trait]
impl ScheduleRepositoryTrait for ScheduleRepository {
    fn get_for_member(
        &self,
        member_id: &str,
    ) -> Result<Option<(WorkoutSchedule, Vec<ScheduleExercise>)>> {
        let mut conn = get_connection(&self.pool)?;
        let header = workout_schedules::table
            .filter(workout_schedules::member_id.eq(member_id))
            .first::<WorkoutScheduleDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        let Some(header) = header else {
            return Ok(None);
        };

        let rows = schedule_exercises::table
            .filter(schedule_exercises::schedule_id.eq(&header.schedule_id))
            .order((
                schedule_exercises::day_of_week.asc(),
                schedule_exercises::exercise.asc(),
            ))
            .load::<ScheduleExerciseDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(Some((
            header.into_domain()?,
            rows.into_iter().map(ScheduleExerciseDB::into_domain).collect(),
        )))
    }

    async fn replace(
        &self,
        member_id: &str,
        exercises: Vec<NewScheduleExercise>,
    ) -> Result<WorkoutSchedule> {
        let member_id = member_id.to_string();
        // One writer job, one transaction: the delete of the old schedule and
        // the insert of the new rows stand or fall together.
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<WorkoutSchedule> {
                let old_ids: Vec<String> = workout_schedules::table
                    .filter(workout_schedules::member_id.eq(&member_id))
                    .select(workout_schedules::schedule_id)
                    .load(conn)
                    .map_err(StorageError::from)?;

                if !old_ids.is_empty() {
                    diesel::delete(
                        schedule_exercises::table
                            .filter(schedule_exercises::schedule_id.eq_any(&old_ids)),
                    )
                    .execute(conn)
                    .map_err(StorageError::from)?;
                    diesel::delete(
                        workout_schedules::table
                            .filter(workout_schedules::schedule_id.eq_any(&old_ids)),
                    )
                    .execute(conn)
                    .map_err(StorageError::from)?;
                }

                let header = WorkoutScheduleDB::new_row(
                    Uuid::new_v4().to_string(),
                    member_id.clone(),
                    Utc::now().naive_utc(),
                );
                diesel::insert_into(workout_schedules::table)
                    .values(&header)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let rows: Vec<ScheduleExerciseDB> = exercises
                    .into_iter()
                    .map(|e| {
                        ScheduleExerciseDB::from_new(
                            Uuid::new_v4().to_string(),
                            header.schedule_id.clone(),
                            e,
                        )
                    })
                    .collect();
                diesel::insert_into(schedule_exercises::table)
                    .values(&rows)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                header.into_domain()
            })
            .await
    }
}
