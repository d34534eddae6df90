use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::model::MedicalProfileDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::medical_profiles;
use gymtrack_core::medical::{MedicalIntake, MedicalProfile, MedicalRepositoryTrait};
use gymtrack_core::Result;

pub struct MedicalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl MedicalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        MedicalRepository { pool, writer }
    }
}

/// Creates or updates the member's profile on the given connection.
///
/// Shared with the enrollment committer so the profile write participates
/// in the enrollment's transaction.
pub(crate) fn upsert_profile(
    conn: &mut SqliteConnection,
    member_id: &str,
    intake: MedicalIntake,
) -> Result<MedicalProfile> {
    let now = Utc::now().naive_utc();

    let existing = medical_profiles::table
        .filter(medical_profiles::member_id.eq(member_id))
        .first::<MedicalProfileDB>(conn)
        .optional()
        .map_err(StorageError::from)?;

    let result_db: MedicalProfileDB = match existing {
        Some(current) => {
            let mut row = MedicalProfileDB::from_intake(
                current.id.clone(),
                member_id.to_string(),
                intake,
                now,
                now,
            )?;
            // First-submission timestamp survives updates.
            row.created_at = current.created_at;
            diesel::update(medical_profiles::table.find(&current.id))
                .set(&row)
                .returning(MedicalProfileDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?
        }
        None => {
            let row = MedicalProfileDB::from_intake(
                Uuid::new_v4().to_string(),
                member_id.to_string(),
                intake,
                now,
                now,
            )?;
            diesel::insert_into(medical_profiles::table)
                .values(&row)
                .returning(MedicalProfileDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?
        }
    };
    result_db.into_domain()
}

#[async_trait]
impl MedicalRepositoryTrait for MedicalRepository {
    fn get_for_member(&self, member_id: &str) -> Result<Option<MedicalProfile>> {
        let mut conn = get_connection(&self.pool)?;
        let row = medical_profiles::table
            .filter(medical_profiles::member_id.eq(member_id))
            .first::<MedicalProfileDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        row.map(MedicalProfileDB::into_domain).transpose()
    }

    async fn upsert(&self, member_id: &str, intake: MedicalIntake) -> Result<MedicalProfile> {
        let member_id = member_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<MedicalProfile> {
                upsert_profile(conn, &member_id, intake)
            })
            .await
    }
}
