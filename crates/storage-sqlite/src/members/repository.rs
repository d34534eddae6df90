use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::model::{MemberDB, MemberUpdateDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::members;
use gymtrack_core::errors::{DatabaseError, Error, ValidationError};
use gymtrack_core::members::{
    Member, MemberRepositoryTrait, MemberRole, MemberStatus, MemberUpdate, NewMember,
};
use gymtrack_core::Result;

pub struct MemberRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl MemberRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        MemberRepository { pool, writer }
    }

}

#[async_trait]
impl MemberRepositoryTrait for MemberRepository {
    fn get_by_id(&self, member_id: &str) -> Result<Member> {
        let mut conn = get_connection(&self.pool)?;
        let row = members::table
            .find(member_id)
            .first::<MemberDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(format!("Member {member_id}")))
            })?;
        row.into_domain()
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Member>> {
        let mut conn = get_connection(&self.pool)?;
        let row = members::table
            .filter(members::email.eq(email))
            .first::<MemberDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        row.map(MemberDB::into_domain).transpose()
    }

    fn find_by_nic(&self, nic: &str) -> Result<Option<Member>> {
        let mut conn = get_connection(&self.pool)?;
        let row = members::table
            .filter(members::nic.eq(nic))
            .first::<MemberDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        row.map(MemberDB::into_domain).transpose()
    }

    fn list(
        &self,
        role_filter: Option<MemberRole>,
        status_filter: Option<MemberStatus>,
    ) -> Result<Vec<Member>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = members::table.into_boxed();
        if let Some(role) = role_filter {
            query = query.filter(members::role.eq(role.as_str()));
        }
        if let Some(status) = status_filter {
            query = query.filter(members::status.eq(status.as_str()));
        }
        let rows = query
            .order(members::joined_at.desc())
            .load::<MemberDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(MemberDB::into_domain).collect()
    }

    async fn create(&self, new_member: NewMember) -> Result<Member> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Member> {
                let now = Utc::now().naive_utc();
                let id = new_member
                    .id
                    .clone()
                    .unwrap_or_else(|| Uuid::new_v4().to_string());
                let row = MemberDB::from_new(id, new_member, now, now);

                let result_db: MemberDB = diesel::insert_into(members::table)
                    .values(&row)
                    .returning(MemberDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                result_db.into_domain()
            })
            .await
    }

    async fn update(&self, member_update: MemberUpdate) -> Result<Member> {
        let member_id = member_update.id.clone().ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(
                "Member ID is required for updates".to_string(),
            ))
        })?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Member> {
                let changes = MemberUpdateDB::from_domain(member_update, Utc::now().naive_utc());
                let result_db: MemberDB = diesel::update(members::table.find(&member_id))
                    .set(&changes)
                    .returning(MemberDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                result_db.into_domain()
            })
            .await
    }

    async fn set_auth_user_id(&self, member_id: &str, auth_user_id: &str) -> Result<()> {
        let member_id = member_id.to_string();
        let auth_user_id = auth_user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::update(members::table.find(&member_id))
                    .set(members::auth_user_id.eq(Some(auth_user_id)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn delete(&self, member_id: &str) -> Result<usize> {
        let member_id = member_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(members::table.find(&member_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
