//! Database models for members.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::utils::{format_date, format_datetime, parse_date, parse_datetime};
use gymtrack_core::members::{Gender, Member, MemberRole, MemberStatus, MemberUpdate, NewMember};
use gymtrack_core::Result;

/// Database model for members.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::members)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct MemberDB {
    pub id: String,
    pub name: String,
    pub nic: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub role: String,
    pub status: String,
    pub image_path: Option<String>,
    pub auth_user_id: Option<String>,
    pub joined_at: String,
    pub created_at: String,
    pub updated_at: String,
}

impl MemberDB {
    pub fn into_domain(self) -> Result<Member> {
        Ok(Member {
            id: self.id,
            name: self.name,
            nic: self.nic,
            email: self.email,
            phone: self.phone,
            date_of_birth: self.date_of_birth.as_deref().map(parse_date).transpose()?,
            gender: self
                .gender
                .as_deref()
                .map(Gender::from_str)
                .transpose()?,
            address: self.address,
            role: MemberRole::from_str(&self.role)?,
            status: MemberStatus::from_str(&self.status)?,
            image_path: self.image_path,
            auth_user_id: self.auth_user_id,
            joined_at: parse_datetime(&self.joined_at)?,
            created_at: parse_datetime(&self.created_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }

    /// Builds an insertable row from a new-member input. The caller provides
    /// the assigned id and the timestamps.
    pub fn from_new(
        id: String,
        new_member: NewMember,
        joined_at: chrono::NaiveDateTime,
        now: chrono::NaiveDateTime,
    ) -> Self {
        Self {
            id,
            name: new_member.name,
            nic: new_member.nic,
            email: new_member.email,
            phone: new_member.phone,
            date_of_birth: new_member.date_of_birth.map(format_date),
            gender: new_member.gender.map(|g| g.as_str().to_string()),
            address: new_member.address,
            role: new_member.role.as_str().to_string(),
            status: new_member.status.as_str().to_string(),
            image_path: new_member.image_path,
            auth_user_id: None,
            joined_at: format_datetime(joined_at),
            created_at: format_datetime(now),
            updated_at: format_datetime(now),
        }
    }
}

/// Changeset applied when updating a member. Joined/created timestamps and
/// the auth link are never touched by a plain update.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::members)]
#[diesel(treat_none_as_null = true)]
pub struct MemberUpdateDB {
    pub name: String,
    pub nic: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub role: String,
    pub status: String,
    pub image_path: Option<String>,
    pub updated_at: String,
}

impl MemberUpdateDB {
    pub fn from_domain(update: MemberUpdate, now: chrono::NaiveDateTime) -> Self {
        Self {
            name: update.name,
            nic: update.nic,
            email: update.email,
            phone: update.phone,
            date_of_birth: update.date_of_birth.map(format_date),
            gender: update.gender.map(|g| g.as_str().to_string()),
            address: update.address,
            role: update.role.as_str().to_string(),
            status: update.status.as_str().to_string(),
            image_path: update.image_path,
            updated_at: format_datetime(now),
        }
    }
}
