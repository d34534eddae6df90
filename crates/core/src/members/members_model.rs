//! Member domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{errors::ValidationError, Error, Result};

/// Lifecycle status of a member record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberStatus {
    /// Live membership; the default for freshly onboarded members.
    #[default]
    Active,
    Inactive,
    Suspended,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "ACTIVE",
            MemberStatus::Inactive => "INACTIVE",
            MemberStatus::Suspended => "SUSPENDED",
        }
    }
}

impl FromStr for MemberStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ACTIVE" => Ok(MemberStatus::Active),
            "INACTIVE" => Ok(MemberStatus::Inactive),
            "SUSPENDED" => Ok(MemberStatus::Suspended),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown member status: {other}"
            )))),
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a person record within the gym.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    #[default]
    Member,
    Staff,
    Trainer,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Member => "MEMBER",
            MemberRole::Staff => "STAFF",
            MemberRole::Trainer => "TRAINER",
        }
    }
}

impl FromStr for MemberRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "MEMBER" => Ok(MemberRole::Member),
            "STAFF" => Ok(MemberRole::Staff),
            "TRAINER" => Ok(MemberRole::Trainer),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown member role: {other}"
            )))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            "OTHER" => Ok(Gender::Other),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown gender: {other}"
            )))),
        }
    }
}

/// Domain model representing a person record in the system.
///
/// Email and NIC are unique across all person records; the storage layer
/// enforces this with database constraints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    /// National ID card number.
    pub nic: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    pub role: MemberRole,
    pub status: MemberStatus,
    /// Object-storage path of the profile image, if one was uploaded.
    pub image_path: Option<String>,
    /// Opaque identifier returned by the auth collaborator.
    pub auth_user_id: Option<String>,
    pub joined_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub nic: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    pub role: MemberRole,
    pub status: MemberStatus,
    pub image_path: Option<String>,
}

impl NewMember {
    /// Validates the new member data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.nic.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "nic".to_string(),
            )));
        }
        validate_email(&self.email)?;
        Ok(())
    }
}

/// Input model for updating an existing member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUpdate {
    pub id: Option<String>,
    pub name: String,
    pub nic: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    pub role: MemberRole,
    pub status: MemberStatus,
    /// Replaces the stored image path when a new image was uploaded.
    pub image_path: Option<String>,
}

impl MemberUpdate {
    /// Validates the member update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Member ID is required for updates".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.nic.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "nic".to_string(),
            )));
        }
        validate_email(&self.email)?;
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<()> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "email".to_string(),
        )));
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Invalid email address: {trimmed}"
        ))));
    };
    if local.is_empty() || !domain.contains('.') || domain.starts_with('.') {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Invalid email address: {trimmed}"
        ))));
    }
    Ok(())
}
