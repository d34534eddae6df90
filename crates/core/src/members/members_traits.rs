//! Member repository and service traits.
//!
//! These traits define the contract for member operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::members_model::{Member, MemberRole, MemberStatus, MemberUpdate, NewMember};
use crate::errors::Result;

/// Trait defining the contract for Member repository operations.
#[async_trait]
pub trait MemberRepositoryTrait: Send + Sync {
    /// Retrieves a member by its ID.
    fn get_by_id(&self, member_id: &str) -> Result<Member>;

    /// Looks up a member by email, if one exists.
    fn find_by_email(&self, email: &str) -> Result<Option<Member>>;

    /// Looks up a member by national ID, if one exists.
    fn find_by_nic(&self, nic: &str) -> Result<Option<Member>>;

    /// Lists members with optional role and status filters.
    fn list(
        &self,
        role_filter: Option<MemberRole>,
        status_filter: Option<MemberStatus>,
    ) -> Result<Vec<Member>>;

    /// Creates a new member. The storage layer assigns the ID and enforces
    /// email/NIC uniqueness constraints.
    async fn create(&self, new_member: NewMember) -> Result<Member>;

    /// Updates an existing member.
    async fn update(&self, member_update: MemberUpdate) -> Result<Member>;

    /// Records the auth collaborator's user ID on the member record.
    async fn set_auth_user_id(&self, member_id: &str, auth_user_id: &str) -> Result<()>;

    /// Deletes a member by its ID. Returns the number of deleted records.
    async fn delete(&self, member_id: &str) -> Result<usize>;
}

/// Trait defining the contract for Member service operations.
#[async_trait]
pub trait MemberServiceTrait: Send + Sync {
    /// Checks email and NIC uniqueness before a registration may proceed.
    ///
    /// Runs the email check first and the NIC check second, short-circuiting
    /// on the first conflict found. Returns `MemberError::EmailExists` or
    /// `MemberError::NicExists` accordingly; query failures propagate
    /// verbatim.
    async fn verify_identity(&self, email: &str, nic: &str) -> Result<()>;

    /// Retrieves a member by ID.
    fn get_member(&self, member_id: &str) -> Result<Member>;

    /// Lists members with optional filters.
    fn list_members(
        &self,
        role_filter: Option<MemberRole>,
        status_filter: Option<MemberStatus>,
    ) -> Result<Vec<Member>>;

    /// Creates a new member with validation.
    async fn create_member(&self, new_member: NewMember) -> Result<Member>;

    /// Updates an existing member with validation.
    async fn update_member(&self, member_update: MemberUpdate) -> Result<Member>;

    /// Records the auth collaborator's user ID on the member record.
    async fn link_auth_account(&self, member_id: &str, auth_user_id: &str) -> Result<()>;

    /// Deletes a member.
    async fn delete_member(&self, member_id: &str) -> Result<()>;
}
