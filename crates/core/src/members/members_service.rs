use log::debug;
use std::sync::Arc;

use super::members_errors::MemberError;
use super::members_model::{Member, MemberRole, MemberStatus, MemberUpdate, NewMember};
use super::members_traits::{MemberRepositoryTrait, MemberServiceTrait};
use crate::errors::Result;

/// Service for managing member records.
pub struct MemberService {
    repository: Arc<dyn MemberRepositoryTrait>,
}

impl MemberService {
    /// Creates a new MemberService instance
    pub fn new(repository: Arc<dyn MemberRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl MemberServiceTrait for MemberService {
    /// Identity pre-check for the registration flow.
    ///
    /// The email lookup runs to completion before the NIC lookup starts;
    /// the first conflict short-circuits. The database-level uniqueness
    /// constraints remain the source of truth at commit time, this check
    /// exists to block the wizard early with a precise message.
    async fn verify_identity(&self, email: &str, nic: &str) -> Result<()> {
        debug!("Verifying identity for email: {}", email);

        if self.repository.find_by_email(email)?.is_some() {
            return Err(MemberError::EmailExists.into());
        }
        if self.repository.find_by_nic(nic)?.is_some() {
            return Err(MemberError::NicExists.into());
        }
        Ok(())
    }

    fn get_member(&self, member_id: &str) -> Result<Member> {
        self.repository.get_by_id(member_id)
    }

    fn list_members(
        &self,
        role_filter: Option<MemberRole>,
        status_filter: Option<MemberStatus>,
    ) -> Result<Vec<Member>> {
        self.repository.list(role_filter, status_filter)
    }

    async fn create_member(&self, new_member: NewMember) -> Result<Member> {
        new_member.validate()?;
        self.repository.create(new_member).await
    }

    async fn update_member(&self, member_update: MemberUpdate) -> Result<Member> {
        member_update.validate()?;
        self.repository.update(member_update).await
    }

    async fn link_auth_account(&self, member_id: &str, auth_user_id: &str) -> Result<()> {
        self.repository.set_auth_user_id(member_id, auth_user_id).await
    }

    async fn delete_member(&self, member_id: &str) -> Result<()> {
        self.repository.delete(member_id).await?;
        Ok(())
    }
}
