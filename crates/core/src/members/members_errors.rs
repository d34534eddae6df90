use thiserror::Error;

/// Member-specific failures, including the named identity-conflict codes
/// surfaced by the registration flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemberError {
    /// Another member already uses this email address.
    #[error("A member with this email already exists")]
    EmailExists,

    /// Another member already uses this national ID.
    #[error("A member with this NIC already exists")]
    NicExists,

    #[error("Member not found: {0}")]
    NotFound(String),
}
