use async_trait::async_trait;

use super::collaborators_model::{DocumentPayload, EmailMessage};
use crate::errors::Result;

/// Account creation against the hosted identity provider.
#[async_trait]
pub trait AuthProviderTrait: Send + Sync {
    /// Creates a login for the member and returns the provider's opaque
    /// user identifier, stored as a foreign key on the member record.
    async fn create_account(&self, email: &str, temp_password: &str) -> Result<String>;
}

/// File storage for profile images and similar binary objects.
#[async_trait]
pub trait ObjectStorageTrait: Send + Sync {
    /// Uploads the bytes under the given path and returns the stored path.
    async fn upload(&self, path: &str, bytes: Vec<u8>) -> Result<String>;

    /// Obtains a signed, time-limited retrieval URL for a stored object.
    async fn signed_url(&self, path: &str, ttl_secs: u64) -> Result<String>;
}

/// Transactional email delivery.
///
/// Call sites treat sends as fire-and-forget: failures are logged and
/// never block or fail the surrounding workflow.
#[async_trait]
pub trait MailerTrait: Send + Sync {
    async fn send(&self, message: EmailMessage) -> Result<()>;
}

/// Document generation (membership summaries, invoices).
///
/// Pure output: the renderer consumes a structured record and produces a
/// binary document; nothing flows back into the workflow.
pub trait DocumentRendererTrait: Send + Sync {
    fn render(&self, payload: &DocumentPayload) -> Result<Vec<u8>>;
}
