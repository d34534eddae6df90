//! External collaborator interfaces.
//!
//! Auth, object storage, transactional email, and document rendering are
//! remote black boxes; this module defines the traits the workflow talks
//! to and the small pure helpers around them. Concrete clients live
//! outside the core crate.

mod collaborators_model;
mod collaborators_traits;

pub use collaborators_model::{
    temp_password_from_name, unique_object_name, DocumentPayload, EmailMessage, InvoiceDocument,
    MemberSummaryDocument,
};
pub use collaborators_traits::{
    AuthProviderTrait, DocumentRendererTrait, MailerTrait, ObjectStorageTrait,
};
