use async_trait::async_trait;

use super::packages_model::{OpenOwner, PackageAssignment, PackageDetails};
use crate::errors::Result;

/// Trait for package repository operations.
///
/// Assignments and ownership relations are only ever written by the
/// enrollment committer, inside its single transaction; this trait is
/// read-only by design.
#[async_trait]
pub trait PackageRepositoryTrait: Send + Sync {
    /// Lists all packages joined with their package types.
    fn list_package_details(&self) -> Result<Vec<PackageDetails>>;

    /// Loads one package joined with its package type.
    fn get_package_details(&self, package_id: &str) -> Result<PackageDetails>;

    /// Lists primary owners whose relation row has no dependent yet.
    fn list_open_owners(&self) -> Result<Vec<OpenOwner>>;

    /// The most recent assignment for a member whose end date has not
    /// passed, if any.
    fn current_assignment(&self, member_id: &str) -> Result<Option<PackageAssignment>>;

    /// All assignments for a member, most recent first.
    fn list_assignments(&self, member_id: &str) -> Result<Vec<PackageAssignment>>;
}

/// Trait for package service operations.
#[async_trait]
pub trait PackageServiceTrait: Send + Sync {
    fn list_packages(&self) -> Result<Vec<PackageDetails>>;

    fn get_package(&self, package_id: &str) -> Result<PackageDetails>;

    fn list_open_owners(&self) -> Result<Vec<OpenOwner>>;

    fn current_assignment(&self, member_id: &str) -> Result<Option<PackageAssignment>>;

    fn list_assignments(&self, member_id: &str) -> Result<Vec<PackageAssignment>>;
}
