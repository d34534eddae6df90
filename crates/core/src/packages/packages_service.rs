use std::sync::Arc;

use super::packages_model::{OpenOwner, PackageAssignment, PackageDetails};
use super::packages_traits::{PackageRepositoryTrait, PackageServiceTrait};
use crate::errors::Result;

/// Service for browsing packages and resolving ownership candidates.
pub struct PackageService {
    repository: Arc<dyn PackageRepositoryTrait>,
}

impl PackageService {
    pub fn new(repository: Arc<dyn PackageRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl PackageServiceTrait for PackageService {
    fn list_packages(&self) -> Result<Vec<PackageDetails>> {
        self.repository.list_package_details()
    }

    fn get_package(&self, package_id: &str) -> Result<PackageDetails> {
        self.repository.get_package_details(package_id)
    }

    fn list_open_owners(&self) -> Result<Vec<OpenOwner>> {
        self.repository.list_open_owners()
    }

    fn current_assignment(&self, member_id: &str) -> Result<Option<PackageAssignment>> {
        self.repository.current_assignment(member_id)
    }

    fn list_assignments(&self, member_id: &str) -> Result<Vec<PackageAssignment>> {
        self.repository.list_assignments(member_id)
    }
}
