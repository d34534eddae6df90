use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;

use super::model::{details_from_rows, PackageAssignmentDB, PackageDB, PackageTypeDB};
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::{members, package_assignments, package_relations, package_types, packages};
use crate::utils::format_date;
use gymtrack_core::errors::{DatabaseError, Error};
use gymtrack_core::packages::{
    OpenOwner, PackageAssignment, PackageDetails, PackageRepositoryTrait,
};
use gymtrack_core::Result;

/// Read-only access to the package catalog, assignments, and open owners.
/// All writes to these tables happen inside the enrollment committer.
pub struct PackageRepository {
    pool: Arc<DbPool>,
}

impl PackageRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        PackageRepository { pool }
    }
}

#[async_trait]
impl PackageRepositoryTrait for PackageRepository {
    fn list_package_details(&self) -> Result<Vec<PackageDetails>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = packages::table
            .inner_join(package_types::table)
            .select((PackageDB::as_select(), PackageTypeDB::as_select()))
            .order(packages::name.asc())
            .load::<(PackageDB, PackageTypeDB)>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter()
            .map(|(p, pt)| details_from_rows(p, pt))
            .collect()
    }

    fn get_package_details(&self, package_id: &str) -> Result<PackageDetails> {
        let mut conn = get_connection(&self.pool)?;
        let row = packages::table
            .inner_join(package_types::table)
            .filter(packages::id.eq(package_id))
            .select((PackageDB::as_select(), PackageTypeDB::as_select()))
            .first::<(PackageDB, PackageTypeDB)>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(format!("Package {package_id}")))
            })?;
        details_from_rows(row.0, row.1)
    }

    fn list_open_owners(&self) -> Result<Vec<OpenOwner>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = package_relations::table
            .inner_join(members::table.on(members::id.eq(package_relations::primary_member_id)))
            .filter(package_relations::dependent_member_id.is_null())
            .select((
                package_relations::id,
                package_relations::primary_member_id,
                members::name,
                package_relations::package_id,
            ))
            .order(members::name.asc())
            .load::<(String, String, String, String)>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows
            .into_iter()
            .map(|(relation_id, member_id, member_name, package_id)| OpenOwner {
                relation_id,
                member_id,
                member_name,
                package_id,
            })
            .collect())
    }

    fn current_assignment(&self, member_id: &str) -> Result<Option<PackageAssignment>> {
        let mut conn = get_connection(&self.pool)?;
        let today = format_date(Utc::now().date_naive());
        let row = package_assignments::table
            .filter(package_assignments::member_id.eq(member_id))
            .filter(package_assignments::end_date.ge(today))
            .order(package_assignments::start_date.desc())
            .first::<PackageAssignmentDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        row.map(PackageAssignmentDB::into_domain).transpose()
    }

    fn list_assignments(&self, member_id: &str) -> Result<Vec<PackageAssignment>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = package_assignments::table
            .filter(package_assignments::member_id.eq(member_id))
            .order(package_assignments::start_date.desc())
            .load::<PackageAssignmentDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter()
            .map(PackageAssignmentDB::into_domain)
            .collect()
    }
}
