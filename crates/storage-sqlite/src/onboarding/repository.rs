//! The enrollment committer.
//!
//! A successful onboarding run ends here: one writer job inserts the member,
//! the medical profile, the package assignment, the payment transaction, and
//! resolves the ownership relation. The job runs inside a single immediate
//! transaction, so a failure at any point rolls back every row.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use uuid::Uuid;

use crate::db::WriteHandle;
use crate::errors::StorageError;
use crate::medical::repository::upsert_profile;
use crate::members::model::MemberDB;
use crate::packages::model::{PackageAssignmentDB, PackageRelationDB};
use crate::schema::{members, package_assignments, package_relations};
use crate::transactions::repository::insert_transaction;
use crate::utils::format_datetime;
use gymtrack_core::members::{MemberError, MemberRole, MemberStatus, NewMember};
use gymtrack_core::onboarding::{
    Enrollment, EnrollmentReceipt, EnrollmentRepositoryTrait, OnboardingError, Ownership,
};
use gymtrack_core::transactions::{NewTransaction, RowOperation};
use gymtrack_core::Result;

pub struct EnrollmentRepository {
    writer: WriteHandle,
}

impl EnrollmentRepository {
    pub fn new(writer: WriteHandle) -> Self {
        EnrollmentRepository { writer }
    }
}

/// Re-checks identity uniqueness inside the commit transaction.
///
/// The wizard already checked at step one, but another registration may
/// have landed since. The UNIQUE indexes remain the backstop; this check
/// exists to report the precise conflict.
fn check_identity_free(conn: &mut SqliteConnection, email: &str, nic: &str) -> Result<()> {
    let email_taken: i64 = members::table
        .filter(members::email.eq(email))
        .count()
        .get_result(conn)
        .map_err(StorageError::from)?;
    if email_taken > 0 {
        return Err(MemberError::EmailExists.into());
    }

    let nic_taken: i64 = members::table
        .filter(members::nic.eq(nic))
        .count()
        .get_result(conn)
        .map_err(StorageError::from)?;
    if nic_taken > 0 {
        return Err(MemberError::NicExists.into());
    }
    Ok(())
}

/// Resolves the ownership decision into relation-table writes.
fn write_relation(
    conn: &mut SqliteConnection,
    ownership: &Ownership,
    package_id: &str,
    member_id: &str,
    now: chrono::NaiveDateTime,
) -> Result<Option<PackageRelationDB>> {
    match ownership {
        Ownership::Sole => Ok(None),
        Ownership::Primary => {
            let row = PackageRelationDB {
                id: Uuid::new_v4().to_string(),
                package_id: package_id.to_string(),
                primary_member_id: member_id.to_string(),
                dependent_member_id: None,
                created_at: format_datetime(now),
            };
            let inserted: PackageRelationDB = diesel::insert_into(package_relations::table)
                .values(&row)
                .returning(PackageRelationDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?;
            Ok(Some(inserted))
        }
        Ownership::DependentOf { owner_id } => {
            // The owner's open row may have been filled since plan selection;
            // re-resolve it here so the whole enrollment rolls back if so.
            let open = package_relations::table
                .filter(package_relations::primary_member_id.eq(owner_id))
                .filter(package_relations::package_id.eq(package_id))
                .filter(package_relations::dependent_member_id.is_null())
                .first::<PackageRelationDB>(conn)
                .optional()
                .map_err(StorageError::from)?
                .ok_or_else(|| OnboardingError::OwnerUnavailable(owner_id.clone()))?;

            let updated: PackageRelationDB =
                diesel::update(package_relations::table.find(&open.id))
                    .set(package_relations::dependent_member_id.eq(Some(member_id.to_string())))
                    .returning(PackageRelationDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
            Ok(Some(updated))
        }
    }
}

#[async_trait]
impl EnrollmentRepositoryTrait for EnrollmentRepository {
    async fn commit_enrollment(&self, enrollment: Enrollment) -> Result<EnrollmentReceipt> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<EnrollmentReceipt> {
                let now = Utc::now().naive_utc();

                check_identity_free(conn, &enrollment.personal.email, &enrollment.personal.nic)?;

                // 1. Member
                let member_id = Uuid::new_v4().to_string();
                let new_member = NewMember {
                    id: Some(member_id.clone()),
                    name: enrollment.personal.name.clone(),
                    nic: enrollment.personal.nic.clone(),
                    email: enrollment.personal.email.clone(),
                    phone: enrollment.personal.phone.clone(),
                    date_of_birth: enrollment.personal.date_of_birth,
                    gender: enrollment.personal.gender,
                    address: enrollment.personal.address.clone(),
                    role: MemberRole::Member,
                    status: MemberStatus::Active,
                    image_path: enrollment.image_path.clone(),
                };
                let member_row =
                    MemberDB::from_new(member_id.clone(), new_member, enrollment.joined_at, now);
                let member_db: MemberDB = diesel::insert_into(members::table)
                    .values(&member_row)
                    .returning(MemberDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;

                // 2. Medical profile
                upsert_profile(conn, &member_id, enrollment.medical.clone())?;

                // 3. Package assignment
                let assignment_row = PackageAssignmentDB::new_row(
                    Uuid::new_v4().to_string(),
                    member_id.clone(),
                    enrollment.package_id.clone(),
                    enrollment.trainer_id.clone(),
                    enrollment.start_date,
                    enrollment.end_date,
                    now,
                );
                let assignment_db: PackageAssignmentDB =
                    diesel::insert_into(package_assignments::table)
                        .values(&assignment_row)
                        .returning(PackageAssignmentDB::as_returning())
                        .get_result(conn)
                        .map_err(StorageError::from)?;

                // 4. Payment transaction
                let transaction = insert_transaction(
                    conn,
                    NewTransaction {
                        member_id: member_id.clone(),
                        amount: enrollment.breakdown.amount,
                        discount_percent: enrollment.breakdown.discount_percent,
                        discount_amount: enrollment.breakdown.discount_amount,
                        final_amount: enrollment.breakdown.final_amount,
                        payment_method: enrollment.payment_method,
                        row_operation: RowOperation::Insert,
                    },
                )?;

                // 5. Ownership relation
                let relation = write_relation(
                    conn,
                    &enrollment.ownership,
                    &enrollment.package_id,
                    &member_id,
                    now,
                )?;

                debug!("Committed enrollment for member {}", member_id);
                Ok(EnrollmentReceipt {
                    member: member_db.into_domain()?,
                    assignment: assignment_db.into_domain()?,
                    transaction,
                    relation: relation.map(PackageRelationDB::into_domain).transpose()?,
                })
            })
            .await
    }
}
