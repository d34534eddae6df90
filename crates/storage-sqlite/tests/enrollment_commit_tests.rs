mod common;

use chrono::{Datelike, NaiveDate, Utc};
use diesel::dsl::count_star;
use diesel::prelude::*;
use rust_decimal_macros::dec;

use gymtrack_core::errors::Error;
use gymtrack_core::members::{
    Gender, MemberError, MemberRepositoryTrait, MemberRole, MemberStatus, NewMember,
};
use gymtrack_core::onboarding::{
    compute_discount, Enrollment, EnrollmentRepositoryTrait, OnboardingError, Ownership,
    PersonalInfo,
};
use gymtrack_core::medical::MedicalIntake;
use gymtrack_core::packages::PackageRepositoryTrait;
use gymtrack_core::transactions::{PaymentMethod, RowOperation, TransactionRepositoryTrait};
use gymtrack_core::utils::date_utils::add_months;
use gymtrack_storage_sqlite::db::get_connection;
use gymtrack_storage_sqlite::members::MemberRepository;
use gymtrack_storage_sqlite::onboarding::EnrollmentRepository;
use gymtrack_storage_sqlite::packages::PackageRepository;
use gymtrack_storage_sqlite::schema::{
    medical_profiles, members, package_assignments, package_relations, transactions,
};
use gymtrack_storage_sqlite::transactions::TransactionRepository;

fn personal(name: &str, email: &str, nic: &str) -> PersonalInfo {
    PersonalInfo {
        name: name.to_string(),
        nic: nic.to_string(),
        email: email.to_string(),
        phone: Some("0771234567".to_string()),
        date_of_birth: NaiveDate::from_ymd_opt(1999, 5, 4),
        gender: Some(Gender::Female),
        address: Some("12 High St".to_string()),
    }
}

fn intake() -> MedicalIntake {
    MedicalIntake {
        medical_conditions: None,
        medications: None,
        injuries: Some("Left knee".to_string()),
        has_heart_condition: false,
        has_chest_pain: false,
        has_high_blood_pressure: false,
        is_smoker: false,
        emergency_contact_name: "John Doe".to_string(),
        emergency_contact_phone: "0770000000".to_string(),
        fitness_goals: vec!["WEIGHT_LOSS".to_string()],
    }
}

fn enrollment(
    who: PersonalInfo,
    package_id: &str,
    months: u32,
    price: rust_decimal::Decimal,
    percent: rust_decimal::Decimal,
    ownership: Ownership,
) -> Enrollment {
    let start = Utc::now().date_naive();
    Enrollment {
        personal: who,
        image_path: None,
        medical: intake(),
        package_id: package_id.to_string(),
        trainer_id: None,
        ownership,
        start_date: start,
        end_date: add_months(start, months),
        payment_method: PaymentMethod::Card,
        breakdown: compute_discount(price, percent),
        joined_at: Utc::now().naive_utc(),
    }
}

fn table_counts(pool: &gymtrack_storage_sqlite::db::DbPool) -> (i64, i64, i64, i64, i64) {
    let mut conn = get_connection(pool).unwrap();
    (
        members::table.select(count_star()).get_result(&mut conn).unwrap(),
        medical_profiles::table.select(count_star()).get_result(&mut conn).unwrap(),
        package_assignments::table.select(count_star()).get_result(&mut conn).unwrap(),
        transactions::table.select(count_star()).get_result(&mut conn).unwrap(),
        package_relations::table.select(count_star()).get_result(&mut conn).unwrap(),
    )
}

#[tokio::test]
async fn test_sole_enrollment_persists_all_rows() {
    let db = common::setup();
    common::seed_packages(&db.pool);
    let repo = EnrollmentRepository::new(db.writer.clone());

    let receipt = repo
        .commit_enrollment(enrollment(
            personal("Jane Doe", "jane@x.com", "991234567V"),
            "pkg-solo",
            3,
            dec!(10000),
            dec!(10),
            Ownership::Sole,
        ))
        .await
        .unwrap();

    assert_eq!(receipt.member.name, "Jane Doe");
    assert_eq!(receipt.member.role, MemberRole::Member);
    assert_eq!(receipt.member.status, MemberStatus::Active);
    assert_eq!(receipt.transaction.amount, dec!(10000));
    assert_eq!(receipt.transaction.discount_amount, dec!(1000));
    assert_eq!(receipt.transaction.final_amount, dec!(9000));
    assert_eq!(receipt.transaction.row_operation, RowOperation::Insert);
    assert!(receipt.transaction.invoice_number.is_none());
    assert_eq!(
        receipt.assignment.end_date,
        add_months(receipt.assignment.start_date, 3)
    );
    assert!(receipt.relation.is_none());

    assert_eq!(table_counts(&db.pool), (1, 1, 1, 1, 0));

    // The committed member reads back through the member repository.
    let member_repo = MemberRepository::new(db.pool.clone(), db.writer.clone());
    let found = member_repo.find_by_email("jane@x.com").unwrap().unwrap();
    assert_eq!(found.id, receipt.member.id);
    assert_eq!(found.nic, "991234567V");
}

#[tokio::test]
async fn test_assigned_trainer_reads_back_on_the_assignment() {
    let db = common::setup();
    common::seed_packages(&db.pool);
    let member_repo = MemberRepository::new(db.pool.clone(), db.writer.clone());
    let repo = EnrollmentRepository::new(db.writer.clone());
    let package_repo = PackageRepository::new(db.pool.clone());

    let trainer = member_repo
        .create(NewMember {
            id: None,
            name: "Coach Kim".to_string(),
            nic: "751234567V".to_string(),
            email: "kim@x.com".to_string(),
            phone: None,
            date_of_birth: None,
            gender: None,
            address: None,
            role: MemberRole::Trainer,
            status: MemberStatus::Active,
            image_path: None,
        })
        .await
        .unwrap();

    let mut with_trainer = enrollment(
        personal("Jane Doe", "jane@x.com", "991234567V"),
        "pkg-solo",
        3,
        dec!(10000),
        dec!(0),
        Ownership::Sole,
    );
    with_trainer.trainer_id = Some(trainer.id.clone());
    let receipt = repo.commit_enrollment(with_trainer).await.unwrap();
    assert_eq!(
        receipt.assignment.trainer_id.as_deref(),
        Some(trainer.id.as_str())
    );

    let current = package_repo
        .current_assignment(&receipt.member.id)
        .unwrap()
        .unwrap();
    assert_eq!(current.id, receipt.assignment.id);
    assert_eq!(current.trainer_id.as_deref(), Some(trainer.id.as_str()));
}

#[tokio::test]
async fn test_duplicate_email_rolls_back_everything() {
    let db = common::setup();
    common::seed_packages(&db.pool);
    let repo = EnrollmentRepository::new(db.writer.clone());

    repo.commit_enrollment(enrollment(
        personal("Jane Doe", "jane@x.com", "991234567V"),
        "pkg-solo",
        3,
        dec!(10000),
        dec!(0),
        Ownership::Sole,
    ))
    .await
    .unwrap();

    let err = repo
        .commit_enrollment(enrollment(
            personal("Other Jane", "jane@x.com", "881234567V"),
            "pkg-solo",
            3,
            dec!(10000),
            dec!(0),
            Ownership::Sole,
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Member(MemberError::EmailExists)));

    // Only the first enrollment's rows exist.
    assert_eq!(table_counts(&db.pool), (1, 1, 1, 1, 0));
}

#[tokio::test]
async fn test_duplicate_nic_is_reported_precisely() {
    let db = common::setup();
    common::seed_packages(&db.pool);
    let repo = EnrollmentRepository::new(db.writer.clone());

    repo.commit_enrollment(enrollment(
        personal("Jane Doe", "jane@x.com", "991234567V"),
        "pkg-solo",
        3,
        dec!(10000),
        dec!(0),
        Ownership::Sole,
    ))
    .await
    .unwrap();

    let err = repo
        .commit_enrollment(enrollment(
            personal("Other Jane", "other@x.com", "991234567V"),
            "pkg-solo",
            3,
            dec!(10000),
            dec!(0),
            Ownership::Sole,
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Member(MemberError::NicExists)));
    assert_eq!(table_counts(&db.pool), (1, 1, 1, 1, 0));
}

#[tokio::test]
async fn test_primary_then_dependent_share_one_relation_row() {
    let db = common::setup();
    common::seed_packages(&db.pool);
    let repo = EnrollmentRepository::new(db.writer.clone());
    let package_repo = PackageRepository::new(db.pool.clone());

    let owner = repo
        .commit_enrollment(enrollment(
            personal("Owner One", "owner@x.com", "771234567V"),
            "pkg-family",
            6,
            dec!(18000),
            dec!(0),
            Ownership::Primary,
        ))
        .await
        .unwrap();
    let owner_relation = owner.relation.unwrap();
    assert!(owner_relation.dependent_member_id.is_none());

    // The owner shows up in the open-owner list.
    let open = package_repo.list_open_owners().unwrap();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].member_id, owner.member.id);

    let dependent = repo
        .commit_enrollment(enrollment(
            personal("Dep Two", "dep@x.com", "661234567V"),
            "pkg-family",
            6,
            dec!(18000),
            dec!(0),
            Ownership::DependentOf {
                owner_id: owner.member.id.clone(),
            },
        ))
        .await
        .unwrap();

    // Same relation row, now filled; no second row was created.
    let dep_relation = dependent.relation.unwrap();
    assert_eq!(dep_relation.id, owner_relation.id);
    assert_eq!(dep_relation.primary_member_id, owner.member.id);
    assert_eq!(
        dep_relation.dependent_member_id.as_deref(),
        Some(dependent.member.id.as_str())
    );
    let (_, _, _, _, relations) = table_counts(&db.pool);
    assert_eq!(relations, 1);

    // The filled row no longer offers an open slot.
    assert!(package_repo.list_open_owners().unwrap().is_empty());
}

#[tokio::test]
async fn test_dependent_without_open_owner_rolls_back() {
    let db = common::setup();
    common::seed_packages(&db.pool);
    let repo = EnrollmentRepository::new(db.writer.clone());

    let err = repo
        .commit_enrollment(enrollment(
            personal("Dep Two", "dep@x.com", "661234567V"),
            "pkg-family",
            6,
            dec!(18000),
            dec!(0),
            Ownership::DependentOf {
                owner_id: "nobody".to_string(),
            },
        ))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Onboarding(OnboardingError::OwnerUnavailable(_))
    ));

    // The member/profile/assignment/transaction writes all rolled back.
    assert_eq!(table_counts(&db.pool), (0, 0, 0, 0, 0));
}

#[tokio::test]
async fn test_invoice_numbers_form_a_yearly_sequence() {
    let db = common::setup();
    common::seed_packages(&db.pool);
    let repo = EnrollmentRepository::new(db.writer.clone());
    let txn_repo = TransactionRepository::new(db.pool.clone(), db.writer.clone());

    let first = repo
        .commit_enrollment(enrollment(
            personal("Jane Doe", "jane@x.com", "991234567V"),
            "pkg-solo",
            3,
            dec!(10000),
            dec!(0),
            Ownership::Sole,
        ))
        .await
        .unwrap();
    let second = repo
        .commit_enrollment(enrollment(
            personal("Mark Roe", "mark@x.com", "881234567V"),
            "pkg-solo",
            3,
            dec!(10000),
            dec!(0),
            Ownership::Sole,
        ))
        .await
        .unwrap();

    let year = Utc::now().year();
    let a = txn_repo.assign_invoice(&first.transaction.id).await.unwrap();
    let b = txn_repo.assign_invoice(&second.transaction.id).await.unwrap();
    assert_eq!(a.invoice_number.as_deref(), Some(format!("INV-{year}-0001").as_str()));
    assert_eq!(b.invoice_number.as_deref(), Some(format!("INV-{year}-0002").as_str()));

    // Re-assigning is a no-op.
    let again = txn_repo.assign_invoice(&first.transaction.id).await.unwrap();
    assert_eq!(again.invoice_number, a.invoice_number);
}
