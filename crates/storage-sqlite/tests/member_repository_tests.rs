mod common;

use gymtrack_core::errors::{DatabaseError, Error};
use gymtrack_core::medical::{MedicalIntake, MedicalRepositoryTrait};
use gymtrack_core::members::{
    Gender, MemberRepositoryTrait, MemberRole, MemberStatus, MemberUpdate, NewMember,
};
use gymtrack_storage_sqlite::medical::MedicalRepository;
use gymtrack_storage_sqlite::members::MemberRepository;

fn new_member(name: &str, email: &str, nic: &str) -> NewMember {
    NewMember {
        id: None,
        name: name.to_string(),
        nic: nic.to_string(),
        email: email.to_string(),
        phone: None,
        date_of_birth: None,
        gender: Some(Gender::Male),
        address: None,
        role: MemberRole::Member,
        status: MemberStatus::Active,
        image_path: None,
    }
}

fn intake() -> MedicalIntake {
    MedicalIntake {
        medical_conditions: Some("Asthma".to_string()),
        medications: None,
        injuries: None,
        has_heart_condition: false,
        has_chest_pain: false,
        has_high_blood_pressure: true,
        is_smoker: false,
        emergency_contact_name: "Sam Roe".to_string(),
        emergency_contact_phone: "0712345678".to_string(),
        fitness_goals: vec!["ENDURANCE".to_string()],
    }
}

#[tokio::test]
async fn test_create_update_and_lookup() {
    let db = common::setup();
    let repo = MemberRepository::new(db.pool.clone(), db.writer.clone());

    let created = repo
        .create(new_member("Mark Roe", "mark@x.com", "881234567V"))
        .await
        .unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.status, MemberStatus::Active);

    let updated = repo
        .update(MemberUpdate {
            id: Some(created.id.clone()),
            name: "Mark A. Roe".to_string(),
            nic: created.nic.clone(),
            email: created.email.clone(),
            phone: Some("0770000001".to_string()),
            date_of_birth: None,
            gender: created.gender,
            address: None,
            role: created.role,
            status: MemberStatus::Suspended,
            image_path: None,
        })
        .await
        .unwrap();
    assert_eq!(updated.name, "Mark A. Roe");
    assert_eq!(updated.status, MemberStatus::Suspended);

    assert_eq!(
        repo.find_by_nic("881234567V").unwrap().unwrap().id,
        created.id
    );
    assert!(repo.find_by_email("nobody@x.com").unwrap().is_none());

    let suspended = repo.list(None, Some(MemberStatus::Suspended)).unwrap();
    assert_eq!(suspended.len(), 1);
    assert!(repo.list(Some(MemberRole::Trainer), None).unwrap().is_empty());
}

#[tokio::test]
async fn test_unique_email_is_enforced_by_the_database() {
    let db = common::setup();
    let repo = MemberRepository::new(db.pool.clone(), db.writer.clone());

    repo.create(new_member("Mark Roe", "mark@x.com", "881234567V"))
        .await
        .unwrap();
    let err = repo
        .create(new_member("Impostor", "mark@x.com", "771234567V"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Database(DatabaseError::UniqueViolation(_))
    ));
}

#[tokio::test]
async fn test_set_auth_user_id_links_account() {
    let db = common::setup();
    let repo = MemberRepository::new(db.pool.clone(), db.writer.clone());

    let created = repo
        .create(new_member("Mark Roe", "mark@x.com", "881234567V"))
        .await
        .unwrap();
    assert!(created.auth_user_id.is_none());

    repo.set_auth_user_id(&created.id, "auth-123").await.unwrap();
    let reloaded = repo.get_by_id(&created.id).unwrap();
    assert_eq!(reloaded.auth_user_id.as_deref(), Some("auth-123"));
}

#[tokio::test]
async fn test_medical_upsert_creates_then_updates() {
    let db = common::setup();
    let members = MemberRepository::new(db.pool.clone(), db.writer.clone());
    let medical = MedicalRepository::new(db.pool.clone(), db.writer.clone());

    let member = members
        .create(new_member("Mark Roe", "mark@x.com", "881234567V"))
        .await
        .unwrap();
    assert!(medical.get_for_member(&member.id).unwrap().is_none());

    let first = medical.upsert(&member.id, intake()).await.unwrap();
    assert_eq!(first.fitness_goals, vec!["ENDURANCE".to_string()]);

    let mut changed = intake();
    changed.is_smoker = true;
    changed.fitness_goals = vec!["ENDURANCE".to_string(), "STRENGTH".to_string()];
    let second = medical.upsert(&member.id, changed).await.unwrap();

    // Same row updated in place.
    assert_eq!(second.id, first.id);
    assert!(second.is_smoker);
    assert_eq!(second.fitness_goals.len(), 2);
    assert_eq!(second.created_at, first.created_at);
}
