//! Database models for medical profiles.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{format_datetime, format_string_list, parse_datetime, parse_string_list};
use gymtrack_core::medical::{MedicalIntake, MedicalProfile};
use gymtrack_core::Result;

/// Database model for medical profiles. One row per member.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::medical_profiles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct MedicalProfileDB {
    pub id: String,
    pub member_id: String,
    pub medical_conditions: Option<String>,
    pub medications: Option<String>,
    pub injuries: Option<String>,
    pub has_heart_condition: bool,
    pub has_chest_pain: bool,
    pub has_high_blood_pressure: bool,
    pub is_smoker: bool,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    /// JSON array of goal tags.
    pub fitness_goals: String,
    pub created_at: String,
    pub updated_at: String,
}

impl MedicalProfileDB {
    pub fn into_domain(self) -> Result<MedicalProfile> {
        Ok(MedicalProfile {
            id: self.id,
            member_id: self.member_id,
            medical_conditions: self.medical_conditions,
            medications: self.medications,
            injuries: self.injuries,
            has_heart_condition: self.has_heart_condition,
            has_chest_pain: self.has_chest_pain,
            has_high_blood_pressure: self.has_high_blood_pressure,
            is_smoker: self.is_smoker,
            emergency_contact_name: self.emergency_contact_name,
            emergency_contact_phone: self.emergency_contact_phone,
            fitness_goals: parse_string_list(&self.fitness_goals)?,
            created_at: parse_datetime(&self.created_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }

    pub fn from_intake(
        id: String,
        member_id: String,
        intake: MedicalIntake,
        created_at: chrono::NaiveDateTime,
        updated_at: chrono::NaiveDateTime,
    ) -> Result<Self> {
        Ok(Self {
            id,
            member_id,
            medical_conditions: intake.medical_conditions,
            medications: intake.medications,
            injuries: intake.injuries,
            has_heart_condition: intake.has_heart_condition,
            has_chest_pain: intake.has_chest_pain,
            has_high_blood_pressure: intake.has_high_blood_pressure,
            is_smoker: intake.is_smoker,
            emergency_contact_name: intake.emergency_contact_name,
            emergency_contact_phone: intake.emergency_contact_phone,
            fitness_goals: format_string_list(&intake.fitness_goals)?,
            created_at: format_datetime(created_at),
            updated_at: format_datetime(updated_at),
        })
    }
}
