//! Medical profile domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Health questionnaire stored one-to-one with a member.
///
/// Created once during onboarding and updated thereafter; never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicalProfile {
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
    /// Free-form fitness goal tags; at least one is always present.
    pub fitness_goals: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for the medical intake questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicalIntake {
    pub medical_conditions: Option<String>,
    pub medications: Option<String>,
    pub injuries: Option<String>,
    #[serde(default)]
    pub has_heart_condition: bool,
    #[serde(default)]
    pub has_chest_pain: bool,
    #[serde(default)]
    pub has_high_blood_pressure: bool,
    #[serde(default)]
    pub is_smoker: bool,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub fitness_goals: Vec<String>,
}

impl MedicalIntake {
    /// Validates the intake. At least one fitness goal is required.
    pub fn validate(&self) -> Result<()> {
        if self.fitness_goals.iter().all(|g| g.trim().is_empty()) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "At least one fitness goal is required".to_string(),
            )));
        }
        if self.emergency_contact_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "emergencyContactName".to_string(),
            )));
        }
        if self.emergency_contact_phone.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "emergencyContactPhone".to_string(),
            )));
        }
        Ok(())
    }
}
