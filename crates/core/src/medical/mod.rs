//! Medical profiles module - domain models, services, and traits.

mod medical_model;
mod medical_service;
mod medical_traits;

pub use medical_model::{MedicalIntake, MedicalProfile};
pub use medical_service::MedicalService;
pub use medical_traits::{MedicalRepositoryTrait, MedicalServiceTrait};
