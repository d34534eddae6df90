pub mod model;
pub mod repository;

pub use model::MedicalProfileDB;
pub use repository::MedicalRepository;
