pub mod model;
pub mod repository;

pub use model::{PackageAssignmentDB, PackageDB, PackageRelationDB, PackageTypeDB};
pub use repository::PackageRepository;
