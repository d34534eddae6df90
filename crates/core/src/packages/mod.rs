//! Packages module - plans, package types, assignments, and ownership relations.

mod packages_model;
mod packages_service;
mod packages_traits;

pub use packages_model::{
    NewPackageAssignment, OpenOwner, Package, PackageAssignment, PackageDetails, PackageRelation,
    PackageType,
};
pub use packages_service::PackageService;
pub use packages_traits::{PackageRepositoryTrait, PackageServiceTrait};
