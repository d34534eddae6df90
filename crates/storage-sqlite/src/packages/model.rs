//! Database models for packages, assignments, and ownership relations.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{
    format_date, format_datetime, parse_date, parse_datetime, parse_decimal, parse_time,
};
use gymtrack_core::packages::{
    Package, PackageAssignment, PackageDetails, PackageRelation, PackageType,
};
use gymtrack_core::Result;

/// Database model for package types.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::package_types)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct PackageTypeDB {
    pub id: String,
    pub name: String,
    pub price: String,
    pub duration_months: i32,
    pub window_start: Option<String>,
    pub window_end: Option<String>,
}

impl PackageTypeDB {
    pub fn into_domain(self) -> Result<PackageType> {
        Ok(PackageType {
            id: self.id,
            name: self.name,
            price: parse_decimal(&self.price)?,
            duration_months: self.duration_months as u32,
            window_start: self.window_start.as_deref().map(parse_time).transpose()?,
            window_end: self.window_end.as_deref().map(parse_time).transpose()?,
        })
    }
}

/// Database model for packages.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::packages)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct PackageDB {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub package_type_id: String,
    pub max_members: i32,
}

impl PackageDB {
    pub fn into_domain(self) -> Package {
        Package {
            id: self.id,
            name: self.name,
            description: self.description,
            package_type_id: self.package_type_id,
            max_members: self.max_members as u32,
        }
    }
}

pub fn details_from_rows(package: PackageDB, package_type: PackageTypeDB) -> Result<PackageDetails> {
    Ok(PackageDetails {
        package: package.into_domain(),
        package_type: package_type.into_domain()?,
    })
}

/// Database model for package assignments.
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::package_assignments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct PackageAssignmentDB {
    pub id: String,
    pub member_id: String,
    pub package_id: String,
    pub trainer_id: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub created_at: String,
}

impl PackageAssignmentDB {
    pub fn into_domain(self) -> Result<PackageAssignment> {
        Ok(PackageAssignment {
            id: self.id,
            member_id: self.member_id,
            package_id: self.package_id,
            trainer_id: self.trainer_id,
            start_date: parse_date(&self.start_date)?,
            end_date: parse_date(&self.end_date)?,
            created_at: parse_datetime(&self.created_at)?,
        })
    }

    pub fn new_row(
        id: String,
        member_id: String,
        package_id: String,
        trainer_id: Option<String>,
        start_date: chrono::NaiveDate,
        end_date: chrono::NaiveDate,
        created_at: chrono::NaiveDateTime,
    ) -> Self {
        Self {
            id,
            member_id,
            package_id,
            trainer_id,
            start_date: format_date(start_date),
            end_date: format_date(end_date),
            created_at: format_datetime(created_at),
        }
    }
}

/// Database model for ownership relation rows.
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::package_relations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct PackageRelationDB {
    pub id: String,
    pub package_id: String,
    pub primary_member_id: String,
    pub dependent_member_id: Option<String>,
    pub created_at: String,
}

impl PackageRelationDB {
    pub fn into_domain(self) -> Result<PackageRelation> {
        Ok(PackageRelation {
            id: self.id,
            package_id: self.package_id,
            primary_member_id: self.primary_member_id,
            dependent_member_id: self.dependent_member_id,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}
