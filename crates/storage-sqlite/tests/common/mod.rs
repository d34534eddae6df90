//! Shared test fixtures: a migrated on-disk database with a writer actor
//! and a small seeded package catalog.

use std::sync::Arc;
use tempfile::TempDir;

use diesel::prelude::*;
use gymtrack_storage_sqlite::db::{create_pool, get_connection, init, run_migrations, spawn_writer};
use gymtrack_storage_sqlite::db::{DbPool, WriteHandle};
use gymtrack_storage_sqlite::schema::{package_types, packages};

pub struct TestDb {
    pub pool: Arc<DbPool>,
    pub writer: WriteHandle,
    // Held so the database directory outlives the test.
    _dir: TempDir,
}

/// Creates a fresh migrated database and spawns its writer actor.
/// Must be called from within a tokio runtime.
pub fn setup() -> TestDb {
    let dir = TempDir::new().expect("temp dir");
    let db_path = init(dir.path().to_str().unwrap()).expect("init db");
    let pool = create_pool(&db_path).expect("create pool");
    run_migrations(&pool).expect("migrations");
    let writer = spawn_writer(pool.clone());
    TestDb {
        pool,
        writer,
        _dir: dir,
    }
}

/// Seeds two plans: a single-member 3-month plan at 10000 and a two-member
/// 6-month plan at 18000.
pub fn seed_packages(pool: &DbPool) {
    let mut conn = get_connection(pool).expect("connection");

    diesel::insert_into(package_types::table)
        .values(&vec![
            (
                package_types::id.eq("pt-solo"),
                package_types::name.eq("Individual"),
                package_types::price.eq("10000"),
                package_types::duration_months.eq(3),
            ),
            (
                package_types::id.eq("pt-family"),
                package_types::name.eq("Couple"),
                package_types::price.eq("18000"),
                package_types::duration_months.eq(6),
            ),
        ])
        .execute(&mut conn)
        .expect("seed package types");

    diesel::insert_into(packages::table)
        .values(&vec![
            (
                packages::id.eq("pkg-solo"),
                packages::name.eq("Individual Monthly"),
                packages::package_type_id.eq("pt-solo"),
                packages::max_members.eq(1),
            ),
            (
                packages::id.eq("pkg-family"),
                packages::name.eq("Couple Plan"),
                packages::package_type_id.eq("pt-family"),
                packages::max_members.eq(2),
            ),
        ])
        .execute(&mut conn)
        .expect("seed packages");
}
