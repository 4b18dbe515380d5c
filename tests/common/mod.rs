#![allow(dead_code)]

use clinic_api::db::{DbPool, establish_connection_pool, run_migrations};
use tempfile::TempDir;

/// Migrated SQLite database living in a temporary directory.
///
/// The directory and every database file inside it are removed on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("temp path is not utf-8").to_string();

        let pool = establish_connection_pool(&url).expect("failed to build pool");
        run_migrations(&pool).expect("failed to run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
