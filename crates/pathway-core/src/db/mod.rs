//! SQLite storage for saved plans.
//!
//! Each plan is one row of the `user_plans` table. The step list is kept as a
//! JSON column so the stored shape matches the imported document, while the
//! form answers, cached narrative, and navigator position get their own
//! columns so they can be updated in place.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod plan_queries;
mod schema;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
