//! Database schema initialization.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Creates the tables from the embedded SQL file if they do not exist.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute_batch(include_str!("../../assets/schema.sql"))
            .db_context("Failed to initialize database schema")
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::super::Database;

    #[test]
    fn test_fresh_schema_has_position_columns() {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::new(temp_dir.path().join("schema.db")).unwrap();

        let columns: Vec<String> = db
            .connection
            .prepare("SELECT name FROM pragma_table_info('user_plans')")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert!(columns.iter().any(|c| c == "step_index"));
        assert!(columns.iter().any(|c| c == "task_index"));
    }

    #[test]
    fn test_schema_initialization_is_repeatable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("schema.db");

        Database::new(&path).unwrap();
        assert!(Database::new(&path).is_ok());
    }
}
