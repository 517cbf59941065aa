//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Bring databases created by earlier releases up to the current schema.
    fn apply_migrations(&self) -> Result<()> {
        // Soft deletion arrived after the first release.
        if !self.has_column("goals", "deleted_at")? {
            self.connection
                .execute("ALTER TABLE goals ADD COLUMN deleted_at TEXT", [])
                .db_context("Failed to add deleted_at column to goals table")?;
        }

        if !self.has_column("progress_logs", "blockers")? {
            self.connection
                .execute("ALTER TABLE progress_logs ADD COLUMN blockers TEXT", [])
                .db_context("Failed to add blockers column to progress_logs table")?;
        }

        Ok(())
    }

    fn has_column(&self, table: &str, column: &str) -> Result<bool> {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
                [table, column],
                |row| row.get::<_, i64>(0),
            )
            .map(|count| count > 0)
            .db_context("Failed to inspect table columns")
    }
}
