//! SQLite storage for goals, clarification context, plans and progress logs.
//!
//! Every query module adds methods to [`Database`] through its own `impl`
//! block. Dates and timestamps are stored as their ISO strings; the plan tree
//! is stored as one JSON document per goal.

use std::{fmt::Display, path::Path, str::FromStr};

use rusqlite::{types::Type, Connection, Row};

use crate::error::{DatabaseResultExt, Result};

pub mod context_queries;
pub mod goal_queries;
pub mod migrations;
pub mod plan_queries;
pub mod progress_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (creating if needed) the database at `path` and initializes the
    /// schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Read a text column and parse it, reporting failures as a column
/// conversion error.
pub(crate) fn parse_column<T>(row: &Row<'_>, index: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let text: String = row.get(index)?;
    text.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            index,
            Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid value '{text}': {e}"),
            )),
        )
    })
}
