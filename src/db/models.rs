use crate::db::schema::USER_COLUMNS;
use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use sqlx::Row;
use sqlx::any::AnyRow;
use std::fmt;

/// A row of the `users` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

impl User {
    /// An unsaved user; `id` stays 0 until the database assigns one.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: 0,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Decode a `select *` row positionally. The row must have exactly three columns.
    pub fn from_row(row: &AnyRow) -> Result<Self, SessionError> {
        let found = row.len();
        if found != USER_COLUMNS {
            return Err(SessionError::ColumnCount {
                expected: USER_COLUMNS,
                found,
            });
        }

        let id: i64 = row.try_get(0).map_err(SessionError::Decode)?;
        let username: String = row.try_get(1).map_err(SessionError::Decode)?;
        let password: String = row.try_get(2).map_err(SessionError::Decode)?;

        Ok(User {
            id,
            username,
            password,
        })
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {} {}}}", self.id, self.username, self.password)
    }
}

/// Metadata reported by the database for a completed insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertOutcome {
    pub rows_affected: u64,
    pub last_insert_id: i64,
}
