use crate::db::models::{InsertOutcome, User};
use crate::db::schema::{
    INSERT_USER, SELECT_ALL_USERS, init_for_backend, last_insert_id_for_backend,
};
use crate::error::SessionError;
use futures::StreamExt;
use sqlx::{AnyConnection, Connection};
use tracing::{debug, info};

/// An open database session over a single, exclusively owned connection.
///
/// Dropping the session releases the connection, so every early return through `?`
/// still closes the link. [`Session::close`] is the graceful path.
pub struct Session {
    conn: AnyConnection,
}

impl Session {
    /// Open a connection for any URL understood by sqlx's default drivers
    /// (`mysql://...`, `sqlite:...`).
    pub async fn connect(url: &str) -> Result<Self, SessionError> {
        sqlx::any::install_default_drivers();
        let conn = AnyConnection::connect(url)
            .await
            .map_err(SessionError::Connection)?;
        debug!(backend = conn.backend_name(), "connection opened");
        Ok(Self { conn })
    }

    /// Round-trip check that the link is usable, not just constructed.
    pub async fn ping(&mut self) -> Result<(), SessionError> {
        self.conn.ping().await.map_err(SessionError::Connection)
    }

    pub fn backend(&self) -> &str {
        self.conn.backend_name()
    }

    pub fn connection_mut(&mut self) -> &mut AnyConnection {
        &mut self.conn
    }

    /// Create the `users` table in the connection's SQL dialect if it is missing.
    pub async fn init_schema(&mut self) -> Result<(), SessionError> {
        let backend = self.backend().to_string();
        let ddl = init_for_backend(&backend).ok_or_else(|| {
            SessionError::Query(sqlx::Error::Configuration(
                format!("no users schema for backend {backend}").into(),
            ))
        })?;
        // sqlx::query runs one statement at a time
        for stmt in ddl.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s)
                .execute(&mut self.conn)
                .await
                .map_err(SessionError::Query)?;
        }
        info!(backend = %backend, "users schema ensured");
        Ok(())
    }

    /// Insert `user` and report the affected row count and the assigned id.
    pub async fn insert_user(&mut self, user: &User) -> Result<InsertOutcome, SessionError> {
        let res = sqlx::query(INSERT_USER)
            .bind(user.username.as_str())
            .bind(user.password.as_str())
            .execute(&mut self.conn)
            .await
            .map_err(SessionError::Query)?;

        let rows_affected = res.rows_affected();
        let last_insert_id = match res.last_insert_id() {
            Some(id) => id,
            None => self.query_last_insert_id().await?,
        };

        Ok(InsertOutcome {
            rows_affected,
            last_insert_id,
        })
    }

    /// Ask the connection for the id of its latest insert, for backends whose driver
    /// does not carry it on the query result (SQLite through `Any`).
    async fn query_last_insert_id(&mut self) -> Result<i64, SessionError> {
        let stmt = last_insert_id_for_backend(self.backend())
            .ok_or(SessionError::Result("last insert id not reported by backend"))?;
        let (id,): (i64,) = sqlx::query_as(stmt)
            .fetch_one(&mut self.conn)
            .await
            .map_err(SessionError::Query)?;
        Ok(id)
    }

    /// Stream every `users` row through `visit`, one freshly decoded [`User`] at a time.
    ///
    /// The cursor lives only inside this call and is dropped before it returns, on
    /// success and on error alike. Returns the number of rows visited.
    pub async fn scan_users<F>(&mut self, mut visit: F) -> Result<usize, SessionError>
    where
        F: FnMut(User) -> Result<(), SessionError>,
    {
        let mut rows = sqlx::query(SELECT_ALL_USERS).fetch(&mut self.conn);
        let mut visited = 0;

        loop {
            match rows.next().await {
                Some(Ok(row)) => {
                    visit(User::from_row(&row)?)?;
                    visited += 1;
                }
                // the stream ends the same way after a fault as after the last row;
                // only the yielded error tells them apart
                Some(Err(e)) => return Err(SessionError::Query(e)),
                None => break,
            }
        }

        debug!(rows = visited, "users cursor exhausted");
        Ok(visited)
    }

    pub async fn fetch_all_users(&mut self) -> Result<Vec<User>, SessionError> {
        let mut users = Vec::new();
        self.scan_users(|u| {
            users.push(u);
            Ok(())
        })
        .await?;
        Ok(users)
    }

    /// Gracefully close the connection.
    pub async fn close(self) -> Result<(), SessionError> {
        self.conn.close().await.map_err(SessionError::Connection)
    }
}
