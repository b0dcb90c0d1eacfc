//! The fixed connect → insert → query-all sequence.

use crate::config::Config;
use crate::db::{InsertOutcome, Session, User};
use crate::error::SessionError;
use std::io::Write;
use tracing::info;

/// Everything the runner observed, in the order it was printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub insert: InsertOutcome,
    pub users: Vec<User>,
}

/// Run the session against `cfg.database_url`, writing the report lines to `out`.
///
/// Stops at the first failure. The connection is released on every path: closed
/// explicitly on success, dropped on error.
pub async fn run<W: Write>(cfg: &Config, out: &mut W) -> Result<RunReport, SessionError> {
    let mut session = Session::connect(&cfg.database_url).await?;
    session.ping().await?;
    info!(backend = session.backend(), url = %cfg.redacted_url(), "connected");

    if cfg.init_schema {
        session.init_schema().await?;
    }

    let user = User::new(cfg.username.as_str(), cfg.password.as_str());
    let insert = session.insert_user(&user).await?;
    info!(
        rows_affected = insert.rows_affected,
        last_insert_id = insert.last_insert_id,
        "user inserted"
    );
    writeln!(out, "{}", insert.rows_affected)?;
    writeln!(out, "{}", insert.last_insert_id)?;

    let mut users = Vec::new();
    session
        .scan_users(|u| {
            writeln!(out, "{u}")?;
            users.push(u);
            Ok(())
        })
        .await?;
    info!(users = users.len(), "users listed");

    session.close().await?;
    Ok(RunReport { insert, users })
}
