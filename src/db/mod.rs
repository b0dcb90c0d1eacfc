//! Database module: the `users` record, its SQL, and the owned connection session.
//!
//! Layout:
//! - `models.rs`: `User` and the row decoding that fills it
//! - `schema.rs`: statement text and optional DDL per backend
//! - `session.rs`: `Session`, one exclusively owned `AnyConnection`

pub mod models;
pub mod schema;
pub mod session;

pub use models::{InsertOutcome, User};
pub use schema::{INSERT_USER, SELECT_ALL_USERS};
pub use session::Session;
