pub mod config;
pub mod db;
pub mod error;
pub mod runner;

pub use config::Config;
pub use db::{InsertOutcome, Session, User};
pub use error::{ErrorKind, SessionError};
pub use runner::{RunReport, run};
