//! SQL text for the `users` table.
//! The runner expects the table to exist; the DDL here is only run on request.

/// Parameterized insert; `id` is assigned by the database.
pub const INSERT_USER: &str = "insert into users (username, password) values (?, ?)";

/// Column order of `users` is `id, username, password`.
pub const SELECT_ALL_USERS: &str = "select * from users";

/// Number of columns a `users` row must carry.
pub const USER_COLUMNS: usize = 3;

pub const MYSQL_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INT AUTO_INCREMENT PRIMARY KEY,
    username VARCHAR(255) NOT NULL,
    password VARCHAR(255) NOT NULL
);
"#;

pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL,
    password TEXT NOT NULL
);
"#;

/// DDL for a driver backend name as reported by `AnyConnection::backend_name`.
pub fn init_for_backend(backend: &str) -> Option<&'static str> {
    if backend.eq_ignore_ascii_case("mysql") {
        Some(MYSQL_INIT)
    } else if backend.eq_ignore_ascii_case("sqlite") {
        Some(SQLITE_INIT)
    } else {
        None
    }
}

/// Per-connection last insert id lookup, for backends that support one.
pub fn last_insert_id_for_backend(backend: &str) -> Option<&'static str> {
    if backend.eq_ignore_ascii_case("sqlite") {
        Some("select last_insert_rowid()")
    } else {
        None
    }
}
