// File: crates/board-admin/src/store.rs
// Summary: SQLite user store; schema bootstrap, existence check, admin insert.

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection};

use crate::error::AdminError;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    salt TEXT NOT NULL,
    role TEXT NOT NULL,
    created_at TEXT NOT NULL
)";

pub struct UserStore {
    conn: Connection,
}

impl UserStore {
    pub fn open(path: &Path) -> Result<Self, AdminError> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// In-memory store; used by tests.
    pub fn open_in_memory() -> Result<Self, AdminError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, AdminError> {
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn })
    }

    pub fn username_exists(&self, username: &str) -> Result<bool, AdminError> {
        let mut stmt = self.conn.prepare("SELECT 1 FROM users WHERE username = ?1 LIMIT 1")?;
        Ok(stmt.exists(params![username])?)
    }

    pub fn insert_admin(&self, username: &str, password_hash: &str, salt: &str) -> Result<i64, AdminError> {
        self.conn.execute(
            "INSERT INTO users (username, password_hash, salt, role, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![username, password_hash, salt, "admin", Utc::now().to_rfc3339()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn user_count(&self) -> Result<i64, AdminError> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Stored (password_hash, salt) for a username, if present.
    pub fn credentials(&self, username: &str) -> Result<Option<(String, String)>, AdminError> {
        let mut stmt = self
            .conn
            .prepare("SELECT password_hash, salt FROM users WHERE username = ?1")?;
        let mut rows = stmt.query(params![username])?;
        match rows.next()? {
            Some(row) => Ok(Some((row.get(0)?, row.get(1)?))),
            None => Ok(None),
        }
    }
}
