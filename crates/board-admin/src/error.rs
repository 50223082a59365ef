// File: crates/board-admin/src/error.rs
// Summary: Failure classes for the provisioning CLI; every variant exits non-zero.

use thiserror::Error;

use crate::validate::{PASSWORD_MAX, PASSWORD_MIN, USERNAME_MAX, USERNAME_MIN};

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("usage: board-admin <username> <password>")]
    Usage,
    #[error("invalid username '{0}': must be {USERNAME_MIN}-{USERNAME_MAX} chars, alphanumeric plus '_', '-', '.'")]
    InvalidUsername(String),
    #[error("invalid password: must be {PASSWORD_MIN}-{PASSWORD_MAX} chars")]
    InvalidPassword,
    #[error("user '{0}' already exists")]
    DuplicateUser(String),
    #[error("storage error: {0}")]
    Db(#[from] rusqlite::Error),
}
