// File: crates/board-admin/src/validate.rs
// Summary: Argument validation bounds for usernames and passwords.

use crate::error::AdminError;

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 32;
pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 72;

/// Usernames are 3-32 chars of ASCII alphanumerics plus `_`, `-`, `.`.
pub fn validate_username(username: &str) -> Result<(), AdminError> {
    let len = username.chars().count();
    let charset_ok = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if len < USERNAME_MIN || len > USERNAME_MAX || !charset_ok {
        return Err(AdminError::InvalidUsername(username.to_string()));
    }
    Ok(())
}

/// Passwords are 8-72 chars; content is otherwise unrestricted.
pub fn validate_password(password: &str) -> Result<(), AdminError> {
    let len = password.chars().count();
    if len < PASSWORD_MIN || len > PASSWORD_MAX {
        return Err(AdminError::InvalidPassword);
    }
    Ok(())
}
