// File: crates/board-admin/src/lib.rs
// Summary: Admin provisioning logic; validate -> hash -> insert, surfaced to the CLI binary.

pub mod error;
pub mod hash;
pub mod store;
pub mod validate;

pub use error::AdminError;
pub use store::UserStore;

/// Create an admin user from positional CLI arguments.
/// A linear sequence with no retries: validate both arguments, reject a
/// duplicate username before hashing, then insert exactly one row.
pub fn create_admin(store: &UserStore, args: &[String]) -> Result<String, AdminError> {
    let (username, password) = match args {
        [username, password] => (username.as_str(), password.as_str()),
        _ => return Err(AdminError::Usage),
    };

    validate::validate_username(username)?;
    validate::validate_password(password)?;

    if store.username_exists(username)? {
        return Err(AdminError::DuplicateUser(username.to_string()));
    }

    let salt = hash::new_salt();
    let password_hash = hash::hash_password(&salt, password);
    store.insert_admin(username, &password_hash, &salt)?;

    Ok(format!("created admin user '{username}'"))
}
