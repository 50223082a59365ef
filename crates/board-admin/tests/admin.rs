// File: crates/board-admin/tests/admin.rs
// Purpose: Validate the provisioning sequence against an in-memory store.

use board_admin::hash::hash_password;
use board_admin::{create_admin, AdminError, UserStore};

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn one_argument_is_a_usage_error() {
    let store = UserStore::open_in_memory().unwrap();
    let err = create_admin(&store, &args(&["alice"])).unwrap_err();
    assert!(matches!(err, AdminError::Usage));
    assert_eq!(store.user_count().unwrap(), 0);
}

#[test]
fn three_arguments_are_a_usage_error() {
    let store = UserStore::open_in_memory().unwrap();
    let err = create_admin(&store, &args(&["alice", "s3cret-passw0rd", "extra"])).unwrap_err();
    assert!(matches!(err, AdminError::Usage));
}

#[test]
fn username_bounds_and_charset() {
    let store = UserStore::open_in_memory().unwrap();
    for bad in ["ab", "a".repeat(33).as_str(), "al ice", "al/ice"] {
        let err = create_admin(&store, &args(&[bad, "s3cret-passw0rd"])).unwrap_err();
        assert!(matches!(err, AdminError::InvalidUsername(_)), "accepted {bad:?}");
    }
    assert_eq!(store.user_count().unwrap(), 0);
}

#[test]
fn password_length_bounds() {
    let store = UserStore::open_in_memory().unwrap();
    let short = create_admin(&store, &args(&["alice", "short"])).unwrap_err();
    assert!(matches!(short, AdminError::InvalidPassword));

    let long = "x".repeat(73);
    let too_long = create_admin(&store, &args(&["alice", long.as_str()])).unwrap_err();
    assert!(matches!(too_long, AdminError::InvalidPassword));
    assert_eq!(store.user_count().unwrap(), 0);
}

#[test]
fn success_inserts_one_admin_row() {
    let store = UserStore::open_in_memory().unwrap();
    let message = create_admin(&store, &args(&["alice", "s3cret-passw0rd"])).unwrap();
    assert!(message.contains("alice"));
    assert_eq!(store.user_count().unwrap(), 1);
    assert!(store.username_exists("alice").unwrap());

    // digest is salted, never the raw password, and re-derivable from the salt
    let (stored_hash, salt) = store.credentials("alice").unwrap().unwrap();
    assert_ne!(stored_hash, "s3cret-passw0rd");
    assert_eq!(stored_hash, hash_password(&salt, "s3cret-passw0rd"));
}

#[test]
fn duplicate_username_leaves_store_unmutated() {
    let store = UserStore::open_in_memory().unwrap();
    create_admin(&store, &args(&["alice", "s3cret-passw0rd"])).unwrap();
    let (hash_before, salt_before) = store.credentials("alice").unwrap().unwrap();

    let err = create_admin(&store, &args(&["alice", "another-passw0rd"])).unwrap_err();
    assert!(matches!(err, AdminError::DuplicateUser(_)));
    assert_eq!(store.user_count().unwrap(), 1);

    let (hash_after, salt_after) = store.credentials("alice").unwrap().unwrap();
    assert_eq!((hash_before, salt_before), (hash_after, salt_after));
}

#[test]
fn salts_differ_between_users() {
    let store = UserStore::open_in_memory().unwrap();
    create_admin(&store, &args(&["alice", "s3cret-passw0rd"])).unwrap();
    create_admin(&store, &args(&["bob.trader", "s3cret-passw0rd"])).unwrap();
    let (hash_a, salt_a) = store.credentials("alice").unwrap().unwrap();
    let (hash_b, salt_b) = store.credentials("bob.trader").unwrap().unwrap();
    assert_ne!(salt_a, salt_b);
    assert_ne!(hash_a, hash_b);
}
