// File: crates/board-admin/src/main.rs
// Summary: CLI entry point; maps the provisioning result onto exit codes 0/1.

use std::path::PathBuf;

use board_admin::{create_admin, AdminError, UserStore};

fn db_path() -> PathBuf {
    std::env::var_os("BOARD_ADMIN_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("board-admin.sqlite3"))
}

fn run(args: &[String]) -> Result<String, AdminError> {
    let store = UserStore::open(&db_path())?;
    create_admin(&store, args)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(message) => println!("{message}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
