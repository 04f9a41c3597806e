//! Shared environment configuration for the server binary.
//!
//! Consolidates `PACDLE_BASE_PATH` and `PACDLE_PORT` reads.

use std::path::PathBuf;

/// Read `PACDLE_BASE_PATH` (default `"."`) and chdir there. Exits on failure.
pub fn init_base_path() -> PathBuf {
    let base_path = std::env::var("PACDLE_BASE_PATH").unwrap_or_else(|_| ".".to_string());
    let path = PathBuf::from(&base_path);
    if std::env::set_current_dir(&base_path).is_err() {
        eprintln!("Failed to change directory to {}", base_path);
        std::process::exit(1);
    }
    if let Ok(cwd) = std::env::current_dir() {
        tracing::info!(cwd = %cwd.display(), "working directory set");
    }
    path
}

/// Read `PACDLE_PORT` (default 8080).
pub fn server_port() -> u16 {
    std::env::var("PACDLE_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080)
}
