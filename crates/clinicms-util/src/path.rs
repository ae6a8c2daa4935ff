//! Path utilities.
//!
//! This module resolves where clinicms keeps its persisted content.

use std::path::PathBuf;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "CLINICMS_DATA_DIR";

/// Get the clinicms data directory.
///
/// Resolution order:
/// - `$CLINICMS_DATA_DIR` if set and non-empty
/// - `data/` relative to the process working directory otherwise
///
/// The site has always kept its JSON documents next to the deployment, so
/// the default stays process-relative rather than XDG-based.
pub fn data_dir() -> PathBuf {
    match std::env::var(DATA_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from("data"),
    }
}
