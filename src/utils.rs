//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;

/// Per-user data directory (settings and logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// First line of a possibly multi-line command output, for compact display
pub fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("").trim()
}
