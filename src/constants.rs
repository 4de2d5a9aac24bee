//! Application constants and configuration

pub const APP_NAME: &str = "ADB Controller";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Port adb uses for network debugging when none is given
pub const DEFAULT_ADB_PORT: u16 = 5555;

/// Display helper pushed to devices before toggling the screen
pub const DEX_FILE_NAME: &str = "DisplayToggle.dex";
pub const DEX_REMOTE_PATH: &str = "/storage/emulated/0/DisplayToggle.dex";

pub const LISTING_FAILED_HINT: &str = "Failed to list devices. Check console for details.";
pub const ADB_NOT_FOUND_HINT: &str = "ADB executable not found. Please ensure it's in your system PATH or set the ADB_PATH environment variable.";
pub const ADB_STATUS_PROMPT: &str = "Click 'List Devices' to find connected devices. Ensure ADB is in your system PATH or ADB_PATH env variable is set.";
