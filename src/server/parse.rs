//! Interpreting `adb` output
//!
//! adb reports most outcomes as free text on stdout/stderr with a zero exit
//! code, so success is decided by looking for known phrases.

use super::adb::CommandOutput;
use crate::constants::DEFAULT_ADB_PORT;
use crate::types::Device;

/// `adb devices` prints this on stderr when it had to start the server first
pub fn is_daemon_notice(stderr: &str) -> bool {
    stderr.contains("daemon not running; starting now")
}

/// Online devices from `adb devices -l` output, in listing order.
///
/// Offline, unauthorized and other non-ready entries are skipped.
pub fn parse_devices(output: &str) -> Vec<Device> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with("List of devices attached"))
        .filter(|line| !line.starts_with('*'))
        .filter_map(|line| {
            let mut tokens = line.split_whitespace();
            let identifier = tokens.next()?;
            let state = tokens.next()?;
            if state != "device" {
                return None;
            }
            let mut device = Device::new(identifier);
            device.properties = tokens.collect::<Vec<_>>().join(" ");
            Some(device)
        })
        .collect()
}

/// Append the default adb port when the address has none
pub fn with_default_port(address: &str) -> String {
    let address = address.trim();
    if address.contains(':') {
        address.to_string()
    } else {
        format!("{address}:{DEFAULT_ADB_PORT}")
    }
}

pub fn connect_outcome(out: &CommandOutput) -> Result<String, String> {
    if out.stdout.contains("connected to") || out.stdout.contains("already connected") {
        Ok(out.stdout.clone())
    } else if out.stdout.contains("unable to connect") || out.stderr.contains("unable to connect") {
        Err("Unable to connect to device. Ensure IP is correct, ADB debugging is enabled, and device is reachable.".to_string())
    } else if !out.stderr.is_empty() {
        Err(out.stderr.clone())
    } else {
        Err("Unknown error during connection.".to_string())
    }
}

pub fn disconnect_outcome(out: &CommandOutput) -> Result<String, String> {
    if out.stdout.contains("disconnected") {
        Ok(out.stdout.clone())
    } else if !out.stderr.is_empty() {
        Err(out.stderr.clone())
    } else {
        Err("Unknown error during disconnection.".to_string())
    }
}

pub fn tcpip_outcome(out: &CommandOutput) -> Result<String, String> {
    if out.stdout.contains("restarting in TCP mode") {
        Ok(out.stdout.clone())
    } else if !out.stderr.is_empty() {
        Err(out.stderr.clone())
    } else {
        Err("Unknown error when enabling TCP/IP mode.".to_string())
    }
}

/// `adb push` writes its progress summary to stderr even on success
pub fn push_outcome(out: &CommandOutput) -> Result<(), String> {
    let stderr = &out.stderr;
    let benign = ["file pushed", "transferred", "skipped"];
    if stderr.is_empty() || benign.iter().any(|m| stderr.contains(m)) {
        Ok(())
    } else {
        Err(format!("Error pushing DEX file: {stderr}"))
    }
}

/// Anything on stderr from the display helper is a failure
pub fn shell_outcome(out: &CommandOutput) -> Result<String, String> {
    if out.stderr.is_empty() {
        Ok(out.stdout.clone())
    } else {
        Err(out.stderr.clone())
    }
}
