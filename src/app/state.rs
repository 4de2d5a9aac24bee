//! UI state owned by the update loop
//!
//! Nothing in here talks to the network or to egui. The reducer in
//! `update.rs` is the only writer; the views only read.

use crate::constants::ADB_STATUS_PROMPT;
use crate::types::{Device, DeviceType, Mode};
use chrono::{DateTime, Local};
use tracing::{error, info};

/// Visual style of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Status,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn status(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Status, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

/// One rendered device row. `checked` doubles as the row highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRow {
    pub device: Device,
    pub checked: bool,
}

#[derive(Debug, Clone)]
pub struct LogLine {
    pub at: DateTime<Local>,
    pub text: String,
    pub is_error: bool,
}

impl LogLine {
    pub fn render(&self) -> String {
        format!("[{}] {}", self.at.format("%H:%M:%S"), self.text)
    }
}

/// Which controls currently have a request in flight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pending {
    pub listing: bool,
    pub connecting: bool,
    pub disconnecting: bool,
    pub enabling_tcpip: bool,
    pub toggling: bool,
}

/// Running success/failure count of a disconnect batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisconnectTally {
    pub succeeded: usize,
    pub failed: usize,
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub mode: Mode,
    /// Bumped by every list request and every mode switch; only the listing
    /// response carrying the current value is applied.
    pub list_seq: u64,
    pub rows: Vec<DeviceRow>,
    pub ip_input: String,
    /// Global success/error line
    pub banner: Option<Notice>,
    pub adb_status: Option<Notice>,
    /// Status line of the wireless connect / TCP/IP section
    pub wireless_status: Option<Notice>,
    pub log: Vec<LogLine>,
    pub pending: Pending,
    pub disconnect_tally: Option<DisconnectTally>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            mode: Mode::default(),
            list_seq: 0,
            rows: Vec::new(),
            ip_input: String::new(),
            banner: None,
            adb_status: Some(Notice::status(ADB_STATUS_PROMPT)),
            wireless_status: None,
            log: Vec::new(),
            pending: Pending::default(),
            disconnect_tally: None,
        }
    }

    // ------------------------------------------------------------------
    // Selection (derived from row state every time)
    // ------------------------------------------------------------------

    pub fn checked_devices(&self) -> impl Iterator<Item = &Device> {
        self.rows.iter().filter(|r| r.checked).map(|r| &r.device)
    }

    pub fn checked_identifiers(&self, device_type: Option<DeviceType>) -> Vec<String> {
        self.checked_devices()
            .filter(|d| device_type.map_or(true, |t| d.device_type == t))
            .map(|d| d.identifier.clone())
            .collect()
    }

    pub fn checked_count(&self) -> usize {
        self.checked_devices().count()
    }

    /// "Enable TCP/IP" is allowed only in USB mode with exactly one USB device checked.
    pub fn tcpip_eligible(&self) -> bool {
        self.mode == Mode::Usb
            && self
                .checked_devices()
                .filter(|d| d.device_type == DeviceType::Usb)
                .count()
                == 1
    }

    // ------------------------------------------------------------------
    // Status helpers
    // ------------------------------------------------------------------

    pub fn clear_messages(&mut self) {
        self.banner = None;
    }

    pub fn show_error(&mut self, text: impl Into<String>) {
        let text = text.into();
        error!(message = %text, "Shown error");
        self.banner = Some(Notice::error(text));
    }

    pub fn show_success(&mut self, text: impl Into<String>) {
        let text = text.into();
        info!(message = %text, "Shown success");
        self.banner = Some(Notice::success(text));
    }

    pub fn append_log(&mut self, text: impl Into<String>, is_error: bool) {
        let text = text.into();
        if is_error {
            error!(target: "adb_controller::log_pane", "{text}");
        } else {
            info!(target: "adb_controller::log_pane", "{text}");
        }
        self.log.push(LogLine {
            at: Local::now(),
            text,
            is_error,
        });
    }

    /// Everything a mode switch wipes
    pub fn clear_transient(&mut self) {
        self.rows.clear();
        self.log.clear();
        self.banner = None;
        self.adb_status = None;
        self.wireless_status = None;
        self.ip_input.clear();
    }

    pub fn log_text(&self) -> Vec<String> {
        self.log.iter().map(|l| l.text.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(identifier: &str, checked: bool) -> DeviceRow {
        DeviceRow {
            device: Device::new(identifier),
            checked,
        }
    }

    #[test]
    fn starts_in_wireless_mode_with_prompt() {
        let state = UiState::new();
        assert_eq!(state.mode, Mode::Wireless);
        assert_eq!(
            state.adb_status.as_ref().map(|n| n.kind),
            Some(NoticeKind::Status)
        );
        assert!(state.rows.is_empty());
    }

    #[test]
    fn tcpip_requires_usb_mode_and_exactly_one_usb_device() {
        let mut state = UiState::new();
        state.rows = vec![row("SERIAL1", true)];
        assert!(!state.tcpip_eligible(), "wireless mode never allows it");

        state.mode = Mode::Usb;
        assert!(state.tcpip_eligible());

        state.rows[0].checked = false;
        assert!(!state.tcpip_eligible(), "zero checked");

        state.rows = vec![row("SERIAL1", true), row("SERIAL2", true)];
        assert!(!state.tcpip_eligible(), "two checked");

        state.rows = vec![row("SERIAL1", true), row("10.0.0.2:5555", true)];
        assert!(state.tcpip_eligible(), "wireless rows do not count");
    }

    #[test]
    fn checked_identifiers_filter_by_type() {
        let mut state = UiState::new();
        state.rows = vec![
            row("SERIAL1", true),
            row("10.0.0.2:5555", true),
            row("10.0.0.3:5555", false),
        ];
        assert_eq!(
            state.checked_identifiers(Some(DeviceType::Wireless)),
            vec!["10.0.0.2:5555".to_string()]
        );
        assert_eq!(state.checked_identifiers(None).len(), 2);
    }

    #[test]
    fn log_line_renders_with_timestamp() {
        let mut state = UiState::new();
        state.append_log("hello", false);
        let rendered = state.log[0].render();
        assert!(rendered.starts_with('['));
        assert!(rendered.ends_with("] hello"));
    }
}
