//! Message types for the controller (user gestures and request outcomes)

use crate::types::{DeviceListing, DisplayState, Mode, Reply, ToggleResult};

/// Result of a backend call as the reducer sees it: `Err` carries the
/// transport failure message, `Ok` whatever the backend answered.
pub type Outcome<T> = Result<Reply<T>, String>;

#[derive(Debug, Clone)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // User gestures
    // ─────────────────────────────────────────────────────────
    SwitchMode(Mode),
    ListDevices,
    SelectAll,
    DeselectAll,
    ToggleDevice { identifier: String, checked: bool },
    ConnectWireless,
    DisconnectWireless,
    EnableTcpip,
    ToggleDisplay(DisplayState),

    // ─────────────────────────────────────────────────────────
    // Internal follow-ups
    // ─────────────────────────────────────────────────────────
    /// Re-list after a connect/disconnect, keeping the log and wireless status
    RefreshDevices,

    // ─────────────────────────────────────────────────────────
    // Request outcomes
    // ─────────────────────────────────────────────────────────
    DevicesListed { seq: u64, result: Outcome<DeviceListing> },
    WirelessConnected { ip: String, result: Outcome<String> },
    /// Emitted right before each request of a disconnect batch
    DisconnectAttempt { identifier: String },
    DisconnectResult { identifier: String, result: Outcome<String> },
    DisconnectFinished,
    TcpipEnabled { identifier: String, result: Outcome<String> },
    DisplayToggled { state: DisplayState, result: Outcome<Vec<ToggleResult>> },
}
