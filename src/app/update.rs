//! Reducer: applies a [`Message`] to [`UiState`] and says what to do next

use super::message::{Message, Outcome};
use super::state::{DeviceRow, DisconnectTally, Notice, UiState};
use crate::constants::{ADB_NOT_FOUND_HINT, LISTING_FAILED_HINT};
use crate::types::*;
use tracing::{debug, info};

/// Network work requested by the reducer, run by the app shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ListDevices { mode: Mode, seq: u64 },
    ConnectWireless { ip: String },
    /// Sent one identifier at a time, each awaited before the next
    DisconnectWireless { identifiers: Vec<String> },
    EnableTcpip { identifier: String },
    ToggleDisplay { identifiers: Vec<String>, state: DisplayState },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Follow-up message to process immediately
    pub message: Option<Message>,
    /// Request to start
    pub effect: Option<Effect>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(message: Message) -> Self {
        Self { message: Some(message), effect: None }
    }

    pub fn effect(effect: Effect) -> Self {
        Self { message: None, effect: Some(effect) }
    }
}

pub fn update(state: &mut UiState, message: Message) -> UpdateResult {
    match message {
        Message::SwitchMode(mode) => {
            switch_mode(state, mode);
            UpdateResult::none()
        }
        Message::ListDevices => {
            state.clear_messages();
            state.rows.clear();
            state.log.clear();
            state.wireless_status = None;
            request_listing(state)
        }
        Message::RefreshDevices => {
            state.rows.clear();
            request_listing(state)
        }
        Message::SelectAll => {
            set_all_checked(state, true);
            UpdateResult::none()
        }
        Message::DeselectAll => {
            set_all_checked(state, false);
            UpdateResult::none()
        }
        Message::ToggleDevice { identifier, checked } => {
            if let Some(row) = state.rows.iter_mut().find(|r| r.device.identifier == identifier) {
                row.checked = checked;
            }
            UpdateResult::none()
        }
        Message::ConnectWireless => connect_wireless(state),
        Message::DisconnectWireless => disconnect_wireless(state),
        Message::EnableTcpip => enable_tcpip(state),
        Message::ToggleDisplay(display) => toggle_display(state, display),

        Message::DevicesListed { seq, result } => {
            handle_listing(state, seq, result);
            UpdateResult::none()
        }
        Message::WirelessConnected { ip, result } => handle_connected(state, ip, result),
        Message::DisconnectAttempt { identifier } => {
            state.append_log(format!("Attempting to disconnect {identifier}..."), false);
            UpdateResult::none()
        }
        Message::DisconnectResult { identifier, result } => {
            handle_disconnect_result(state, identifier, result);
            UpdateResult::none()
        }
        Message::DisconnectFinished => handle_disconnect_finished(state),
        Message::TcpipEnabled { identifier, result } => {
            handle_tcpip(state, identifier, result);
            UpdateResult::none()
        }
        Message::DisplayToggled { state: display_state, result } => {
            handle_display_toggled(state, display_state, result);
            UpdateResult::none()
        }
    }
}

// ============================================================================
// GESTURES
// ============================================================================

fn switch_mode(state: &mut UiState, mode: Mode) {
    info!(from = %state.mode, to = %mode, "Switching mode");
    state.mode = mode;
    // Any listing still in flight belongs to the old mode
    state.list_seq += 1;
    state.pending.listing = false;
    state.clear_transient();
}

fn request_listing(state: &mut UiState) -> UpdateResult {
    state.list_seq += 1;
    state.pending.listing = true;
    let mode = state.mode;
    state.append_log(format!("Listing devices in {mode} mode..."), false);
    UpdateResult::effect(Effect::ListDevices { mode, seq: state.list_seq })
}

fn set_all_checked(state: &mut UiState, checked: bool) {
    for row in &mut state.rows {
        row.checked = checked;
    }
}

fn connect_wireless(state: &mut UiState) -> UpdateResult {
    if state.pending.connecting {
        debug!("Connect already in flight");
        return UpdateResult::none();
    }
    state.clear_messages();
    state.wireless_status = None;

    let ip = state.ip_input.trim().to_string();
    if ip.is_empty() {
        state.wireless_status = Some(Notice::error("Please enter an IP address."));
        return UpdateResult::none();
    }

    state.wireless_status = Some(Notice::status(format!("Attempting to connect to {ip}...")));
    state.append_log(format!("Attempting adb connect {ip}..."), false);
    state.pending.connecting = true;
    UpdateResult::effect(Effect::ConnectWireless { ip })
}

fn disconnect_wireless(state: &mut UiState) -> UpdateResult {
    if state.pending.disconnecting {
        debug!("Disconnect already in flight");
        return UpdateResult::none();
    }
    state.clear_messages();
    state.wireless_status = None;

    let identifiers = state.checked_identifiers(Some(DeviceType::Wireless));
    if identifiers.is_empty() {
        state.show_error("No wireless devices selected for disconnection.");
        return UpdateResult::none();
    }

    info!(count = identifiers.len(), "Disconnecting wireless devices");
    state.pending.disconnecting = true;
    state.disconnect_tally = Some(DisconnectTally::default());
    UpdateResult::effect(Effect::DisconnectWireless { identifiers })
}

fn enable_tcpip(state: &mut UiState) -> UpdateResult {
    if state.pending.enabling_tcpip {
        debug!("TCP/IP enable already in flight");
        return UpdateResult::none();
    }
    state.clear_messages();
    state.wireless_status = None;

    if !state.tcpip_eligible() {
        state.show_error("Please select exactly ONE USB device to enable TCP/IP.");
        return UpdateResult::none();
    }
    let Some(identifier) = state.checked_identifiers(Some(DeviceType::Usb)).pop() else {
        return UpdateResult::none();
    };

    state.append_log(format!("Attempting to enable TCP/IP mode on {identifier}..."), false);
    state.pending.enabling_tcpip = true;
    UpdateResult::effect(Effect::EnableTcpip { identifier })
}

fn toggle_display(state: &mut UiState, display: DisplayState) -> UpdateResult {
    if state.pending.toggling {
        debug!("Display toggle already in flight");
        return UpdateResult::none();
    }
    state.clear_messages();
    state.log.clear();

    let identifiers = state.checked_identifiers(None);
    if identifiers.is_empty() {
        state.show_error("No devices selected. Please select at least one device.");
        return UpdateResult::none();
    }

    state.append_log(
        format!("Attempting to turn display {} for selected devices...", display.label()),
        false,
    );
    state.pending.toggling = true;
    UpdateResult::effect(Effect::ToggleDisplay { identifiers, state: display })
}

// ============================================================================
// OUTCOMES
// ============================================================================

fn network_error(message: &str) -> String {
    format!("Network or server error: {message}")
}

fn handle_listing(state: &mut UiState, seq: u64, result: Outcome<DeviceListing>) {
    if seq != state.list_seq {
        debug!(seq, current = state.list_seq, "Dropping stale device listing");
        return;
    }
    state.pending.listing = false;
    let mode = state.mode;

    match result {
        Ok(Reply::Ok(listing)) => {
            state.adb_status = Some(match listing.adb_path.filter(|p| !p.is_empty()) {
                Some(path) => Notice::status(format!("ADB executable found at: {path}")),
                None => Notice::error(ADB_NOT_FOUND_HINT),
            });

            if listing.devices.is_empty() {
                let text = format!("No {mode} devices found.");
                state.append_log(text.clone(), true);
                state.show_error(text);
            } else {
                state.show_success(format!("Found {} {mode} devices.", listing.devices.len()));
                state.rows = listing
                    .devices
                    .into_iter()
                    .map(|device| DeviceRow { device, checked: false })
                    .collect();
            }
        }
        Ok(Reply::Failed(error)) => {
            if error.is_empty() {
                state.show_error("Failed to list devices.");
                state.adb_status = Some(Notice::error(LISTING_FAILED_HINT));
            } else {
                state.show_error(error.clone());
                state.adb_status = Some(Notice::error(error));
            }
        }
        Err(message) => {
            let text = network_error(&message);
            state.show_error(text.clone());
            state.append_log(text, true);
        }
    }
}

fn handle_connected(state: &mut UiState, ip: String, result: Outcome<String>) -> UpdateResult {
    state.pending.connecting = false;
    match result {
        Ok(Reply::Ok(output)) => {
            state.wireless_status = Some(Notice::success(format!("Successfully connected to {ip}.")));
            state.append_log(format!("adb connect {ip} successful: {output}"), false);
            return UpdateResult::message(Message::RefreshDevices);
        }
        Ok(Reply::Failed(error)) => {
            state.wireless_status = Some(Notice::error(format!("Failed to connect: {error}")));
            state.append_log(format!("adb connect {ip} failed: {error}"), true);
        }
        Err(message) => {
            state.wireless_status = Some(Notice::error(network_error(&message)));
            state.append_log(
                format!("Network or server error during adb connect: {message}"),
                true,
            );
        }
    }
    UpdateResult::none()
}

fn handle_disconnect_result(state: &mut UiState, identifier: String, result: Outcome<String>) {
    let tally = state.disconnect_tally.get_or_insert_with(DisconnectTally::default);
    let (line, is_error) = match result {
        Ok(Reply::Ok(output)) => {
            tally.succeeded += 1;
            (format!("Successfully disconnected {identifier}: {output}"), false)
        }
        Ok(Reply::Failed(error)) => {
            tally.failed += 1;
            (format!("Failed to disconnect {identifier}: {error}"), true)
        }
        Err(message) => {
            tally.failed += 1;
            (
                format!("Network or server error during disconnect {identifier}: {message}"),
                true,
            )
        }
    };
    state.append_log(line, is_error);
}

fn handle_disconnect_finished(state: &mut UiState) -> UpdateResult {
    state.pending.disconnecting = false;
    let tally = state.disconnect_tally.unwrap_or_default();
    info!(succeeded = tally.succeeded, failed = tally.failed, "Disconnect batch finished");

    let mut result = UpdateResult::none();
    if tally.succeeded > 0 {
        state.show_success(format!("Disconnected {} device(s).", tally.succeeded));
        result = UpdateResult::message(Message::RefreshDevices);
    }
    if tally.failed > 0 {
        state.show_error(format!(
            "Failed to disconnect {} device(s). Check log for details.",
            tally.failed
        ));
    }
    result
}

fn handle_tcpip(state: &mut UiState, identifier: String, result: Outcome<String>) {
    state.pending.enabling_tcpip = false;
    match result {
        Ok(Reply::Ok(output)) => {
            state.wireless_status = Some(Notice::success(format!(
                "TCP/IP mode enabled on {identifier}. You can now disconnect USB and connect wirelessly via its IP."
            )));
            state.append_log(format!("TCP/IP enabled for {identifier}: {output}"), false);
        }
        Ok(Reply::Failed(error)) => {
            state.wireless_status = Some(Notice::error(format!(
                "Failed to enable TCP/IP on {identifier}: {error}"
            )));
            state.append_log(format!("Failed to enable TCP/IP for {identifier}: {error}"), true);
        }
        Err(message) => {
            state.wireless_status = Some(Notice::error(network_error(&message)));
            state.append_log(
                format!("Network or server error during TCP/IP enable: {message}"),
                true,
            );
        }
    }
}

fn handle_display_toggled(
    state: &mut UiState,
    display_state: DisplayState,
    result: Outcome<Vec<ToggleResult>>,
) {
    state.pending.toggling = false;
    match result {
        Ok(Reply::Ok(results)) => {
            info!(state = display_state.label(), devices = results.len(), "Display toggle sent");
            state.show_success("Display toggle commands sent successfully!");
            for r in results {
                if r.success {
                    let output = r
                        .output
                        .filter(|o| !o.is_empty())
                        .unwrap_or_else(|| "No specific output.".to_string());
                    state.append_log(
                        format!("[{}] Display toggled. Output: {output}", r.identifier),
                        false,
                    );
                } else {
                    state.append_log(
                        format!(
                            "[{}] Failed to toggle display. Error: {}",
                            r.identifier,
                            r.error.unwrap_or_default()
                        ),
                        true,
                    );
                }
            }
        }
        Ok(Reply::Failed(error)) => {
            let text = if error.is_empty() {
                "Failed to send toggle commands.".to_string()
            } else {
                error
            };
            state.show_error(text.clone());
            state.append_log(format!("Global error: {text}"), true);
        }
        Err(message) => {
            let text = network_error(&message);
            state.show_error(text.clone());
            state.append_log(text, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{LogLine, NoticeKind};

    fn listing(ids: &[&str]) -> Outcome<DeviceListing> {
        Ok(Reply::Ok(DeviceListing {
            adb_path: Some("/usr/bin/adb".into()),
            devices: ids.iter().map(|id| Device::new(*id)).collect(),
        }))
    }

    /// Runs a list request to completion with the given devices
    fn listed(mode: Mode, ids: &[&str]) -> UiState {
        let mut state = UiState::new();
        update(&mut state, Message::SwitchMode(mode));
        let effect = update(&mut state, Message::ListDevices).effect;
        let Some(Effect::ListDevices { seq, .. }) = effect else {
            panic!("expected a listing effect");
        };
        update(&mut state, Message::DevicesListed { seq, result: listing(ids) });
        state
    }

    fn banner(state: &UiState) -> (NoticeKind, &str) {
        let n = state.banner.as_ref().expect("banner set");
        (n.kind, n.text.as_str())
    }

    #[test]
    fn switching_mode_clears_everything() {
        let mut state = listed(Mode::Wireless, &["10.0.0.2:5555"]);
        state.ip_input = "10.0.0.9".into();
        state.wireless_status = Some(Notice::success("ok"));
        assert!(!state.rows.is_empty());
        assert!(!state.log.is_empty());

        let result = update(&mut state, Message::SwitchMode(Mode::Usb));

        assert!(result.effect.is_none(), "mode switch makes no request");
        assert_eq!(state.mode, Mode::Usb);
        assert!(state.rows.is_empty());
        assert!(state.log.is_empty());
        assert!(state.banner.is_none());
        assert!(state.adb_status.is_none());
        assert!(state.wireless_status.is_none());
        assert!(state.ip_input.is_empty());
    }

    #[test]
    fn switching_to_the_same_mode_still_clears() {
        let mut state = listed(Mode::Wireless, &["10.0.0.2:5555"]);
        update(&mut state, Message::SwitchMode(Mode::Wireless));
        assert!(state.rows.is_empty());
        assert!(state.log.is_empty());
    }

    #[test]
    fn list_request_carries_current_mode() {
        let mut state = UiState::new();
        update(&mut state, Message::SwitchMode(Mode::Usb));
        let result = update(&mut state, Message::ListDevices);
        assert_eq!(
            result.effect,
            Some(Effect::ListDevices { mode: Mode::Usb, seq: state.list_seq })
        );
        assert!(state.pending.listing);
        assert_eq!(state.log_text(), vec!["Listing devices in usb mode..."]);
    }

    #[test]
    fn listing_renders_rows_and_adb_path() {
        let state = listed(Mode::Usb, &["SERIAL1", "SERIAL2"]);
        assert_eq!(state.rows.len(), 2);
        assert!(state.rows.iter().all(|r| !r.checked));
        assert_eq!(banner(&state), (NoticeKind::Success, "Found 2 usb devices."));
        assert_eq!(
            state.adb_status,
            Some(Notice::status("ADB executable found at: /usr/bin/adb"))
        );
        assert!(!state.pending.listing);
    }

    #[test]
    fn empty_listing_is_an_error_without_rows() {
        let state = listed(Mode::Wireless, &[]);
        assert!(state.rows.is_empty());
        assert_eq!(banner(&state), (NoticeKind::Error, "No wireless devices found."));
        let last: &LogLine = state.log.last().unwrap();
        assert!(last.is_error);
        assert_eq!(last.text, "No wireless devices found.");
    }

    #[test]
    fn listing_without_adb_path_shows_hint() {
        let mut state = UiState::new();
        let Some(Effect::ListDevices { seq, .. }) = update(&mut state, Message::ListDevices).effect
        else {
            panic!("expected listing");
        };
        let result = Ok(Reply::Ok(DeviceListing { adb_path: None, devices: vec![] }));
        update(&mut state, Message::DevicesListed { seq, result });
        assert_eq!(state.adb_status, Some(Notice::error(ADB_NOT_FOUND_HINT)));
    }


    #[test]
    fn listing_with_empty_adb_path_shows_hint() {
        let mut state = UiState::new();
        update(&mut state, Message::ListDevices);
        let seq = state.list_seq;
        let result = Ok(Reply::Ok(DeviceListing {
            adb_path: Some(String::new()),
            devices: vec![Device::new("SERIAL1")],
        }));
        update(&mut state, Message::DevicesListed { seq, result });
        assert_eq!(state.adb_status, Some(Notice::error(ADB_NOT_FOUND_HINT)));
    }

    #[test]
    fn listing_failure_shows_backend_error_verbatim() {
        let mut state = UiState::new();
        update(&mut state, Message::ListDevices);
        let seq = state.list_seq;
        update(
            &mut state,
            Message::DevicesListed {
                seq,
                result: Ok(Reply::Failed("Error executing adb: boom".into())),
            },
        );
        assert_eq!(banner(&state), (NoticeKind::Error, "Error executing adb: boom"));
        assert_eq!(state.adb_status, Some(Notice::error("Error executing adb: boom")));
    }


    #[test]
    fn listing_failure_without_text_uses_fallbacks() {
        let mut state = UiState::new();
        update(&mut state, Message::ListDevices);
        let seq = state.list_seq;
        update(
            &mut state,
            Message::DevicesListed { seq, result: Ok(Reply::Failed(String::new())) },
        );
        assert_eq!(banner(&state), (NoticeKind::Error, "Failed to list devices."));
        assert_eq!(
            state.adb_status,
            Some(Notice::error("Failed to list devices. Check console for details."))
        );
        assert!(!state.pending.listing);
    }

    #[test]
    fn listing_transport_failure_is_logged() {
        let mut state = UiState::new();
        update(&mut state, Message::ListDevices);
        let seq = state.list_seq;
        update(
            &mut state,
            Message::DevicesListed { seq, result: Err("connection refused".into()) },
        );
        assert_eq!(
            banner(&state),
            (NoticeKind::Error, "Network or server error: connection refused")
        );
        assert!(state.log.last().unwrap().is_error);
    }

    #[test]
    fn stale_listing_after_mode_switch_is_dropped() {
        let mut state = UiState::new();
        update(&mut state, Message::ListDevices);
        let old_seq = state.list_seq;
        update(&mut state, Message::SwitchMode(Mode::Usb));

        update(
            &mut state,
            Message::DevicesListed { seq: old_seq, result: listing(&["10.0.0.2:5555"]) },
        );
        assert!(state.rows.is_empty());
        assert!(state.banner.is_none());
    }

    #[test]
    fn select_and_deselect_all() {
        let mut state = listed(Mode::Usb, &["A", "B"]);
        update(&mut state, Message::SelectAll);
        assert_eq!(state.checked_count(), 2);
        assert!(!state.tcpip_eligible());

        update(&mut state, Message::DeselectAll);
        assert_eq!(state.checked_count(), 0);

        update(&mut state, Message::ToggleDevice { identifier: "B".into(), checked: true });
        assert!(state.tcpip_eligible());
        assert_eq!(state.checked_identifiers(None), vec!["B".to_string()]);
    }

    #[test]
    fn connect_requires_an_ip() {
        let mut state = UiState::new();
        state.ip_input = "   ".into();
        let result = update(&mut state, Message::ConnectWireless);
        assert!(result.effect.is_none());
        assert_eq!(state.wireless_status, Some(Notice::error("Please enter an IP address.")));
        assert!(state.log.is_empty());
    }

    #[test]
    fn connect_success_triggers_refresh_that_keeps_the_log() {
        let mut state = UiState::new();
        state.ip_input = " 192.168.1.20 ".into();
        let result = update(&mut state, Message::ConnectWireless);
        assert_eq!(
            result.effect,
            Some(Effect::ConnectWireless { ip: "192.168.1.20".into() })
        );
        assert!(state.pending.connecting);

        let follow = update(
            &mut state,
            Message::WirelessConnected {
                ip: "192.168.1.20".into(),
                result: Ok(Reply::Ok("connected to 192.168.1.20:5555".into())),
            },
        );
        assert!(!state.pending.connecting);
        assert!(matches!(follow.message, Some(Message::RefreshDevices)));
        assert_eq!(
            state.wireless_status,
            Some(Notice::success("Successfully connected to 192.168.1.20."))
        );

        let refresh = update(&mut state, Message::RefreshDevices);
        assert!(matches!(refresh.effect, Some(Effect::ListDevices { .. })));
        assert!(state.wireless_status.is_some());
        assert_eq!(
            state.log_text(),
            vec![
                "Attempting adb connect 192.168.1.20...",
                "adb connect 192.168.1.20 successful: connected to 192.168.1.20:5555",
                "Listing devices in wireless mode...",
            ]
        );
    }

    #[test]
    fn connect_failure_shows_backend_text() {
        let mut state = UiState::new();
        state.ip_input = "10.0.0.1".into();
        update(&mut state, Message::ConnectWireless);
        let follow = update(
            &mut state,
            Message::WirelessConnected {
                ip: "10.0.0.1".into(),
                result: Ok(Reply::Failed("Unable to connect to device.".into())),
            },
        );
        assert!(follow.message.is_none());
        assert_eq!(
            state.wireless_status,
            Some(Notice::error("Failed to connect: Unable to connect to device."))
        );
    }


    #[test]
    fn connect_transport_failure_is_logged() {
        let mut state = UiState::new();
        state.ip_input = "10.0.0.1".into();
        update(&mut state, Message::ConnectWireless);
        let follow = update(
            &mut state,
            Message::WirelessConnected {
                ip: "10.0.0.1".into(),
                result: Err("connection refused".into()),
            },
        );
        assert!(follow.message.is_none());
        assert!(!state.pending.connecting);
        assert_eq!(
            state.wireless_status,
            Some(Notice::error("Network or server error: connection refused"))
        );
        let last = state.log.last().unwrap();
        assert!(last.is_error);
        assert_eq!(last.text, "Network or server error during adb connect: connection refused");
    }

    #[test]
    fn disconnect_without_wireless_selection_makes_no_request() {
        let mut state = listed(Mode::Usb, &["SERIAL1"]);
        update(&mut state, Message::SelectAll);
        let result = update(&mut state, Message::DisconnectWireless);
        assert!(result.effect.is_none());
        assert!(!state.pending.disconnecting);
        assert_eq!(
            banner(&state),
            (NoticeKind::Error, "No wireless devices selected for disconnection.")
        );
    }

    #[test]
    fn disconnect_tallies_each_identifier() {
        let ids = ["10.0.0.1:5555", "10.0.0.2:5555", "10.0.0.3:5555"];
        let mut state = listed(Mode::Wireless, &ids);
        update(&mut state, Message::SelectAll);

        let result = update(&mut state, Message::DisconnectWireless);
        assert_eq!(
            result.effect,
            Some(Effect::DisconnectWireless {
                identifiers: ids.iter().map(|s| s.to_string()).collect()
            })
        );

        let outcomes: [Outcome<String>; 3] = [
            Ok(Reply::Ok("disconnected".into())),
            Err("error decoding response body".into()),
            Ok(Reply::Ok("disconnected".into())),
        ];
        for (id, outcome) in ids.iter().zip(outcomes) {
            update(&mut state, Message::DisconnectAttempt { identifier: id.to_string() });
            update(
                &mut state,
                Message::DisconnectResult { identifier: id.to_string(), result: outcome },
            );
        }
        let finished = update(&mut state, Message::DisconnectFinished);

        assert_eq!(state.disconnect_tally, Some(DisconnectTally { succeeded: 2, failed: 1 }));
        assert!(matches!(finished.message, Some(Message::RefreshDevices)));
        assert_eq!(
            banner(&state),
            (
                NoticeKind::Error,
                "Failed to disconnect 1 device(s). Check log for details."
            )
        );
        assert!(!state.pending.disconnecting);
    }

    #[test]
    fn tcpip_rejects_wrong_selection() {
        let mut state = listed(Mode::Usb, &["A", "B"]);
        update(&mut state, Message::SelectAll);
        let result = update(&mut state, Message::EnableTcpip);
        assert!(result.effect.is_none());
        assert_eq!(
            banner(&state),
            (NoticeKind::Error, "Please select exactly ONE USB device to enable TCP/IP.")
        );
    }

    #[test]
    fn tcpip_success_updates_wireless_status() {
        let mut state = listed(Mode::Usb, &["A"]);
        update(&mut state, Message::SelectAll);
        let result = update(&mut state, Message::EnableTcpip);
        assert_eq!(result.effect, Some(Effect::EnableTcpip { identifier: "A".into() }));

        update(
            &mut state,
            Message::TcpipEnabled {
                identifier: "A".into(),
                result: Ok(Reply::Ok("restarting in TCP mode port: 5555".into())),
            },
        );
        let status = state.wireless_status.as_ref().unwrap();
        assert_eq!(status.kind, NoticeKind::Success);
        assert!(status.text.starts_with("TCP/IP mode enabled on A."));
        assert!(!state.pending.enabling_tcpip);
    }


    #[test]
    fn tcpip_backend_failure_shows_error() {
        let mut state = listed(Mode::Usb, &["A"]);
        update(&mut state, Message::SelectAll);
        update(&mut state, Message::EnableTcpip);
        update(
            &mut state,
            Message::TcpipEnabled {
                identifier: "A".into(),
                result: Ok(Reply::Failed("error: device offline".into())),
            },
        );
        assert!(!state.pending.enabling_tcpip);
        assert_eq!(
            state.wireless_status,
            Some(Notice::error("Failed to enable TCP/IP on A: error: device offline"))
        );
        let last = state.log.last().unwrap();
        assert!(last.is_error);
        assert_eq!(last.text, "Failed to enable TCP/IP for A: error: device offline");
    }

    #[test]
    fn tcpip_transport_failure_is_logged() {
        let mut state = listed(Mode::Usb, &["A"]);
        update(&mut state, Message::SelectAll);
        update(&mut state, Message::EnableTcpip);
        update(
            &mut state,
            Message::TcpipEnabled { identifier: "A".into(), result: Err("timed out".into()) },
        );
        assert_eq!(
            state.wireless_status,
            Some(Notice::error("Network or server error: timed out"))
        );
        let last = state.log.last().unwrap();
        assert!(last.is_error);
        assert_eq!(last.text, "Network or server error during TCP/IP enable: timed out");
    }

    #[test]
    fn toggle_requires_a_selection() {
        let mut state = listed(Mode::Usb, &["A"]);
        let result = update(&mut state, Message::ToggleDisplay(DisplayState::On));
        assert!(result.effect.is_none());
        assert_eq!(
            banner(&state),
            (NoticeKind::Error, "No devices selected. Please select at least one device.")
        );
    }

    #[test]
    fn toggle_state_maps_to_off_and_on_in_log() {
        for (display, label) in [(DisplayState::Off, "OFF"), (DisplayState::On, "ON")] {
            let mut state = listed(Mode::Wireless, &["10.0.0.2:5555"]);
            update(&mut state, Message::SelectAll);
            let result = update(&mut state, Message::ToggleDisplay(display));
            assert_eq!(
                result.effect,
                Some(Effect::ToggleDisplay {
                    identifiers: vec!["10.0.0.2:5555".into()],
                    state: display,
                })
            );
            assert_eq!(
                state.log_text(),
                vec![format!("Attempting to turn display {label} for selected devices...")]
            );
        }
    }

    #[test]
    fn toggle_results_are_itemized() {
        let mut state = listed(Mode::Usb, &["A", "B"]);
        update(&mut state, Message::SelectAll);
        update(&mut state, Message::ToggleDisplay(DisplayState::Off));
        update(
            &mut state,
            Message::DisplayToggled {
                state: DisplayState::Off,
                result: Ok(Reply::Ok(vec![
                    ToggleResult::ok("A", ""),
                    ToggleResult::failed("B", "Failed to push DEX: no space"),
                ])),
            },
        );
        assert_eq!(
            banner(&state),
            (NoticeKind::Success, "Display toggle commands sent successfully!")
        );
        let lines = state.log_text();
        assert_eq!(lines[1], "[A] Display toggled. Output: No specific output.");
        assert_eq!(lines[2], "[B] Failed to toggle display. Error: Failed to push DEX: no space");
        assert!(state.log[2].is_error);
    }

    #[test]
    fn toggle_global_failure() {
        let mut state = listed(Mode::Usb, &["A"]);
        update(&mut state, Message::SelectAll);
        update(&mut state, Message::ToggleDisplay(DisplayState::On));
        update(
            &mut state,
            Message::DisplayToggled { state: DisplayState::On, result: Ok(Reply::Failed(String::new())) },
        );
        assert_eq!(banner(&state), (NoticeKind::Error, "Failed to send toggle commands."));
        assert_eq!(
            state.log.last().map(|l| l.text.as_str()),
            Some("Global error: Failed to send toggle commands.")
        );
    }


    #[test]
    fn toggle_transport_failure_is_logged() {
        let mut state = listed(Mode::Usb, &["A"]);
        update(&mut state, Message::SelectAll);
        update(&mut state, Message::ToggleDisplay(DisplayState::Off));
        update(
            &mut state,
            Message::DisplayToggled { state: DisplayState::Off, result: Err("connection reset".into()) },
        );
        assert!(!state.pending.toggling);
        assert_eq!(
            banner(&state),
            (NoticeKind::Error, "Network or server error: connection reset")
        );
        let last = state.log.last().unwrap();
        assert!(last.is_error);
        assert_eq!(last.text, "Network or server error: connection reset");
    }

    #[test]
    fn in_flight_control_ignores_repeat_clicks() {
        let mut state = listed(Mode::Usb, &["A"]);
        update(&mut state, Message::SelectAll);
        assert!(update(&mut state, Message::ToggleDisplay(DisplayState::On)).effect.is_some());
        assert!(update(&mut state, Message::ToggleDisplay(DisplayState::On)).effect.is_none());
    }
}
