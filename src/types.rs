//! Common types and the JSON wire format shared by the client and the backend

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which family of devices the controller is working with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Wireless,
    Usb,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Wireless => "wireless",
            Mode::Usb => "usb",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a device is attached to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Usb,
    Wireless,
}

impl DeviceType {
    /// Network devices are listed by adb as `host:port`; everything else is a USB serial.
    pub fn from_identifier(identifier: &str) -> Self {
        if identifier.contains(':') {
            DeviceType::Wireless
        } else {
            DeviceType::Usb
        }
    }

    /// Uppercase label shown in the device list badge
    pub fn badge(self) -> &'static str {
        match self {
            DeviceType::Usb => "USB",
            DeviceType::Wireless => "WIRELESS",
        }
    }

    pub fn belongs_to(self, mode: Mode) -> bool {
        matches!(
            (self, mode),
            (DeviceType::Usb, Mode::Usb) | (DeviceType::Wireless, Mode::Wireless)
        )
    }
}

/// A device as reported by `/get_devices`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub identifier: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    /// Trailing `adb devices -l` fields (model, product, transport id)
    #[serde(default)]
    pub properties: String,
    #[serde(default)]
    pub dex_pushed: bool,
}

impl Device {
    pub fn new(identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        Self {
            device_type: DeviceType::from_identifier(&identifier),
            identifier,
            properties: String::new(),
            dex_pushed: false,
        }
    }
}

/// Requested screen state for `/toggle_display`. Sent as the strings `"0"` and `"2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayState {
    #[serde(rename = "0")]
    Off,
    /// `1` is the plain "on" of the helper; `2` is the reliable variant the UI sends.
    #[serde(rename = "2", alias = "1")]
    On,
}

impl DisplayState {
    pub fn wire_value(self) -> &'static str {
        match self {
            DisplayState::Off => "0",
            DisplayState::On => "2",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayState::Off => "OFF",
            DisplayState::On => "ON",
        }
    }
}

// ============================================================================
// REQUEST BODIES
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDevicesRequest {
    pub mode: Mode,
}

/// Body of `/connect_wireless` and `/disconnect_wireless`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WirelessRequest {
    pub ip_address: String,
}

/// Body of `/enable_tcpip` and `/push_dex`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifierRequest {
    pub identifier: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleDisplayRequest {
    pub identifiers: Vec<String>,
    pub state: DisplayState,
}

// ============================================================================
// RESPONSE BODIES
// ============================================================================

/// Outcome the backend reported for a request that reached it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    Ok(T),
    /// `success: false`, carrying the `error` text verbatim (empty when absent)
    Failed(String),
}

/// Payload of a successful `/get_devices`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceListing {
    pub adb_path: Option<String>,
    pub devices: Vec<Device>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DevicesResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adb_path: Option<String>,
    #[serde(default)]
    pub devices: Vec<Device>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DevicesResponse {
    pub fn ok(adb_path: impl Into<String>, devices: Vec<Device>) -> Self {
        Self {
            success: true,
            adb_path: Some(adb_path.into()),
            devices,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn into_reply(self) -> Reply<DeviceListing> {
        if self.success {
            Reply::Ok(DeviceListing {
                adb_path: self.adb_path,
                devices: self.devices,
            })
        } else {
            Reply::Failed(self.error.unwrap_or_default())
        }
    }
}

/// Response of the single-command endpoints (connect, disconnect, tcpip)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandResponse {
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: Some(output.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: None,
            error: Some(error.into()),
        }
    }

    pub fn into_reply(self) -> Reply<String> {
        if self.success {
            Reply::Ok(self.output.unwrap_or_default())
        } else {
            Reply::Failed(self.error.unwrap_or_default())
        }
    }
}

impl From<Result<String, String>> for CommandResponse {
    fn from(result: Result<String, String>) -> Self {
        match result {
            Ok(output) => Self::ok(output),
            Err(error) => Self::failed(error),
        }
    }
}

/// Per-device entry of a `/toggle_display` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleResult {
    pub identifier: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToggleResult {
    pub fn ok(identifier: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            success: true,
            output: Some(output.into()),
            error: None,
        }
    }

    pub fn failed(identifier: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            success: false,
            output: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleDisplayResponse {
    pub success: bool,
    #[serde(default)]
    pub results: Vec<ToggleResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToggleDisplayResponse {
    pub fn into_reply(self) -> Reply<Vec<ToggleResult>> {
        if self.success {
            Reply::Ok(self.results)
        } else {
            Reply::Failed(self.error.unwrap_or_default())
        }
    }
}

/// Response of `/push_dex`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PushDexResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_with_port_is_wireless() {
        assert_eq!(DeviceType::from_identifier("192.168.1.20:5555"), DeviceType::Wireless);
        assert_eq!(DeviceType::from_identifier("R58M123ABC"), DeviceType::Usb);
        assert_eq!(DeviceType::Wireless.badge(), "WIRELESS");
    }

    #[test]
    fn display_state_uses_numeric_strings() {
        let body = ToggleDisplayRequest {
            identifiers: vec!["abc".into()],
            state: DisplayState::Off,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["state"], "0");
        assert_eq!(serde_json::to_value(DisplayState::On).unwrap(), "2");

        let legacy: DisplayState = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(legacy, DisplayState::On);
    }

    #[test]
    fn devices_response_tolerates_missing_fields() {
        let reply: DevicesResponse =
            serde_json::from_str(r#"{"success":true,"devices":[{"identifier":"emulator-5554","type":"usb"}]}"#)
                .unwrap();
        match reply.into_reply() {
            Reply::Ok(listing) => {
                assert_eq!(listing.adb_path, None);
                assert_eq!(listing.devices.len(), 1);
                assert!(!listing.devices[0].dex_pushed);
                assert_eq!(listing.devices[0].properties, "");
            }
            Reply::Failed(e) => panic!("unexpected failure: {e}"),
        }
    }

    #[test]
    fn failure_without_error_text_becomes_empty_message() {
        let reply: CommandResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(reply.into_reply(), Reply::Failed(String::new()));
    }

    #[test]
    fn mode_serializes_lowercase() {
        let json = serde_json::to_string(&ListDevicesRequest { mode: Mode::Usb }).unwrap();
        assert_eq!(json, r#"{"mode":"usb"}"#);
        assert_eq!(Mode::default(), Mode::Wireless);
    }
}
