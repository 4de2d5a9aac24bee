//! HTTP backend answering the controller's endpoints by running `adb`

pub mod adb;
pub mod parse;

use crate::constants::{DEFAULT_ADB_PORT, DEX_FILE_NAME, DEX_REMOTE_PATH};
use crate::error::ServerError;
use crate::types::*;
use adb::Adb;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// adb program, already resolved
    pub adb_program: String,
    /// Directory holding the display helper
    pub static_dir: PathBuf,
}

/// What the backend remembers about a listed device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceEntry {
    pub dex_pushed: bool,
}

pub struct ServerState {
    adb: Adb,
    dex_path: PathBuf,
    /// Devices of the most recent listing. Rebuilt by every `/get_devices`.
    registry: Mutex<HashMap<String, DeviceEntry>>,
}

impl ServerState {
    pub fn new(adb: Adb, static_dir: PathBuf) -> Self {
        Self {
            adb,
            dex_path: static_dir.join(DEX_FILE_NAME),
            registry: Mutex::new(HashMap::new()),
        }
    }

    pub async fn registry_entry(&self, identifier: &str) -> Option<DeviceEntry> {
        self.registry.lock().await.get(identifier).copied()
    }

    /// Push the display helper and make it executable, then mark the device
    async fn push_dex(&self, identifier: &str) -> Result<String, String> {
        if !self.dex_path.is_file() {
            return Err(format!(
                "{DEX_FILE_NAME} not found at {}. Please ensure it's in the static folder.",
                self.dex_path.display()
            ));
        }

        let pushed = self
            .adb
            .push(identifier, &self.dex_path, DEX_REMOTE_PATH)
            .await
            .map_err(|e| e.to_string())?;
        parse::push_outcome(&pushed)?;

        let chmod = self
            .adb
            .shell(identifier, &["chmod", "755", DEX_REMOTE_PATH])
            .await
            .map_err(|e| e.to_string())?;
        if !chmod.stderr.is_empty() {
            return Err(format!(
                "Error setting permissions for DEX on {identifier}: {}",
                chmod.stderr
            ));
        }

        if let Some(entry) = self.registry.lock().await.get_mut(identifier) {
            entry.dex_pushed = true;
        }
        info!(identifier, "Display helper pushed");
        Ok(format!("{DEX_FILE_NAME} pushed and permissions set for {identifier}"))
    }
}

pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/get_devices", post(get_devices))
        .route("/connect_wireless", post(connect_wireless))
        .route("/disconnect_wireless", post(disconnect_wireless))
        .route("/enable_tcpip", post(enable_tcpip))
        .route("/push_dex", post(push_dex))
        .route("/toggle_display", post(toggle_display))
        .route(&format!("/static/{DEX_FILE_NAME}"), get(serve_dex))
        .with_state(state)
}

/// Bind and serve until `shutdown` is cancelled
pub async fn serve(config: ServerConfig, shutdown: CancellationToken) -> Result<(), ServerError> {
    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind,
            source,
        })?;

    let state = Arc::new(ServerState::new(
        Adb::new(config.adb_program),
        config.static_dir,
    ));
    if !state.dex_path.is_file() {
        warn!(path = %state.dex_path.display(), "Display helper not found; toggling will fail");
    }

    run(listener, state, shutdown).await
}

/// Serve on an already bound listener
pub async fn run(
    listener: TcpListener,
    state: Arc<ServerState>,
    shutdown: CancellationToken,
) -> Result<(), ServerError> {
    info!(addr = %listener.local_addr()?, adb = state.adb.program(), "Backend listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;
    info!("Backend stopped");
    Ok(())
}

// ============================================================================
// HANDLERS
// ============================================================================

async fn get_devices(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<ListDevicesRequest>,
) -> Json<DevicesResponse> {
    let out = match state.adb.devices().await {
        Ok(out) => out,
        Err(e) => {
            error!(error = %e, "adb devices failed to run");
            return Json(DevicesResponse::failed(format!("Error executing adb: {e}")));
        }
    };
    if !out.stderr.is_empty() && !parse::is_daemon_notice(&out.stderr) {
        return Json(DevicesResponse::failed(format!(
            "Error executing adb: {}",
            out.stderr
        )));
    }

    let devices: Vec<Device> = parse::parse_devices(&out.stdout)
        .into_iter()
        .filter(|d| d.device_type.belongs_to(req.mode))
        .collect();

    {
        let mut registry = state.registry.lock().await;
        registry.clear();
        registry.extend(
            devices
                .iter()
                .map(|d| (d.identifier.clone(), DeviceEntry::default())),
        );
    }

    info!(mode = %req.mode, count = devices.len(), "Listed devices");
    Json(DevicesResponse::ok(state.adb.program(), devices))
}

async fn connect_wireless(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<WirelessRequest>,
) -> Json<CommandResponse> {
    let address = parse::with_default_port(&req.ip_address);
    let result = match state.adb.connect(&address).await {
        Ok(out) => parse::connect_outcome(&out),
        Err(e) => Err(e.to_string()),
    };
    Json(result.into())
}

async fn disconnect_wireless(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<WirelessRequest>,
) -> Json<CommandResponse> {
    let result = match state.adb.disconnect(req.ip_address.trim()).await {
        Ok(out) => parse::disconnect_outcome(&out),
        Err(e) => Err(e.to_string()),
    };
    Json(result.into())
}

async fn enable_tcpip(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<IdentifierRequest>,
) -> Json<CommandResponse> {
    let result = match state.adb.tcpip(&req.identifier, DEFAULT_ADB_PORT).await {
        Ok(out) => parse::tcpip_outcome(&out),
        Err(e) => Err(e.to_string()),
    };
    Json(result.into())
}

async fn push_dex(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<IdentifierRequest>,
) -> Json<PushDexResponse> {
    Json(match state.push_dex(&req.identifier).await {
        Ok(message) => PushDexResponse {
            success: true,
            message: Some(message),
            error: None,
        },
        Err(error) => PushDexResponse {
            success: false,
            message: None,
            error: Some(error),
        },
    })
}

async fn toggle_display(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<ToggleDisplayRequest>,
) -> Json<ToggleDisplayResponse> {
    let classpath = format!("CLASSPATH={DEX_REMOTE_PATH}");
    let mut results = Vec::with_capacity(req.identifiers.len());

    for identifier in &req.identifiers {
        // Only devices from the last listing are tracked; others are assumed ready
        let needs_push = state
            .registry_entry(identifier)
            .await
            .is_some_and(|e| !e.dex_pushed);
        if needs_push {
            if let Err(e) = state.push_dex(identifier).await {
                warn!(identifier = %identifier, error = %e, "Display helper push failed");
                results.push(ToggleResult::failed(identifier, format!("Failed to push DEX: {e}")));
                continue;
            }
        }

        let command = [
            classpath.as_str(),
            "app_process",
            "/",
            "DisplayToggle",
            req.state.wire_value(),
        ];
        let result = match state.adb.shell(identifier, &command).await {
            Ok(out) => parse::shell_outcome(&out),
            Err(e) => Err(e.to_string()),
        };
        results.push(match result {
            Ok(output) => ToggleResult::ok(identifier, output),
            Err(error) => ToggleResult::failed(identifier, error),
        });
    }

    info!(state = req.state.label(), devices = results.len(), "Display toggled");
    Json(ToggleDisplayResponse {
        success: true,
        results,
        error: None,
    })
}

async fn serve_dex(State(state): State<Arc<ServerState>>) -> Response {
    match tokio::fs::read(&state.dex_path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "application/octet-stream")], bytes).into_response(),
        Err(e) => {
            warn!(path = %state.dex_path.display(), error = %e, "Display helper unavailable");
            (StatusCode::NOT_FOUND, "DisplayToggle.dex not found").into_response()
        }
    }
}
