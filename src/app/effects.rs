//! Runs reducer effects against the backend and reports back as messages

use super::message::{Message, Outcome};
use super::update::Effect;
use super::App;
use crate::api::BackendClient;
use crate::error::Result;
use crate::types::Reply;
use eframe::egui;
use tracing::warn;

/// Flatten a client result into what the reducer sees
fn outcome<T>(result: Result<Reply<T>>, endpoint: &str) -> Outcome<T> {
    result.map_err(|e| {
        warn!(endpoint, error = %e, "Backend request failed");
        e.to_string()
    })
}

/// Execute one effect, emitting every resulting message in order.
///
/// Disconnect batches are strictly sequential: each identifier's request is
/// awaited before the next is sent, and a failure never stops the batch.
pub async fn run_effect<F>(effect: Effect, client: &BackendClient, mut emit: F)
where
    F: FnMut(Message),
{
    match effect {
        Effect::ListDevices { mode, seq } => {
            let result = outcome(client.get_devices(mode).await, "get_devices");
            emit(Message::DevicesListed { seq, result });
        }
        Effect::ConnectWireless { ip } => {
            let result = outcome(client.connect_wireless(&ip).await, "connect_wireless");
            emit(Message::WirelessConnected { ip, result });
        }
        Effect::DisconnectWireless { identifiers } => {
            for identifier in identifiers {
                emit(Message::DisconnectAttempt {
                    identifier: identifier.clone(),
                });
                let result = outcome(
                    client.disconnect_wireless(&identifier).await,
                    "disconnect_wireless",
                );
                emit(Message::DisconnectResult { identifier, result });
            }
            emit(Message::DisconnectFinished);
        }
        Effect::EnableTcpip { identifier } => {
            let result = outcome(client.enable_tcpip(&identifier).await, "enable_tcpip");
            emit(Message::TcpipEnabled { identifier, result });
        }
        Effect::ToggleDisplay { identifiers, state } => {
            let result = outcome(
                client.toggle_display(&identifiers, state).await,
                "toggle_display",
            );
            emit(Message::DisplayToggled { state, result });
        }
    }
}

impl App {
    /// Spawn an effect on the app runtime. Messages are queued for the next
    /// frame and a repaint is requested for each.
    pub(crate) fn spawn_effect(&self, effect: Effect, ctx: &egui::Context) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            run_effect(effect, &client, |msg| {
                // Receiver only goes away when the app is closing
                let _ = tx.send(msg);
                ctx.request_repaint();
            })
            .await;
        });
    }
}
