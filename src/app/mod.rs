//! App module - the controller window, its state and the update loop

mod effects;
pub mod message;
pub mod state;
pub mod update;
mod views;

pub use effects::run_effect;
pub use message::Message;
pub use state::UiState;
pub use update::{update, Effect, UpdateResult};

use crate::api::BackendClient;
use crate::settings::Settings;
use crate::theme;
use eframe::egui;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{debug, info};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) state: UiState,
    pub(crate) client: BackendClient,
    pub(crate) runtime: tokio::runtime::Runtime,
    /// Effect results, sent from runtime tasks and drained every frame
    pub(crate) tx: mpsc::UnboundedSender<Message>,
    pub(crate) rx: mpsc::UnboundedReceiver<Message>,
    // Settings
    pub(crate) settings: Settings,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        client: BackendClient,
        runtime: tokio::runtime::Runtime,
        data_dir: PathBuf,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor icons as a Proportional fallback
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        info!(backend = %client.base_url(), "Controller ready");

        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: UiState::new(),
            client,
            runtime,
            tx,
            rx,
            settings,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    /// Center the window on the first frame (no saved position)
    pub fn centered(mut self, center: bool) -> Self {
        self.needs_center = center;
        self
    }

    /// Apply a message and everything it leads to: follow-up messages are
    /// processed right away, effects are started on the runtime.
    pub(crate) fn dispatch(&mut self, message: Message, ctx: &egui::Context) {
        let mut next = Some(message);
        while let Some(message) = next.take() {
            debug!(?message, "Dispatch");
            let UpdateResult { message, effect } = update(&mut self.state, message);
            if let Some(effect) = effect {
                self.spawn_effect(effect, ctx);
            }
            next = message;
        }
    }

    /// Drain results delivered by finished (or progressing) effects
    pub(crate) fn poll_messages(&mut self, ctx: &egui::Context) {
        while let Ok(message) = self.rx.try_recv() {
            self.dispatch(message, ctx);
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        self.poll_messages(ctx);

        let messages = self.render(ctx);
        for message in messages {
            self.dispatch(message, ctx);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}
