#![windows_subsystem = "windows"]
//! ADB Controller - desktop entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use adb_controller::api::BackendClient;
use adb_controller::app::App;
use adb_controller::constants::*;
use adb_controller::settings::Settings;
use adb_controller::utils::get_data_dir;
use clap::Parser;
use eframe::egui;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "adb-controller", version, about = "Desktop controller for an ADB backend")]
struct Args {
    /// Backend base URL (overrides the saved setting)
    #[arg(long, env = "ADB_CONTROLLER_URL")]
    backend_url: Option<String>,
}

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "adb-controller.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,adb_controller=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "ADB Controller starting");

    let settings = Settings::load(&data_dir);
    let backend_url = settings.backend_url_or(args.backend_url.as_deref());

    let client = match BackendClient::new(&backend_url, settings.connect_timeout()) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, url = %backend_url, "Invalid backend URL");
            return Err(eframe::Error::AppCreation(Box::new(e)));
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "Failed to start async runtime");
            return Err(eframe::Error::AppCreation(Box::new(e)));
        }
    };

    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1100.0, 720.0)))
        .with_min_inner_size([900.0, 560.0])
        .with_title(APP_NAME);

    let needs_center = win_pos.is_none();
    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let app = App::new(cc, settings, client, runtime, data_dir).centered(needs_center);
            Ok(Box::new(app))
        }),
    )
}
