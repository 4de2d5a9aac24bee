//! ADB Controller backend - HTTP entry point

use adb_controller::constants::{APP_VERSION, DEFAULT_BIND_ADDR, DEX_FILE_NAME};
use adb_controller::server::{self, adb::locate_adb, ServerConfig};
use clap::Parser;
use mimalloc::MiMalloc;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser, Debug)]
#[command(name = "adb-controller-server", version, about = "HTTP backend for ADB Controller")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = DEFAULT_BIND_ADDR)]
    bind: SocketAddr,

    /// adb executable (default: common SDK locations, then PATH)
    #[arg(long, env = "ADB_PATH")]
    adb_path: Option<String>,

    /// Directory containing DisplayToggle.dex
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,adb_controller=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let adb_program = locate_adb(args.adb_path.as_deref());
    info!(version = APP_VERSION, adb = %adb_program, "ADB Controller backend starting");

    info!(path = %args.static_dir.join(DEX_FILE_NAME).display(), "Display helper location");

    let shutdown = CancellationToken::new();
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Ctrl-C received, shutting down");
                    shutdown.cancel();
                }
                Err(e) => warn!(error = %e, "Cannot listen for Ctrl-C"),
            }
        });
    }

    let config = ServerConfig {
        bind: args.bind,
        adb_program,
        static_dir: args.static_dir,
    };
    match server::serve(config, shutdown).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Backend failed");
            ExitCode::FAILURE
        }
    }
}
