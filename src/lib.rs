//! ADB Controller
//!
//! A desktop controller for an ADB device-management backend, and the
//! backend itself. The controller (`app`) drives five JSON endpoints through
//! [`api::BackendClient`]; the backend (`server`) answers them by running the
//! `adb` executable.

pub mod api;
pub mod app;
pub mod constants;
pub mod error;
pub mod server;
pub mod settings;
pub mod theme;
pub mod types;
pub mod ui;
pub mod utils;
