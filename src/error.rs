//! Error types for the controller and its backend

use std::net::SocketAddr;
use thiserror::Error;

/// Result type alias for backend client calls
pub type Result<T> = std::result::Result<T, ApiError>;

/// Transport-level failures talking to the backend.
///
/// A request that reached the backend and came back with `success: false`
/// is not an error here; see [`crate::types::Reply`].
#[derive(Error, Debug)]
pub enum ApiError {
    /// Backend URL could not be parsed or joined
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    /// Connection, protocol or body decoding failure
    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

/// Failures running the adb executable
#[derive(Error, Debug)]
pub enum AdbError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Failures starting or running the HTTP backend
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}
