//! Locating and running the `adb` executable

use crate::error::AdbError;
use crate::utils::first_line;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Trimmed
    pub stdout: String,
    /// Trimmed
    pub stderr: String,
    pub exit_code: Option<i32>,
}

/// Strip surrounding whitespace and one pair of wrapping quotes
pub fn normalize_command_path(value: &str) -> String {
    let trimmed = value.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|candidate| candidate.strip_suffix(quote))
        {
            return inner.trim().to_string();
        }
    }
    trimmed.to_string()
}

/// Common SDK install locations, most likely first
pub fn candidate_paths() -> Vec<PathBuf> {
    if cfg!(windows) {
        ["LOCALAPPDATA", "PROGRAMFILES"]
            .into_iter()
            .filter_map(std::env::var_os)
            .map(|base| {
                PathBuf::from(base)
                    .join("Android")
                    .join("sdk")
                    .join("platform-tools")
                    .join("adb.exe")
            })
            .collect()
    } else {
        let mut paths = vec![
            PathBuf::from("/usr/bin/adb"),
            PathBuf::from("/usr/local/bin/adb"),
        ];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join("Android").join("Sdk").join("platform-tools").join("adb"));
        }
        paths
    }
}

/// Resolve the adb program: an explicit path wins, then the first existing
/// well-known location, then plain `adb` from PATH.
pub fn locate_adb(configured: Option<&str>) -> String {
    if let Some(path) = configured.map(normalize_command_path).filter(|p| !p.is_empty()) {
        return path;
    }
    find_existing(&candidate_paths()).unwrap_or_else(|| "adb".to_string())
}

fn find_existing(candidates: &[PathBuf]) -> Option<String> {
    candidates
        .iter()
        .find(|p| p.is_file())
        .map(|p| p.to_string_lossy().into_owned())
}

/// Handle to one adb executable
#[derive(Debug, Clone)]
pub struct Adb {
    program: String,
}

impl Adb {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run adb with an argument vector (no shell) and capture its output
    pub async fn run(&self, args: &[&str]) -> Result<CommandOutput, AdbError> {
        debug!(program = %self.program, ?args, "Running adb");
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| AdbError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let out = CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            exit_code: output.status.code(),
        };
        debug!(
            exit_code = ?out.exit_code,
            stdout = first_line(&out.stdout),
            stderr = first_line(&out.stderr),
            "adb finished"
        );
        Ok(out)
    }

    pub async fn devices(&self) -> Result<CommandOutput, AdbError> {
        self.run(&["devices", "-l"]).await
    }

    pub async fn connect(&self, address: &str) -> Result<CommandOutput, AdbError> {
        info!(address, "adb connect");
        self.run(&["connect", address]).await
    }

    pub async fn disconnect(&self, identifier: &str) -> Result<CommandOutput, AdbError> {
        info!(identifier, "adb disconnect");
        self.run(&["disconnect", identifier]).await
    }

    pub async fn tcpip(&self, identifier: &str, port: u16) -> Result<CommandOutput, AdbError> {
        info!(identifier, port, "adb tcpip");
        let port = port.to_string();
        self.run(&["-s", identifier, "tcpip", &port]).await
    }

    pub async fn push(
        &self,
        identifier: &str,
        local: &Path,
        remote: &str,
    ) -> Result<CommandOutput, AdbError> {
        let local = local.to_string_lossy();
        self.run(&["-s", identifier, "push", &local, remote]).await
    }

    pub async fn shell(&self, identifier: &str, command: &[&str]) -> Result<CommandOutput, AdbError> {
        let mut args = vec!["-s", identifier, "shell"];
        args.extend_from_slice(command);
        self.run(&args).await
    }
}
