//! Packing the iconset into `.icns` with the external `iconutil` tool.
//!
//! The child process is reached through [`ProcessRunner`] so the pipeline can
//! be exercised without the real tool, and so a timeout policy lives in one
//! place.

use crate::error::{PackerError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

/// Default location of Apple's iconset compiler.
pub const ICONUTIL_PATH: &str = "/usr/bin/iconutil";

/// Runs an external program to completion and returns its exit code.
#[allow(async_fn_in_trait)]
pub trait ProcessRunner {
    /// Run `program` with `args`, blocking until it exits.
    async fn run(&self, program: &Path, args: &[OsString]) -> Result<i32>;
}

/// Spawns children with tokio, with an optional wall-clock limit.
#[derive(Debug, Clone, Default)]
pub struct TokioProcessRunner {
    timeout: Option<Duration>,
}

impl TokioProcessRunner {
    /// Runner that waits as long as the child takes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill the child and fail once `timeout` elapses.
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, program: &Path, args: &[OsString]) -> Result<i32> {
        let command = program.display().to_string();
        log::debug!("Running {} {:?}", command, args);

        let mut child = Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .spawn()
            .map_err(|error| PackerError::Launch {
                command: command.clone(),
                error,
            })?;

        let waited = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(waited) => waited,
                Err(_) => {
                    // Reap the child so no zombie is left behind.
                    let _ = child.kill().await;
                    return Err(PackerError::TimedOut { command, limit }.into());
                }
            },
            None => child.wait().await,
        };

        let status = waited.map_err(|error| PackerError::Wait {
            command: command.clone(),
            error,
        })?;

        status
            .code()
            .ok_or_else(|| PackerError::Terminated { command }.into())
    }
}

/// Packs an iconset directory into a `.icns` file.
#[derive(Debug, Clone)]
pub struct IconutilPacker<R> {
    program: PathBuf,
    runner: R,
}

impl<R: ProcessRunner> IconutilPacker<R> {
    /// Packer invoking `program` through `runner`.
    pub fn new(program: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    /// Executable this packer invokes.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments for `iconutil -c icns <iconset> -o <output>`.
    pub fn args(iconset: &Path, output: &Path) -> Vec<OsString> {
        vec![
            "-c".into(),
            "icns".into(),
            iconset.as_os_str().to_owned(),
            "-o".into(),
            output.as_os_str().to_owned(),
        ]
    }

    /// Compile `iconset` into `output`, returning the tool's exit code as-is.
    pub async fn pack(&self, iconset: &Path, output: &Path) -> Result<i32> {
        let code = self
            .runner
            .run(&self.program, &Self::args(iconset, output))
            .await?;

        if code == 0 {
            log::info!("Created ICNS file: {}", output.display());
        } else {
            log::debug!("{} exited with status {}", self.program.display(), code);
        }
        Ok(code)
    }
}
