//! Error types for icon extraction.
//!
//! Every failure that ends the run is an [`ExtractError`]. Per-size encoding
//! failures never surface here: the pipeline logs and skips them.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::cli::USAGE;

/// Result type alias for extract_icon operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Main error type for all extract_icon operations
#[derive(Error, Debug)]
pub enum ExtractError {
    /// CLI argument errors
    #[error("{0}")]
    Cli(#[from] CliError),

    /// Icon lookup errors
    #[error("Icon lookup failed: {0}")]
    Icon(#[from] IconError),

    /// File system error with path context.
    ///
    /// Created by the [`ErrorExt`] trait's `fs_context` method.
    #[error("{context} {path}: {error}")]
    Fs {
        /// Operation that failed (e.g., "creating iconset directory")
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// Image encoding errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// External packer errors
    #[error("{0}")]
    Packer(#[from] PackerError),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Wrong number of positional arguments
    #[error("expected exactly two arguments")]
    Usage,
}

/// Icon lookup errors
#[derive(Error, Debug)]
pub enum IconError {
    /// No icon lookup service on this host
    #[error("icon lookup is not supported on {platform}")]
    Unsupported {
        /// Current operating system
        platform: &'static str,
    },

    /// The lookup service reported a failure
    #[error("could not get icon for {path}: {reason}")]
    Lookup {
        /// Path the icon was requested for
        path: PathBuf,
        /// Reason reported by the service
        reason: String,
    },

    /// Pixel data does not match the reported dimensions
    #[error("icon for {path} has malformed pixel data ({width}x{height})")]
    Malformed {
        /// Path the icon was requested for
        path: PathBuf,
        /// Reported width
        width: u32,
        /// Reported height
        height: u32,
    },
}

/// External packer errors
#[derive(Error, Debug)]
pub enum PackerError {
    /// The executable could not be started
    #[error("failed to run command {command}: {error}")]
    Launch {
        /// Command that failed to start
        command: String,
        /// The underlying error
        error: io::Error,
    },

    /// Waiting on the child failed
    #[error("failed to wait for command {command}: {error}")]
    Wait {
        /// Command being waited on
        command: String,
        /// The underlying error
        error: io::Error,
    },

    /// The child did not exit within the configured limit
    #[error("command {command} timed out after {limit:?}")]
    TimedOut {
        /// Command that was killed
        command: String,
        /// Configured limit
        limit: std::time::Duration,
    },

    /// The child exited without a status code
    #[error("command {command} was terminated by a signal")]
    Terminated {
        /// Command that was terminated
        command: String,
    },
}

impl ExtractError {
    /// Render the single stderr line reported for this error.
    pub fn report(&self) -> String {
        match self {
            ExtractError::Cli(CliError::Usage) => USAGE.to_string(),
            other => format!("Error: {other}"),
        }
    }
}

/// Extension trait for filesystem operations with automatic path context.
pub trait ErrorExt<T> {
    /// Add filesystem context to an I/O error.
    ///
    /// The `context` should be a present-tense verb phrase, e.g. "writing icon".
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| ExtractError::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}
