//! # extract_icon
//!
//! Extracts the icon of a macOS application bundle and writes it as a
//! multi-resolution `.icns` file.
//!
//! The run is a single pipeline:
//!
//! 1. ask the workspace service for the icon registered for the source path,
//! 2. rasterize it at every size of the iconset layout and encode as PNG,
//! 3. write the PNGs into a per-run `icon.iconset` staging directory,
//! 4. pack the directory with `iconutil -c icns`,
//! 5. remove the staging directory, whatever happened.
//!
//! ## Usage
//!
//! ```bash
//! extract_icon /Applications/Calculator.app /tmp/Calculator.icns
//! ```
//!
//! The exit code is `iconutil`'s own status, or `1` for usage and internal
//! errors.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod config;
pub mod error;
pub mod iconset;
pub mod packer;
pub mod pipeline;

pub use cli::Args;
pub use config::ExtractConfig;
pub use error::{ExtractError, Result};
pub use iconset::{ICONSET_SIZES, IconLookup, IconSize, ImageEncoder, SourceIcon};
pub use packer::{IconutilPacker, ProcessRunner, TokioProcessRunner};
pub use pipeline::{ExtractReport, IconExtractor};
