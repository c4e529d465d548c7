//! Command line interface for extract_icon.
//!
//! Wires the parsed arguments and environment configuration to the
//! extraction pipeline with the system collaborators.

mod args;

pub use args::{Args, USAGE};

use crate::config::ExtractConfig;
use crate::error::Result;
use crate::iconset::{PngEncoder, WorkspaceIconLookup};
use crate::packer::{IconutilPacker, TokioProcessRunner};
use crate::pipeline::IconExtractor;

/// Main CLI entry point, returning the process exit code
pub async fn run() -> Result<i32> {
    let args = Args::parse_args()?;
    let config = ExtractConfig::from_env();
    execute(&args, &config).await
}

/// Run one extraction with the system icon service and `iconutil`
pub async fn execute(args: &Args, config: &ExtractConfig) -> Result<i32> {
    log::debug!(
        "Extracting icon of {} into {}",
        args.source.display(),
        args.output.display()
    );

    let packer = IconutilPacker::new(
        &config.iconutil_path,
        TokioProcessRunner::with_timeout(config.pack_timeout),
    );
    let extractor = IconExtractor::new(
        WorkspaceIconLookup::default(),
        PngEncoder,
        packer,
        &config.temp_root,
    );

    let report = extractor.extract(&args.source, &args.output).await?;
    log::debug!(
        "Packed {} sizes ({} skipped), iconutil exited with {}",
        report.written.len(),
        report.skipped.len(),
        report.exit_code
    );
    Ok(report.exit_code)
}
