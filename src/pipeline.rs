//! The extraction pipeline: lookup, rasterize, stage, pack, clean up.

use crate::error::Result;
use crate::iconset::{ICONSET_SIZES, IconLookup, ImageEncoder, StagingDir, rasterize};
use crate::packer::{IconutilPacker, ProcessRunner};
use std::path::{Path, PathBuf};

/// Outcome of a run that reached the packer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractReport {
    /// Exit status of the packer, passed through unchanged
    pub exit_code: i32,
    /// Labels written to the iconset, in generation order
    pub written: Vec<&'static str>,
    /// Labels whose encoding failed and were left out
    pub skipped: Vec<&'static str>,
}

impl ExtractReport {
    /// Whether the packer reported success.
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Extracts an application's icon into a `.icns` file.
///
/// Generic over its collaborators so tests can substitute fakes for the
/// system icon service, the encoder and the external packer.
#[derive(Debug)]
pub struct IconExtractor<L, E, R> {
    lookup: L,
    encoder: E,
    packer: IconutilPacker<R>,
    temp_root: PathBuf,
}

impl<L, E, R> IconExtractor<L, E, R>
where
    L: IconLookup,
    E: ImageEncoder,
    R: ProcessRunner,
{
    /// Assemble an extractor staging its iconsets under `temp_root`.
    pub fn new(
        lookup: L,
        encoder: E,
        packer: IconutilPacker<R>,
        temp_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            lookup,
            encoder,
            packer,
            temp_root: temp_root.into(),
        }
    }

    /// Run the whole pipeline for one source and output path.
    ///
    /// The staging directory is removed before this returns, on success and
    /// on error alike.
    pub async fn extract(&self, source: &Path, output: &Path) -> Result<ExtractReport> {
        let icon = self.lookup.icon_for_path(source)?;
        log::debug!(
            "Resolved {}x{} icon for {}",
            icon.image().width(),
            icon.image().height(),
            source.display()
        );

        let staging = StagingDir::create(&self.temp_root).await?;

        let mut written = Vec::with_capacity(ICONSET_SIZES.len());
        let mut skipped = Vec::new();
        for size in &ICONSET_SIZES {
            let bitmap = rasterize(&icon, size);
            match self.encoder.encode(&bitmap) {
                Ok(bytes) => {
                    staging.write_image(size, &bytes).await?;
                    written.push(size.label);
                }
                Err(e) => {
                    log::warn!("Skipping icon size {}: {}", size.label, e);
                    skipped.push(size.label);
                }
            }
        }

        if !skipped.is_empty() {
            log::warn!(
                "{} of {} icon sizes could not be encoded and are missing from the iconset",
                skipped.len(),
                ICONSET_SIZES.len()
            );
        }

        let exit_code = self.packer.pack(staging.iconset_path(), output).await?;
        drop(staging);

        Ok(ExtractReport {
            exit_code,
            written,
            skipped,
        })
    }
}
