//! Icon lookup through the desktop-integration service.

use crate::error::{IconError, Result};
use image::RgbaImage;
use std::path::Path;

/// Icon image resolved for a file-system path.
///
/// Always non-empty; rasterization resamples it to each iconset size.
#[derive(Debug, Clone)]
pub struct SourceIcon {
    image: RgbaImage,
}

impl SourceIcon {
    /// Build an icon from raw RGBA8 pixels.
    ///
    /// Fails if the buffer does not hold exactly `width * height` pixels or
    /// either dimension is zero.
    pub fn from_rgba(path: &Path, width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let malformed = || IconError::Malformed {
            path: path.to_path_buf(),
            width,
            height,
        };
        if width == 0 || height == 0 {
            return Err(malformed().into());
        }
        let image = RgbaImage::from_raw(width, height, pixels).ok_or_else(malformed)?;
        Ok(Self { image })
    }

    /// Wrap an already decoded image.
    pub fn from_image(path: &Path, image: RgbaImage) -> Result<Self> {
        if image.width() == 0 || image.height() == 0 {
            return Err(IconError::Malformed {
                path: path.to_path_buf(),
                width: image.width(),
                height: image.height(),
            }
            .into());
        }
        Ok(Self { image })
    }

    /// The icon bitmap.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

/// Resolves the icon registered for a path.
pub trait IconLookup {
    /// Return the icon for `path`. The path does not have to exist; the
    /// system service falls back to a generic icon.
    fn icon_for_path(&self, path: &Path) -> Result<SourceIcon>;
}

/// Placeholder icon used when the service has nothing registered for a path.
pub const GENERIC_ICON_PATH: &str =
    "/System/Library/CoreServices/CoreTypes.bundle/Contents/Resources/GenericDocumentIcon.icns";

/// Raw RGBA icon as returned by the system service.
#[derive(Debug)]
pub(crate) struct RawIcon {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) pixels: Vec<u8>,
}

/// Why the system service returned no icon.
#[derive(Debug)]
pub(crate) enum FetchError {
    /// Nothing exists at the path
    Missing,
    /// Any other service failure
    Failed(String),
}

/// Fetch the icon for `path`, substituting the generic icon when the path
/// does not exist or cannot be handed to the service as UTF-8.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
pub(crate) fn resolve_icon<F>(path: &Path, fetch: F) -> Result<SourceIcon>
where
    F: Fn(&Path) -> std::result::Result<RawIcon, FetchError>,
{
    let fetched = if path.to_str().is_some() {
        fetch(path)
    } else {
        Err(FetchError::Missing)
    };

    let (source, raw) = match fetched {
        Ok(raw) => (path, raw),
        Err(FetchError::Missing) => {
            log::debug!(
                "No icon registered for {}, using the generic icon",
                path.display()
            );
            let generic = Path::new(GENERIC_ICON_PATH);
            let raw = fetch(generic).map_err(|e| IconError::Lookup {
                path: generic.to_path_buf(),
                reason: match e {
                    FetchError::Missing => "generic icon not found".to_string(),
                    FetchError::Failed(reason) => reason,
                },
            })?;
            (generic, raw)
        }
        Err(FetchError::Failed(reason)) => {
            return Err(IconError::Lookup {
                path: path.to_path_buf(),
                reason,
            }
            .into());
        }
    };

    SourceIcon::from_rgba(source, raw.width, raw.height, raw.pixels)
}

/// Icon lookup backed by the host's workspace service (NSWorkspace on macOS).
#[derive(Debug, Clone, Copy)]
pub struct WorkspaceIconLookup {
    resolution: u16,
}

impl WorkspaceIconLookup {
    /// Request icons rendered at `resolution` pixels.
    pub fn new(resolution: u16) -> Self {
        Self { resolution }
    }
}

impl Default for WorkspaceIconLookup {
    fn default() -> Self {
        Self::new(super::MAX_ICON_PIXELS as u16)
    }
}

#[cfg(target_os = "macos")]
impl IconLookup for WorkspaceIconLookup {
    fn icon_for_path(&self, path: &Path) -> Result<SourceIcon> {
        log::debug!(
            "Requesting {}px icon for {}",
            self.resolution,
            path.display()
        );

        resolve_icon(path, |target| {
            match file_icon_provider::get_file_icon(target, self.resolution) {
                Ok(icon) => Ok(RawIcon {
                    width: icon.width,
                    height: icon.height,
                    pixels: icon.pixels,
                }),
                Err(file_icon_provider::Error::PathDoesNotExist) => Err(FetchError::Missing),
                Err(e) => Err(FetchError::Failed(format!("{e:?}"))),
            }
        })
    }
}

#[cfg(not(target_os = "macos"))]
impl IconLookup for WorkspaceIconLookup {
    fn icon_for_path(&self, path: &Path) -> Result<SourceIcon> {
        log::debug!(
            "No icon service for {} ({}px requested)",
            path.display(),
            self.resolution
        );
        Err(IconError::Unsupported {
            platform: std::env::consts::OS,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;

    #[test]
    fn test_from_rgba_accepts_exact_buffer() {
        let icon = SourceIcon::from_rgba(Path::new("/a.app"), 2, 2, vec![0; 16]).unwrap();
        assert_eq!(icon.image().dimensions(), (2, 2));
    }

    #[test]
    fn test_from_rgba_rejects_short_buffer() {
        let err = SourceIcon::from_rgba(Path::new("/a.app"), 4, 4, vec![0; 8]).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::Icon(IconError::Malformed {
                width: 4,
                height: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_from_rgba_rejects_empty_icon() {
        assert!(SourceIcon::from_rgba(Path::new("/a.app"), 0, 0, Vec::new()).is_err());
    }

    #[test]
    fn test_default_lookup_requests_largest_size() {
        assert_eq!(WorkspaceIconLookup::default().resolution, 1024);
    }

    fn fetch_existing_only(
        existing: &'static [&'static str],
        edge: u32,
    ) -> impl Fn(&Path) -> std::result::Result<RawIcon, FetchError> {
        move |target: &Path| {
            if existing.iter().any(|p| Path::new(p) == target) {
                Ok(RawIcon {
                    width: edge,
                    height: edge,
                    pixels: vec![255; (edge * edge * 4) as usize],
                })
            } else {
                Err(FetchError::Missing)
            }
        }
    }

    #[test]
    fn test_resolve_uses_registered_icon() {
        let fetch = fetch_existing_only(&["/Applications/Calculator.app"], 8);
        let icon = resolve_icon(Path::new("/Applications/Calculator.app"), fetch).unwrap();
        assert_eq!(icon.image().dimensions(), (8, 8));
    }

    #[test]
    fn test_resolve_missing_path_falls_back_to_generic_icon() {
        let fetch = fetch_existing_only(&[GENERIC_ICON_PATH], 4);
        let icon = resolve_icon(Path::new("/does/not/exist.app"), fetch).unwrap();
        assert_eq!(icon.image().dimensions(), (4, 4));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_non_utf8_path_falls_back_to_generic_icon() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/Applications/\xff.app"));
        let fetch = fetch_existing_only(&[GENERIC_ICON_PATH], 4);
        assert!(resolve_icon(path, fetch).is_ok());
    }

    #[test]
    fn test_resolve_missing_generic_icon_is_lookup_error() {
        let fetch = fetch_existing_only(&[], 4);
        let err = resolve_icon(Path::new("/does/not/exist.app"), fetch).unwrap_err();
        assert!(matches!(err, ExtractError::Icon(IconError::Lookup { .. })));
        assert!(err.to_string().contains("GenericDocumentIcon.icns"));
    }

    #[test]
    fn test_resolve_service_failure_is_not_masked() {
        let err = resolve_icon(Path::new("/a.app"), |_| {
            Err(FetchError::Failed("no window server".to_string()))
        })
        .unwrap_err();
        assert!(err.to_string().contains("no window server"));
        assert!(err.to_string().contains("/a.app"));
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_lookup_unsupported_off_macos() {
        let err = WorkspaceIconLookup::default()
            .icon_for_path(Path::new("/Applications/Calculator.app"))
            .unwrap_err();
        assert!(matches!(err, ExtractError::Icon(IconError::Unsupported { .. })));
    }
}
