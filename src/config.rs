//! Runtime configuration from environment variables.
//!
//! The CLI only takes two positionals, so tuning knobs live in the
//! environment:
//!
//! - `EXTRACT_ICON_ICONUTIL`: packer executable (default `/usr/bin/iconutil`)
//! - `EXTRACT_ICON_TEMP_DIR`: root for staging directories (default: system temp dir)
//! - `EXTRACT_ICON_PACK_TIMEOUT`: packer timeout in seconds (default: none, `0` disables)

use crate::packer::ICONUTIL_PATH;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the packer executable.
pub const ICONUTIL_ENV: &str = "EXTRACT_ICON_ICONUTIL";
/// Environment variable overriding the staging root.
pub const TEMP_DIR_ENV: &str = "EXTRACT_ICON_TEMP_DIR";
/// Environment variable setting the packer timeout in seconds.
pub const PACK_TIMEOUT_ENV: &str = "EXTRACT_ICON_PACK_TIMEOUT";

/// Settings for one extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Executable that compiles the iconset
    pub iconutil_path: PathBuf,

    /// Directory under which the per-run staging directory is created
    pub temp_root: PathBuf,

    /// Upper bound on the packer's run time; `None` waits indefinitely
    pub pack_timeout: Option<Duration>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            iconutil_path: PathBuf::from(ICONUTIL_PATH),
            temp_root: std::env::temp_dir(),
            pack_timeout: None,
        }
    }
}

impl ExtractConfig {
    /// Create config from environment variables with fallback to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build config from any variable source.
    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |name: &str| var(name).filter(|v| !v.trim().is_empty());

        Self {
            iconutil_path: non_empty(ICONUTIL_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.iconutil_path),
            temp_root: non_empty(TEMP_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.temp_root),
            pack_timeout: non_empty(PACK_TIMEOUT_ENV)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ExtractConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ExtractConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_without_env() {
        let config = config_from(&[]);
        assert_eq!(config.iconutil_path, PathBuf::from("/usr/bin/iconutil"));
        assert_eq!(config.temp_root, std::env::temp_dir());
        assert_eq!(config.pack_timeout, None);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (ICONUTIL_ENV, "/opt/bin/iconutil"),
            (TEMP_DIR_ENV, "/var/tmp/icons"),
            (PACK_TIMEOUT_ENV, "30"),
        ]);
        assert_eq!(config.iconutil_path, PathBuf::from("/opt/bin/iconutil"));
        assert_eq!(config.temp_root, PathBuf::from("/var/tmp/icons"));
        assert_eq!(config.pack_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = config_from(&[(ICONUTIL_ENV, ""), (TEMP_DIR_ENV, "  ")]);
        assert_eq!(config, ExtractConfig::default());
    }

    #[test]
    fn test_timeout_zero_or_invalid_disables() {
        assert_eq!(config_from(&[(PACK_TIMEOUT_ENV, "0")]).pack_timeout, None);
        assert_eq!(config_from(&[(PACK_TIMEOUT_ENV, "soon")]).pack_timeout, None);
    }
}
