//! Configuration file support.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name of the scheme used when nothing else is configured: the official
/// Ukrainian national system.
pub const DEFAULT_SCHEME: &str = "UkrainianKMU";

/// Runtime configuration for transliteration front ends.
///
/// Holds the scheme to use (by name, resolved by the registry in
/// `translitua`) and the `preserve_case` flag. Missing fields fall back to
/// the defaults, so a config file may set only what it needs.
///
/// # Example
///
/// ```rust
/// use translit_core::TranslitConfig;
///
/// let config = TranslitConfig::from_toml_str("scheme = \"UkrainianSimple\"").unwrap();
/// assert_eq!(config.scheme, "UkrainianSimple");
/// assert!(config.preserve_case);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslitConfig {
    /// Scheme identifier, e.g. "UkrainianKMU" or "RussianICAO"
    pub scheme: String,

    /// Uppercase the whole result when the whole input is uppercase
    pub preserve_case: bool,
}

impl Default for TranslitConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            preserve_case: true,
        }
    }
}

impl TranslitConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}
