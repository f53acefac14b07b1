use crate::core::scheme::Scheme;
use crate::core::text::TextEncoding;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Default input size limit for the command-line front-end (100 MiB).
pub const DEFAULT_MAX_SIZE: usize = 104_857_600;

/// User-tunable defaults loaded from TOML.
///
/// Every field is optional so that override files only need to name what
/// they change; the accessors fill in the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Scheme used for encoding when none is given
    #[serde(default)]
    pub default_scheme: Option<Scheme>,
    /// Declared byte encoding of the text
    #[serde(default)]
    pub text_encoding: Option<TextEncoding>,
    /// Maximum input size in bytes (0 = unlimited)
    #[serde(default)]
    pub max_size: Option<usize>,
}

impl Settings {
    /// Parses settings from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in settings bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../sigilwire.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads settings from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads settings with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in settings (from library)
    /// 2. `~/.config/sigilwire/config.toml` (user overrides)
    /// 3. `./sigilwire.toml` (project-local overrides)
    ///
    /// Later files override earlier ones field by field. Files that exist
    /// but cannot be read or parsed are skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("sigilwire").join("config.toml");
            settings.merge_file_if_present(&user_config_path);
        }

        settings.merge_file_if_present(Path::new("sigilwire.toml"));

        Ok(settings)
    }

    fn merge_file_if_present(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(overrides) => {
                debug!(path = %path.display(), "loaded settings override");
                self.merge(overrides);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load settings, skipping");
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Fields set in `other` override the same fields in `self`.
    pub fn merge(&mut self, other: Settings) {
        if other.default_scheme.is_some() {
            self.default_scheme = other.default_scheme;
        }
        if other.text_encoding.is_some() {
            self.text_encoding = other.text_encoding;
        }
        if other.max_size.is_some() {
            self.max_size = other.max_size;
        }
    }

    pub fn default_scheme(&self) -> Scheme {
        self.default_scheme.unwrap_or_default()
    }

    pub fn text_encoding(&self) -> TextEncoding {
        self.text_encoding.unwrap_or_default()
    }

    pub fn max_size(&self) -> usize {
        self.max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let settings = Settings::load_default().unwrap();
        assert_eq!(settings.default_scheme(), Scheme::Nibble);
        assert_eq!(settings.text_encoding(), TextEncoding::Utf8);
        assert_eq!(settings.max_size(), DEFAULT_MAX_SIZE);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.default_scheme(), Scheme::Nibble);
        assert_eq!(settings.max_size(), DEFAULT_MAX_SIZE);
    }

    #[test]
    fn test_load_from_toml_string() {
        let toml_content = r#"
default_scheme = "b64"
text_encoding = "utf-16le"
max_size = 0
"#;
        let settings = Settings::from_toml(toml_content).unwrap();
        assert_eq!(settings.default_scheme(), Scheme::Base64);
        assert_eq!(settings.text_encoding(), TextEncoding::Utf16Le);
        assert_eq!(settings.max_size(), 0);
    }

    #[test]
    fn test_unknown_scheme_rejected() {
        assert!(Settings::from_toml(r#"default_scheme = "base32""#).is_err());
    }

    #[test]
    fn test_merge_overrides_only_set_fields() {
        let mut base = Settings {
            default_scheme: Some(Scheme::Nibble),
            text_encoding: Some(TextEncoding::Utf8),
            max_size: Some(10),
        };
        base.merge(Settings {
            default_scheme: Some(Scheme::Base64),
            text_encoding: None,
            max_size: None,
        });

        assert_eq!(base.default_scheme(), Scheme::Base64);
        assert_eq!(base.text_encoding(), TextEncoding::Utf8);
        assert_eq!(base.max_size(), 10);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "text_encoding = \"ascii\"\n").unwrap();

        let settings = Settings::load_from_file(&path).unwrap();
        assert_eq!(settings.text_encoding(), TextEncoding::Ascii);
        assert_eq!(settings.default_scheme, None);
    }
}
