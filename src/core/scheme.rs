use serde::{Deserialize, Serialize};
use std::fmt;

/// Which alphabet and byte transform govern a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// One symbol per hex digit, 16-symbol alphabet.
    #[default]
    #[serde(alias = "hex")]
    Nibble,
    /// Standard base-64 remapped onto a 64-symbol alphabet plus padding.
    #[serde(alias = "b64")]
    Base64,
}

impl Scheme {
    /// All schemes in detection priority order.
    pub const ALL: [Scheme; 2] = [Scheme::Nibble, Scheme::Base64];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Nibble => "nibble",
            Scheme::Base64 => "base64",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conversion direction, orthogonal to [`Scheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Encode,
    Decode,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encode => f.write_str("encode"),
            Direction::Decode => f.write_str("decode"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_aliases_in_settings() {
        use crate::core::config::Settings;

        for (name, scheme) in [
            ("nibble", Scheme::Nibble),
            ("hex", Scheme::Nibble),
            ("base64", Scheme::Base64),
            ("b64", Scheme::Base64),
        ] {
            let settings = Settings::from_toml(&format!("default_scheme = \"{}\"", name)).unwrap();
            assert_eq!(settings.default_scheme(), scheme);
        }
        assert!(Settings::from_toml("default_scheme = \"base32\"").is_err());
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(Scheme::ALL[0], Scheme::Nibble);
    }
}
