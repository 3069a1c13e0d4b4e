use serde::{Deserialize, Serialize};
use std::fmt;

/// Display languages understood by the content API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ru,
    Ky,
    En,
}

impl Locale {
    pub const DEFAULT: Locale = Locale::Ru;

    /// Parses an application language tag (`ru`, `ky-KG`, `en-US`, ...).
    /// Returns `None` for languages the site does not ship.
    pub fn parse(language: &str) -> Option<Self> {
        let primary = language
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "ru" => Some(Locale::Ru),
            "ky" | "kg" | "kir" => Some(Locale::Ky),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Like [`Locale::parse`], but unknown languages map to `default`.
    pub fn from_language(language: &str, default: Locale) -> Self {
        Self::parse(language).unwrap_or_else(|| {
            tracing::debug!(
                "Unsupported language '{}', falling back to {}",
                language,
                default
            );
            default
        })
    }

    /// Code sent as the `lang` query parameter.
    pub fn api_code(self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::Ky => "kg",
            Locale::En => "en",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_code())
    }
}
