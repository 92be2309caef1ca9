//! Storefront color theme preference.

use serde::{Deserialize, Serialize};

/// The shopper's persisted theme preference.
///
/// The store only toggles a document-wide dark flag; everything else is
/// stylesheet work, so two variants cover it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Whether the dark presentation flag should be applied.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stable string form, matching the persisted representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Error parsing a theme name.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown theme {0:?}")]
pub struct ThemeParseError(String);

impl std::str::FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_serde() {
        let json = serde_json::to_string(&Theme::Dark).expect("serialize");
        assert_eq!(json, "\"dark\"");
        let back: Theme = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Theme::Dark);
    }

    #[test]
    fn toggles() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }
}
