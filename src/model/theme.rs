use serde::{Deserialize, Serialize};

/// What the user asked for. `Auto` defers to the system appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
    Auto,
}

impl ThemePreference {
    /// Concrete theme for this preference given the system dark-mode signal.
    pub fn resolve(self, prefers_dark: bool) -> EffectiveTheme {
        match self {
            ThemePreference::Light => EffectiveTheme::Light,
            ThemePreference::Dark => EffectiveTheme::Dark,
            ThemePreference::Auto if prefers_dark => EffectiveTheme::Dark,
            ThemePreference::Auto => EffectiveTheme::Light,
        }
    }
}

/// The theme actually applied to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveTheme {
    Light,
    Dark,
}

impl EffectiveTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectiveTheme::Light => "light",
            EffectiveTheme::Dark => "dark",
        }
    }
}

/// Accent colours chosen in the admin settings. Opaque strings, applied verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccentPalette {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
}

impl AccentPalette {
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none() && self.accent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(ThemePreference::Auto.resolve(true), EffectiveTheme::Dark);
        assert_eq!(ThemePreference::Auto.resolve(false), EffectiveTheme::Light);
        assert_eq!(ThemePreference::Light.resolve(true), EffectiveTheme::Light);
        assert_eq!(ThemePreference::Dark.resolve(false), EffectiveTheme::Dark);
    }

    #[test]
    fn test_preference_wire_format() {
        assert_eq!(serde_json::to_string(&ThemePreference::Auto).unwrap(), "\"auto\"");
        let parsed: ThemePreference = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, ThemePreference::Light);
        assert!(serde_json::from_str::<ThemePreference>("\"sepia\"").is_err());
        assert_eq!(ThemePreference::default(), ThemePreference::Dark);
    }
}
