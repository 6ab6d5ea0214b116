//! Custom actions for the theme actor.

use crate::model::{AccentPalette, EffectiveTheme, ThemePreference};

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeAction {
    /// Persist a new preference and apply the theme it resolves to.
    SetPreference(ThemePreference),
    /// The system dark-mode signal changed. Only matters under `auto`.
    SystemAppearanceChanged { prefers_dark: bool },
    /// Persist and publish admin-chosen accent colours.
    SetAccentColors(AccentPalette),
}

/// Results from ThemeActions.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeActionResult {
    /// The effective theme after the action. Returned by both preference actions.
    Applied(EffectiveTheme),
    AccentColorsSet,
}

/// Read model of the theme actor.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeView {
    pub preference: ThemePreference,
    pub effective: EffectiveTheme,
    pub palette: AccentPalette,
}
