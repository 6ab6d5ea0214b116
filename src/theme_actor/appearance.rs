//! Source of the system dark-mode signal.

/// Reports whether the host environment prefers a dark appearance.
///
/// Read once when the theme actor starts. Later changes are pushed in with
/// `ThemeClient::system_appearance_changed`.
pub trait SystemAppearance: Send + Sync {
    fn prefers_dark(&self) -> bool;
}

/// An appearance that never changes. Used by tests and the demo binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedAppearance {
    pub prefers_dark: bool,
}

impl FixedAppearance {
    pub fn dark() -> Self {
        Self { prefers_dark: true }
    }

    pub fn light() -> Self {
        Self { prefers_dark: false }
    }
}

impl SystemAppearance for FixedAppearance {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}
