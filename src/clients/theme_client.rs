//! # Theme Client
//!
//! Wraps a `StateClient<ThemeState>`. Holds receivers for the effective theme and the
//! accent palette so the presentation layer can follow them without polling the actor.
use crate::framework::{ActorClient, FrameworkError, StateClient};
use crate::model::{AccentPalette, EffectiveTheme, ThemePreference};
use crate::theme_actor::{ThemeAction, ThemeActionResult, ThemeError, ThemeState};
use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, instrument};

/// Client for interacting with the theme actor.
#[derive(Clone)]
pub struct ThemeClient {
    inner: StateClient<ThemeState>,
    effective: watch::Receiver<EffectiveTheme>,
    palette: watch::Receiver<AccentPalette>,
}

impl ThemeClient {
    pub fn new(
        inner: StateClient<ThemeState>,
        effective: watch::Receiver<EffectiveTheme>,
        palette: watch::Receiver<AccentPalette>,
    ) -> Self {
        Self {
            inner,
            effective,
            palette,
        }
    }

    /// Persist `preference` and apply it. Returns the resulting effective theme.
    #[instrument(skip(self))]
    pub async fn set_preference(
        &self,
        preference: ThemePreference,
    ) -> Result<EffectiveTheme, ThemeError> {
        debug!("Sending request");
        self.apply(ThemeAction::SetPreference(preference)).await
    }

    /// Report a change of the system dark-mode signal.
    #[instrument(skip(self))]
    pub async fn system_appearance_changed(
        &self,
        prefers_dark: bool,
    ) -> Result<EffectiveTheme, ThemeError> {
        self.apply(ThemeAction::SystemAppearanceChanged { prefers_dark })
            .await
    }

    #[instrument(skip(self))]
    pub async fn set_accent_colors(&self, palette: AccentPalette) -> Result<(), ThemeError> {
        match self
            .inner
            .perform_action(ThemeAction::SetAccentColors(palette))
            .await
        {
            Ok(ThemeActionResult::AccentColorsSet) => Ok(()),
            Ok(_) => unreachable!("SetAccentColors action must return AccentColorsSet result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    pub async fn preference(&self) -> Result<ThemePreference, ThemeError> {
        Ok(self.view().await?.preference)
    }

    /// The theme currently applied.
    pub fn effective(&self) -> EffectiveTheme {
        *self.effective.borrow()
    }

    pub fn palette(&self) -> AccentPalette {
        self.palette.borrow().clone()
    }

    pub fn subscribe_effective(&self) -> watch::Receiver<EffectiveTheme> {
        self.effective.clone()
    }

    pub fn subscribe_palette(&self) -> watch::Receiver<AccentPalette> {
        self.palette.clone()
    }

    async fn apply(&self, action: ThemeAction) -> Result<EffectiveTheme, ThemeError> {
        match self.inner.perform_action(action).await {
            Ok(ThemeActionResult::Applied(theme)) => Ok(theme),
            Ok(_) => unreachable!("Preference actions must return Applied result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<ThemeState> for ThemeClient {
    type Error = ThemeError;

    fn inner(&self) -> &StateClient<ThemeState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ThemeError::ActorCommunicationError(e.to_string())
    }
}
