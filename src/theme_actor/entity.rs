//! [`ActorEntity`] implementation for the theme resolver.
//!
//! The preference (`light`, `dark`, `auto`) is what gets persisted; the effective theme
//! (`light`, `dark`) is derived from it and the system signal every time it is applied.
//! Both the effective theme and the accent palette are published on watch channels.

use super::actions::{ThemeAction, ThemeActionResult, ThemeView};
use super::appearance::SystemAppearance;
use super::error::ThemeError;
use crate::framework::ActorEntity;
use crate::model::{AccentPalette, EffectiveTheme, ThemePreference};
use crate::store::{keys, PersistentStore};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};

/// Dependencies injected into the theme actor.
#[derive(Clone)]
pub struct ThemeContext {
    pub store: PersistentStore,
    pub appearance: Arc<dyn SystemAppearance>,
}

pub struct ThemeState {
    preference: ThemePreference,
    prefers_dark: bool,
    effective: watch::Sender<EffectiveTheme>,
    palette: watch::Sender<AccentPalette>,
}

impl ThemeState {
    /// `default_preference` applies until `on_start` finds a stored one.
    pub fn new(default_preference: ThemePreference) -> Self {
        let (effective, _) = watch::channel(default_preference.resolve(false));
        let (palette, _) = watch::channel(AccentPalette::default());
        Self {
            preference: default_preference,
            prefers_dark: false,
            effective,
            palette,
        }
    }

    pub fn subscribe_effective(&self) -> watch::Receiver<EffectiveTheme> {
        self.effective.subscribe()
    }

    pub fn subscribe_palette(&self) -> watch::Receiver<AccentPalette> {
        self.palette.subscribe()
    }

    /// Publish `theme` to the presentation layer.
    pub fn apply_effective(&self, theme: EffectiveTheme) {
        let changed = self.effective.send_if_modified(|current| {
            let changed = *current != theme;
            *current = theme;
            changed
        });
        debug!(theme = theme.as_str(), changed, "Applied");
    }

    fn resolve_and_apply(&self) -> EffectiveTheme {
        let theme = self.preference.resolve(self.prefers_dark);
        self.apply_effective(theme);
        theme
    }

    fn set_preference(&mut self, preference: ThemePreference, ctx: &ThemeContext) -> EffectiveTheme {
        ctx.store.set(keys::THEME, &preference);
        self.preference = preference;
        let theme = self.resolve_and_apply();
        info!(?preference, theme = theme.as_str(), "Theme set");
        theme
    }

    fn set_accent_colors(&mut self, palette: AccentPalette, ctx: &ThemeContext) {
        let entries = [
            (keys::PRIMARY_COLOR, &palette.primary),
            (keys::SECONDARY_COLOR, &palette.secondary),
            (keys::ACCENT_COLOR, &palette.accent),
        ];
        for (key, colour) in entries {
            match colour {
                Some(colour) => ctx.store.set(key, colour),
                None => ctx.store.remove(key),
            };
        }
        self.palette.send_replace(palette);
    }
}

fn load_palette(store: &PersistentStore) -> AccentPalette {
    AccentPalette {
        primary: store.get(keys::PRIMARY_COLOR),
        secondary: store.get(keys::SECONDARY_COLOR),
        accent: store.get(keys::ACCENT_COLOR),
    }
}

#[async_trait]
impl ActorEntity for ThemeState {
    type View = ThemeView;
    type Action = ThemeAction;
    type ActionResult = ThemeActionResult;
    type Context = ThemeContext;
    type Error = ThemeError;

    /// Re-apply the stored preference without writing it back.
    async fn on_start(&mut self, ctx: &ThemeContext) -> Result<(), ThemeError> {
        self.prefers_dark = ctx.appearance.prefers_dark();
        if let Some(stored) = ctx.store.get(keys::THEME) {
            self.preference = stored;
        }
        let theme = self.resolve_and_apply();

        let palette = load_palette(&ctx.store);
        if !palette.is_empty() {
            self.palette.send_replace(palette);
        }
        info!(preference = ?self.preference, theme = theme.as_str(), "Theme initialized");
        Ok(())
    }

    fn view(&self) -> ThemeView {
        ThemeView {
            preference: self.preference,
            effective: *self.effective.borrow(),
            palette: self.palette.borrow().clone(),
        }
    }

    async fn handle_action(
        &mut self,
        action: ThemeAction,
        ctx: &ThemeContext,
    ) -> Result<ThemeActionResult, ThemeError> {
        match action {
            ThemeAction::SetPreference(preference) => Ok(ThemeActionResult::Applied(
                self.set_preference(preference, ctx),
            )),
            ThemeAction::SystemAppearanceChanged { prefers_dark } => {
                self.prefers_dark = prefers_dark;
                let theme = if self.preference == ThemePreference::Auto {
                    self.resolve_and_apply()
                } else {
                    *self.effective.borrow()
                };
                Ok(ThemeActionResult::Applied(theme))
            }
            ThemeAction::SetAccentColors(palette) => {
                self.set_accent_colors(palette, ctx);
                Ok(ThemeActionResult::AccentColorsSet)
            }
        }
    }
}
