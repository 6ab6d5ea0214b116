//! # Theme Actor
//!
//! Resolves the tri-state theme preference against the system appearance, persists the
//! preference under `theme`, and publishes the effective theme and the admin accent
//! palette to the presentation layer.
//!
//! ## Structure
//!
//! - [`entity`] - [`ThemeState`] and its injected [`ThemeContext`]
//! - [`appearance`] - [`SystemAppearance`], the dark-mode signal
//! - [`actions`] - [`ThemeAction`], [`ThemeActionResult`] and [`ThemeView`]
//! - [`error`] - [`ThemeError`]
//! - [`new()`] - Factory function that creates the actor and its client

pub mod actions;
pub mod appearance;
pub mod entity;
pub mod error;

pub use actions::*;
pub use appearance::{FixedAppearance, SystemAppearance};
pub use entity::{ThemeContext, ThemeState};
pub use error::*;

use crate::clients::ThemeClient;
use crate::framework::StateActor;
use crate::model::ThemePreference;

/// Creates a new theme actor and its client. The stored preference is applied when the
/// actor runs; until then `default_preference` is in effect.
pub fn new(capacity: usize, default_preference: ThemePreference) -> (StateActor<ThemeState>, ThemeClient) {
    let state = ThemeState::new(default_preference);
    let effective = state.subscribe_effective();
    let palette = state.subscribe_palette();
    let (actor, generic_client) = StateActor::new(capacity, state);
    (actor, ThemeClient::new(generic_client, effective, palette))
}
