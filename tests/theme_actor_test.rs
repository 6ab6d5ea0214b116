use std::sync::Arc;
use storefront_state::model::{AccentPalette, EffectiveTheme, ThemePreference};
use storefront_state::store::{keys, PersistentStore};
use storefront_state::theme_actor::{self, FixedAppearance, ThemeContext};
use storefront_state::clients::ThemeClient;

fn spawn_theme(store: &PersistentStore, prefers_dark: bool) -> ThemeClient {
    let (actor, client) = theme_actor::new(8, ThemePreference::Dark);
    tokio::spawn(actor.run(ThemeContext {
        store: store.clone(),
        appearance: Arc::new(FixedAppearance { prefers_dark }),
    }));
    client
}

#[tokio::test]
async fn test_default_applies_without_writing() {
    let store = PersistentStore::in_memory();
    let theme = spawn_theme(&store, false);

    assert_eq!(theme.preference().await.unwrap(), ThemePreference::Dark);
    assert_eq!(theme.effective(), EffectiveTheme::Dark);
    assert_eq!(store.get::<ThemePreference>(keys::THEME), None);
}

#[tokio::test]
async fn test_auto_follows_system_appearance() {
    let store = PersistentStore::in_memory();
    let theme = spawn_theme(&store, true);

    assert_eq!(
        theme.set_preference(ThemePreference::Auto).await.unwrap(),
        EffectiveTheme::Dark
    );
    assert_eq!(store.get(keys::THEME), Some(ThemePreference::Auto));

    let mut effective = theme.subscribe_effective();
    assert_eq!(
        theme.system_appearance_changed(false).await.unwrap(),
        EffectiveTheme::Light
    );
    assert!(effective.has_changed().unwrap());
    assert_eq!(*effective.borrow_and_update(), EffectiveTheme::Light);

    // An explicit preference ignores the system signal
    theme.set_preference(ThemePreference::Dark).await.unwrap();
    assert_eq!(
        theme.system_appearance_changed(false).await.unwrap(),
        EffectiveTheme::Dark
    );
}

#[tokio::test]
async fn test_stored_preference_is_restored() {
    let store = PersistentStore::in_memory();
    store.set(keys::THEME, &ThemePreference::Light);

    let theme = spawn_theme(&store, true);
    assert_eq!(theme.preference().await.unwrap(), ThemePreference::Light);
    assert_eq!(theme.effective(), EffectiveTheme::Light);
}

#[tokio::test]
async fn test_garbage_preference_falls_back_to_default() {
    let store = PersistentStore::in_memory();
    store.set(keys::THEME, "sepia");

    let theme = spawn_theme(&store, false);
    assert_eq!(theme.preference().await.unwrap(), ThemePreference::Dark);
}

#[tokio::test]
async fn test_accent_colors_persist_and_clear() {
    let store = PersistentStore::in_memory();
    let theme = spawn_theme(&store, false);

    let palette = AccentPalette {
        primary: Some("#6c5ce7".into()),
        secondary: Some("#00b894".into()),
        accent: None,
    };
    theme.set_accent_colors(palette.clone()).await.unwrap();
    assert_eq!(theme.palette(), palette);
    assert_eq!(store.get(keys::PRIMARY_COLOR), Some("#6c5ce7".to_string()));
    assert_eq!(store.get::<String>(keys::ACCENT_COLOR), None);

    // A fresh actor picks the stored palette up
    let restarted = spawn_theme(&store, false);
    restarted.preference().await.unwrap();
    assert_eq!(restarted.palette(), palette);

    theme.set_accent_colors(AccentPalette::default()).await.unwrap();
    assert_eq!(store.get::<String>(keys::PRIMARY_COLOR), None);
    assert!(theme.palette().is_empty());
}
