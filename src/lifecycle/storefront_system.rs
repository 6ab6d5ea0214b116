use crate::cart_actor::{self, CartContext};
use crate::catalog::{Catalog, DebouncedSearch};
use crate::checkout_actor::{self, CheckoutContext};
use crate::clients::{CartClient, CheckoutClient, NotificationClient, ThemeClient};
use crate::lifecycle::StorefrontConfig;
use crate::notification_actor;
use crate::store::PersistentStore;
use crate::theme_actor::{self, FixedAppearance, SystemAppearance, ThemeContext};
use std::sync::Arc;
use tracing::{error, info};

/// The process-wide handle on the storefront's state layer.
///
/// `StorefrontSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping every actor
/// - **Dependency Wiring**: handing the store and client clones to the actors that need them
///
/// # Architecture
///
/// - **Notification Actor**: single-slot UI messages (no dependencies)
/// - **Cart Actor**: the cart (store, notifications)
/// - **Theme Actor**: theme preference and accent colours (store, system appearance)
/// - **Checkout Actor**: validation, settlement, order history (store, cart, notifications)
///
/// The dependency graph is acyclic, so dropping the clients held here is enough to shut
/// every actor down.
///
/// # Example
///
/// ```rust
/// use storefront_state::lifecycle::{StorefrontConfig, StorefrontSystem};
/// use storefront_state::model::ItemId;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = StorefrontSystem::from_config(StorefrontConfig::default());
///
///     let product = system.catalog.find(ItemId(2)).unwrap();
///     system.cart.add_product(product).await?;
///     assert_eq!(system.cart.item_count().await?, 1);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct StorefrontSystem {
    pub notifications: NotificationClient,
    pub cart: CartClient,
    pub theme: ThemeClient,
    pub checkout: CheckoutClient,

    /// Shared with the actors. Reads are safe; writes bypass the actors' in-memory state.
    pub store: PersistentStore,
    pub catalog: Arc<Catalog>,

    config: StorefrontConfig,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Spawn every actor on the current Tokio runtime.
    ///
    /// Each actor restores its state from `store` before handling its first request.
    pub fn start(
        config: StorefrontConfig,
        store: PersistentStore,
        appearance: Arc<dyn SystemAppearance>,
    ) -> Self {
        let capacity = config.mailbox_capacity;

        // 1. Create actors (no dependencies yet)
        let (notification_actor, notifications) =
            notification_actor::new(capacity, config.notification_display());
        let (cart_actor, cart) = cart_actor::new(capacity, config.tax_rate);
        let (theme_actor, theme) = theme_actor::new(capacity, config.default_theme);
        let (checkout_actor, checkout) =
            checkout_actor::new(capacity, config.tax_rate, config.settlement_delay());

        // 2. Start actors with injected context
        let notification_handle = tokio::spawn(notification_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(CartContext {
            store: store.clone(),
            notifier: notifications.clone(),
        }));
        let theme_handle = tokio::spawn(theme_actor.run(ThemeContext {
            store: store.clone(),
            appearance,
        }));
        let checkout_handle = tokio::spawn(checkout_actor.run(CheckoutContext {
            store: store.clone(),
            cart: cart.clone(),
            notifier: notifications.clone(),
        }));

        info!(
            tax_rate = %config.tax_rate,
            persistent = config.storage_dir.is_some(),
            "Storefront started"
        );

        Self {
            notifications,
            cart,
            theme,
            checkout,
            store,
            catalog: Arc::new(Catalog::standard()),
            config,
            handles: vec![notification_handle, cart_handle, theme_handle, checkout_handle],
        }
    }

    /// Start with the store described by `config.storage_dir` and a system that
    /// prefers a dark appearance.
    pub fn from_config(config: StorefrontConfig) -> Self {
        let store = PersistentStore::open(config.storage_dir.clone());
        Self::start(config, store, Arc::new(FixedAppearance::dark()))
    }

    /// A search box over the catalog using the configured debounce window.
    pub fn search(&self) -> DebouncedSearch {
        DebouncedSearch::new(self.catalog.clone(), self.config.search_debounce())
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the mailboxes. The checkout actor finishes first and
    /// releases its cart and notification clients, which lets those actors finish in
    /// turn. Any clone of a client still held elsewhere keeps its actor alive, and this
    /// call waits for it.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        drop(self.checkout);
        drop(self.theme);
        drop(self.cart);
        drop(self.notifications);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
