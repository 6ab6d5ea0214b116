//! # Storefront State Demo
//!
//! Walks one visitor session through the state layer:
//! 1.  Starting the [`StorefrontSystem`] from `STOREFRONT_CONFIG` (or defaults).
//! 2.  Searching the catalog and filling the cart.
//! 3.  Switching the theme.
//! 4.  A rejected checkout followed by a committed one.
//! 5.  The confirmation page and a download.

use storefront_state::checkout_actor::{fields, Confirmation, FormSnapshot};
use storefront_state::lifecycle::{setup_tracing, StorefrontConfig, StorefrontSystem};
use storefront_state::model::{format_usd, ItemId, ThemePreference};
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = StorefrontConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting storefront");
    let system = StorefrontSystem::from_config(config);

    // Browse
    let mut search = system.search();
    search.input("dashboard");
    let mut results = search.subscribe();
    results.changed().await.map_err(|e| e.to_string())?;
    let found = results.borrow().clone();
    info!(?found, "Search results");

    let span = tracing::info_span!("cart");
    async {
        for id in [ItemId(1), ItemId(2), ItemId(1)] {
            let Some(product) = system.catalog.find(id) else {
                continue;
            };
            let outcome = system
                .cart
                .add_product(product)
                .await
                .map_err(|e| e.to_string())?;
            info!(%id, ?outcome, "Add to cart");
        }
        let summary = system.cart.summary().await.map_err(|e| e.to_string())?;
        info!(
            subtotal = %format_usd(summary.subtotal),
            tax = %format_usd(summary.tax),
            total = %format_usd(summary.total),
            "Cart summary"
        );
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    // Theme
    system
        .theme
        .set_preference(ThemePreference::Light)
        .await
        .map_err(|e| e.to_string())?;
    info!(theme = system.theme.effective().as_str(), "Theme");

    // Checkout
    let span = tracing::info_span!("checkout");
    async {
        let incomplete = FormSnapshot::new()
            .with(fields::NAME, "Alice")
            .with(fields::EMAIL, "alice.example.com");
        if let Err(e) = system.checkout.submit(incomplete).await {
            warn!(error = %e, "Checkout rejected");
        }
        if let Some(notification) = system.notifications.current() {
            info!(message = %notification.message, "Notification");
        }

        let form = FormSnapshot::new()
            .with(fields::NAME, "Alice")
            .with(fields::EMAIL, "alice@example.com")
            .with(fields::ADDRESS, "1 Main St")
            .with(fields::CITY, "Springfield")
            .with(fields::ZIP, "12345")
            .with(fields::COUNTRY, "US")
            .with(fields::PAYMENT_METHOD, "paypal");
        match system.checkout.submit(form).await {
            Ok(order) => info!(
                order_id = %order.order_id(),
                total = %format_usd(order.total()),
                "Order placed"
            ),
            Err(e) => error!(error = %e, "Checkout failed"),
        }
    }
    .instrument(span)
    .await;

    match system.checkout.confirmation().await.map_err(|e| e.to_string())? {
        Confirmation::Show(order) => {
            info!(order_id = %order.order_id(), items = order.items().len(), "Confirmation");
            for item in order.items() {
                system
                    .checkout
                    .start_download(item.id)
                    .await
                    .map_err(|e| e.to_string())?;
            }
        }
        Confirmation::RedirectToCatalog => info!("Nothing to confirm"),
    }

    let remaining = system.cart.total().await.map_err(|e| e.to_string())?;
    info!(
        orders = system.store.orders().len(),
        cart_total = %format_usd(remaining),
        "Session finished"
    );

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
