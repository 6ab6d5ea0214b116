use rust_decimal::Decimal;
use std::time::Duration;
use storefront_state::cart_actor::{self, CartContext, ADDED_TO_CART, ALREADY_IN_CART, REMOVED_FROM_CART};
use storefront_state::catalog::Catalog;
use storefront_state::model::{AddOutcome, CartItem, CartItemInput, ItemId, NotificationKind};
use storefront_state::notification_actor;
use storefront_state::store::{keys, PersistentStore};

/// Real cart and notification actors, wired the way the storefront wires them.
#[tokio::test(start_paused = true)]
async fn test_cart_mutations_notify_and_persist() {
    let store = PersistentStore::in_memory();
    let catalog = Catalog::standard();

    let (notification_actor, notifications) =
        notification_actor::new(8, Duration::from_secs(3));
    let (cart_actor, cart) = cart_actor::new(8, Decimal::new(10, 2));
    tokio::spawn(notification_actor.run(()));
    let cart_handle = tokio::spawn(cart_actor.run(CartContext {
        store: store.clone(),
        notifier: notifications.clone(),
    }));

    let web = catalog.find(ItemId(1)).unwrap();
    assert_eq!(cart.add_product(web).await.unwrap(), AddOutcome::Added);
    let shown = notifications.current().expect("Notification expected");
    assert_eq!(shown.message, ADDED_TO_CART);
    assert_eq!(shown.kind, NotificationKind::Success);

    // A duplicate keeps quantity at 1 and says so
    assert_eq!(cart.add_product(web).await.unwrap(), AddOutcome::AlreadyInCart);
    let shown = notifications.current().unwrap();
    assert_eq!(shown.message, ALREADY_IN_CART);
    assert_eq!(shown.kind, NotificationKind::Info);
    assert_eq!(cart.item_count().await.unwrap(), 1);

    let app = catalog.find(ItemId(2)).unwrap();
    cart.add_product(app).await.unwrap();
    let summary = cart.summary().await.unwrap();
    assert_eq!(summary.subtotal, Decimal::new(398, 0));
    assert_eq!(summary.tax, Decimal::new(3980, 2));
    assert_eq!(summary.total, Decimal::new(43780, 2));

    let stored: Vec<CartItem> = store.get(keys::CART).unwrap();
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|item| item.quantity == 1));

    assert!(cart.remove(ItemId(1)).await.unwrap());
    assert_eq!(notifications.current().unwrap().message, REMOVED_FROM_CART);
    let stored: Vec<CartItem> = store.get(keys::CART).unwrap();
    assert_eq!(stored[0].id, ItemId(2));

    // Removing an absent id is not an error
    assert!(!cart.remove(ItemId(99)).await.unwrap());

    // The last notification hides itself after the display window
    tokio::time::sleep(Duration::from_millis(3100)).await;
    assert_eq!(notifications.current(), None);

    drop(cart);
    cart_handle.await.unwrap();
}

#[tokio::test]
async fn test_clear_is_silent() {
    let store = PersistentStore::in_memory();
    let (notification_actor, notifications) =
        notification_actor::new(8, Duration::from_secs(3));
    let (cart_actor, cart) = cart_actor::new(8, Decimal::ZERO);
    tokio::spawn(notification_actor.run(()));
    tokio::spawn(cart_actor.run(CartContext {
        store: store.clone(),
        notifier: notifications.clone(),
    }));

    cart.clear().await.unwrap();
    assert_eq!(notifications.current(), None);
    assert!(cart.cart().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_stored_cart_starts_empty() {
    let store = PersistentStore::in_memory();
    store.set(keys::CART, "not a cart");

    let (notification_actor, notifications) =
        notification_actor::new(8, Duration::from_secs(3));
    let (cart_actor, cart) = cart_actor::new(8, Decimal::ZERO);
    tokio::spawn(notification_actor.run(()));
    tokio::spawn(cart_actor.run(CartContext {
        store,
        notifier: notifications,
    }));

    assert!(cart.cart().await.unwrap().is_empty());
    assert_eq!(cart.total().await.unwrap(), Decimal::ZERO);
}

#[tokio::test]
async fn test_huge_price_keeps_actor_alive() {
    let store = PersistentStore::in_memory();
    let (notification_actor, notifications) =
        notification_actor::new(8, Duration::from_secs(3));
    let (cart_actor, cart) = cart_actor::new(8, Decimal::new(10, 2));
    tokio::spawn(notification_actor.run(()));
    let cart_handle = tokio::spawn(cart_actor.run(CartContext {
        store,
        notifier: notifications,
    }));

    cart.add(CartItemInput {
        id: ItemId(1),
        title: "Enterprise".into(),
        price: Decimal::MAX,
        image: String::new(),
    })
    .await
    .unwrap();
    let summary = cart.summary().await.unwrap();
    assert_eq!(summary.total, Decimal::MAX);

    let catalog = Catalog::standard();
    let outcome = cart.add_product(catalog.find(ItemId(2)).unwrap()).await.unwrap();
    assert_eq!(outcome, AddOutcome::Added);
    assert_eq!(cart.total().await.unwrap(), Decimal::MAX);
    assert_eq!(cart.item_count().await.unwrap(), 2);

    drop(cart);
    cart_handle.await.unwrap();
}
