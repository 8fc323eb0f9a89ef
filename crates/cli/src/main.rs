//! Demo driver: walks the seeded store through a browse/cart/checkout flow
//! and logs each transition. Stands in for the presentation layer.

use anyhow::{Context, Result};

use artisans_routing::View;
use artisans_store::CommerceStore;

fn main() -> Result<()> {
    artisans_observability::init();

    let mut store = CommerceStore::demo();
    tracing::info!(
        products = store.catalog().len(),
        addresses = store.saved_addresses().len(),
        "store seeded"
    );

    // Browse and fill the cart.
    store.navigate(View::Products);
    let vase = store
        .catalog()
        .products()
        .first()
        .context("demo catalog is empty")?
        .clone();
    let vase_id = vase.id;
    store.add_to_cart(vase.clone());
    store.add_to_cart(vase);
    store.update_cart_quantity(vase_id, 3);
    tracing::info!(
        lines = store.cart().len(),
        units = store.cart().total_quantity(),
        subtotal = store.cart().subtotal(),
        "cart filled"
    );

    // Protected view before login: routed to the login view.
    let landed = store.navigate(View::Profile);
    tracing::info!(%landed, "navigation before login");

    // Mock login, then the profile is reachable.
    store.login("demo@example.com", "not-checked");
    let landed = store.navigate(View::Profile);
    tracing::info!(%landed, authenticated = store.is_authenticated(), "navigation after login");

    // Pick a saved address for shipping and place the order.
    let home = store
        .saved_addresses()
        .find("home")
        .context("demo address book is missing the 'home' label")?
        .info
        .clone();
    store.set_shipping_info(home);
    store.navigate(View::Checkout);
    store.set_order_just_placed(true);
    store.clear_cart();
    tracing::info!(
        view = %store.view(),
        order_just_placed = store.order_just_placed(),
        "order placed"
    );

    store.logout();
    tracing::info!(view = %store.view(), "session ended");

    Ok(())
}
