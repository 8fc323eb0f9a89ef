use chrono::Utc;
use serde::{Deserialize, Serialize};

use artisans_addresses::{AddressBook, SavedAddress, ShippingInfo};
use artisans_cart::Cart;
use artisans_catalog::{Catalog, Product, ProductId};
use artisans_core::Language;
use artisans_routing::{View, resolve};
use artisans_session::Session;

use crate::seed;

/// The commerce state store: single owner of all mutable storefront state.
///
/// The catalog is read-only after construction; everything else mutates
/// through the operations below. Every transition is synchronous and runs to
/// completion before the next event is processed. The store is meant to be
/// explicitly owned and passed to handlers, not held as ambient global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommerceStore {
    catalog: Catalog,
    cart: Cart,
    addresses: AddressBook,
    session: Session,
    view: View,
    language: Language,
    selected_product: Option<ProductId>,
    /// Listing filter; `None` shows every category.
    active_category: Option<String>,
    /// Shipping details for the in-flight checkout, if entered.
    shipping_info: Option<ShippingInfo>,
    order_just_placed: bool,
}

impl CommerceStore {
    /// A store over the given catalog, with everything else empty.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            addresses: AddressBook::new(),
            session: Session::new(),
            view: View::default(),
            language: Language::default(),
            selected_product: None,
            active_category: None,
            shipping_info: None,
            order_just_placed: false,
        }
    }

    /// A store seeded with the demo catalog and demo address book.
    pub fn demo() -> Self {
        let mut store = Self::new(seed::demo_catalog());
        store.addresses = seed::demo_addresses();
        store
    }

    // ── Catalog ─────────────────────────────────────────────────────────

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Products visible under the active category filter.
    pub fn visible_products(&self) -> Vec<&Product> {
        match &self.active_category {
            Some(category) => self.catalog.by_category(category),
            None => self.catalog.products().iter().collect(),
        }
    }

    pub fn set_active_category(&mut self, category: Option<String>) {
        self.active_category = category;
    }

    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    pub fn set_selected_product(&mut self, id: Option<ProductId>) {
        self.selected_product = id;
    }

    /// The product currently opened in the detail view, if any.
    pub fn selected_product(&self) -> Option<&Product> {
        self.selected_product.and_then(|id| self.catalog.get(id))
    }

    // ── Cart ────────────────────────────────────────────────────────────

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add_to_cart(&mut self, product: Product) {
        tracing::debug!(product_id = %product.id, "adding product to cart");
        self.cart.add(product);
    }

    pub fn remove_from_cart(&mut self, id: ProductId) {
        tracing::debug!(product_id = %id, "removing product from cart");
        self.cart.remove(id);
    }

    pub fn update_cart_quantity(&mut self, id: ProductId, quantity: i64) {
        tracing::debug!(product_id = %id, quantity, "updating cart quantity");
        self.cart.set_quantity(id, quantity);
    }

    pub fn clear_cart(&mut self) {
        tracing::debug!("clearing cart");
        self.cart.clear();
    }

    // ── Saved addresses ─────────────────────────────────────────────────

    pub fn saved_addresses(&self) -> &AddressBook {
        &self.addresses
    }

    pub fn add_saved_address(&mut self, address: SavedAddress) {
        tracing::debug!(label = %address.label, "upserting saved address");
        self.addresses.upsert(address);
    }

    pub fn remove_saved_address(&mut self, label: &str) {
        tracing::debug!(label, "removing saved address");
        self.addresses.remove(label);
    }

    // ── Session ─────────────────────────────────────────────────────────

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mock login: authenticates unconditionally and moves to the profile
    /// view.
    pub fn login(&mut self, email: &str, password: &str) -> View {
        self.session.login(email, password, Utc::now());
        tracing::info!(email, "session authenticated");
        self.navigate(View::Profile)
    }

    /// Clear the session and return to the home view.
    pub fn logout(&mut self) -> View {
        self.session.logout();
        tracing::info!("session cleared");
        self.navigate(View::Home)
    }

    // ── Navigation ──────────────────────────────────────────────────────

    pub fn view(&self) -> View {
        self.view
    }

    /// Navigate to `requested`, routing protected views through the login
    /// guard. Returns the view that was actually recorded. Scroll reset on
    /// view change is a presentation concern and stays with the caller.
    pub fn navigate(&mut self, requested: View) -> View {
        let resolved = resolve(requested, self.session.is_authenticated());
        if resolved != requested {
            tracing::debug!(%requested, %resolved, "navigation redirected");
        }
        self.view = resolved;
        resolved
    }

    // ── Checkout odds and ends ──────────────────────────────────────────

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn shipping_info(&self) -> Option<&ShippingInfo> {
        self.shipping_info.as_ref()
    }

    pub fn set_shipping_info(&mut self, info: ShippingInfo) {
        self.shipping_info = Some(info);
    }

    pub fn order_just_placed(&self) -> bool {
        self.order_just_placed
    }

    pub fn set_order_just_placed(&mut self, placed: bool) {
        self.order_just_placed = placed;
    }
}
