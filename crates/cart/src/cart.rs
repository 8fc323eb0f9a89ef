use serde::{Deserialize, Serialize};

use artisans_catalog::{Product, ProductId};

/// One product/quantity pairing in a cart.
///
/// The line owns its copy of the product as it looked when first added;
/// merging a product into an existing line only bumps the quantity and never
/// refreshes the copied product data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u64,
}

impl CartLine {
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Price × quantity in smallest currency unit, saturating at `u64::MAX`.
    pub fn line_total(&self) -> u64 {
        self.product.price.saturating_mul(self.quantity)
    }
}

/// Ordered sequence of cart lines, one per product id.
///
/// Invariants:
/// - no two lines share a product id;
/// - every quantity is >= 1 (a transition that would drive a quantity to
///   zero or below removes the line instead);
/// - insertion order is first-added order.
///
/// Every operation is synchronous and total: absent ids and non-positive
/// quantities are defined no-ops or removals, never failures.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id() == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.line(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total number of units across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Sum of line totals in smallest currency unit.
    pub fn subtotal(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(l.line_total()))
    }

    /// Add one unit of `product`.
    ///
    /// If a line for `product.id` already exists its quantity is incremented
    /// and all other fields are left untouched, including any stale copy of
    /// the product data captured when the line was first added. Otherwise a
    /// new line with quantity 1 is appended. No stock-limit check is made.
    pub fn add(&mut self, product: Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }
        self.lines.push(CartLine {
            product,
            quantity: 1,
        });
    }

    /// Remove the line for `id`. No-op when absent.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|l| l.product_id() != id);
    }

    /// Set the quantity of the line for `id`.
    ///
    /// A non-positive quantity behaves exactly like [`Cart::remove`]; no
    /// upper bound is enforced. No-op when the line is absent.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == id) {
            line.quantity = quantity as u64;
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
