use core::str::FromStr;

use serde::{Deserialize, Serialize};

use artisans_core::DomainError;

/// A storefront view. Closed set; rendering is out of scope.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    Products,
    ProductDetail,
    Cart,
    Shipping,
    Payment,
    Checkout,
    Login,
    Profile,
    ManageAddress,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Products => "products",
            View::ProductDetail => "product-detail",
            View::Cart => "cart",
            View::Shipping => "shipping",
            View::Payment => "payment",
            View::Checkout => "checkout",
            View::Login => "login",
            View::Profile => "profile",
            View::ManageAddress => "manage-address",
        }
    }

    /// Whether this view requires an authenticated session.
    pub fn is_protected(&self) -> bool {
        matches!(self, View::Profile | View::ManageAddress)
    }
}

impl core::fmt::Display for View {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(View::Home),
            "products" => Ok(View::Products),
            "product-detail" => Ok(View::ProductDetail),
            "cart" => Ok(View::Cart),
            "shipping" => Ok(View::Shipping),
            "payment" => Ok(View::Payment),
            "checkout" => Ok(View::Checkout),
            "login" => Ok(View::Login),
            "profile" => Ok(View::Profile),
            "manage-address" => Ok(View::ManageAddress),
            other => Err(DomainError::validation(format!("unknown view: {other}"))),
        }
    }
}

/// Resolve a navigation request against the authentication flag.
///
/// Protected views render the login view for unauthenticated sessions; every
/// other view renders unconditionally.
pub fn resolve(requested: View, authenticated: bool) -> View {
    if requested.is_protected() && !authenticated {
        View::Login
    } else {
        requested
    }
}
