//! Demo seed data for the storefront.
//!
//! Mirrors the mock data the demo ships with: a small artisan-goods catalog
//! and three pre-saved addresses.

use artisans_addresses::{AddressBook, SavedAddress, ShippingInfo};
use artisans_catalog::{Catalog, Product, ProductId};
use artisans_core::{Language, LocalizedText};

fn product(
    id: u32,
    name: LocalizedText,
    description: &str,
    price: u64,
    category: &str,
    stock: u32,
) -> Product {
    Product {
        id: ProductId::new(id),
        name,
        description: LocalizedText::of(description),
        price,
        category: category.to_string(),
        image_url: format!("/images/products/{id}.jpg"),
        stock,
    }
}

/// The demo catalog. Prices are in paise.
pub fn demo_catalog() -> Catalog {
    let products = vec![
        product(
            1,
            LocalizedText::of("Terracotta Vase").with(Language::Hi, "टेराकोटा फूलदान"),
            "Hand-thrown terracotta vase from Khurja",
            49_900,
            "pottery",
            12,
        ),
        product(
            2,
            LocalizedText::of("Channapatna Toy Horse").with(Language::Kn, "ಚನ್ನಪಟ್ಟಣ ಆಟಿಕೆ ಕುದುರೆ"),
            "Lacquered wooden toy in natural dyes",
            34_500,
            "woodwork",
            30,
        ),
        product(
            3,
            LocalizedText::of("Ikat Cotton Stole"),
            "Handloom cotton stole with double-ikat weave",
            89_900,
            "textiles",
            8,
        ),
        product(
            4,
            LocalizedText::of("Blue Pottery Bowl Set"),
            "Set of four Jaipur blue pottery bowls",
            129_900,
            "pottery",
            5,
        ),
        product(
            5,
            LocalizedText::of("Brass Oil Lamp"),
            "Cast brass deepam with peacock finial",
            59_900,
            "metalwork",
            0,
        ),
    ];
    // The in-code seed uses distinct ids, so construction cannot fail.
    Catalog::new(products).expect("demo seed ids are distinct")
}

/// The demo address book: `home`, `office`, `college`.
pub fn demo_addresses() -> AddressBook {
    let mut book = AddressBook::new();
    for (label, email, address) in [
        ("home", "home@example.com", "123 Home St, Bangalore"),
        ("office", "work@example.com", "456 Office Ave, Bangalore"),
        ("college", "college@example.com", "789 College Rd, Bangalore"),
    ] {
        book.upsert(SavedAddress::new(
            label,
            ShippingInfo {
                email: email.to_string(),
                name: "Demo User".to_string(),
                address: address.to_string(),
            },
        ));
    }
    book
}
