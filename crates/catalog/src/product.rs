use core::str::FromStr;

use serde::{Deserialize, Serialize};

use artisans_core::{DomainError, LocalizedText};

/// Product identifier, unique within a catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for ProductId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .parse::<u32>()
            .map_err(|e| DomainError::validation(format!("ProductId: {e}")))?;
        Ok(Self(id))
    }
}

/// A catalog product. Immutable after catalog load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: LocalizedText,
    pub description: LocalizedText,
    /// Price in smallest currency unit (e.g., paise/cents).
    pub price: u64,
    /// Category tag used by the listing filter.
    pub category: String,
    pub image_url: String,
    pub stock: u32,
}

impl Product {
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artisans_core::Language;

    fn sample_product() -> Product {
        Product {
            id: ProductId::new(7),
            name: LocalizedText::of("Terracotta Vase"),
            description: LocalizedText::of("Hand-thrown terracotta vase"),
            price: 49_900,
            category: "pottery".to_string(),
            image_url: "/images/terracotta-vase.jpg".to_string(),
            stock: 12,
        }
    }

    #[test]
    fn product_id_parses_from_str() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId::new(42));
    }

    #[test]
    fn product_id_rejects_non_numeric() {
        let err = "abc".parse::<ProductId>().unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("ProductId")),
            _ => panic!("expected Validation error"),
        }
    }

    #[test]
    fn product_id_serializes_transparently() {
        assert_eq!(serde_json::to_string(&ProductId::new(3)).unwrap(), "3");
    }

    #[test]
    fn stock_zero_means_out_of_stock() {
        let mut product = sample_product();
        assert!(product.is_in_stock());
        product.stock = 0;
        assert!(!product.is_in_stock());
    }

    #[test]
    fn product_round_trips_through_json() {
        let product = sample_product();
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
        assert_eq!(back.name.get(Language::En), "Terracotta Vase");
    }
}
