use serde::{Deserialize, Serialize};

use artisans_core::{DomainError, DomainResult};

use crate::product::{Product, ProductId};

/// Read-only product catalog.
///
/// Supplied once at startup and never mutated by the store. Construction
/// validates that product ids are unique; everything after that is lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a product list, rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = std::collections::HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(DomainError::conflict(format!(
                    "duplicate product id in catalog: {}",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// Parse a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("catalog seed: {e}")))?;
        Self::new(products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products whose category tag matches exactly.
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Distinct category tags in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for product in &self.products {
            if !out.contains(&product.category.as_str()) {
                out.push(&product.category);
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artisans_core::LocalizedText;

    fn product(id: u32, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: LocalizedText::of(format!("Product {id}")),
            description: LocalizedText::of("description"),
            price: 1_000 * u64::from(id),
            category: category.to_string(),
            image_url: format!("/images/{id}.jpg"),
            stock: 5,
        }
    }

    #[test]
    fn new_accepts_unique_ids() {
        let catalog = Catalog::new(vec![product(1, "pottery"), product(2, "textiles")]).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let err = Catalog::new(vec![product(1, "pottery"), product(1, "textiles")]).unwrap_err();
        match err {
            DomainError::Conflict(msg) => assert!(msg.contains("duplicate product id")),
            _ => panic!("expected Conflict error"),
        }
    }

    #[test]
    fn get_finds_by_id() {
        let catalog = Catalog::new(vec![product(1, "pottery"), product(2, "textiles")]).unwrap();
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().category, "textiles");
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn by_category_filters_exact_tag() {
        let catalog = Catalog::new(vec![
            product(1, "pottery"),
            product(2, "textiles"),
            product(3, "pottery"),
        ])
        .unwrap();
        let pottery = catalog.by_category("pottery");
        assert_eq!(pottery.len(), 2);
        assert!(pottery.iter().all(|p| p.category == "pottery"));
        assert!(catalog.by_category("Pottery").is_empty());
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let catalog = Catalog::new(vec![
            product(1, "pottery"),
            product(2, "textiles"),
            product(3, "pottery"),
            product(4, "woodwork"),
        ])
        .unwrap();
        assert_eq!(catalog.categories(), vec!["pottery", "textiles", "woodwork"]);
    }

    #[test]
    fn from_json_parses_a_seed() {
        let json = r#"[
            {
                "id": 1,
                "name": {"en": "Terracotta Vase"},
                "description": {"en": "Hand-thrown terracotta vase"},
                "price": 49900,
                "image_url": "/images/terracotta-vase.jpg",
                "category": "pottery",
                "stock": 12
            }
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(ProductId::new(1)).unwrap().price, 49_900);
    }

    #[test]
    fn from_json_rejects_malformed_seed() {
        let err = Catalog::from_json("not json").unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("catalog seed")),
            _ => panic!("expected Validation error"),
        }
    }

    #[test]
    fn from_json_rejects_duplicate_ids_in_seed() {
        let json = serde_json::to_string(&vec![product(1, "pottery"), product(1, "pottery")])
            .unwrap();
        assert!(matches!(
            Catalog::from_json(&json),
            Err(DomainError::Conflict(_))
        ));
    }
}
