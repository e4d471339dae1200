use thiserror::Error;
use tracing::{debug, info};

use super::product::Product;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InventoryError {
    #[error("Product '{0}' already exists in the inventory")]
    DuplicateProduct(String),
}

/// In-memory product collection. Keeps insertion order and never holds two
/// products whose trimmed, lowercased names are equal.
#[derive(Debug, Default)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: Product) -> Result<(), InventoryError> {
        if self.find(product.name()).is_some() {
            return Err(InventoryError::DuplicateProduct(product.name().to_string()));
        }

        info!("Adding product '{}' to inventory", product.name());
        self.products.push(product);
        Ok(())
    }

    /// Case-insensitive lookup on the trimmed name. An empty query never matches.
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.matches_name(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.matches_name(name))
    }

    pub fn remove(&mut self, name: &str) -> bool {
        match self.products.iter().position(|p| p.matches_name(name)) {
            Some(index) => {
                let removed = self.products.remove(index);
                info!("Removed product '{}' from inventory", removed.name());
                true
            }
            None => {
                debug!("No product named '{}' to remove", name.trim());
                false
            }
        }
    }

    pub fn total_value(&self) -> f64 {
        self.products.iter().map(Product::total_value).sum()
    }

    pub fn list(&self) -> &[Product] {
        &self.products
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

    fn product(name: &str, price: &str, quantity: &str) -> Product {
        Product::parse(name, price, quantity).expect("valid product")
    }

    #[test]
    fn test_new_inventory_is_empty() {
        let inventory = Inventory::new();
        assert!(inventory.is_empty());
        assert_eq!(inventory.total_value(), 0.0);
        assert!(inventory.list().is_empty());
    }

    #[test]
    fn test_duplicate_name_leaves_collection_unchanged() {
        let mut inventory = Inventory::new();
        inventory.add(product("Pen", "1.0", "1")).unwrap();

        let err = inventory.add(product(" pen ", "2.0", "2")).unwrap_err();
        assert_eq!(err, InventoryError::DuplicateProduct("pen".to_string()));
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.list()[0].price(), 1.0);
    }

    #[test]
    fn test_empty_query_is_not_found() {
        let mut inventory = Inventory::new();
        inventory.add(product("Pen", "1.0", "1")).unwrap();
        assert!(inventory.find("").is_none());
        assert!(inventory.find("   ").is_none());
        assert!(!inventory.remove(""));
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let mut inventory = Inventory::new();
        inventory.add(product("Pen", "1.0", "10")).unwrap();

        inventory
            .find_mut("PEN")
            .expect("pen present")
            .set_quantity("20")
            .unwrap();
        assert_eq!(inventory.total_value(), 20.0);
    }
}
