//! Local product cache
//!
//! In-memory mirror of the last known server state. Only mutated after a
//! remote call has succeeded, never ahead of it.

use super::{Product, ProductId, ProductPatch};

/// Ordered product sequence (server order on list, then appended on create)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCache {
    products: Vec<Product>,
}

impl ProductCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole sequence (after a list)
    pub fn set_all(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Add a product at the end (after a create)
    pub fn append(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Drop the entry with this id. Absent ids leave the cache untouched.
    pub fn remove_by_id(&mut self, id: ProductId) {
        if let Some(idx) = self.position(id) {
            self.products.remove(idx);
        }
    }

    /// Merge `patch` into the entry with this id. Absent ids leave the cache untouched.
    pub fn replace_by_id(&mut self, id: ProductId, patch: ProductPatch) {
        if let Some(product) = self.products.iter_mut().find(|p| p.id == id) {
            product.apply(patch);
        }
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by card tag, normalizing the tag first
    pub fn get_by_tag(&self, tag: &str) -> Option<&Product> {
        match ProductId::from_tag(tag) {
            Ok(id) => self.get(id),
            Err(e) => {
                tracing::warn!("Ignoring card action: {}", e);
                None
            }
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }
}
