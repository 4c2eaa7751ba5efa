//! Catalog domain: product records, identifiers, drafts and patches
//!
//! The remote service owns product identity. Everything in here is plain data
//! plus the conversions needed at the edges:
//! - JSON decoding that tolerates numeric or textual prices
//! - Card tag → `ProductId` normalization (see [`ProductId::from_tag`])

pub mod cache;
pub mod client;

pub use cache::ProductCache;
pub use client::{CatalogApi, CatalogClient, FetchError};

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Server-assigned product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

/// A card tag that does not hold a valid product identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid product tag {tag:?}")]
pub struct ParseIdError {
    pub tag: String,
}

impl ProductId {
    /// Normalize a rendered card tag into a cache identifier.
    ///
    /// Cards carry their product id as text (the same way a DOM node carries a
    /// `data-id` attribute). Cache lookups compare integers, so every action
    /// coming from a card goes through here first.
    pub fn from_tag(tag: &str) -> Result<Self, ParseIdError> {
        tag.trim()
            .parse::<u64>()
            .map(ProductId)
            .map_err(|_| ParseIdError {
                tag: tag.to_string(),
            })
    }

    /// Render the identifier as a card tag
    pub fn to_tag(self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product record as last seen on the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(deserialize_with = "price_text")]
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

impl Product {
    /// Merge the fields present in `patch`, leaving the id and absent fields alone
    pub fn apply(&mut self, patch: ProductPatch) {
        let ProductPatch {
            title,
            price,
            description,
            image,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(image) = image {
            self.image = image;
        }
    }
}

/// Product payload without an identifier, sent on create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDraft {
    pub title: String,
    pub price: String,
    pub description: String,
    pub image: String,
}

/// Partial product used to update a cached record in place
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl From<ProductDraft> for ProductPatch {
    fn from(draft: ProductDraft) -> Self {
        Self {
            title: Some(draft.title),
            price: Some(draft.price),
            description: Some(draft.description),
            image: Some(draft.image),
        }
    }
}

/// Accept `"price": 109.95` as well as `"price": "109.95"`.
///
/// The public catalog returns numbers, while echoed drafts come back as strings.
fn price_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawPrice::deserialize(deserializer)? {
        RawPrice::Text(text) => text,
        RawPrice::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId(1),
            title: "A".to_string(),
            price: "10".to_string(),
            description: "d".to_string(),
            image: "i".to_string(),
        }
    }

    #[test]
    fn test_from_tag_parses_numeric_tags() {
        assert_eq!(ProductId::from_tag("7"), Ok(ProductId(7)));
        assert_eq!(ProductId::from_tag(" 42 "), Ok(ProductId(42)));
    }

    #[test]
    fn test_from_tag_rejects_garbage() {
        assert!(ProductId::from_tag("").is_err());
        assert!(ProductId::from_tag("abc").is_err());
        assert!(ProductId::from_tag("-1").is_err());

        let err = ProductId::from_tag("5x").unwrap_err();
        assert_eq!(err.tag, "5x");
    }

    #[test]
    fn test_tag_round_trip() {
        let id = ProductId(19);
        assert_eq!(ProductId::from_tag(&id.to_tag()), Ok(id));
    }

    #[test]
    fn test_decode_numeric_price_and_extra_fields() {
        let json = r#"{
            "id": 3,
            "title": "Mens Cotton Jacket",
            "price": 55.99,
            "description": "great outerwear",
            "category": "men's clothing",
            "image": "https://example.com/jacket.png",
            "rating": { "rate": 4.7, "count": 500 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId(3));
        assert_eq!(product.price, "55.99");
        assert_eq!(product.image, "https://example.com/jacket.png");
    }

    #[test]
    fn test_decode_textual_price_and_missing_optional_fields() {
        let json = r#"{ "id": 21, "title": "Lamp", "price": "12" }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, "12");
        assert_eq!(product.description, "");
        assert_eq!(product.image, "");
    }

    #[test]
    fn test_apply_keeps_id_and_absent_fields() {
        let mut product = sample();
        product.apply(ProductPatch {
            title: Some("B".to_string()),
            ..Default::default()
        });

        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.title, "B");
        assert_eq!(product.price, "10");
        assert_eq!(product.description, "d");
        assert_eq!(product.image, "i");
    }

    #[test]
    fn test_draft_serializes_without_id() {
        let draft = ProductDraft {
            title: "Lamp".to_string(),
            price: "12".to_string(),
            description: "bright".to_string(),
            image: "https://picsum.photos/200".to_string(),
        };

        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["price"], "12");
    }
}
