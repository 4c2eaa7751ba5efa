//! Render engine: cache → product cards
//!
//! Cards are rebuilt from scratch on every state change. Each card carries its
//! product id as a text tag, and its action buttons carry the same tag, so the
//! only way an action reaches the cache is through `ProductId::from_tag`.

use crate::catalog::Product;

/// Action exposed by a card button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Delete,
    Edit,
}

impl CardAction {
    pub fn label(self) -> &'static str {
        match self {
            CardAction::Delete => "Delete",
            CardAction::Edit => "Edit",
        }
    }

    /// Key that triggers this action on the selected card
    pub fn key(self) -> char {
        match self {
            CardAction::Delete => 'd',
            CardAction::Edit => 'e',
        }
    }
}

/// A button on a card, tagged with the product it acts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardButton {
    pub action: CardAction,
    pub tag: String,
}

/// Display model for one product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub tag: String,
    pub image: String,
    pub title: String,
    /// Already prefixed with the currency symbol
    pub price: String,
    pub description: String,
    pub buttons: [CardButton; 2],
}

impl ProductCard {
    pub fn button(&self, action: CardAction) -> Option<&CardButton> {
        self.buttons.iter().find(|b| b.action == action)
    }
}

/// Build one card per product, in cache order
pub fn render(products: &[Product], currency: &str) -> Vec<ProductCard> {
    products
        .iter()
        .map(|product| {
            let tag = product.id.to_tag();
            ProductCard {
                image: product.image.clone(),
                title: product.title.clone(),
                price: format!("{}{}", currency, product.price),
                description: product.description.clone(),
                buttons: [
                    CardButton {
                        action: CardAction::Delete,
                        tag: tag.clone(),
                    },
                    CardButton {
                        action: CardAction::Edit,
                        tag: tag.clone(),
                    },
                ],
                tag,
            }
        })
        .collect()
}
