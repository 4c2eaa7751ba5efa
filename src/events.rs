// Messages between the TUI event loop and catalog request tasks
//
// The loop turns user actions into a Request, spawns it, and later receives
// the matching Outcome on a channel. State is only touched when the Outcome
// is applied, so nothing changes ahead of the server's answer.

use crate::catalog::{CatalogApi, FetchError, Product, ProductDraft, ProductId};

/// A catalog call to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    List,
    Create(ProductDraft),
    Update(ProductId, ProductDraft),
    Delete(ProductId),
}

/// The result of a finished [`Request`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Listed(Result<Vec<Product>, FetchError>),
    Created(Result<Product, FetchError>),
    Updated {
        id: ProductId,
        draft: ProductDraft,
        result: Result<(), FetchError>,
    },
    Deleted {
        id: ProductId,
        result: Result<(), FetchError>,
    },
}

impl Request {
    /// Run the call exactly once against `client`
    pub async fn execute<C: CatalogApi>(self, client: &C) -> Outcome {
        match self {
            Request::List => Outcome::Listed(client.list().await),
            Request::Create(draft) => Outcome::Created(client.create(draft).await),
            Request::Update(id, draft) => {
                let result = client.update(id, draft.clone()).await;
                Outcome::Updated { id, draft, result }
            }
            Request::Delete(id) => Outcome::Deleted {
                id,
                result: client.delete(id).await,
            },
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Request::List => "GET /products".to_string(),
            Request::Create(_) => "POST /products".to_string(),
            Request::Update(id, _) => format!("PUT /products/{}", id),
            Request::Delete(id) => format!("DELETE /products/{}", id),
        }
    }
}
