//! Catalog REST client
//!
//! Four calls against `{api_url}/products`, each attempted exactly once.
//! Status codes are logged but not interpreted: only transport and decode
//! failures become a [`FetchError`].

use super::{Product, ProductDraft, ProductId};
use anyhow::{Context, Result};
use reqwest::StatusCode;
use std::fmt;
use std::future::Future;

/// Which remote operation a request or failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed catalog call. The UI reports every variant the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, reset, ...
    #[error("{operation} request failed: {message}")]
    Transport {
        operation: Operation,
        message: String,
    },
    /// Response body was not the expected JSON shape
    #[error("{operation} response could not be decoded: {message}")]
    Decode {
        operation: Operation,
        message: String,
    },
}

impl FetchError {
    fn transport(operation: Operation, err: reqwest::Error) -> Self {
        Self::Transport {
            operation,
            message: err.to_string(),
        }
    }

    fn decode(operation: Operation, err: reqwest::Error) -> Self {
        Self::Decode {
            operation,
            message: err.to_string(),
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Self::Transport { operation, .. } | Self::Decode { operation, .. } => *operation,
        }
    }
}

/// Remote catalog operations
///
/// The TUI spawns each call on its own task, so the futures must be `Send`.
pub trait CatalogApi: Clone + Send + Sync + 'static {
    fn list(&self) -> impl Future<Output = Result<Vec<Product>, FetchError>> + Send;

    fn create(
        &self,
        draft: ProductDraft,
    ) -> impl Future<Output = Result<Product, FetchError>> + Send;

    fn update(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> impl Future<Output = Result<(), FetchError>> + Send;

    fn delete(&self, id: ProductId) -> impl Future<Output = Result<(), FetchError>> + Send;
}

/// HTTP implementation of [`CatalogApi`]
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client for the service rooted at `api_url` (e.g. `https://fakestoreapi.com`)
    pub fn new(api_url: &str) -> Result<Self> {
        // No timeout: a hung request resolves whenever the connection does
        let client = reqwest::Client::builder()
            .user_agent(concat!("catalog-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = api_url.trim_end_matches('/').to_string();
        tracing::debug!("Catalog client targeting {}", base_url);

        Ok(Self { client, base_url })
    }

    fn collection_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn item_url(&self, id: ProductId) -> String {
        format!("{}/products/{}", self.base_url, id)
    }
}

fn log_status(operation: Operation, status: StatusCode) {
    if status.is_success() {
        tracing::debug!("{} returned {}", operation, status);
    } else {
        tracing::warn!("{} returned non-success status {}", operation, status);
    }
}

impl CatalogApi for CatalogClient {
    async fn list(&self) -> Result<Vec<Product>, FetchError> {
        let op = Operation::List;
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(|e| FetchError::transport(op, e))?;
        log_status(op, response.status());

        let products: Vec<Product> = response
            .json()
            .await
            .map_err(|e| FetchError::decode(op, e))?;
        tracing::info!("Fetched {} products", products.len());
        Ok(products)
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product, FetchError> {
        let op = Operation::Create;
        let response = self
            .client
            .post(self.collection_url())
            .json(&draft)
            .send()
            .await
            .map_err(|e| FetchError::transport(op, e))?;
        log_status(op, response.status());

        let product: Product = response
            .json()
            .await
            .map_err(|e| FetchError::decode(op, e))?;
        tracing::info!("Created product {} ({})", product.id, product.title);
        Ok(product)
    }

    async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<(), FetchError> {
        let op = Operation::Update;
        let response = self
            .client
            .put(self.item_url(id))
            .json(&draft)
            .send()
            .await
            .map_err(|e| FetchError::transport(op, e))?;
        log_status(op, response.status());

        tracing::info!("Updated product {}", id);
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<(), FetchError> {
        let op = Operation::Delete;
        let response = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(|e| FetchError::transport(op, e))?;
        log_status(op, response.status());

        tracing::info!("Deleted product {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, State};
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::{get, put};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    /// Requests seen by the mock server: (method, id, body)
    type Seen = Arc<Mutex<Vec<(&'static str, Option<u64>, Value)>>>;

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn mock_catalog(seen: Seen) -> Router {
        Router::new()
            .route(
                "/products",
                get(|| async {
                    Json(json!([
                        { "id": 5, "title": "Backpack", "price": 109.95, "description": "fits laptops",
                          "category": "bags", "image": "https://example.com/5.png" },
                        { "id": 7, "title": "Ring", "price": "9.99", "description": "silver",
                          "image": "https://example.com/7.png" }
                    ]))
                })
                .post(|State(seen): State<Seen>, Json(mut body): Json<Value>| async move {
                    seen.lock().unwrap().push(("POST", None, body.clone()));
                    body["id"] = json!(21);
                    Json(body)
                }),
            )
            .route(
                "/products/:id",
                put(
                    |State(seen): State<Seen>, Path(id): Path<u64>, Json(body): Json<Value>| async move {
                        seen.lock().unwrap().push(("PUT", Some(id), body.clone()));
                        Json(body)
                    },
                )
                .delete(|State(seen): State<Seen>, Path(id): Path<u64>| async move {
                    seen.lock().unwrap().push(("DELETE", Some(id), Value::Null));
                    AxumStatus::OK
                }),
            )
            .with_state(seen)
    }

    fn draft(title: &str) -> ProductDraft {
        ProductDraft {
            title: title.to_string(),
            price: "12".to_string(),
            description: "bright".to_string(),
            image: "https://picsum.photos/200".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_decodes_products_in_server_order() {
        let seen = Seen::default();
        let base = spawn_server(mock_catalog(seen)).await;
        let client = CatalogClient::new(&base).unwrap();

        let products = client.list().await.unwrap();
        let ids: Vec<_> = products.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![5, 7]);
        assert_eq!(products[0].price, "109.95");
        assert_eq!(products[1].price, "9.99");
    }

    #[tokio::test]
    async fn test_create_posts_draft_and_returns_server_id() {
        let seen = Seen::default();
        let base = spawn_server(mock_catalog(seen.clone())).await;
        let client = CatalogClient::new(&format!("{}/", base)).unwrap();

        let created = client.create(draft("Lamp")).await.unwrap();
        assert_eq!(created.id, ProductId(21));
        assert_eq!(created.title, "Lamp");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "POST");
        assert_eq!(seen[0].2["title"], "Lamp");
        assert!(seen[0].2.get("id").is_none());
    }

    #[tokio::test]
    async fn test_update_and_delete_target_item_path() {
        let seen = Seen::default();
        let base = spawn_server(mock_catalog(seen.clone())).await;
        let client = CatalogClient::new(&base).unwrap();

        client.update(ProductId(3), draft("Desk")).await.unwrap();
        client.delete(ProductId(4)).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].0, "PUT");
        assert_eq!(seen[0].1, Some(3));
        assert_eq!(seen[0].2["title"], "Desk");
        assert_eq!(seen[1].0, "DELETE");
        assert_eq!(seen[1].1, Some(4));
    }

    #[tokio::test]
    async fn test_undecodable_list_is_fetch_error() {
        let router = Router::new().route("/products", get(|| async { "<html>oops</html>" }));
        let base = spawn_server(router).await;
        let client = CatalogClient::new(&base).unwrap();

        let err = client.list().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
        assert_eq!(err.operation(), Operation::List);
    }

    #[tokio::test]
    async fn test_error_status_on_delete_is_not_inspected() {
        let router = Router::new().route(
            "/products/:id",
            axum::routing::delete(|| async { AxumStatus::INTERNAL_SERVER_ERROR }),
        );
        let base = spawn_server(router).await;
        let client = CatalogClient::new(&base).unwrap();

        assert!(client.delete(ProductId(1)).await.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Grab a free port, then close it so nothing is listening
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = CatalogClient::new(&format!("http://{}", addr)).unwrap();
        let err = client.create(draft("Lamp")).await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Transport {
                operation: Operation::Create,
                ..
            }
        ));
    }
}
