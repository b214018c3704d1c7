//! Product Store Client
//!
//! CRUD plus the reorder endpoint. The reorder call doubles as the commit
//! capability of the reordering core.

use async_trait::async_trait;
use reorder_core::OrderCommitter;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{sort_catalog, Product, ProductDraft, ProductId};

#[derive(Serialize)]
struct ReorderBody<'a> {
    ids: &'a [ProductId],
}

#[derive(Clone, Debug)]
pub struct ProductApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ProductApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// `GET /products`, in catalog order
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.config.endpoint(&["products"]);
        let mut products: Vec<Product> = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        sort_catalog(&mut products);
        tracing::debug!(count = products.len(), "fetched products");
        Ok(products)
    }

    /// `POST /products`; the store assigns the id
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        let url = self.config.endpoint(&["products"]);
        let created: Product = self
            .client
            .post(url)
            .json(draft)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        tracing::info!(id = %created.id, "created product");
        Ok(created)
    }

    /// `PUT /products/{id}`
    pub async fn update_product(
        &self,
        id: &ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, ApiError> {
        let url = self.config.endpoint(&["products", &id.to_string()]);
        let updated = self
            .client
            .put(url)
            .json(draft)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        tracing::info!(%id, "updated product");
        Ok(updated)
    }

    /// `DELETE /products/{id}`
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        let url = self.config.endpoint(&["products", &id.to_string()]);
        self.client.delete(url).send().await?.error_for_status()?;
        tracing::info!(%id, "deleted product");
        Ok(())
    }

    /// `PUT /products/reorder` with `{ "ids": [...] }`
    pub async fn reorder_products(&self, ids: &[ProductId]) -> Result<(), ApiError> {
        let url = self.config.endpoint(&["products", "reorder"]);
        self.client
            .put(url)
            .json(&ReorderBody { ids })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl OrderCommitter<ProductId> for ProductApi {
    type Error = ApiError;

    async fn commit_order(&self, ids: Vec<ProductId>) -> Result<(), ApiError> {
        self.reorder_products(&ids).await
    }
}
