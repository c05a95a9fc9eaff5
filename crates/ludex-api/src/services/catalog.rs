//! Catalogue entity services
//!
//! [`EntityService`] is the generic CRUD facade every managed entity kind
//! shares; [`ArticleService`] layers the publication workflow on top of it.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ludex_core::{Article, EntityKind, EntityRow, ListQuery, Page};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiResult;
use crate::payloads::SchedulePayload;
use crate::store::EntityStore;
use crate::transport::Transport;

/// Generic list/get/create/update/delete over one entity collection.
///
/// The entity kind (and therefore the endpoint) is fixed by the row type's
/// [`EntityRow::KIND`], so a `EntityService<Game>` can only ever talk to
/// `games`.
pub struct EntityService<T> {
    transport: Arc<dyn Transport>,
    kind: EntityKind,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for EntityService<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            kind: self.kind,
            _marker: PhantomData,
        }
    }
}

impl<T> EntityService<T>
where
    T: EntityRow + DeserializeOwned,
{
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            kind: T::KIND,
            _marker: PhantomData,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    fn item_path(&self, id: i64) -> String {
        format!("{}/{id}", self.kind.endpoint())
    }

    /// Fetch one page for the given query.
    #[tracing::instrument(skip(self, query), fields(kind = %self.kind))]
    pub async fn list(&self, query: ListQuery) -> ApiResult<Page<T>> {
        let pairs = query.to_query_pairs();
        let value = self.transport.get(self.kind.endpoint(), &pairs).await?;
        let page: Page<T> = serde_json::from_value(value)?;
        tracing::debug!(rows = page.len(), total = page.total_items, "page loaded");
        Ok(page)
    }

    #[tracing::instrument(skip(self), fields(kind = %self.kind))]
    pub async fn get(&self, id: i64) -> ApiResult<T> {
        let value = self.transport.get(&self.item_path(id), &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    #[tracing::instrument(skip(self, draft), fields(kind = %self.kind))]
    pub async fn create<D: Serialize + Sync>(&self, draft: &D) -> ApiResult<T> {
        let body = serde_json::to_value(draft)?;
        let value = self.transport.post(self.kind.endpoint(), body).await?;
        tracing::info!("created");
        Ok(serde_json::from_value(value)?)
    }

    #[tracing::instrument(skip(self, draft), fields(kind = %self.kind))]
    pub async fn update<D: Serialize + Sync>(&self, id: i64, draft: &D) -> ApiResult<T> {
        let body = serde_json::to_value(draft)?;
        let value = self.transport.put(&self.item_path(id), body).await?;
        tracing::info!("updated");
        Ok(serde_json::from_value(value)?)
    }

    #[tracing::instrument(skip(self), fields(kind = %self.kind))]
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.transport.delete(&self.item_path(id)).await?;
        tracing::info!("deleted");
        Ok(())
    }
}

#[async_trait]
impl<T> EntityStore<T> for EntityService<T>
where
    T: EntityRow + DeserializeOwned,
{
    async fn list(&self, query: ListQuery) -> ApiResult<Page<T>> {
        EntityService::list(self, query).await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        EntityService::delete(self, id).await
    }
}

/// Article CRUD plus the publication workflow.
#[derive(Clone)]
pub struct ArticleService {
    entity: EntityService<Article>,
}

impl ArticleService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            entity: EntityService::new(transport),
        }
    }

    pub fn entity(&self) -> &EntityService<Article> {
        &self.entity
    }

    #[tracing::instrument(skip(self))]
    pub async fn publish(&self, id: i64) -> ApiResult<Article> {
        let value = self
            .entity
            .transport()
            .post(&format!("articles/{id}/publish"), serde_json::Value::Null)
            .await?;
        tracing::info!("article published");
        Ok(serde_json::from_value(value)?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn unpublish(&self, id: i64) -> ApiResult<Article> {
        let value = self
            .entity
            .transport()
            .post(&format!("articles/{id}/unpublish"), serde_json::Value::Null)
            .await?;
        tracing::info!("article unpublished");
        Ok(serde_json::from_value(value)?)
    }

    /// Queue the article for publication at a future instant.
    #[tracing::instrument(skip(self))]
    pub async fn schedule(&self, id: i64, at: DateTime<Utc>) -> ApiResult<Article> {
        let body = serde_json::to_value(SchedulePayload { scheduled_at: at })?;
        let value = self
            .entity
            .transport()
            .post(&format!("articles/{id}/schedule"), body)
            .await?;
        tracing::info!(%at, "article scheduled");
        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait]
impl EntityStore<Article> for ArticleService {
    async fn list(&self, query: ListQuery) -> ApiResult<Page<Article>> {
        self.entity.list(query).await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.entity.delete(id).await
    }
}
