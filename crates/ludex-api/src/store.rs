//! Store contract consumed by the table orchestrator
//!
//! The orchestrator fetches one page at a time and deletes by id; it never
//! needs the rest of a service's surface. Keeping the contract this narrow
//! lets the table layer run against a fake store in tests.

use async_trait::async_trait;
use ludex_core::{EntityRow, ListQuery, Page};

use crate::error::ApiResult;

#[async_trait]
pub trait EntityStore<T: EntityRow>: Send + Sync {
    async fn list(&self, query: ListQuery) -> ApiResult<Page<T>>;

    async fn delete(&self, id: i64) -> ApiResult<()>;
}
