//! Tests for the API services against an in-memory transport

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use ludex_core::{Article, CollectionStatus, Game, ListQuery};
use parking_lot::Mutex;
use serde_json::{Value, json};

use crate::error::{ApiError, ApiResult};
use crate::services::*;
use crate::transport::{FilePart, Transport};

// ============================================================================
// Fake transport
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Recorded {
    method: &'static str,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
    fields: Vec<(String, String)>,
    filename: Option<String>,
}

#[derive(Default)]
struct FakeTransport {
    calls: Mutex<Vec<Recorded>>,
    responses: Mutex<VecDeque<ApiResult<Value>>>,
    token: Mutex<Option<String>>,
}

impl FakeTransport {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn respond_with(&self, value: Value) {
        self.responses.lock().push_back(Ok(value));
    }

    fn fail_next(&self, message: &str) {
        self.responses
            .lock()
            .push_back(Err(ApiError::Request(message.to_string())));
    }

    fn next_response(&self) -> ApiResult<Value> {
        self.responses
            .lock()
            .pop_front()
            .unwrap_or(Ok(Value::Null))
    }

    fn record(&self, call: Recorded) {
        self.calls.lock().push(call);
    }

    fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> ApiResult<Value> {
        self.record(Recorded {
            method: "GET",
            path: path.to_string(),
            query: query.to_vec(),
            body: None,
            fields: Vec::new(),
            filename: None,
        });
        self.next_response()
    }

    async fn post(&self, path: &str, body: Value) -> ApiResult<Value> {
        self.record(Recorded {
            method: "POST",
            path: path.to_string(),
            query: Vec::new(),
            body: Some(body),
            fields: Vec::new(),
            filename: None,
        });
        self.next_response()
    }

    async fn put(&self, path: &str, body: Value) -> ApiResult<Value> {
        self.record(Recorded {
            method: "PUT",
            path: path.to_string(),
            query: Vec::new(),
            body: Some(body),
            fields: Vec::new(),
            filename: None,
        });
        self.next_response()
    }

    async fn delete(&self, path: &str) -> ApiResult<Value> {
        self.record(Recorded {
            method: "DELETE",
            path: path.to_string(),
            query: Vec::new(),
            body: None,
            fields: Vec::new(),
            filename: None,
        });
        self.next_response()
    }

    async fn post_multipart(
        &self,
        path: &str,
        fields: Vec<(String, String)>,
        file: FilePart,
    ) -> ApiResult<Value> {
        self.record(Recorded {
            method: "MULTIPART",
            path: path.to_string(),
            query: Vec::new(),
            body: None,
            fields,
            filename: Some(file.filename.clone()),
        });
        self.next_response()
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.lock() = token;
    }

    fn image_url(&self, image_id: i64) -> String {
        format!("fake://images/{image_id}")
    }
}

fn game_page() -> Value {
    json!({
        "data": [
            {"id": 1, "title": "Outer Wilds"},
            {"id": 2, "title": "Hades"}
        ],
        "totalItems": 25,
        "totalPages": 3,
        "currentPage": 1
    })
}

// ============================================================================
// EntityService
// ============================================================================

mod entity_service_tests {
    use super::*;

    #[tokio::test]
    async fn list_hits_collection_endpoint_with_query_pairs() {
        let transport = FakeTransport::new();
        transport.respond_with(game_page());
        let service: EntityService<Game> = EntityService::new(transport.clone());

        let mut query = ListQuery::default();
        query.toggle_sort("title");
        let page = service.list(query).await.unwrap();

        assert_eq!(page.len(), 2);
        assert_eq!(page.total_items, 25);
        assert_eq!(page.total_pages(10), 3);

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "GET");
        assert_eq!(calls[0].path, "games");
        assert!(
            calls[0]
                .query
                .contains(&("page".to_string(), "1".to_string()))
        );
        assert!(
            calls[0]
                .query
                .contains(&("sortField".to_string(), "title".to_string()))
        );
    }

    #[tokio::test]
    async fn delete_targets_the_item_path() {
        let transport = FakeTransport::new();
        let service: EntityService<Game> = EntityService::new(transport.clone());

        service.delete(7).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].method, "DELETE");
        assert_eq!(calls[0].path, "games/7");
    }

    #[tokio::test]
    async fn create_posts_the_draft_body() {
        let transport = FakeTransport::new();
        transport.respond_with(json!({"id": 9, "title": "Tunic"}));
        let service: EntityService<Game> = EntityService::new(transport.clone());

        let draft = crate::payloads::GameDraft {
            title: "Tunic".into(),
            ..Default::default()
        };
        let created = service.create(&draft).await.unwrap();
        assert_eq!(created.id, 9);

        let calls = transport.calls();
        assert_eq!(calls[0].method, "POST");
        assert_eq!(calls[0].path, "games");
        assert_eq!(calls[0].body.as_ref().unwrap()["title"], "Tunic");
    }

    #[tokio::test]
    async fn list_error_propagates() {
        let transport = FakeTransport::new();
        transport.fail_next("connection refused");
        let service: EntityService<Game> = EntityService::new(transport);

        let err = service.list(ListQuery::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::Request(_)));
    }
}

// ============================================================================
// ArticleService publication workflow
// ============================================================================

mod article_service_tests {
    use super::*;

    fn article_json(id: i64, published: bool) -> Value {
        json!({"id": id, "title": "Review", "published": published})
    }

    #[tokio::test]
    async fn publish_posts_to_the_publish_path() {
        let transport = FakeTransport::new();
        transport.respond_with(article_json(4, true));
        let service = ArticleService::new(transport.clone());

        let article = service.publish(4).await.unwrap();
        assert!(article.published);
        assert_eq!(transport.calls()[0].path, "articles/4/publish");
    }

    #[tokio::test]
    async fn unpublish_posts_to_the_unpublish_path() {
        let transport = FakeTransport::new();
        transport.respond_with(article_json(4, false));
        let service = ArticleService::new(transport.clone());

        let article = service.unpublish(4).await.unwrap();
        assert!(!article.published);
        assert_eq!(transport.calls()[0].path, "articles/4/unpublish");
    }

    #[tokio::test]
    async fn schedule_sends_the_timestamp() {
        let transport = FakeTransport::new();
        transport.respond_with(article_json(4, false));
        let service = ArticleService::new(transport.clone());

        let at = chrono::DateTime::parse_from_rfc3339("2026-09-01T12:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        service.schedule(4, at).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].path, "articles/4/schedule");
        let body = calls[0].body.as_ref().unwrap();
        assert!(
            body["scheduledAt"]
                .as_str()
                .unwrap()
                .starts_with("2026-09-01")
        );
    }

    #[tokio::test]
    async fn article_list_goes_through_the_entity_endpoint() {
        let transport = FakeTransport::new();
        transport.respond_with(json!({
            "data": [article_json(1, true)],
            "totalItems": 1,
            "totalPages": 1,
            "currentPage": 1
        }));
        let service = ArticleService::new(transport.clone());

        let page: ludex_core::Page<Article> =
            service.entity().list(ListQuery::default()).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(transport.calls()[0].path, "articles");
    }
}

// ============================================================================
// MediaService sequential batch uploads
// ============================================================================

mod media_service_tests {
    use super::*;

    fn file(name: &str) -> FilePart {
        FilePart::image(name, vec![0xFF, 0xD8])
    }

    #[tokio::test]
    async fn batch_upload_is_sequential_and_best_effort() {
        let transport = FakeTransport::new();
        // File 1 succeeds, file 2 fails, file 3 succeeds; the failure must
        // not short-circuit the rest of the batch.
        transport.respond_with(json!({"id": 11, "gameId": 5, "filename": "a.png"}));
        transport.fail_next("disk full");
        transport.respond_with(json!({"id": 13, "gameId": 5, "filename": "c.png"}));

        let service = MediaService::new(transport.clone());
        let outcomes = service
            .upload_game_batch(5, vec![file("a.png"), file("b.png"), file("c.png")])
            .await;

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].succeeded());
        assert!(!outcomes[1].succeeded());
        assert!(outcomes[2].succeeded());

        // All three files were attempted, in submission order.
        let filenames: Vec<_> = transport
            .calls()
            .iter()
            .filter_map(|c| c.filename.clone())
            .collect();
        assert_eq!(filenames, vec!["a.png", "b.png", "c.png"]);
    }

    #[tokio::test]
    async fn game_upload_carries_only_the_image_part() {
        let transport = FakeTransport::new();
        transport.respond_with(json!({"id": 21, "gameId": 3, "filename": "shot.png"}));
        let service = MediaService::new(transport.clone());

        service.upload_game_image(3, file("shot.png")).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].path, "games/3/images");
        assert!(calls[0].fields.is_empty());
    }

    #[tokio::test]
    async fn article_upload_carries_article_and_game_ids() {
        let transport = FakeTransport::new();
        transport.respond_with(json!({"id": 31, "articleId": 8, "filename": "cover.jpg"}));
        let service = MediaService::new(transport.clone());

        service
            .upload_article_image(8, Some(2), file("cover.jpg"))
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].path, "articles/images");
        assert!(
            calls[0]
                .fields
                .contains(&("articleId".to_string(), "8".to_string()))
        );
        assert!(
            calls[0]
                .fields
                .contains(&("gameId".to_string(), "2".to_string()))
        );
    }

    #[tokio::test]
    async fn cover_selection_puts_to_the_cover_path() {
        let transport = FakeTransport::new();
        let service = MediaService::new(transport.clone());

        service.select_game_cover(3, 21).await.unwrap();
        service.select_article_cover(8, 31).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].method, "PUT");
        assert_eq!(calls[0].path, "games/3/cover/21");
        assert_eq!(calls[1].path, "articles/8/cover/31");
    }
}

// ============================================================================
// Collection / Social / Auth
// ============================================================================

mod collection_service_tests {
    use super::*;

    #[tokio::test]
    async fn list_narrows_by_status() {
        let transport = FakeTransport::new();
        transport.respond_with(json!([]));
        let service = CollectionService::new(transport.clone());

        service.list(Some(CollectionStatus::Wished)).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].path, "collection");
        assert_eq!(
            calls[0].query,
            vec![("status".to_string(), "wished".to_string())]
        );
    }

    #[tokio::test]
    async fn add_posts_game_and_status() {
        let transport = FakeTransport::new();
        transport.respond_with(json!({
            "id": 1,
            "game": {"id": 9, "title": "Hades"},
            "status": "owned"
        }));
        let service = CollectionService::new(transport.clone());

        let entry = service.add(9, CollectionStatus::Owned).await.unwrap();
        assert_eq!(entry.game.id, 9);

        let body = transport.calls()[0].body.clone().unwrap();
        assert_eq!(body["gameId"], 9);
        assert_eq!(body["status"], "owned");
    }
}

mod social_service_tests {
    use super::*;

    #[tokio::test]
    async fn conversations_and_messages_paths() {
        let transport = FakeTransport::new();
        transport.respond_with(json!([]));
        transport.respond_with(json!([]));
        let service = SocialService::new(transport.clone());

        service.conversations().await.unwrap();
        service.messages(12).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].path, "messages/conversations");
        assert_eq!(calls[1].path, "messages/conversations/12");
    }

    #[tokio::test]
    async fn accept_and_decline_target_the_request() {
        let transport = FakeTransport::new();
        let service = SocialService::new(transport.clone());

        service.accept_request(5).await.unwrap();
        service.decline_request(6).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].path, "friends/requests/5/accept");
        assert_eq!(calls[1].path, "friends/requests/6/decline");
    }
}

mod auth_service_tests {
    use super::*;

    #[tokio::test]
    async fn login_installs_the_bearer_token() {
        let transport = FakeTransport::new();
        transport.respond_with(json!({
            "token": "tok-123",
            "user": {"id": 1, "username": "ada"}
        }));
        let service = AuthService::new(transport.clone());

        let session = service.login("ada", "hunter2").await.unwrap();
        assert_eq!(session.user.username, "ada");
        assert_eq!(transport.token.lock().as_deref(), Some("tok-123"));

        service.sign_out();
        assert!(transport.token.lock().is_none());
    }
}
