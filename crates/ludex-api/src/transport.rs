//! HTTP transport abstraction
//!
//! Services talk to the platform through the [`Transport`] trait; the real
//! implementation is [`HttpTransport`] over `reqwest`. Tests inject an
//! in-memory fake instead, so every service path is exercisable without a
//! server.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use url::Url;

use crate::error::{ApiError, ApiResult};

/// An in-memory file ready for multipart upload.
///
/// The UI reads files eagerly before handing them to the service layer;
/// uploads are issued one at a time, so at most one file's bytes are in
/// flight.
#[derive(Debug, Clone)]
pub struct FilePart {
    pub field: String,
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn image(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            field: "image".to_string(),
            filename: filename.into(),
            bytes,
        }
    }
}

/// Abstract REST transport. Paths are relative to the API base URL.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str, query: &[(String, String)]) -> ApiResult<Value>;

    async fn post(&self, path: &str, body: Value) -> ApiResult<Value>;

    async fn put(&self, path: &str, body: Value) -> ApiResult<Value>;

    async fn delete(&self, path: &str) -> ApiResult<Value>;

    /// Multipart POST: plain text fields plus a single file part.
    async fn post_multipart(
        &self,
        path: &str,
        fields: Vec<(String, String)>,
        file: FilePart,
    ) -> ApiResult<Value>;

    /// Install or clear the bearer token used for authenticated calls.
    fn set_token(&self, token: Option<String>);

    /// Public URL for a stored image, used by thumbnails and galleries.
    fn image_url(&self, image_id: i64) -> String;
}

/// `reqwest`-backed transport against the platform REST API.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    token: RwLock<Option<String>>,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        // A trailing slash matters for Url::join: without it the last path
        // segment of the base would be replaced instead of extended.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            token: RwLock::new(None),
        })
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{path}: {e}")))
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token.read().as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute(&self, builder: reqwest::RequestBuilder) -> ApiResult<Value> {
        let response = self.authorize(builder).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "API request failed");
            return Err(ApiError::from_status(status.as_u16(), body));
        }

        if body.is_empty() {
            // Mutation endpoints may return an empty body.
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> ApiResult<Value> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, params = query.len(), "GET");
        self.execute(self.client.get(url).query(query)).await
    }

    async fn post(&self, path: &str, body: Value) -> ApiResult<Value> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "POST");
        self.execute(self.client.post(url).json(&body)).await
    }

    async fn put(&self, path: &str, body: Value) -> ApiResult<Value> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "PUT");
        self.execute(self.client.put(url).json(&body)).await
    }

    async fn delete(&self, path: &str) -> ApiResult<Value> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "DELETE");
        self.execute(self.client.delete(url)).await
    }

    async fn post_multipart(
        &self,
        path: &str,
        fields: Vec<(String, String)>,
        file: FilePart,
    ) -> ApiResult<Value> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, filename = %file.filename, "POST multipart");

        let mut form = reqwest::multipart::Form::new();
        for (key, value) in fields {
            form = form.text(key, value);
        }
        let part = reqwest::multipart::Part::bytes(file.bytes).file_name(file.filename);
        form = form.part(file.field, part);

        self.execute(self.client.post(url).multipart(form)).await
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }

    fn image_url(&self, image_id: i64) -> String {
        self.base_url
            .join(&format!("images/{image_id}"))
            .map(|u| u.to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let transport = HttpTransport::new("https://api.ludex.dev/v1").unwrap();
        assert_eq!(
            transport.endpoint("games").unwrap().as_str(),
            "https://api.ludex.dev/v1/games"
        );
    }

    #[test]
    fn image_url_points_at_images_endpoint() {
        let transport = HttpTransport::new("https://api.ludex.dev/v1/").unwrap();
        assert_eq!(
            transport.image_url(42),
            "https://api.ludex.dev/v1/images/42"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            HttpTransport::new("not a url"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }
}
