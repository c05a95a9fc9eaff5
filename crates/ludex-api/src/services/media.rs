//! Image endpoints: uploads, galleries, cover selection
//!
//! Uploads run strictly one at a time. The loop awaits each multipart
//! request before starting the next, keeping a single upload in flight and
//! making progress reporting predictable. A failing file is recorded and
//! the loop continues with the rest of the batch.

use std::sync::Arc;

use ludex_core::{ArticleImage, GameImage};

use crate::error::{ApiError, ApiResult};
use crate::transport::{FilePart, Transport};

/// Result of one file in an upload batch.
#[derive(Debug)]
pub struct UploadOutcome {
    pub filename: String,
    pub result: ApiResult<i64>,
}

impl UploadOutcome {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Clone)]
pub struct MediaService {
    transport: Arc<dyn Transport>,
}

impl MediaService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Public URL for a stored image id.
    pub fn image_url(&self, image_id: i64) -> String {
        self.transport.image_url(image_id)
    }

    #[tracing::instrument(skip(self))]
    pub async fn game_gallery(&self, game_id: i64) -> ApiResult<Vec<GameImage>> {
        let value = self
            .transport
            .get(&format!("games/{game_id}/images"), &[])
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn article_gallery(&self, article_id: i64) -> ApiResult<Vec<ArticleImage>> {
        let value = self
            .transport
            .get(&format!("articles/{article_id}/images"), &[])
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Upload one image into a game's gallery. The multipart body carries
    /// only the `image` field.
    #[tracing::instrument(skip(self, file), fields(filename = %file.filename))]
    pub async fn upload_game_image(&self, game_id: i64, file: FilePart) -> ApiResult<i64> {
        let value = self
            .transport
            .post_multipart(&format!("games/{game_id}/images"), Vec::new(), file)
            .await?;
        let image: GameImage = serde_json::from_value(value)?;
        tracing::info!(image_id = image.id, "game image uploaded");
        Ok(image.id)
    }

    /// Upload one article image. Article uploads carry `articleId` (and
    /// `gameId` when the image is tied to a referenced game) alongside the
    /// `image` part.
    #[tracing::instrument(skip(self, file), fields(filename = %file.filename))]
    pub async fn upload_article_image(
        &self,
        article_id: i64,
        game_id: Option<i64>,
        file: FilePart,
    ) -> ApiResult<i64> {
        let mut fields = vec![("articleId".to_string(), article_id.to_string())];
        if let Some(game_id) = game_id {
            fields.push(("gameId".to_string(), game_id.to_string()));
        }
        let value = self
            .transport
            .post_multipart("articles/images", fields, file)
            .await?;
        let image: ArticleImage = serde_json::from_value(value)?;
        tracing::info!(image_id = image.id, "article image uploaded");
        Ok(image.id)
    }

    /// Upload a batch of game images sequentially, best-effort.
    ///
    /// One failing file never aborts the remainder; the caller gets an
    /// outcome per file in submission order.
    pub async fn upload_game_batch(
        &self,
        game_id: i64,
        files: Vec<FilePart>,
    ) -> Vec<UploadOutcome> {
        let mut outcomes = Vec::with_capacity(files.len());
        for file in files {
            let filename = file.filename.clone();
            let result = self.upload_game_image(game_id, file).await;
            if let Err(err) = &result {
                tracing::warn!(%filename, %err, "upload failed, continuing batch");
            }
            outcomes.push(UploadOutcome { filename, result });
        }
        outcomes
    }

    /// Upload a batch of article images sequentially, best-effort.
    pub async fn upload_article_batch(
        &self,
        article_id: i64,
        game_id: Option<i64>,
        files: Vec<FilePart>,
    ) -> Vec<UploadOutcome> {
        let mut outcomes = Vec::with_capacity(files.len());
        for file in files {
            let filename = file.filename.clone();
            let result = self.upload_article_image(article_id, game_id, file).await;
            if let Err(err) = &result {
                tracing::warn!(%filename, %err, "upload failed, continuing batch");
            }
            outcomes.push(UploadOutcome { filename, result });
        }
        outcomes
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_image(&self, image_id: i64) -> ApiResult<()> {
        self.transport
            .delete(&format!("images/{image_id}"))
            .await?;
        tracing::info!("image deleted");
        Ok(())
    }

    /// Make an already-uploaded gallery image the game's cover.
    #[tracing::instrument(skip(self))]
    pub async fn select_game_cover(&self, game_id: i64, image_id: i64) -> ApiResult<()> {
        self.transport
            .put(
                &format!("games/{game_id}/cover/{image_id}"),
                serde_json::Value::Null,
            )
            .await?;
        tracing::info!("game cover selected");
        Ok(())
    }

    /// Make an already-uploaded article image the article's cover.
    #[tracing::instrument(skip(self))]
    pub async fn select_article_cover(&self, article_id: i64, image_id: i64) -> ApiResult<()> {
        self.transport
            .put(
                &format!("articles/{article_id}/cover/{image_id}"),
                serde_json::Value::Null,
            )
            .await?;
        tracing::info!("article cover selected");
        Ok(())
    }

    /// Read a file from disk into an upload part. Returns `UploadFailed`
    /// rather than an IO error so per-file failures stay inside the batch
    /// semantics.
    pub fn read_file(path: &std::path::Path) -> ApiResult<FilePart> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let bytes = std::fs::read(path)
            .map_err(|e| ApiError::UploadFailed(format!("{}: {e}", path.display())))?;
        Ok(FilePart::image(filename, bytes))
    }
}
