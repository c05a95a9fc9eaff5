//! Article create/edit form with the image manager

use std::path::PathBuf;

use gpui::prelude::FluentBuilder;
use gpui::{
    AnyElement, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled,
    Window, div, px,
};
use ludex_api::{ArticleService, MediaService, payloads::ArticleDraft, runtime};
use ludex_core::Article;
use ludex_ui::{
    ActiveTheme, Button, ButtonVariants, Disableable, IconName, InputEvent, Sizable,
    TextInputState, h_flex, modal_footer, modal_header, modal_overlay, modal_panel, v_flex,
};

use crate::FormEvent;
use crate::article_images::{CoverChoice, ImageReconciler};
use crate::common::{labeled, labeled_field};

pub struct ArticleForm {
    service: ArticleService,
    media: MediaService,
    editing: Option<i64>,

    title_input: Entity<TextInputState>,
    summary_input: Entity<TextInputState>,
    body_input: Entity<TextInputState>,
    image_path_input: Entity<TextInputState>,

    /// Image edits, populated once the gallery loads (edit mode only).
    images: Option<ImageReconciler>,
    pending_path: String,
    game_ids: Vec<i64>,

    saving: bool,
    error: Option<SharedString>,
    _subscriptions: Vec<gpui::Subscription>,
}

impl ArticleForm {
    pub fn new(
        service: ArticleService,
        media: MediaService,
        item: Option<&Article>,
        cx: &mut Context<Self>,
    ) -> Self {
        let title_input = cx.new(|cx| TextInputState::new(cx).placeholder("Title"));
        let summary_input = cx.new(|cx| TextInputState::new(cx).placeholder("Summary"));
        let body_input = cx.new(|cx| TextInputState::new(cx).placeholder("Body").multiline());
        let image_path_input =
            cx.new(|cx| TextInputState::new(cx).placeholder("Path to image file"));

        if let Some(article) = item {
            title_input.update(cx, |input, cx| input.set_value(article.title.clone(), cx));
            summary_input
                .update(cx, |input, cx| input.set_value(article.summary.clone(), cx));
            body_input.update(cx, |input, cx| input.set_value(article.body.clone(), cx));
        }

        let subscriptions = vec![cx.subscribe(
            &image_path_input,
            |this: &mut Self, _, event: &InputEvent, cx| match event {
                InputEvent::Changed(text) => {
                    this.pending_path = text.clone();
                }
                InputEvent::Submitted(_) => this.queue_image(cx),
            },
        )];

        let mut this = Self {
            service,
            media,
            editing: item.map(|article| article.id),
            title_input,
            summary_input,
            body_input,
            image_path_input,
            images: None,
            pending_path: String::new(),
            game_ids: item.map(|article| article.game_ids.clone()).unwrap_or_default(),
            saving: false,
            error: None,
            _subscriptions: subscriptions,
        };

        if this.editing.is_some() {
            this.load_gallery(cx);
        }
        this
    }

    fn load_gallery(&mut self, cx: &mut Context<Self>) {
        let Some(article_id) = self.editing else {
            return;
        };
        let media = self.media.clone();
        cx.spawn(async move |view, cx| {
            let joined =
                runtime::spawn(async move { media.article_gallery(article_id).await }).await;
            let images = match joined {
                Ok(Ok(images)) => images,
                Ok(Err(err)) => {
                    tracing::warn!(%err, article_id, "could not load article gallery");
                    Vec::new()
                }
                Err(err) => {
                    tracing::warn!(%err, "gallery load task failed");
                    Vec::new()
                }
            };
            _ = view.update(cx, |view, cx| {
                view.images = Some(ImageReconciler::new(images));
                cx.notify();
            });
        })
        .detach();
    }

    fn queue_image(&mut self, cx: &mut Context<Self>) {
        let path = self.pending_path.trim().to_string();
        if path.is_empty() {
            return;
        }
        if let Some(images) = &mut self.images {
            images.queue(PathBuf::from(path));
            self.pending_path.clear();
            self.image_path_input.update(cx, |input, cx| input.clear(cx));
            cx.notify();
        }
    }

    fn build_draft(&self, cx: &Context<Self>) -> Result<ArticleDraft, String> {
        let title = self.title_input.read(cx).value().trim().to_string();
        if title.is_empty() {
            return Err("Title is required".to_string());
        }
        Ok(ArticleDraft {
            title,
            summary: self.summary_input.read(cx).value().to_string(),
            body: self.body_input.read(cx).value().to_string(),
            game_ids: self.game_ids.clone(),
        })
    }

    fn save(&mut self, cx: &mut Context<Self>) {
        if self.saving {
            return;
        }
        let draft = match self.build_draft(cx) {
            Ok(draft) => draft,
            Err(message) => {
                self.error = Some(message.into());
                cx.notify();
                return;
            }
        };

        self.saving = true;
        self.error = None;
        cx.notify();

        let service = self.service.clone();
        let media = self.media.clone();
        let editing = self.editing;
        let plan = self.images.as_ref().map(|images| images.plan());

        cx.spawn(async move |view, cx| {
            let joined = runtime::spawn(async move {
                let article_id = match editing {
                    Some(id) => {
                        service.entity().update(id, &draft).await?;
                        id
                    }
                    None => service.entity().create(&draft).await?.id,
                };

                // Reconcile images: uploads first (one at a time), then
                // deletions, then the cover patch, whose id may come from
                // an upload that just ran.
                if let Some(plan) = plan {
                    let mut uploaded_ids = Vec::with_capacity(plan.uploads.len());
                    for path in &plan.uploads {
                        let uploaded = match MediaService::read_file(path) {
                            Ok(file) => {
                                media.upload_article_image(article_id, None, file).await.ok()
                            }
                            Err(err) => {
                                tracing::warn!(%err, "skipping unreadable image");
                                None
                            }
                        };
                        uploaded_ids.push(uploaded);
                    }

                    for image_id in plan.deletions {
                        if let Err(err) = media.delete_image(image_id).await {
                            tracing::warn!(%err, image_id, "image deletion failed");
                        }
                    }

                    if let Some(cover_id) =
                        ImageReconciler::resolve_cover(plan.cover, &uploaded_ids)
                    {
                        media.select_article_cover(article_id, cover_id).await?;
                    }
                }

                Ok::<(), ludex_api::ApiError>(())
            })
            .await;

            let result = match joined {
                Ok(result) => result.map_err(|e| e.to_string()),
                Err(err) => Err(err.to_string()),
            };

            _ = view.update(cx, |view, cx| {
                view.saving = false;
                match result {
                    Ok(()) => cx.emit(FormEvent::Saved),
                    Err(err) => {
                        tracing::error!(%err, "saving article failed");
                        view.error = Some("Could not save the article".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }

    fn render_image_section(&self, cx: &mut Context<Self>) -> AnyElement {
        let theme = cx.theme().clone();
        let Some(images) = &self.images else {
            return div()
                .text_size(px(12.))
                .text_color(theme.muted_foreground)
                .child("Loading images...")
                .into_any_element();
        };

        let mut section = v_flex().gap_2().w_full();

        for (ix, image) in images.existing().iter().enumerate() {
            let id = image.id;
            let removed = images.is_removed(id);
            let is_cover = images.cover() == CoverChoice::Existing(id);

            section = section.child(
                h_flex()
                    .w_full()
                    .gap_2()
                    .child(
                        div()
                            .flex_1()
                            .text_size(px(12.))
                            .text_color(if removed {
                                theme.muted_foreground
                            } else {
                                theme.foreground
                            })
                            .when(removed, |this| this.line_through())
                            .child(image.filename.clone()),
                    )
                    .when(is_cover, |this| {
                        this.child(
                            div()
                                .text_size(px(11.))
                                .text_color(theme.primary)
                                .child("cover"),
                        )
                    })
                    .child(
                        Button::new(("image-cover", ix))
                            .icon(IconName::Image)
                            .ghost()
                            .xsmall()
                            .disabled(removed)
                            .on_click(cx.listener(move |this: &mut Self, _, _, cx| {
                                if let Some(images) = &mut this.images {
                                    images.choose_existing_cover(id);
                                    cx.notify();
                                }
                            })),
                    )
                    .child(
                        Button::new(("image-remove", ix))
                            .icon(IconName::Trash)
                            .ghost()
                            .xsmall()
                            .on_click(cx.listener(move |this: &mut Self, _, _, cx| {
                                if let Some(images) = &mut this.images {
                                    images.toggle_removed(id);
                                    cx.notify();
                                }
                            })),
                    ),
            );
        }

        for (ix, path) in images.pending().iter().enumerate() {
            let is_cover = images.cover() == CoverChoice::Pending(ix);
            section = section.child(
                h_flex()
                    .w_full()
                    .gap_2()
                    .child(
                        div()
                            .flex_1()
                            .text_size(px(12.))
                            .text_color(theme.foreground)
                            .child(format!("(new) {}", path.display())),
                    )
                    .when(is_cover, |this| {
                        this.child(
                            div()
                                .text_size(px(11.))
                                .text_color(theme.primary)
                                .child("cover"),
                        )
                    })
                    .child(
                        Button::new(("pending-cover", ix))
                            .icon(IconName::Image)
                            .ghost()
                            .xsmall()
                            .on_click(cx.listener(move |this: &mut Self, _, _, cx| {
                                if let Some(images) = &mut this.images {
                                    images.choose_pending_cover(ix);
                                    cx.notify();
                                }
                            })),
                    )
                    .child(
                        Button::new(("pending-remove", ix))
                            .icon(IconName::X)
                            .ghost()
                            .xsmall()
                            .on_click(cx.listener(move |this: &mut Self, _, _, cx| {
                                if let Some(images) = &mut this.images {
                                    images.unqueue(ix);
                                    cx.notify();
                                }
                            })),
                    ),
            );
        }

        section = section.child(
            h_flex()
                .w_full()
                .gap_2()
                .child(div().flex_1().child(self.image_path_input.clone()))
                .child(
                    Button::new("queue-image")
                        .icon(IconName::Plus)
                        .label("Add")
                        .small()
                        .on_click(cx.listener(|this: &mut Self, _, _, cx| {
                            this.queue_image(cx)
                        })),
                ),
        );

        section.into_any_element()
    }
}

impl gpui::EventEmitter<FormEvent> for ArticleForm {}

impl Render for ArticleForm {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let title = if self.editing.is_some() {
            "Edit article"
        } else {
            "New article"
        };

        let mut content = v_flex()
            .px_4()
            .py_3()
            .gap_3()
            .w_full()
            .child(labeled_field("Title", &self.title_input, cx))
            .child(labeled_field("Summary", &self.summary_input, cx))
            .child(labeled_field("Body", &self.body_input, cx));

        if self.editing.is_some() {
            let image_section = self.render_image_section(cx);
            content = content.child(labeled("Images", image_section, cx));
        }

        modal_overlay(cx).child(
            modal_panel(560., cx)
                .child(modal_header(
                    title,
                    cx.listener(|_, _, _, cx| cx.emit(FormEvent::Closed)),
                    cx,
                ))
                .child(content)
                .child(
                    modal_footer(self.error.clone(), cx)
                        .child(
                            Button::new("article-cancel")
                                .label("Cancel")
                                .ghost()
                                .on_click(cx.listener(|_, _, _, cx| cx.emit(FormEvent::Closed))),
                        )
                        .child(
                            Button::new("article-save")
                                .label(if self.saving { "Saving..." } else { "Save" })
                                .primary()
                                .disabled(self.saving)
                                .on_click(cx.listener(|this: &mut Self, _, _, cx| this.save(cx))),
                        ),
                ),
        )
    }
}
