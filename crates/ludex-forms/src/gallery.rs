//! Game gallery modal
//!
//! Lists a game's images, uploads queued files one at a time, deletes
//! images, and selects the cover. Every mutation is followed by a gallery
//! reload; one failing upload never stops the rest of its batch.

use std::path::PathBuf;

use gpui::prelude::FluentBuilder;
use gpui::{
    Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window, div, px,
};
use ludex_api::{MediaService, runtime};
use ludex_core::{Game, GameImage};
use ludex_ui::{
    ActiveTheme, Button, ButtonVariants, Disableable, Icon, IconName, InputEvent, Sizable,
    TextInputState, h_flex, modal_footer, modal_header, modal_overlay, modal_panel, v_flex,
};

use crate::FormEvent;

pub struct GameGallery {
    media: MediaService,
    game: Game,
    images: Vec<GameImage>,
    queued: Vec<PathBuf>,
    path_input: Entity<TextInputState>,
    pending_path: String,
    loading: bool,
    uploading: bool,
    /// True once any mutation succeeded, so closing reports `Saved`.
    mutated: bool,
    error: Option<SharedString>,
    _subscriptions: Vec<gpui::Subscription>,
}

impl GameGallery {
    pub fn new(media: MediaService, game: Game, cx: &mut Context<Self>) -> Self {
        let path_input = cx.new(|cx| TextInputState::new(cx).placeholder("Path to image file"));
        let subscriptions = vec![cx.subscribe(
            &path_input,
            |this: &mut Self, _, event: &InputEvent, cx| match event {
                InputEvent::Changed(text) => this.pending_path = text.clone(),
                InputEvent::Submitted(_) => this.queue_file(cx),
            },
        )];

        let mut this = Self {
            media,
            game,
            images: Vec::new(),
            queued: Vec::new(),
            path_input,
            pending_path: String::new(),
            loading: true,
            uploading: false,
            mutated: false,
            error: None,
            _subscriptions: subscriptions,
        };
        this.reload(cx);
        this
    }

    fn reload(&mut self, cx: &mut Context<Self>) {
        self.loading = true;
        let media = self.media.clone();
        let game_id = self.game.id;
        cx.spawn(async move |view, cx| {
            let joined = runtime::spawn(async move { media.game_gallery(game_id).await }).await;
            let result = match joined {
                Ok(result) => result.map_err(|e| e.to_string()),
                Err(err) => Err(err.to_string()),
            };
            _ = view.update(cx, |view, cx| {
                view.loading = false;
                match result {
                    Ok(images) => {
                        view.images = images;
                        view.error = None;
                    }
                    Err(err) => {
                        tracing::error!(%err, game_id, "gallery load failed");
                        view.error = Some("Failed to load the gallery".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }

    fn queue_file(&mut self, cx: &mut Context<Self>) {
        let path = self.pending_path.trim().to_string();
        if path.is_empty() {
            return;
        }
        self.queued.push(PathBuf::from(path));
        self.pending_path.clear();
        self.path_input.update(cx, |input, cx| input.clear(cx));
        cx.notify();
    }

    /// Upload the queue sequentially, best-effort, then reload.
    fn upload_queued(&mut self, cx: &mut Context<Self>) {
        if self.uploading || self.queued.is_empty() {
            return;
        }
        self.uploading = true;
        self.error = None;
        cx.notify();

        let media = self.media.clone();
        let game_id = self.game.id;
        let paths = std::mem::take(&mut self.queued);

        cx.spawn(async move |view, cx| {
            let joined = runtime::spawn(async move {
                let mut files = Vec::new();
                let mut unreadable = 0usize;
                for path in &paths {
                    match MediaService::read_file(path) {
                        Ok(file) => files.push(file),
                        Err(err) => {
                            tracing::warn!(%err, "skipping unreadable file");
                            unreadable += 1;
                        }
                    }
                }
                let outcomes = media.upload_game_batch(game_id, files).await;
                let failed =
                    unreadable + outcomes.iter().filter(|o| !o.succeeded()).count();
                let succeeded = outcomes.iter().filter(|o| o.succeeded()).count();
                (succeeded, failed)
            })
            .await;

            _ = view.update(cx, |view, cx| {
                view.uploading = false;
                match joined {
                    Ok((succeeded, failed)) => {
                        if succeeded > 0 {
                            view.mutated = true;
                        }
                        if failed > 0 {
                            view.error =
                                Some(format!("{failed} upload(s) failed").into());
                        }
                        view.reload(cx);
                    }
                    Err(err) => {
                        tracing::error!(%err, "upload task failed");
                        view.error = Some("Uploads failed".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }

    fn select_cover(&mut self, image_id: i64, cx: &mut Context<Self>) {
        let media = self.media.clone();
        let game_id = self.game.id;
        cx.spawn(async move |view, cx| {
            let joined = runtime::spawn(async move {
                media.select_game_cover(game_id, image_id).await
            })
            .await;
            let result = match joined {
                Ok(result) => result.map_err(|e| e.to_string()),
                Err(err) => Err(err.to_string()),
            };
            _ = view.update(cx, |view, cx| {
                match result {
                    Ok(()) => {
                        view.mutated = true;
                        view.game.cover_id = Some(image_id);
                        view.error = None;
                    }
                    Err(err) => {
                        tracing::error!(%err, image_id, "cover selection failed");
                        view.error = Some("Could not set the cover".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }

    fn delete_image(&mut self, image_id: i64, cx: &mut Context<Self>) {
        let media = self.media.clone();
        cx.spawn(async move |view, cx| {
            let joined =
                runtime::spawn(async move { media.delete_image(image_id).await }).await;
            let result = match joined {
                Ok(result) => result.map_err(|e| e.to_string()),
                Err(err) => Err(err.to_string()),
            };
            _ = view.update(cx, |view, cx| {
                match result {
                    Ok(()) => {
                        view.mutated = true;
                        view.reload(cx);
                    }
                    Err(err) => {
                        tracing::error!(%err, image_id, "image deletion failed");
                        view.error = Some("Could not delete the image".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }

    fn close(&mut self, cx: &mut Context<Self>) {
        if self.mutated {
            cx.emit(FormEvent::Saved);
        } else {
            cx.emit(FormEvent::Closed);
        }
    }
}

impl gpui::EventEmitter<FormEvent> for GameGallery {}

impl Render for GameGallery {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();
        let cover_id = self.game.cover_id;

        let mut list = v_flex().px_4().py_3().gap_2().w_full();

        if self.loading {
            list = list.child(
                div()
                    .text_size(px(12.))
                    .text_color(theme.muted_foreground)
                    .child("Loading..."),
            );
        } else if self.images.is_empty() && self.queued.is_empty() {
            list = list.child(
                div()
                    .text_size(px(12.))
                    .text_color(theme.muted_foreground)
                    .child("No images yet"),
            );
        }

        for (ix, image) in self.images.clone().into_iter().enumerate() {
            let image_id = image.id;
            let is_cover = cover_id == Some(image_id);
            list = list.child(
                h_flex()
                    .w_full()
                    .gap_2()
                    .child(
                        Icon::new(IconName::Image)
                            .size_4()
                            .text_color(theme.muted_foreground),
                    )
                    .child(
                        div()
                            .flex_1()
                            .text_size(px(12.))
                            .text_color(theme.foreground)
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
                        Button::new(("gallery-cover", ix))
                            .label("Set cover")
                            .ghost()
                            .xsmall()
                            .disabled(is_cover)
                            .on_click(cx.listener(move |this: &mut Self, _, _, cx| {
                                this.select_cover(image_id, cx);
                            })),
                    )
                    .child(
                        Button::new(("gallery-delete", ix))
                            .icon(IconName::Trash)
                            .ghost()
                            .xsmall()
                            .danger()
                            .on_click(cx.listener(move |this: &mut Self, _, _, cx| {
                                this.delete_image(image_id, cx);
                            })),
                    ),
            );
        }

        for (ix, path) in self.queued.clone().into_iter().enumerate() {
            list = list.child(
                h_flex()
                    .w_full()
                    .gap_2()
                    .child(
                        div()
                            .flex_1()
                            .text_size(px(12.))
                            .text_color(theme.muted_foreground)
                            .child(format!("(queued) {}", path.display())),
                    )
                    .child(
                        Button::new(("queued-remove", ix))
                            .icon(IconName::X)
                            .ghost()
                            .xsmall()
                            .on_click(cx.listener(move |this: &mut Self, _, _, cx| {
                                if ix < this.queued.len() {
                                    this.queued.remove(ix);
                                    cx.notify();
                                }
                            })),
                    ),
            );
        }

        list = list.child(
            h_flex()
                .w_full()
                .gap_2()
                .child(div().flex_1().child(self.path_input.clone()))
                .child(
                    Button::new("gallery-queue")
                        .icon(IconName::Plus)
                        .label("Add")
                        .small()
                        .on_click(cx.listener(|this: &mut Self, _, _, cx| this.queue_file(cx))),
                )
                .child(
                    Button::new("gallery-upload")
                        .label(if self.uploading {
                            "Uploading..."
                        } else {
                            "Upload"
                        })
                        .primary()
                        .small()
                        .disabled(self.uploading || self.queued.is_empty())
                        .on_click(
                            cx.listener(|this: &mut Self, _, _, cx| this.upload_queued(cx)),
                        ),
                ),
        );

        modal_overlay(cx).child(
            modal_panel(520., cx)
                .child(modal_header(
                    format!("Gallery — {}", self.game.title),
                    cx.listener(|this: &mut Self, _, _, cx| this.close(cx)),
                    cx,
                ))
                .child(list)
                .child(
                    modal_footer(self.error.clone(), cx).child(
                        Button::new("gallery-close")
                            .label("Close")
                            .ghost()
                            .on_click(cx.listener(|this: &mut Self, _, _, cx| this.close(cx))),
                    ),
                ),
        )
    }
}
