//! Publish / unpublish confirmation

use gpui::{
    Context, IntoElement, ParentElement, Render, SharedString, Styled, Window, div, px,
};
use ludex_api::{ArticleService, runtime};
use ludex_core::Article;
use ludex_ui::{
    ActiveTheme, Button, ButtonVariants, Disableable, modal_footer, modal_header,
    modal_overlay, modal_panel,
};

use crate::FormEvent;

pub struct PublishDialog {
    service: ArticleService,
    article: Article,
    saving: bool,
    error: Option<SharedString>,
}

impl PublishDialog {
    pub fn new(service: ArticleService, article: Article) -> Self {
        Self {
            service,
            article,
            saving: false,
            error: None,
        }
    }

    fn confirm(&mut self, cx: &mut Context<Self>) {
        if self.saving {
            return;
        }
        self.saving = true;
        self.error = None;
        cx.notify();

        let service = self.service.clone();
        let article_id = self.article.id;
        let unpublish = self.article.published;
        cx.spawn(async move |view, cx| {
            let joined = runtime::spawn(async move {
                if unpublish {
                    service.unpublish(article_id).await.map(|_| ())
                } else {
                    service.publish(article_id).await.map(|_| ())
                }
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
                        tracing::error!(%err, article_id, "publish toggle failed");
                        view.error = Some("The publication change failed".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }
}

impl gpui::EventEmitter<FormEvent> for PublishDialog {}

impl Render for PublishDialog {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();
        let (title, message, confirm_label) = if self.article.published {
            (
                "Unpublish article",
                format!(
                    "\"{}\" will no longer be visible to readers.",
                    self.article.title
                ),
                "Unpublish",
            )
        } else {
            (
                "Publish article",
                format!("\"{}\" will become visible to readers.", self.article.title),
                "Publish",
            )
        };

        modal_overlay(cx).child(
            modal_panel(420., cx)
                .child(modal_header(
                    title,
                    cx.listener(|_, _, _, cx| cx.emit(FormEvent::Closed)),
                    cx,
                ))
                .child(
                    div()
                        .px_4()
                        .py_4()
                        .text_size(px(13.))
                        .text_color(theme.foreground)
                        .child(message),
                )
                .child(
                    modal_footer(self.error.clone(), cx)
                        .child(
                            Button::new("publish-cancel")
                                .label("Cancel")
                                .ghost()
                                .on_click(cx.listener(|_, _, _, cx| cx.emit(FormEvent::Closed))),
                        )
                        .child(
                            Button::new("publish-confirm")
                                .label(confirm_label)
                                .primary()
                                .disabled(self.saving)
                                .on_click(
                                    cx.listener(|this: &mut Self, _, _, cx| this.confirm(cx)),
                                ),
                        ),
                ),
        )
    }
}
