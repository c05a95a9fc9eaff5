//! Article scheduling dialog

use chrono::{DateTime, NaiveDateTime, Utc};
use gpui::{
    Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window, div, px,
};
use ludex_api::{ArticleService, runtime};
use ludex_core::Article;
use ludex_ui::{
    ActiveTheme, Button, ButtonVariants, Disableable, TextInputState, modal_footer,
    modal_header, modal_overlay, modal_panel, v_flex,
};

use crate::FormEvent;
use crate::common::labeled_field;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct ScheduleDialog {
    service: ArticleService,
    article: Article,
    datetime_input: Entity<TextInputState>,
    saving: bool,
    error: Option<SharedString>,
}

impl ScheduleDialog {
    pub fn new(service: ArticleService, article: Article, cx: &mut Context<Self>) -> Self {
        let datetime_input =
            cx.new(|cx| TextInputState::new(cx).placeholder("YYYY-MM-DD HH:MM"));

        if let Some(at) = article.scheduled_at {
            datetime_input.update(cx, |input, cx| {
                input.set_value(at.format(DATETIME_FORMAT).to_string(), cx);
            });
        }

        Self {
            service,
            article,
            datetime_input,
            saving: false,
            error: None,
        }
    }

    fn parse_datetime(&self, cx: &Context<Self>) -> Result<DateTime<Utc>, String> {
        let text = self.datetime_input.read(cx).value().trim().to_string();
        let naive = NaiveDateTime::parse_from_str(&text, DATETIME_FORMAT)
            .map_err(|_| "Use the format YYYY-MM-DD HH:MM".to_string())?;
        Ok(naive.and_utc())
    }

    fn schedule(&mut self, cx: &mut Context<Self>) {
        if self.saving {
            return;
        }
        let at = match self.parse_datetime(cx) {
            Ok(at) => at,
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
        let article_id = self.article.id;
        cx.spawn(async move |view, cx| {
            let joined =
                runtime::spawn(async move { service.schedule(article_id, at).await }).await;
            let result = match joined {
                Ok(result) => result.map(|_| ()).map_err(|e| e.to_string()),
                Err(err) => Err(err.to_string()),
            };
            _ = view.update(cx, |view, cx| {
                view.saving = false;
                match result {
                    Ok(()) => cx.emit(FormEvent::Saved),
                    Err(err) => {
                        tracing::error!(%err, article_id, "scheduling failed");
                        view.error = Some("Could not schedule the article".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }
}

impl gpui::EventEmitter<FormEvent> for ScheduleDialog {}

impl Render for ScheduleDialog {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();

        modal_overlay(cx).child(
            modal_panel(420., cx)
                .child(modal_header(
                    format!("Schedule \"{}\"", self.article.title),
                    cx.listener(|_, _, _, cx| cx.emit(FormEvent::Closed)),
                    cx,
                ))
                .child(
                    v_flex()
                        .px_4()
                        .py_3()
                        .gap_3()
                        .w_full()
                        .child(
                            div()
                                .text_size(px(12.))
                                .text_color(theme.muted_foreground)
                                .child("The article will be published automatically at the given time (UTC)."),
                        )
                        .child(labeled_field("Publish at", &self.datetime_input, cx)),
                )
                .child(
                    modal_footer(self.error.clone(), cx)
                        .child(
                            Button::new("schedule-cancel")
                                .label("Cancel")
                                .ghost()
                                .on_click(cx.listener(|_, _, _, cx| cx.emit(FormEvent::Closed))),
                        )
                        .child(
                            Button::new("schedule-save")
                                .label(if self.saving {
                                    "Scheduling..."
                                } else {
                                    "Schedule"
                                })
                                .primary()
                                .disabled(self.saving)
                                .on_click(
                                    cx.listener(|this: &mut Self, _, _, cx| this.schedule(cx)),
                                ),
                        ),
                ),
        )
    }
}
