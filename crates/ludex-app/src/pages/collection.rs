//! Personal collection page
//!
//! Management affordances are gated on the auth context; signed-out users
//! get the sign-in form instead. Every mutation is followed by a full
//! re-fetch of the collection, never an in-place patch.

use gpui::prelude::FluentBuilder;
use gpui::{
    Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window, div, px,
};
use ludex_api::runtime;
use ludex_core::{CollectionEntry, CollectionStatus};
use ludex_ui::{
    ActiveTheme, Button, ButtonVariants, Sizable, h_flex, v_flex,
};

use crate::app::AppServices;
use crate::auth::{AuthState, SignInView};

pub struct CollectionPage {
    services: AppServices,
    entries: Vec<CollectionEntry>,
    status_filter: Option<CollectionStatus>,
    loading: bool,
    error: Option<SharedString>,
    sign_in: Option<Entity<SignInView>>,
}

impl CollectionPage {
    pub fn new(services: AppServices, cx: &mut Context<Self>) -> Self {
        cx.observe_global::<AuthState>(|this: &mut Self, cx| {
            if cx.global::<AuthState>().signed_in() {
                this.sign_in = None;
                this.reload(cx);
            }
            cx.notify();
        })
        .detach();

        let mut this = Self {
            services,
            entries: Vec::new(),
            status_filter: None,
            loading: false,
            error: None,
            sign_in: None,
        };
        if cx.global::<AuthState>().signed_in() {
            this.reload(cx);
        }
        this
    }

    fn reload(&mut self, cx: &mut Context<Self>) {
        self.loading = true;
        cx.notify();

        let collection = self.services.collection.clone();
        let status = self.status_filter;
        cx.spawn(async move |view, cx| {
            let joined = runtime::spawn(async move { collection.list(status).await }).await;
            let result = match joined {
                Ok(result) => result.map_err(|e| e.to_string()),
                Err(err) => Err(err.to_string()),
            };
            _ = view.update(cx, |view, cx| {
                view.loading = false;
                match result {
                    Ok(entries) => {
                        view.entries = entries;
                        view.error = None;
                    }
                    Err(err) => {
                        tracing::error!(%err, "collection load failed");
                        view.error = Some("Failed to load your collection".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }

    fn set_status_filter(&mut self, status: Option<CollectionStatus>, cx: &mut Context<Self>) {
        self.status_filter = status;
        self.reload(cx);
    }

    fn move_entry(&mut self, entry_id: i64, status: CollectionStatus, cx: &mut Context<Self>) {
        let collection = self.services.collection.clone();
        cx.spawn(async move |view, cx| {
            let joined =
                runtime::spawn(async move { collection.set_status(entry_id, status).await })
                    .await;
            let result = match joined {
                Ok(result) => result.map(|_| ()).map_err(|e| e.to_string()),
                Err(err) => Err(err.to_string()),
            };
            _ = view.update(cx, |view, cx| match result {
                Ok(()) => view.reload(cx),
                Err(err) => {
                    tracing::error!(%err, entry_id, "collection update failed");
                    view.error = Some("Could not update the entry".into());
                    cx.notify();
                }
            });
        })
        .detach();
    }

    fn remove_entry(&mut self, entry_id: i64, cx: &mut Context<Self>) {
        let collection = self.services.collection.clone();
        cx.spawn(async move |view, cx| {
            let joined =
                runtime::spawn(async move { collection.remove(entry_id).await }).await;
            let result = match joined {
                Ok(result) => result.map_err(|e| e.to_string()),
                Err(err) => Err(err.to_string()),
            };
            _ = view.update(cx, |view, cx| match result {
                Ok(()) => view.reload(cx),
                Err(err) => {
                    tracing::error!(%err, entry_id, "collection removal failed");
                    view.error = Some("Could not remove the entry".into());
                    cx.notify();
                }
            });
        })
        .detach();
    }

    fn render_entry(&self, ix: usize, entry: &CollectionEntry, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();
        let entry_id = entry.id;
        let other_status = match entry.status {
            CollectionStatus::Owned => CollectionStatus::Wished,
            CollectionStatus::Wished => CollectionStatus::Owned,
        };
        let move_label = match other_status {
            CollectionStatus::Owned => "Move to owned",
            CollectionStatus::Wished => "Move to wishlist",
        };

        v_flex()
            .w(px(220.))
            .p_3()
            .gap_1()
            .rounded(theme.radius_lg)
            .border_1()
            .border_color(theme.border)
            .bg(theme.secondary)
            .child(
                div()
                    .text_size(px(14.))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(theme.foreground)
                    .overflow_hidden()
                    .whitespace_nowrap()
                    .child(entry.game.title.clone()),
            )
            .child(
                div()
                    .text_size(px(12.))
                    .text_color(theme.muted_foreground)
                    .child(
                        entry
                            .game
                            .release_year
                            .map(|y| y.to_string())
                            .unwrap_or_default(),
                    ),
            )
            .child(
                div()
                    .text_size(px(11.))
                    .text_color(theme.primary)
                    .child(entry.status.display_name()),
            )
            .child(
                h_flex()
                    .gap_1()
                    .pt_1()
                    .child(
                        Button::new(("entry-move", ix))
                            .label(move_label)
                            .ghost()
                            .xsmall()
                            .on_click(cx.listener(move |this: &mut Self, _, _, cx| {
                                this.move_entry(entry_id, other_status, cx);
                            })),
                    )
                    .child(
                        Button::new(("entry-remove", ix))
                            .label("Remove")
                            .ghost()
                            .xsmall()
                            .danger()
                            .on_click(cx.listener(move |this: &mut Self, _, _, cx| {
                                this.remove_entry(entry_id, cx);
                            })),
                    ),
            )
    }
}

impl Render for CollectionPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if !cx.global::<AuthState>().signed_in() {
            let auth = self.services.auth.clone();
            let sign_in = self
                .sign_in
                .get_or_insert_with(|| cx.new(|cx| SignInView::new(auth, cx)))
                .clone();
            return v_flex().size_full().child(sign_in);
        }

        let theme = cx.theme().clone();
        let entries = self.entries.clone();

        let filter_button = |id: &'static str,
                             label: &'static str,
                             value: Option<CollectionStatus>,
                             current: Option<CollectionStatus>,
                             cx: &mut Context<Self>| {
            let mut button = Button::new(id).label(label).small().on_click(cx.listener(
                move |this: &mut Self, _, _, cx| {
                    this.set_status_filter(value, cx);
                },
            ));
            if value == current {
                button = button.primary();
            } else {
                button = button.ghost();
            }
            button
        };

        let mut grid = h_flex().gap_3().flex_wrap().items_start();
        for (ix, entry) in entries.iter().enumerate() {
            grid = grid.child(self.render_entry(ix, entry, cx));
        }

        v_flex()
            .size_full()
            .px_4()
            .pt_3()
            .gap_3()
            .bg(theme.table)
            .child(
                h_flex()
                    .w_full()
                    .justify_between()
                    .child(
                        div()
                            .text_size(px(16.))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(theme.foreground)
                            .child("My collection"),
                    )
                    .child(
                        h_flex()
                            .gap_1()
                            .child(filter_button("filter-all", "All", None, self.status_filter, cx))
                            .child(filter_button(
                                "filter-owned",
                                "Owned",
                                Some(CollectionStatus::Owned),
                                self.status_filter,
                                cx,
                            ))
                            .child(filter_button(
                                "filter-wished",
                                "Wishlist",
                                Some(CollectionStatus::Wished),
                                self.status_filter,
                                cx,
                            )),
                    ),
            )
            .when_some(self.error.clone(), |this, error| {
                this.child(
                    div()
                        .text_size(px(12.))
                        .text_color(theme.danger)
                        .child(error),
                )
            })
            .child(if self.loading && entries.is_empty() {
                div()
                    .text_size(px(12.))
                    .text_color(theme.muted_foreground)
                    .child("Loading...")
                    .into_any_element()
            } else if entries.is_empty() {
                div()
                    .text_size(px(12.))
                    .text_color(theme.muted_foreground)
                    .child("Nothing here yet. Add games from the catalogue.")
                    .into_any_element()
            } else {
                grid.into_any_element()
            })
    }
}
