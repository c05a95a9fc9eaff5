//! The entity table

use std::sync::Arc;

use gpui::prelude::FluentBuilder;
use gpui::{
    AnyElement, AnyView, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Subscription, Task, Window, div, px,
};
use ludex_api::{EntityStore, runtime};
use ludex_core::{EntityRow, FilterValue, ListQuery, QueryPatch};
use ludex_filters::{FilterBar, FilterBarEvent, FilterOptions, FilterPackage};
use ludex_ui::{
    ActiveTheme, Button, ButtonVariants, Disableable, Icon, IconName, Sizable, h_flex,
    modal_footer, modal_header, modal_overlay, modal_panel, v_flex,
};

use crate::actions::{RowAction, actions_for};
use crate::column::Column;
use crate::list_state::ListQueryState;
use crate::modal::ActiveModal;
use crate::pagination::{nav_targets, status_text};

/// Builds an entity form view and the subscription that routes its events
/// back into the table. `None` item means "create".
pub type FormFactory<T> =
    Box<dyn Fn(Option<&T>, &mut Window, &mut Context<EntityTable<T>>) -> (AnyView, Subscription)>;

/// The per-kind dispatch table, resolved once at construction. A `None`
/// slot means the kind has no such action.
pub struct EntityForms<T: EntityRow> {
    pub view: Option<FormFactory<T>>,
    pub edit: FormFactory<T>,
    pub create: FormFactory<T>,
    pub gallery: Option<FormFactory<T>>,
    pub schedule: Option<FormFactory<T>>,
    pub publish: Option<FormFactory<T>>,
}

pub struct EntityTableParams<T: EntityRow> {
    pub title: SharedString,
    pub columns: Vec<Column<T>>,
    pub store: Arc<dyn EntityStore<T>>,
    pub forms: EntityForms<T>,
    pub filter_package: Arc<dyn FilterPackage>,
    /// Resolver from image id to a display URL, used by the cover column.
    pub image_url: Option<Arc<dyn Fn(i64) -> String + Send + Sync>>,
    pub initial_query: Option<ListQuery>,
}

pub struct EntityTable<T: EntityRow> {
    title: SharedString,
    columns: Vec<Column<T>>,
    store: Arc<dyn EntityStore<T>>,
    forms: EntityForms<T>,
    image_url: Option<Arc<dyn Fn(i64) -> String + Send + Sync>>,

    filter_bar: Entity<FilterBar>,
    list: ListQueryState<T>,
    modal: ActiveModal<T>,
    open_form: Option<(AnyView, Subscription)>,
    /// Inline notice shown above the table (delete failures and the like).
    notice: Option<SharedString>,

    _filter_subscription: Subscription,
    _fetch_task: Task<()>,
}

impl<T: EntityRow> EntityTable<T> {
    pub fn new(params: EntityTableParams<T>, cx: &mut Context<Self>) -> Self {
        let filter_bar = cx.new(|cx| FilterBar::new(params.filter_package.clone(), cx));
        let filter_subscription = cx.subscribe(
            &filter_bar,
            |this: &mut Self, _, event: &FilterBarEvent, cx| {
                let FilterBarEvent::Changed(key, value) = event;
                this.filter_changed(key.clone(), value.clone(), cx);
            },
        );

        let mut query = params.initial_query.unwrap_or_default();
        query.filters = params.filter_package.apply(&query.filters);

        let mut this = Self {
            title: params.title,
            columns: params.columns,
            store: params.store,
            forms: params.forms,
            image_url: params.image_url,
            filter_bar,
            list: ListQueryState::new(query),
            modal: ActiveModal::None,
            open_form: None,
            notice: None,
            _filter_subscription: filter_subscription,
            _fetch_task: Task::ready(()),
        };
        this.refresh(QueryPatch::default(), cx);
        this
    }

    pub fn query(&self) -> &ListQuery {
        self.list.query()
    }

    pub fn modal(&self) -> &ActiveModal<T> {
        &self.modal
    }

    /// Push option lists (platforms, genres, ...) into the filter bar.
    pub fn set_filter_options(&mut self, options: FilterOptions, cx: &mut Context<Self>) {
        self.filter_bar
            .update(cx, |bar, cx| bar.set_options(options, cx));
    }

    /// Merge a query patch and refetch. The only fetch trigger besides
    /// construction.
    pub fn refresh(&mut self, patch: QueryPatch, cx: &mut Context<Self>) {
        self.list.merge(patch);
        let epoch = self.list.begin_fetch();
        let query = self.list.query().clone();
        let store = self.store.clone();
        cx.notify();

        self._fetch_task = cx.spawn(async move |view, cx| {
            let joined = runtime::spawn(async move { store.list(query).await }).await;
            let result = match joined {
                Ok(Ok(page)) => Ok(page),
                Ok(Err(err)) => Err(err.to_string()),
                Err(err) => Err(err.to_string()),
            };
            _ = view.update(cx, |view, cx| {
                if view.list.finish_fetch(epoch, result) {
                    cx.notify();
                }
            });
        });
    }

    pub fn page_changed(&mut self, page: usize, cx: &mut Context<Self>) {
        self.refresh(QueryPatch::page(page), cx);
    }

    pub fn sort_changed(&mut self, field: &'static str, cx: &mut Context<Self>) {
        self.list.query_mut().toggle_sort(field);
        self.refresh(QueryPatch::default(), cx);
    }

    fn filter_changed(&mut self, key: String, value: FilterValue, cx: &mut Context<Self>) {
        // Merge first, then fetch with the merged value; the page reset is
        // part of the merge.
        self.list.query_mut().set_filter(key, value);
        self.refresh(QueryPatch::default(), cx);
    }

    /// Route an action button to its modal. Assigning the modal slot
    /// replaces whatever was open: last write wins.
    pub fn open_action(
        &mut self,
        action: RowAction,
        row: T,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match action {
            RowAction::View => {
                let Some(factory) = &self.forms.view else {
                    return;
                };
                let form = factory(Some(&row), window, cx);
                self.modal = ActiveModal::Viewing(row);
                self.open_form = Some(form);
            }
            RowAction::Edit => {
                let form = (self.forms.edit)(Some(&row), window, cx);
                self.modal = ActiveModal::Editing(row);
                self.open_form = Some(form);
            }
            RowAction::Gallery => {
                let Some(factory) = &self.forms.gallery else {
                    return;
                };
                let form = factory(Some(&row), window, cx);
                self.modal = ActiveModal::Gallery(row);
                self.open_form = Some(form);
            }
            RowAction::Schedule => {
                let Some(factory) = &self.forms.schedule else {
                    return;
                };
                let form = factory(Some(&row), window, cx);
                self.modal = ActiveModal::Scheduling(row);
                self.open_form = Some(form);
            }
            RowAction::Publish | RowAction::Unpublish => {
                let Some(factory) = &self.forms.publish else {
                    return;
                };
                let form = factory(Some(&row), window, cx);
                self.modal = ActiveModal::PublishToggle(row);
                self.open_form = Some(form);
            }
            RowAction::Delete => {
                self.modal = ActiveModal::ConfirmingDelete(row);
                self.open_form = None;
            }
        }
        cx.notify();
    }

    pub fn open_create(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let form = (self.forms.create)(None, window, cx);
        self.modal = ActiveModal::Creating;
        self.open_form = Some(form);
        cx.notify();
    }

    fn open_cover(&mut self, row: T, cx: &mut Context<Self>) {
        self.modal = ActiveModal::CoverPreview(row);
        self.open_form = None;
        cx.notify();
    }

    /// Close whatever modal is open without refetching.
    pub fn close_modal(&mut self, cx: &mut Context<Self>) {
        self.modal = ActiveModal::None;
        self.open_form = None;
        cx.notify();
    }

    /// A form reported a successful mutation: close it and refetch from
    /// page 1. The table never patches local rows.
    pub fn refresh_after_mutation(&mut self, cx: &mut Context<Self>) {
        self.close_modal(cx);
        self.refresh(QueryPatch::first_page(), cx);
    }

    /// Confirm the pending delete. The confirmation state is cleared
    /// unconditionally; success refetches at page 1, failure leaves an
    /// inline notice.
    pub fn delete_confirmed(&mut self, cx: &mut Context<Self>) {
        let ActiveModal::ConfirmingDelete(item) = self.modal.take() else {
            return;
        };
        let id = item.id();
        let label = item.label();
        let store = self.store.clone();
        cx.notify();

        cx.spawn(async move |view, cx| {
            let joined = runtime::spawn(async move { store.delete(id).await }).await;
            let result = match joined {
                Ok(result) => result.map_err(|e| e.to_string()),
                Err(err) => Err(err.to_string()),
            };
            _ = view.update(cx, |view, cx| match result {
                Ok(()) => {
                    view.notice = None;
                    view.refresh(QueryPatch::first_page(), cx);
                }
                Err(err) => {
                    tracing::error!(%err, id, "delete failed");
                    view.notice =
                        Some(format!("Could not delete \"{label}\": {err}").into());
                    cx.notify();
                }
            });
        })
        .detach();
    }

    pub fn delete_cancelled(&mut self, cx: &mut Context<Self>) {
        self.modal = ActiveModal::None;
        cx.notify();
    }

    fn cover_cell(&self, row: &T, row_ix: usize, cx: &mut Context<Self>) -> AnyElement {
        let theme = cx.theme().clone();
        match row.cover_id() {
            Some(_) => {
                let row = row.clone();
                div()
                    .id(("cover-cell", row_ix))
                    .w(px(36.))
                    .h(px(26.))
                    .rounded(theme.radius)
                    .border_1()
                    .border_color(theme.border)
                    .bg(theme.secondary)
                    .flex()
                    .items_center()
                    .justify_center()
                    .cursor_pointer()
                    .hover(|style| style.bg(cx.theme().secondary_active))
                    .on_click(cx.listener(move |this, _, _, cx| {
                        this.open_cover(row.clone(), cx);
                    }))
                    .child(
                        Icon::new(IconName::Image)
                            .size_3()
                            .text_color(theme.muted_foreground),
                    )
                    .into_any_element()
            }
            None => div()
                .text_color(theme.muted_foreground)
                .child("—")
                .into_any_element(),
        }
    }

    fn render_header_row(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();
        let sort_field = self.list.query().sort_field.clone();
        let sort_order = self.list.query().sort_order;

        let mut header = h_flex()
            .w_full()
            .h(px(32.))
            .flex_shrink_0()
            .border_b_1()
            .border_color(theme.border)
            .text_size(px(12.))
            .text_color(theme.table_head_foreground);

        for (col_ix, column) in self.columns.iter().enumerate() {
            let key = column.key;
            let is_sorted = sort_field == key;
            let icon = if !column.sortable {
                None
            } else if is_sorted {
                Some(match sort_order {
                    ludex_core::SortOrder::Asc => IconName::SortAscending,
                    ludex_core::SortOrder::Desc => IconName::SortDescending,
                })
            } else {
                Some(IconName::ChevronsUpDown)
            };

            let mut th = h_flex()
                .id(("col-header", col_ix))
                .w(column.width)
                .h_full()
                .px_2()
                .gap_1()
                .flex_shrink_0()
                .overflow_hidden()
                .whitespace_nowrap()
                .child(column.label.clone());

            if column.sortable {
                th = th
                    .cursor_pointer()
                    .on_click(cx.listener(move |this, _, _, cx| {
                        this.sort_changed(key, cx);
                    }));
            }
            if let Some(icon) = icon {
                th = th.child(
                    Icon::new(icon)
                        .size_3()
                        .text_color(if is_sorted {
                            theme.foreground
                        } else {
                            theme.muted_foreground
                        }),
                );
            }
            header = header.child(th);
        }

        // The synthesized actions column, always last.
        header.child(
            h_flex()
                .px_2()
                .flex_grow()
                .justify_end()
                .child("Actions"),
        )
    }

    fn render_row(
        &self,
        row_ix: usize,
        row: &T,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let theme = cx.theme().clone();
        let mut tr = h_flex()
            .w_full()
            .min_h(px(34.))
            .border_b_1()
            .border_color(theme.table_row_border)
            .text_size(px(13.))
            .text_color(theme.foreground);

        for column in &self.columns {
            // Cover rendering is orchestrator policy, not caller-configurable:
            // a caller-supplied renderer for this key is ignored.
            let cell: AnyElement = if column.key == "coverId" {
                self.cover_cell(row, row_ix, cx)
            } else if let Some(render) = &column.render {
                render(row, window, cx)
            } else {
                div()
                    .overflow_hidden()
                    .whitespace_nowrap()
                    .child(row.cell(column.key))
                    .into_any_element()
            };

            tr = tr.child(
                div()
                    .w(column.width)
                    .px_2()
                    .flex_shrink_0()
                    .overflow_hidden()
                    .child(cell),
            );
        }

        let mut actions_cell = h_flex().px_2().gap_1().flex_grow().justify_end();
        for (action_ix, action) in actions_for(row).into_iter().enumerate() {
            let row = row.clone();
            let danger = action == RowAction::Delete;
            let mut button = Button::new(("row-action", row_ix * 16 + action_ix))
                .icon(action.icon())
                .ghost()
                .xsmall()
                .on_click(cx.listener(move |this, _, window, cx| {
                    this.open_action(action, row.clone(), window, cx);
                }));
            if danger {
                button = button.danger();
            }
            actions_cell = actions_cell.child(button);
        }

        tr.child(actions_cell)
    }

    fn render_footer(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();
        let page = self.list.query().page;
        let total_pages = self.list.total_pages();
        let nav = nav_targets(page, total_pages);
        let status = status_text(
            self.list.data().len(),
            page,
            total_pages,
            self.list.total_items(),
        );
        let is_loading = self.list.is_loading();

        let nav_button = |id: &'static str,
                          icon: IconName,
                          target: Option<usize>,
                          cx: &mut Context<Self>| {
            Button::new(id)
                .icon(icon)
                .ghost()
                .xsmall()
                .disabled(target.is_none() || is_loading)
                .on_click(cx.listener(move |this, _, _, cx| {
                    if let Some(page) = target {
                        this.page_changed(page, cx);
                    }
                }))
        };

        h_flex()
            .w_full()
            .h(px(32.))
            .px_2()
            .gap_1()
            .flex_shrink_0()
            .bg(theme.tab_bar)
            .border_t_1()
            .border_color(theme.border)
            .child(nav_button("page-first", IconName::ArrowLeft, nav.first, cx))
            .child(nav_button("page-prev", IconName::ChevronLeft, nav.prev, cx))
            .child(
                div()
                    .px_2()
                    .py(px(2.))
                    .min_w(px(40.))
                    .rounded(px(4.))
                    .border_1()
                    .border_color(theme.border)
                    .bg(theme.background)
                    .text_size(px(12.))
                    .text_color(theme.foreground)
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(page.to_string()),
            )
            .child(nav_button("page-next", IconName::ChevronRight, nav.next, cx))
            .child(nav_button("page-last", IconName::ArrowRight, nav.last, cx))
            .child(div().h(px(16.)).w(px(1.)).mx_2().bg(theme.border))
            .child(
                div()
                    .text_size(px(12.))
                    .text_color(theme.muted_foreground)
                    .child(status),
            )
            .child(div().flex_1())
            .when(is_loading, |this| {
                this.child(
                    div()
                        .text_size(px(12.))
                        .text_color(theme.muted_foreground)
                        .child("Loading..."),
                )
            })
    }

    fn render_delete_confirm(&self, item: &T, cx: &mut Context<Self>) -> AnyElement {
        let theme = cx.theme().clone();
        let label = item.label();

        modal_overlay(cx)
            .child(
                modal_panel(420., cx)
                    .child(modal_header(
                        format!("Delete {}", T::KIND.singular()),
                        cx.listener(|this: &mut Self, _, _, cx| this.delete_cancelled(cx)),
                        cx,
                    ))
                    .child(
                        div()
                            .px_4()
                            .py_4()
                            .text_size(px(13.))
                            .text_color(theme.foreground)
                            .child(format!(
                                "Are you sure you want to delete \"{label}\"? This cannot be undone."
                            )),
                    )
                    .child(
                        modal_footer(None, cx)
                            .child(
                                Button::new("delete-cancel")
                                    .label("Cancel")
                                    .ghost()
                                    .on_click(cx.listener(|this: &mut Self, _, _, cx| {
                                        this.delete_cancelled(cx)
                                    })),
                            )
                            .child(
                                Button::new("delete-confirm")
                                    .label("Delete")
                                    .danger()
                                    .on_click(cx.listener(|this: &mut Self, _, _, cx| {
                                        this.delete_confirmed(cx)
                                    })),
                            ),
                    ),
            )
            .into_any_element()
    }

    fn render_cover_preview(&self, item: &T, cx: &mut Context<Self>) -> AnyElement {
        let theme = cx.theme().clone();
        let cover_id = item.cover_id();
        let url = cover_id.and_then(|id| self.image_url.as_ref().map(|f| f(id)));

        modal_overlay(cx)
            .child(
                modal_panel(420., cx)
                    .child(modal_header(
                        format!("Cover — {}", item.label()),
                        cx.listener(|this: &mut Self, _, _, cx| this.close_modal(cx)),
                        cx,
                    ))
                    .child(
                        v_flex()
                            .px_4()
                            .py_4()
                            .gap_2()
                            .items_center()
                            .child(
                                div()
                                    .w(px(220.))
                                    .h(px(300.))
                                    .rounded(theme.radius_lg)
                                    .border_1()
                                    .border_color(theme.border)
                                    .bg(theme.secondary)
                                    .flex()
                                    .items_center()
                                    .justify_center()
                                    .child(
                                        Icon::new(IconName::Image)
                                            .size_5()
                                            .text_color(theme.muted_foreground),
                                    ),
                            )
                            .when_some(url, |this, url| {
                                this.child(
                                    div()
                                        .text_size(px(11.))
                                        .text_color(theme.muted_foreground)
                                        .child(url),
                                )
                            }),
                    ),
            )
            .into_any_element()
    }
}

impl<T: EntityRow> Render for EntityTable<T> {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();
        let rows: Vec<T> = self.list.data().to_vec();
        let error = self.list.error().map(str::to_string);

        let body: AnyElement = if let Some(error) = error {
            div()
                .w_full()
                .py_8()
                .flex()
                .justify_center()
                .text_size(px(13.))
                .text_color(theme.danger)
                .child(format!("Failed to load {}: {error}", self.title.clone()))
                .into_any_element()
        } else {
            let mut table = v_flex().w_full().flex_1().overflow_hidden();
            table = table.child(self.render_header_row(cx));
            for (row_ix, row) in rows.iter().enumerate() {
                table = table.child(self.render_row(row_ix, row, window, cx));
            }
            if rows.is_empty() && !self.list.is_loading() {
                table = table.child(
                    div()
                        .w_full()
                        .py_8()
                        .flex()
                        .justify_center()
                        .text_size(px(13.))
                        .text_color(theme.muted_foreground)
                        .child("No records"),
                );
            }
            table.into_any_element()
        };

        let mut root = v_flex()
            .size_full()
            .relative()
            .px_4()
            .pt_3()
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
                            .child(self.title.clone()),
                    )
                    .child(
                        Button::new("create-entity")
                            .icon(IconName::Plus)
                            .label(format!("New {}", T::KIND.singular()))
                            .primary()
                            .small()
                            .on_click(cx.listener(|this, _, window, cx| {
                                this.open_create(window, cx);
                            })),
                    ),
            )
            .child(self.filter_bar.clone());

        if let Some(notice) = self.notice.clone() {
            root = root.child(
                h_flex()
                    .w_full()
                    .px_2()
                    .py_1()
                    .gap_2()
                    .rounded(theme.radius)
                    .bg(theme.secondary)
                    .text_size(px(12.))
                    .text_color(theme.danger)
                    .child(notice)
                    .child(div().flex_1())
                    .child(
                        Button::new("dismiss-notice")
                            .icon(IconName::X)
                            .ghost()
                            .xsmall()
                            .on_click(cx.listener(|this, _, _, cx| {
                                this.notice = None;
                                cx.notify();
                            })),
                    ),
            );
        }

        root = root.child(body).child(self.render_footer(cx));

        // Modal layer. Entity forms render their own overlay; the delete
        // confirmation and cover preview are orchestrator-owned.
        match &self.modal {
            ActiveModal::ConfirmingDelete(item) => {
                let item = item.clone();
                root = root.child(self.render_delete_confirm(&item, cx));
            }
            ActiveModal::CoverPreview(item) => {
                let item = item.clone();
                root = root.child(self.render_cover_preview(&item, cx));
            }
            _ => {
                if let Some((form, _)) = &self.open_form {
                    root = root.child(form.clone());
                }
            }
        }

        root
    }
}
