//! Game create/edit form

use std::rc::Rc;

use gpui::{
    Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window,
};
use ludex_api::{EntityService, payloads::GameDraft, runtime};
use ludex_core::Game;
use ludex_ui::{
    Button, ButtonVariants, Disableable, SelectEvent, SelectOption, SelectState, TextInputState,
    modal_footer, modal_header, modal_overlay, modal_panel, v_flex,
};

use crate::FormEvent;
use crate::common::{CatalogOptions, checkbox_group, labeled, labeled_field, parse_year};

pub struct GameForm {
    service: EntityService<Game>,
    /// `Some(id)` when editing, `None` when creating.
    editing: Option<i64>,
    options: CatalogOptions,

    title_input: Entity<TextInputState>,
    year_input: Entity<TextInputState>,
    description_input: Entity<TextInputState>,
    developer_select: Entity<SelectState>,
    platform_ids: Vec<i64>,
    genre_ids: Vec<i64>,

    developer_id: Option<i64>,
    saving: bool,
    error: Option<SharedString>,
    _subscriptions: Vec<gpui::Subscription>,
}

impl GameForm {
    pub fn new(
        service: EntityService<Game>,
        item: Option<&Game>,
        options: CatalogOptions,
        cx: &mut Context<Self>,
    ) -> Self {
        let title_input = cx.new(|cx| TextInputState::new(cx).placeholder("Title"));
        let year_input = cx.new(|cx| TextInputState::new(cx).placeholder("Release year"));
        let description_input =
            cx.new(|cx| TextInputState::new(cx).placeholder("Description").multiline());
        let developer_select =
            cx.new(|cx| SelectState::new(cx).placeholder("Developer").clearable());

        developer_select.update(cx, |select, cx| {
            let items = options
                .developers
                .iter()
                .map(|(id, name)| SelectOption::new(id.to_string(), name.clone()))
                .collect();
            select.set_options(items, cx);
        });

        let mut this = Self {
            service,
            editing: item.map(|game| game.id),
            options,
            title_input: title_input.clone(),
            year_input: year_input.clone(),
            description_input: description_input.clone(),
            developer_select: developer_select.clone(),
            platform_ids: Vec::new(),
            genre_ids: Vec::new(),
            developer_id: None,
            saving: false,
            error: None,
            _subscriptions: Vec::new(),
        };

        if let Some(game) = item {
            this.platform_ids = game.platform_ids.clone();
            this.genre_ids = game.genre_ids.clone();
            this.developer_id = game.developer_id;

            title_input.update(cx, |input, cx| input.set_value(game.title.clone(), cx));
            if let Some(year) = game.release_year {
                year_input.update(cx, |input, cx| input.set_value(year.to_string(), cx));
            }
            description_input
                .update(cx, |input, cx| input.set_value(game.description.clone(), cx));
            developer_select.update(cx, |select, cx| {
                select.set_selected(game.developer_id.map(|id| id.to_string().into()), cx);
            });
        }

        this._subscriptions = vec![cx.subscribe(
            &developer_select,
            |this: &mut Self, _, event: &SelectEvent, cx| {
                let SelectEvent::Picked(value) = event;
                this.developer_id = value.as_ref().and_then(|v| v.parse().ok());
                cx.notify();
            },
        )];

        this
    }

    fn toggle_platform(&mut self, id: i64, cx: &mut Context<Self>) {
        toggle_id(&mut self.platform_ids, id);
        cx.notify();
    }

    fn toggle_genre(&mut self, id: i64, cx: &mut Context<Self>) {
        toggle_id(&mut self.genre_ids, id);
        cx.notify();
    }

    fn build_draft(&self, cx: &Context<Self>) -> Result<GameDraft, String> {
        let title = self.title_input.read(cx).value().trim().to_string();
        if title.is_empty() {
            return Err("Title is required".to_string());
        }
        let release_year = parse_year(self.year_input.read(cx).value())?;

        Ok(GameDraft {
            title,
            description: self.description_input.read(cx).value().to_string(),
            release_year,
            developer_id: self.developer_id,
            platform_ids: self.platform_ids.clone(),
            genre_ids: self.genre_ids.clone(),
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
        let editing = self.editing;
        cx.spawn(async move |view, cx| {
            let joined = runtime::spawn(async move {
                match editing {
                    Some(id) => service.update(id, &draft).await.map(|_| ()),
                    None => service.create(&draft).await.map(|_| ()),
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
                        tracing::error!(%err, "saving game failed");
                        view.error = Some("Could not save the game".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }
}

fn toggle_id(ids: &mut Vec<i64>, id: i64) {
    if let Some(pos) = ids.iter().position(|v| *v == id) {
        ids.remove(pos);
    } else {
        ids.push(id);
    }
}

impl gpui::EventEmitter<FormEvent> for GameForm {}

impl Render for GameForm {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let title = if self.editing.is_some() {
            "Edit game"
        } else {
            "New game"
        };

        let form_entity = cx.entity().clone();
        let platform_checks = checkbox_group(
            "platform-check",
            &self.options.platforms,
            &self.platform_ids,
            Rc::new({
                let form = form_entity.clone();
                move |id, cx| form.update(cx, |form, cx| form.toggle_platform(id, cx))
            }),
            cx,
        );
        let genre_checks = checkbox_group(
            "genre-check",
            &self.options.genres,
            &self.genre_ids,
            Rc::new({
                let form = form_entity.clone();
                move |id, cx| form.update(cx, |form, cx| form.toggle_genre(id, cx))
            }),
            cx,
        );

        modal_overlay(cx).child(
            modal_panel(520., cx)
                .child(modal_header(
                    title,
                    cx.listener(|_, _, _, cx| cx.emit(FormEvent::Closed)),
                    cx,
                ))
                .child(
                    v_flex()
                        .px_4()
                        .py_3()
                        .gap_3()
                        .w_full()
                        .child(labeled_field("Title", &self.title_input, cx))
                        .child(labeled_field("Release year", &self.year_input, cx))
                        .child(labeled(
                            "Developer",
                            self.developer_select.clone().into_any_element(),
                            cx,
                        ))
                        .child(labeled("Platforms", platform_checks, cx))
                        .child(labeled("Genres", genre_checks, cx))
                        .child(labeled_field("Description", &self.description_input, cx)),
                )
                .child(
                    modal_footer(self.error.clone(), cx)
                        .child(
                            Button::new("game-cancel")
                                .label("Cancel")
                                .ghost()
                                .on_click(cx.listener(|_, _, _, cx| cx.emit(FormEvent::Closed))),
                        )
                        .child(
                            Button::new("game-save")
                                .label(if self.saving { "Saving..." } else { "Save" })
                                .primary()
                                .disabled(self.saving)
                                .on_click(cx.listener(|this: &mut Self, _, _, cx| this.save(cx))),
                        ),
                ),
        )
    }
}
