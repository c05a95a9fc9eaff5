//! Create/edit forms for the taxonomy kinds

use gpui::{
    Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window,
};
use ludex_api::{
    EntityService,
    payloads::{DeveloperDraft, GenreDraft, PlatformDraft},
    runtime,
};
use ludex_core::{Developer, Genre, Platform};
use ludex_ui::{
    Button, ButtonVariants, Disableable, TextInputState, modal_footer, modal_header,
    modal_overlay, modal_panel, v_flex,
};

use crate::FormEvent;
use crate::common::{labeled_field, parse_year};

pub struct PlatformForm {
    service: EntityService<Platform>,
    editing: Option<i64>,
    name_input: Entity<TextInputState>,
    manufacturer_input: Entity<TextInputState>,
    year_input: Entity<TextInputState>,
    saving: bool,
    error: Option<SharedString>,
}

impl PlatformForm {
    pub fn new(
        service: EntityService<Platform>,
        item: Option<&Platform>,
        cx: &mut Context<Self>,
    ) -> Self {
        let name_input = cx.new(|cx| TextInputState::new(cx).placeholder("Name"));
        let manufacturer_input =
            cx.new(|cx| TextInputState::new(cx).placeholder("Manufacturer"));
        let year_input = cx.new(|cx| TextInputState::new(cx).placeholder("Release year"));

        if let Some(platform) = item {
            name_input.update(cx, |input, cx| input.set_value(platform.name.clone(), cx));
            if let Some(manufacturer) = &platform.manufacturer {
                manufacturer_input
                    .update(cx, |input, cx| input.set_value(manufacturer.clone(), cx));
            }
            if let Some(year) = platform.release_year {
                year_input.update(cx, |input, cx| input.set_value(year.to_string(), cx));
            }
        }

        Self {
            service,
            editing: item.map(|platform| platform.id),
            name_input,
            manufacturer_input,
            year_input,
            saving: false,
            error: None,
        }
    }

    fn save(&mut self, cx: &mut Context<Self>) {
        if self.saving {
            return;
        }
        let name = self.name_input.read(cx).value().trim().to_string();
        if name.is_empty() {
            self.error = Some("Name is required".into());
            cx.notify();
            return;
        }
        let release_year = match parse_year(self.year_input.read(cx).value()) {
            Ok(year) => year,
            Err(message) => {
                self.error = Some(message.into());
                cx.notify();
                return;
            }
        };
        let manufacturer = {
            let value = self.manufacturer_input.read(cx).value().trim().to_string();
            (!value.is_empty()).then_some(value)
        };

        let draft = PlatformDraft {
            name,
            manufacturer,
            release_year,
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
                        tracing::error!(%err, "saving platform failed");
                        view.error = Some("Could not save the platform".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }
}

impl gpui::EventEmitter<FormEvent> for PlatformForm {}

impl Render for PlatformForm {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let title = if self.editing.is_some() {
            "Edit platform"
        } else {
            "New platform"
        };

        modal_overlay(cx).child(
            modal_panel(420., cx)
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
                        .child(labeled_field("Name", &self.name_input, cx))
                        .child(labeled_field("Manufacturer", &self.manufacturer_input, cx))
                        .child(labeled_field("Release year", &self.year_input, cx)),
                )
                .child(
                    modal_footer(self.error.clone(), cx)
                        .child(
                            Button::new("platform-cancel")
                                .label("Cancel")
                                .ghost()
                                .on_click(cx.listener(|_, _, _, cx| cx.emit(FormEvent::Closed))),
                        )
                        .child(
                            Button::new("platform-save")
                                .label(if self.saving { "Saving..." } else { "Save" })
                                .primary()
                                .disabled(self.saving)
                                .on_click(cx.listener(|this: &mut Self, _, _, cx| this.save(cx))),
                        ),
                ),
        )
    }
}

pub struct GenreForm {
    service: EntityService<Genre>,
    editing: Option<i64>,
    name_input: Entity<TextInputState>,
    description_input: Entity<TextInputState>,
    saving: bool,
    error: Option<SharedString>,
}

impl GenreForm {
    pub fn new(
        service: EntityService<Genre>,
        item: Option<&Genre>,
        cx: &mut Context<Self>,
    ) -> Self {
        let name_input = cx.new(|cx| TextInputState::new(cx).placeholder("Name"));
        let description_input =
            cx.new(|cx| TextInputState::new(cx).placeholder("Description").multiline());

        if let Some(genre) = item {
            name_input.update(cx, |input, cx| input.set_value(genre.name.clone(), cx));
            description_input
                .update(cx, |input, cx| input.set_value(genre.description.clone(), cx));
        }

        Self {
            service,
            editing: item.map(|genre| genre.id),
            name_input,
            description_input,
            saving: false,
            error: None,
        }
    }

    fn save(&mut self, cx: &mut Context<Self>) {
        if self.saving {
            return;
        }
        let name = self.name_input.read(cx).value().trim().to_string();
        if name.is_empty() {
            self.error = Some("Name is required".into());
            cx.notify();
            return;
        }
        let draft = GenreDraft {
            name,
            description: self.description_input.read(cx).value().to_string(),
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
                        tracing::error!(%err, "saving genre failed");
                        view.error = Some("Could not save the genre".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }
}

impl gpui::EventEmitter<FormEvent> for GenreForm {}

impl Render for GenreForm {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let title = if self.editing.is_some() {
            "Edit genre"
        } else {
            "New genre"
        };

        modal_overlay(cx).child(
            modal_panel(420., cx)
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
                        .child(labeled_field("Name", &self.name_input, cx))
                        .child(labeled_field("Description", &self.description_input, cx)),
                )
                .child(
                    modal_footer(self.error.clone(), cx)
                        .child(
                            Button::new("genre-cancel")
                                .label("Cancel")
                                .ghost()
                                .on_click(cx.listener(|_, _, _, cx| cx.emit(FormEvent::Closed))),
                        )
                        .child(
                            Button::new("genre-save")
                                .label(if self.saving { "Saving..." } else { "Save" })
                                .primary()
                                .disabled(self.saving)
                                .on_click(cx.listener(|this: &mut Self, _, _, cx| this.save(cx))),
                        ),
                ),
        )
    }
}

pub struct DeveloperForm {
    service: EntityService<Developer>,
    editing: Option<i64>,
    name_input: Entity<TextInputState>,
    country_input: Entity<TextInputState>,
    year_input: Entity<TextInputState>,
    saving: bool,
    error: Option<SharedString>,
}

impl DeveloperForm {
    pub fn new(
        service: EntityService<Developer>,
        item: Option<&Developer>,
        cx: &mut Context<Self>,
    ) -> Self {
        let name_input = cx.new(|cx| TextInputState::new(cx).placeholder("Name"));
        let country_input = cx.new(|cx| TextInputState::new(cx).placeholder("Country"));
        let year_input = cx.new(|cx| TextInputState::new(cx).placeholder("Founded"));

        if let Some(developer) = item {
            name_input.update(cx, |input, cx| input.set_value(developer.name.clone(), cx));
            if let Some(country) = &developer.country {
                country_input.update(cx, |input, cx| input.set_value(country.clone(), cx));
            }
            if let Some(year) = developer.founded_year {
                year_input.update(cx, |input, cx| input.set_value(year.to_string(), cx));
            }
        }

        Self {
            service,
            editing: item.map(|developer| developer.id),
            name_input,
            country_input,
            year_input,
            saving: false,
            error: None,
        }
    }

    fn save(&mut self, cx: &mut Context<Self>) {
        if self.saving {
            return;
        }
        let name = self.name_input.read(cx).value().trim().to_string();
        if name.is_empty() {
            self.error = Some("Name is required".into());
            cx.notify();
            return;
        }
        let founded_year = match parse_year(self.year_input.read(cx).value()) {
            Ok(year) => year,
            Err(message) => {
                self.error = Some(message.into());
                cx.notify();
                return;
            }
        };
        let country = {
            let value = self.country_input.read(cx).value().trim().to_string();
            (!value.is_empty()).then_some(value)
        };

        let draft = DeveloperDraft {
            name,
            country,
            founded_year,
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
                        tracing::error!(%err, "saving developer failed");
                        view.error = Some("Could not save the developer".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }
}

impl gpui::EventEmitter<FormEvent> for DeveloperForm {}

impl Render for DeveloperForm {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let title = if self.editing.is_some() {
            "Edit developer"
        } else {
            "New developer"
        };

        modal_overlay(cx).child(
            modal_panel(420., cx)
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
                        .child(labeled_field("Name", &self.name_input, cx))
                        .child(labeled_field("Country", &self.country_input, cx))
                        .child(labeled_field("Founded", &self.year_input, cx)),
                )
                .child(
                    modal_footer(self.error.clone(), cx)
                        .child(
                            Button::new("developer-cancel")
                                .label("Cancel")
                                .ghost()
                                .on_click(cx.listener(|_, _, _, cx| cx.emit(FormEvent::Closed))),
                        )
                        .child(
                            Button::new("developer-save")
                                .label(if self.saving { "Saving..." } else { "Save" })
                                .primary()
                                .disabled(self.saving)
                                .on_click(cx.listener(|this: &mut Self, _, _, cx| this.save(cx))),
                        ),
                ),
        )
    }
}
