//! Platform / genre / developer management pages

use std::sync::Arc;

use gpui::{Context, Entity, IntoElement, ParentElement, Render, Styled, Window, px};
use ludex_core::{Developer, EntityKind, Genre, ListQuery, Platform};
use ludex_filters::package_for;
use ludex_forms::{DeveloperForm, FormEvent, GenreForm, PlatformForm};
use ludex_table::{Column, EntityForms, EntityTable, EntityTableParams, FormFactory};
use ludex_ui::v_flex;

use crate::app::AppServices;

pub struct PlatformsPage {
    table: Entity<EntityTable<Platform>>,
}

impl PlatformsPage {
    pub fn new(services: AppServices, page_size: usize, cx: &mut Context<Self>) -> Self {
        let store = Arc::new(services.platforms.clone());

        let edit_service = services.platforms.clone();
        let edit: FormFactory<Platform> = Box::new(move |item, _window, cx| {
            let form = cx.new(|cx| PlatformForm::new(edit_service.clone(), item, cx));
            let subscription =
                cx.subscribe(&form, |table, _, event: &FormEvent, cx| match event {
                    FormEvent::Closed => table.close_modal(cx),
                    FormEvent::Saved => table.refresh_after_mutation(cx),
                });
            (form.into(), subscription)
        });

        let create_service = services.platforms.clone();
        let create: FormFactory<Platform> = Box::new(move |_, _window, cx| {
            let form = cx.new(|cx| PlatformForm::new(create_service.clone(), None, cx));
            let subscription =
                cx.subscribe(&form, |table, _, event: &FormEvent, cx| match event {
                    FormEvent::Closed => table.close_modal(cx),
                    FormEvent::Saved => table.refresh_after_mutation(cx),
                });
            (form.into(), subscription)
        });

        let columns = vec![
            Column::new("id", "ID").sortable().width(px(60.)),
            Column::new("name", "Name").sortable().width(px(200.)),
            Column::new("manufacturer", "Manufacturer").width(px(160.)),
            Column::new("releaseYear", "Year").sortable().width(px(80.)),
        ];

        let table = cx.new(|cx| {
            EntityTable::new(
                EntityTableParams {
                    title: "Platforms".into(),
                    columns,
                    store,
                    forms: EntityForms {
                        view: None,
                        edit,
                        create,
                        gallery: None,
                        schedule: None,
                        publish: None,
                    },
                    filter_package: package_for(EntityKind::Platform),
                    image_url: None,
                    initial_query: Some(ListQuery::new(page_size)),
                },
                cx,
            )
        });

        Self { table }
    }
}

impl Render for PlatformsPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        v_flex().size_full().child(self.table.clone())
    }
}

pub struct GenresPage {
    table: Entity<EntityTable<Genre>>,
}

impl GenresPage {
    pub fn new(services: AppServices, page_size: usize, cx: &mut Context<Self>) -> Self {
        let store = Arc::new(services.genres.clone());

        let edit_service = services.genres.clone();
        let edit: FormFactory<Genre> = Box::new(move |item, _window, cx| {
            let form = cx.new(|cx| GenreForm::new(edit_service.clone(), item, cx));
            let subscription =
                cx.subscribe(&form, |table, _, event: &FormEvent, cx| match event {
                    FormEvent::Closed => table.close_modal(cx),
                    FormEvent::Saved => table.refresh_after_mutation(cx),
                });
            (form.into(), subscription)
        });

        let create_service = services.genres.clone();
        let create: FormFactory<Genre> = Box::new(move |_, _window, cx| {
            let form = cx.new(|cx| GenreForm::new(create_service.clone(), None, cx));
            let subscription =
                cx.subscribe(&form, |table, _, event: &FormEvent, cx| match event {
                    FormEvent::Closed => table.close_modal(cx),
                    FormEvent::Saved => table.refresh_after_mutation(cx),
                });
            (form.into(), subscription)
        });

        let columns = vec![
            Column::new("id", "ID").sortable().width(px(60.)),
            Column::new("name", "Name").sortable().width(px(180.)),
            Column::new("description", "Description").width(px(320.)),
        ];

        let table = cx.new(|cx| {
            EntityTable::new(
                EntityTableParams {
                    title: "Genres".into(),
                    columns,
                    store,
                    forms: EntityForms {
                        view: None,
                        edit,
                        create,
                        gallery: None,
                        schedule: None,
                        publish: None,
                    },
                    filter_package: package_for(EntityKind::Genre),
                    image_url: None,
                    initial_query: Some(ListQuery::new(page_size)),
                },
                cx,
            )
        });

        Self { table }
    }
}

impl Render for GenresPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        v_flex().size_full().child(self.table.clone())
    }
}

pub struct DevelopersPage {
    table: Entity<EntityTable<Developer>>,
}

impl DevelopersPage {
    pub fn new(services: AppServices, page_size: usize, cx: &mut Context<Self>) -> Self {
        let store = Arc::new(services.developers.clone());

        let edit_service = services.developers.clone();
        let edit: FormFactory<Developer> = Box::new(move |item, _window, cx| {
            let form = cx.new(|cx| DeveloperForm::new(edit_service.clone(), item, cx));
            let subscription =
                cx.subscribe(&form, |table, _, event: &FormEvent, cx| match event {
                    FormEvent::Closed => table.close_modal(cx),
                    FormEvent::Saved => table.refresh_after_mutation(cx),
                });
            (form.into(), subscription)
        });

        let create_service = services.developers.clone();
        let create: FormFactory<Developer> = Box::new(move |_, _window, cx| {
            let form = cx.new(|cx| DeveloperForm::new(create_service.clone(), None, cx));
            let subscription =
                cx.subscribe(&form, |table, _, event: &FormEvent, cx| match event {
                    FormEvent::Closed => table.close_modal(cx),
                    FormEvent::Saved => table.refresh_after_mutation(cx),
                });
            (form.into(), subscription)
        });

        let columns = vec![
            Column::new("id", "ID").sortable().width(px(60.)),
            Column::new("name", "Name").sortable().width(px(200.)),
            Column::new("country", "Country").width(px(120.)),
            Column::new("foundedYear", "Founded").sortable().width(px(90.)),
        ];

        let table = cx.new(|cx| {
            EntityTable::new(
                EntityTableParams {
                    title: "Developers".into(),
                    columns,
                    store,
                    forms: EntityForms {
                        view: None,
                        edit,
                        create,
                        gallery: None,
                        schedule: None,
                        publish: None,
                    },
                    filter_package: package_for(EntityKind::Developer),
                    image_url: None,
                    initial_query: Some(ListQuery::new(page_size)),
                },
                cx,
            )
        });

        Self { table }
    }
}

impl Render for DevelopersPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        v_flex().size_full().child(self.table.clone())
    }
}
