//! Games management page

use std::sync::Arc;

use gpui::{Context, Entity, IntoElement, ParentElement, Render, Styled, Window, px};
use ludex_api::runtime;
use ludex_core::{EntityKind, EntityRow, Game, ListQuery};
use ludex_filters::{FilterOptions, package_for};
use ludex_forms::{CatalogOptions, DetailView, FormEvent, GameForm, GameGallery};
use ludex_table::{Column, EntityForms, EntityTable, EntityTableParams, FormFactory};
use ludex_ui::v_flex;

use crate::app::AppServices;

pub struct GamesPage {
    table: Entity<EntityTable<Game>>,
    options: CatalogOptions,
}

impl GamesPage {
    pub fn new(services: AppServices, page_size: usize, cx: &mut Context<Self>) -> Self {
        let store = Arc::new(services.games.clone());
        let media = services.media.clone();
        let image_url = {
            let media = media.clone();
            Arc::new(move |id: i64| media.image_url(id))
        };

        let page = cx.entity().downgrade();
        let edit_services = services.clone();
        let edit_page = page.clone();
        let edit: FormFactory<Game> = Box::new(move |item, _window, cx| {
            let options = edit_page
                .upgrade()
                .map(|page| page.read(cx).options.clone())
                .unwrap_or_default();
            let form = cx.new(|cx| {
                GameForm::new(edit_services.games.clone(), item, options, cx)
            });
            let subscription =
                cx.subscribe(&form, |table, _, event: &FormEvent, cx| match event {
                    FormEvent::Closed => table.close_modal(cx),
                    FormEvent::Saved => table.refresh_after_mutation(cx),
                });
            (form.into(), subscription)
        });

        let create_services = services.clone();
        let create_page = page.clone();
        let create: FormFactory<Game> = Box::new(move |_, _window, cx| {
            let options = create_page
                .upgrade()
                .map(|page| page.read(cx).options.clone())
                .unwrap_or_default();
            let form = cx.new(|cx| {
                GameForm::new(create_services.games.clone(), None, options, cx)
            });
            let subscription =
                cx.subscribe(&form, |table, _, event: &FormEvent, cx| match event {
                    FormEvent::Closed => table.close_modal(cx),
                    FormEvent::Saved => table.refresh_after_mutation(cx),
                });
            (form.into(), subscription)
        });

        let view: FormFactory<Game> = Box::new(move |item, _window, cx| {
            let fields = item
                .map(|game| {
                    vec![
                        ("Title".into(), game.title.clone().into()),
                        ("Release year".into(), game.cell("releaseYear").into()),
                        ("Developer".into(), game.cell("developer").into()),
                        ("Platforms".into(), game.cell("platformIds").into()),
                        ("Genres".into(), game.cell("genreIds").into()),
                        ("Rating".into(), game.cell("rating").into()),
                        ("Description".into(), game.description.clone().into()),
                    ]
                })
                .unwrap_or_default();
            let title = item.map(|game| game.title.clone()).unwrap_or_default();
            let form = cx.new(|_| DetailView::new(title, fields));
            let subscription =
                cx.subscribe(&form, |table, _, _: &FormEvent, cx| table.close_modal(cx));
            (form.into(), subscription)
        });

        let gallery_media = media.clone();
        let gallery: FormFactory<Game> = Box::new(move |item, _window, cx| {
            let game = item.cloned().expect("BUG: gallery opens from a row");
            let form = cx.new(|cx| GameGallery::new(gallery_media.clone(), game, cx));
            let subscription =
                cx.subscribe(&form, |table, _, event: &FormEvent, cx| match event {
                    FormEvent::Closed => table.close_modal(cx),
                    FormEvent::Saved => table.refresh_after_mutation(cx),
                });
            (form.into(), subscription)
        });

        let columns = vec![
            Column::new("id", "ID").sortable().width(px(60.)),
            Column::new("coverId", "Cover").width(px(60.)),
            Column::new("title", "Title").sortable().width(px(220.)),
            Column::new("releaseYear", "Year").sortable().width(px(80.)),
            Column::new("developer", "Developer").width(px(150.)),
            Column::new("rating", "Rating").sortable().width(px(80.)),
        ];

        let table = cx.new(|cx| {
            EntityTable::new(
                EntityTableParams {
                    title: "Games".into(),
                    columns,
                    store,
                    forms: EntityForms {
                        view: Some(view),
                        edit,
                        create,
                        gallery: Some(gallery),
                        schedule: None,
                        publish: None,
                    },
                    filter_package: package_for(EntityKind::Game),
                    image_url: Some(image_url),
                    initial_query: Some(ListQuery::new(page_size)),
                },
                cx,
            )
        });

        let mut this = Self {
            table,
            options: CatalogOptions::default(),
        };
        this.load_options(services, cx);
        this
    }

    /// Load the platform/genre/developer option lists for the filter bar
    /// and the forms.
    fn load_options(&mut self, services: AppServices, cx: &mut Context<Self>) {
        cx.spawn(async move |page, cx| {
            let joined = runtime::spawn(async move {
                let platforms = services.platforms.list(ListQuery::new(200)).await?;
                let genres = services.genres.list(ListQuery::new(200)).await?;
                let developers = services.developers.list(ListQuery::new(200)).await?;
                Ok::<_, ludex_api::ApiError>((platforms, genres, developers))
            })
            .await;

            let (platforms, genres, developers) = match joined {
                Ok(Ok(lists)) => lists,
                Ok(Err(err)) => {
                    tracing::warn!(%err, "could not load filter options");
                    return;
                }
                Err(err) => {
                    tracing::warn!(%err, "filter options task failed");
                    return;
                }
            };

            let platforms: Vec<(i64, String)> = platforms
                .data
                .into_iter()
                .map(|p| (p.id, p.name))
                .collect();
            let genres: Vec<(i64, String)> =
                genres.data.into_iter().map(|g| (g.id, g.name)).collect();
            let developers: Vec<(i64, String)> = developers
                .data
                .into_iter()
                .map(|d| (d.id, d.name))
                .collect();

            _ = page.update(cx, |page, cx| {
                page.options = CatalogOptions {
                    platforms: platforms.clone(),
                    genres: genres.clone(),
                    developers: developers.clone(),
                    games: Vec::new(),
                };
                page.table.update(cx, |table, cx| {
                    table.set_filter_options(
                        FilterOptions {
                            platforms,
                            genres,
                            developers,
                        },
                        cx,
                    );
                });
                cx.notify();
            });
        })
        .detach();
    }
}

impl Render for GamesPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        v_flex().size_full().child(self.table.clone())
    }
}
