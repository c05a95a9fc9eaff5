//! Articles management page

use std::sync::Arc;

use gpui::{Context, Entity, IntoElement, ParentElement, Render, Styled, Window, px};
use ludex_core::{Article, EntityKind, EntityRow, ListQuery};
use ludex_filters::package_for;
use ludex_forms::{ArticleForm, DetailView, FormEvent, PublishDialog, ScheduleDialog};
use ludex_table::{Column, EntityForms, EntityTable, EntityTableParams, FormFactory};
use ludex_ui::v_flex;

use crate::app::AppServices;

pub struct ArticlesPage {
    table: Entity<EntityTable<Article>>,
}

impl ArticlesPage {
    pub fn new(services: AppServices, page_size: usize, cx: &mut Context<Self>) -> Self {
        let store = Arc::new(services.articles.clone());
        let media = services.media.clone();
        let image_url = {
            let media = media.clone();
            Arc::new(move |id: i64| media.image_url(id))
        };

        let edit_services = services.clone();
        let edit: FormFactory<Article> = Box::new(move |item, _window, cx| {
            let form = cx.new(|cx| {
                ArticleForm::new(
                    edit_services.articles.clone(),
                    edit_services.media.clone(),
                    item,
                    cx,
                )
            });
            let subscription =
                cx.subscribe(&form, |table, _, event: &FormEvent, cx| match event {
                    FormEvent::Closed => table.close_modal(cx),
                    FormEvent::Saved => table.refresh_after_mutation(cx),
                });
            (form.into(), subscription)
        });

        let create_services = services.clone();
        let create: FormFactory<Article> = Box::new(move |_, _window, cx| {
            let form = cx.new(|cx| {
                ArticleForm::new(
                    create_services.articles.clone(),
                    create_services.media.clone(),
                    None,
                    cx,
                )
            });
            let subscription =
                cx.subscribe(&form, |table, _, event: &FormEvent, cx| match event {
                    FormEvent::Closed => table.close_modal(cx),
                    FormEvent::Saved => table.refresh_after_mutation(cx),
                });
            (form.into(), subscription)
        });

        let view: FormFactory<Article> = Box::new(move |item, _window, cx| {
            let fields = item
                .map(|article| {
                    vec![
                        ("Title".into(), article.title.clone().into()),
                        ("Author".into(), article.cell("author").into()),
                        ("Status".into(), article.cell("published").into()),
                        ("Published".into(), article.cell("publishedAt").into()),
                        ("Scheduled".into(), article.cell("scheduledAt").into()),
                        ("Summary".into(), article.summary.clone().into()),
                    ]
                })
                .unwrap_or_default();
            let title = item.map(|article| article.title.clone()).unwrap_or_default();
            let form = cx.new(|_| DetailView::new(title, fields));
            let subscription =
                cx.subscribe(&form, |table, _, _: &FormEvent, cx| table.close_modal(cx));
            (form.into(), subscription)
        });

        let schedule_services = services.clone();
        let schedule: FormFactory<Article> = Box::new(move |item, _window, cx| {
            let article = item.cloned().expect("BUG: schedule opens from a row");
            let form = cx.new(|cx| {
                ScheduleDialog::new(schedule_services.articles.clone(), article, cx)
            });
            let subscription =
                cx.subscribe(&form, |table, _, event: &FormEvent, cx| match event {
                    FormEvent::Closed => table.close_modal(cx),
                    FormEvent::Saved => table.refresh_after_mutation(cx),
                });
            (form.into(), subscription)
        });

        let publish_services = services.clone();
        let publish: FormFactory<Article> = Box::new(move |item, _window, cx| {
            let article = item.cloned().expect("BUG: publish opens from a row");
            let form =
                cx.new(|_| PublishDialog::new(publish_services.articles.clone(), article));
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
            Column::new("title", "Title").sortable().width(px(240.)),
            Column::new("author", "Author").width(px(120.)),
            Column::new("published", "Status").sortable().width(px(100.)),
            Column::new("publishedAt", "Published").sortable().width(px(110.)),
            Column::new("scheduledAt", "Scheduled").width(px(110.)),
        ];

        let table = cx.new(|cx| {
            EntityTable::new(
                EntityTableParams {
                    title: "Articles".into(),
                    columns,
                    store,
                    forms: EntityForms {
                        view: Some(view),
                        edit,
                        create,
                        gallery: None,
                        schedule: Some(schedule),
                        publish: Some(publish),
                    },
                    filter_package: package_for(EntityKind::Article),
                    image_url: Some(image_url),
                    initial_query: Some(ListQuery::new(page_size)),
                },
                cx,
            )
        });

        Self { table }
    }
}

impl Render for ArticlesPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        v_flex().size_full().child(self.table.clone())
    }
}
