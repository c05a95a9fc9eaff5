//! Main window: navigation plus the active page

use gpui::prelude::FluentBuilder;
use gpui::{
    AnyView, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, px,
};
use ludex_ui::{ActiveTheme, h_flex, v_flex};

use crate::app::AppState;
use crate::pages::{
    ArticlesPage, CollectionPage, DevelopersPage, GamesPage, GenresPage, PlatformsPage,
    SocialPage,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Games,
    Articles,
    Platforms,
    Genres,
    Developers,
    Collection,
    Social,
}

impl Section {
    const ALL: [Section; 7] = [
        Section::Games,
        Section::Articles,
        Section::Platforms,
        Section::Genres,
        Section::Developers,
        Section::Collection,
        Section::Social,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Games => "Games",
            Self::Articles => "Articles",
            Self::Platforms => "Platforms",
            Self::Genres => "Genres",
            Self::Developers => "Developers",
            Self::Collection => "Collection",
            Self::Social => "Social",
        }
    }
}

pub struct MainView {
    active: Section,
    games: Option<Entity<GamesPage>>,
    articles: Option<Entity<ArticlesPage>>,
    platforms: Option<Entity<PlatformsPage>>,
    genres: Option<Entity<GenresPage>>,
    developers: Option<Entity<DevelopersPage>>,
    collection: Option<Entity<CollectionPage>>,
    social: Option<Entity<SocialPage>>,
}

impl MainView {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let mut this = Self {
            active: Section::Games,
            games: None,
            articles: None,
            platforms: None,
            genres: None,
            developers: None,
            collection: None,
            social: None,
        };
        this.open(Section::Games, cx);
        this
    }

    /// Switch sections, creating the page on first visit. Pages persist
    /// once created; their state survives navigation.
    fn open(&mut self, section: Section, cx: &mut Context<Self>) {
        let state = cx.global::<AppState>();
        let services = state.services.clone();
        let page_size = state.settings.page_size;
        let poll_seconds = state.settings.chat_poll_seconds;

        match section {
            Section::Games => {
                if self.games.is_none() {
                    self.games =
                        Some(cx.new(|cx| GamesPage::new(services, page_size, cx)));
                }
            }
            Section::Articles => {
                if self.articles.is_none() {
                    self.articles =
                        Some(cx.new(|cx| ArticlesPage::new(services, page_size, cx)));
                }
            }
            Section::Platforms => {
                if self.platforms.is_none() {
                    self.platforms =
                        Some(cx.new(|cx| PlatformsPage::new(services, page_size, cx)));
                }
            }
            Section::Genres => {
                if self.genres.is_none() {
                    self.genres =
                        Some(cx.new(|cx| GenresPage::new(services, page_size, cx)));
                }
            }
            Section::Developers => {
                if self.developers.is_none() {
                    self.developers =
                        Some(cx.new(|cx| DevelopersPage::new(services, page_size, cx)));
                }
            }
            Section::Collection => {
                if self.collection.is_none() {
                    self.collection = Some(cx.new(|cx| CollectionPage::new(services, cx)));
                }
            }
            Section::Social => {
                if self.social.is_none() {
                    self.social =
                        Some(cx.new(|cx| SocialPage::new(services, poll_seconds, cx)));
                }
            }
        }

        self.active = section;
        cx.notify();
    }

    fn active_page(&self) -> Option<AnyView> {
        match self.active {
            Section::Games => self.games.clone().map(Into::into),
            Section::Articles => self.articles.clone().map(Into::into),
            Section::Platforms => self.platforms.clone().map(Into::into),
            Section::Genres => self.genres.clone().map(Into::into),
            Section::Developers => self.developers.clone().map(Into::into),
            Section::Collection => self.collection.clone().map(Into::into),
            Section::Social => self.social.clone().map(Into::into),
        }
    }
}

impl Render for MainView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();

        let mut nav = v_flex()
            .w(px(170.))
            .h_full()
            .flex_shrink_0()
            .gap_1()
            .p_2()
            .bg(theme.tab_bar)
            .border_r_1()
            .border_color(theme.border)
            .child(
                div()
                    .px_2()
                    .py_2()
                    .text_size(px(18.))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(theme.primary)
                    .child("Ludex"),
            );

        for (ix, section) in Section::ALL.into_iter().enumerate() {
            let is_active = self.active == section;
            nav = nav.child(
                div()
                    .id(("nav", ix))
                    .w_full()
                    .px_2()
                    .py_1()
                    .rounded(theme.radius)
                    .text_size(px(13.))
                    .text_color(if is_active {
                        theme.foreground
                    } else {
                        theme.muted_foreground
                    })
                    .when(is_active, |this| this.bg(theme.secondary_active))
                    .cursor_pointer()
                    .hover(|style| style.bg(cx.theme().secondary))
                    .on_click(cx.listener(move |this, _, _, cx| {
                        this.open(section, cx);
                    }))
                    .child(section.label()),
            );
        }

        h_flex()
            .size_full()
            .items_start()
            .bg(theme.background)
            .text_color(theme.foreground)
            .font_family(theme.font_family.clone())
            .child(nav)
            .child(div().flex_1().h_full().children(self.active_page()))
    }
}
