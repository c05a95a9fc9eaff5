//! Application-wide state

use std::sync::Arc;

use gpui::Global;
use ludex_api::{
    ArticleService, AuthService, CollectionService, EntityService, MediaService, SocialService,
    Transport,
};
use ludex_core::{Developer, Game, Genre, Platform};
use ludex_settings::LudexSettings;

/// Every service the UI talks to, built once over a shared transport.
#[derive(Clone)]
pub struct AppServices {
    pub transport: Arc<dyn Transport>,
    pub games: EntityService<Game>,
    pub articles: ArticleService,
    pub platforms: EntityService<Platform>,
    pub genres: EntityService<Genre>,
    pub developers: EntityService<Developer>,
    pub media: MediaService,
    pub collection: CollectionService,
    pub social: SocialService,
    pub auth: AuthService,
}

impl AppServices {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            games: EntityService::new(transport.clone()),
            articles: ArticleService::new(transport.clone()),
            platforms: EntityService::new(transport.clone()),
            genres: EntityService::new(transport.clone()),
            developers: EntityService::new(transport.clone()),
            media: MediaService::new(transport.clone()),
            collection: CollectionService::new(transport.clone()),
            social: SocialService::new(transport.clone()),
            auth: AuthService::new(transport.clone()),
            transport,
        }
    }
}

/// Global application state: services and settings.
pub struct AppState {
    pub services: AppServices,
    pub settings: LudexSettings,
}

impl Global for AppState {}
