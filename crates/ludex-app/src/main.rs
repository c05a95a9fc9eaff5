//! Ludex, a desktop client for the Ludex game catalogue and community
//! platform, built with GPUI.

mod app;
mod auth;
mod logging;
mod main_view;
mod pages;

use std::sync::Arc;

use gpui::{
    App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions, px, size,
};
use ludex_api::{HttpTransport, Session};
use ludex_settings::{LudexSettings, load_json, session_file};
use ludex_ui::{Theme, ThemeMode};

use crate::app::{AppServices, AppState};
use crate::auth::AuthState;
use crate::main_view::MainView;

fn main() {
    // Logging comes up before anything else; the guard must outlive the
    // app so the file writer flushes on exit.
    let _logging_guard = match logging::init() {
        Ok(guard) => guard,
        Err(err) => {
            // The one acceptable eprintln - logging is not up yet.
            eprintln!("FATAL: failed to initialize logging: {err}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        build_mode = if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        },
        "Starting Ludex"
    );

    let settings = LudexSettings::load();
    tracing::info!(api = %settings.api_base_url, "configuration loaded");

    let transport = match HttpTransport::new(&settings.api_base_url) {
        Ok(transport) => Arc::new(transport),
        Err(err) => {
            tracing::error!(%err, "invalid API base URL");
            std::process::exit(1);
        }
    };
    let services = AppServices::new(transport);

    let session = restore_session();
    if let Some(session) = &session {
        services.auth.restore(session);
    }

    let theme_mode = settings.theme;
    let app = Application::new().with_assets(ludex_ui::Assets);
    app.run(move |cx| {
        ludex_ui::init(cx);
        if theme_mode == ThemeMode::Light {
            cx.set_global(Theme::new(ThemeMode::Light));
        }
        cx.set_global(AppState { services, settings });
        cx.set_global(AuthState { session });

        open_main_window(cx);
        cx.activate(true);
    });
}

fn restore_session() -> Option<Session> {
    let path = match session_file() {
        Ok(path) => path,
        Err(err) => {
            tracing::warn!(%err, "no session path available");
            return None;
        }
    };
    match load_json::<Session>(&path) {
        Ok(session) => {
            if let Some(session) = &session {
                tracing::info!(user = %session.user.username, "session file found");
            }
            session
        }
        Err(err) => {
            tracing::warn!(%err, "ignoring unreadable session file");
            None
        }
    }
}

fn open_main_window(cx: &mut App) {
    let bounds = Bounds::centered(None, size(px(1280.), px(820.)), cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some("Ludex".into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    let opened = cx.open_window(options, |_window, cx| cx.new(MainView::new));
    if let Err(err) = opened {
        tracing::error!(%err, "failed to open the main window");
        std::process::exit(1);
    }
}
