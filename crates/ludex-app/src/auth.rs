//! Auth context
//!
//! The session token lives in one global, set at startup from the session
//! file and updated by the sign-in view. Gated surfaces read this value
//! instead of poking at storage in their render paths.

use gpui::{
    Context, Entity, Global, IntoElement, ParentElement, Render, SharedString, Styled, Window,
    div, px,
};
use ludex_api::{AuthService, Session, runtime};
use ludex_settings::{ensure_directories, save_json, session_file};
use ludex_ui::{
    ActiveTheme, Button, ButtonVariants, Disableable, TextInputState, v_flex,
};

/// Global auth state. `None` means signed out.
pub struct AuthState {
    pub session: Option<Session>,
}

impl Global for AuthState {}

impl AuthState {
    pub fn signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.session.as_ref().map(|s| s.user.id)
    }
}

/// Minimal credentials form shown in place of gated surfaces.
pub struct SignInView {
    auth: AuthService,
    username_input: Entity<TextInputState>,
    password_input: Entity<TextInputState>,
    signing_in: bool,
    error: Option<SharedString>,
}

impl SignInView {
    pub fn new(auth: AuthService, cx: &mut Context<Self>) -> Self {
        Self {
            auth,
            username_input: cx.new(|cx| TextInputState::new(cx).placeholder("Username")),
            password_input: cx.new(|cx| TextInputState::new(cx).placeholder("Password")),
            signing_in: false,
            error: None,
        }
    }

    fn sign_in(&mut self, cx: &mut Context<Self>) {
        if self.signing_in {
            return;
        }
        let username = self.username_input.read(cx).value().trim().to_string();
        let password = self.password_input.read(cx).value().to_string();
        if username.is_empty() || password.is_empty() {
            self.error = Some("Username and password are required".into());
            cx.notify();
            return;
        }

        self.signing_in = true;
        self.error = None;
        cx.notify();

        let auth = self.auth.clone();
        cx.spawn(async move |view, cx| {
            let joined =
                runtime::spawn(async move { auth.login(&username, &password).await }).await;
            let result = match joined {
                Ok(result) => result.map_err(|e| e.to_string()),
                Err(err) => Err(err.to_string()),
            };

            _ = view.update(cx, |view, cx| {
                view.signing_in = false;
                match result {
                    Ok(session) => {
                        persist_session(&session);
                        cx.update_global::<AuthState, _>(|auth, _| {
                            auth.session = Some(session);
                        });
                    }
                    Err(err) => {
                        tracing::warn!(%err, "sign-in failed");
                        view.error = Some("Sign-in failed".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }
}

fn persist_session(session: &Session) {
    let result = ensure_directories()
        .and_then(|()| session_file())
        .and_then(|path| save_json(&path, session));
    if let Err(err) = result {
        tracing::warn!(%err, "could not persist session");
    }
}

impl Render for SignInView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();

        v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .child(
                v_flex()
                    .w(px(300.))
                    .gap_3()
                    .child(
                        div()
                            .text_size(px(16.))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(theme.foreground)
                            .child("Sign in"),
                    )
                    .child(
                        div()
                            .text_size(px(12.))
                            .text_color(theme.muted_foreground)
                            .child("Your collection and messages need an account."),
                    )
                    .child(self.username_input.clone())
                    .child(self.password_input.clone())
                    .child(
                        Button::new("sign-in")
                            .label(if self.signing_in {
                                "Signing in..."
                            } else {
                                "Sign in"
                            })
                            .primary()
                            .disabled(self.signing_in)
                            .on_click(cx.listener(|this: &mut Self, _, _, cx| this.sign_in(cx))),
                    )
                    .children(self.error.clone().map(|error| {
                        div()
                            .text_size(px(12.))
                            .text_color(theme.danger)
                            .child(error)
                    })),
            )
    }
}
