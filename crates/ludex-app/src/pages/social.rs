//! Friends and messaging page
//!
//! The conversation list re-fetches on a fixed timer, independent of the
//! rest of the page state. The polling task is owned by the page entity
//! and dies with it.

use std::time::Duration;

use gpui::prelude::FluentBuilder;
use gpui::{
    Context, Entity, InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Task, Window, div, px,
};
use ludex_api::runtime;
use ludex_core::{ChatMessage, Conversation, FriendRequest};
use ludex_ui::{
    ActiveTheme, Button, ButtonVariants, Icon, IconName, InputEvent, Sizable, TextInputState,
    h_flex, v_flex,
};

use crate::app::AppServices;
use crate::auth::{AuthState, SignInView};

pub struct SocialPage {
    services: AppServices,
    poll_interval: Duration,

    requests: Vec<FriendRequest>,
    conversations: Vec<Conversation>,
    selected_conversation: Option<i64>,
    messages: Vec<ChatMessage>,
    composer: Entity<TextInputState>,
    error: Option<SharedString>,
    sign_in: Option<Entity<SignInView>>,

    _subscriptions: Vec<gpui::Subscription>,
    _poll_task: Task<()>,
}

impl SocialPage {
    pub fn new(services: AppServices, poll_seconds: u64, cx: &mut Context<Self>) -> Self {
        let composer = cx.new(|cx| TextInputState::new(cx).placeholder("Write a message..."));
        let subscriptions = vec![
            cx.subscribe(&composer, |this: &mut Self, _, event: &InputEvent, cx| {
                if let InputEvent::Submitted(_) = event {
                    this.send_message(cx);
                }
            }),
        ];

        cx.observe_global::<AuthState>(|this: &mut Self, cx| {
            if cx.global::<AuthState>().signed_in() {
                this.sign_in = None;
                this.start(cx);
            }
            cx.notify();
        })
        .detach();

        let mut this = Self {
            services,
            poll_interval: Duration::from_secs(poll_seconds.max(1)),
            requests: Vec::new(),
            conversations: Vec::new(),
            selected_conversation: None,
            messages: Vec::new(),
            composer,
            error: None,
            sign_in: None,
            _subscriptions: subscriptions,
            _poll_task: Task::ready(()),
        };
        if cx.global::<AuthState>().signed_in() {
            this.start(cx);
        }
        this
    }

    /// Initial load plus the fixed-interval conversation poll.
    fn start(&mut self, cx: &mut Context<Self>) {
        self.load_requests(cx);
        self.load_conversations(cx);

        let social = self.services.social.clone();
        let interval = self.poll_interval;
        self._poll_task = cx.spawn(async move |view, cx| {
            loop {
                smol::Timer::after(interval).await;
                let social = social.clone();
                let joined =
                    runtime::spawn(async move { social.conversations().await }).await;
                let conversations = match joined {
                    Ok(Ok(conversations)) => conversations,
                    Ok(Err(err)) => {
                        tracing::debug!(%err, "conversation poll failed");
                        continue;
                    }
                    Err(err) => {
                        tracing::debug!(%err, "conversation poll task failed");
                        continue;
                    }
                };
                // The page was torn down; stop polling.
                if view
                    .update(cx, |view, cx| {
                        view.conversations = conversations;
                        cx.notify();
                    })
                    .is_err()
                {
                    break;
                }
            }
        });
    }

    fn load_requests(&mut self, cx: &mut Context<Self>) {
        let social = self.services.social.clone();
        cx.spawn(async move |view, cx| {
            let joined = runtime::spawn(async move { social.friend_requests().await }).await;
            if let Ok(Ok(requests)) = joined {
                _ = view.update(cx, |view, cx| {
                    view.requests = requests;
                    cx.notify();
                });
            }
        })
        .detach();
    }

    fn load_conversations(&mut self, cx: &mut Context<Self>) {
        let social = self.services.social.clone();
        cx.spawn(async move |view, cx| {
            let joined = runtime::spawn(async move { social.conversations().await }).await;
            let result = match joined {
                Ok(result) => result.map_err(|e| e.to_string()),
                Err(err) => Err(err.to_string()),
            };
            _ = view.update(cx, |view, cx| {
                match result {
                    Ok(conversations) => {
                        view.conversations = conversations;
                        view.error = None;
                    }
                    Err(err) => {
                        tracing::error!(%err, "conversation list failed");
                        view.error = Some("Failed to load conversations".into());
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }

    fn select_conversation(&mut self, conversation_id: i64, cx: &mut Context<Self>) {
        self.selected_conversation = Some(conversation_id);
        self.messages.clear();
        cx.notify();

        let social = self.services.social.clone();
        cx.spawn(async move |view, cx| {
            let joined =
                runtime::spawn(async move { social.messages(conversation_id).await }).await;
            if let Ok(Ok(messages)) = joined {
                _ = view.update(cx, |view, cx| {
                    // Ignore if the user switched conversations meanwhile.
                    if view.selected_conversation == Some(conversation_id) {
                        view.messages = messages;
                        cx.notify();
                    }
                });
            }
        })
        .detach();
    }

    fn send_message(&mut self, cx: &mut Context<Self>) {
        let Some(conversation_id) = self.selected_conversation else {
            return;
        };
        let body = self.composer.read(cx).value().trim().to_string();
        if body.is_empty() {
            return;
        }
        self.composer.update(cx, |composer, cx| composer.clear(cx));

        let social = self.services.social.clone();
        cx.spawn(async move |view, cx| {
            let joined = runtime::spawn(async move {
                social.send_message(conversation_id, &body).await
            })
            .await;
            let result = match joined {
                Ok(result) => result.map(|_| ()).map_err(|e| e.to_string()),
                Err(err) => Err(err.to_string()),
            };
            _ = view.update(cx, |view, cx| match result {
                Ok(()) => view.select_conversation(conversation_id, cx),
                Err(err) => {
                    tracing::error!(%err, "sending message failed");
                    view.error = Some("Could not send the message".into());
                    cx.notify();
                }
            });
        })
        .detach();
    }

    fn respond_to_request(&mut self, request_id: i64, accept: bool, cx: &mut Context<Self>) {
        let social = self.services.social.clone();
        cx.spawn(async move |view, cx| {
            let joined = runtime::spawn(async move {
                if accept {
                    social.accept_request(request_id).await
                } else {
                    social.decline_request(request_id).await
                }
            })
            .await;
            let result = match joined {
                Ok(result) => result.map_err(|e| e.to_string()),
                Err(err) => Err(err.to_string()),
            };
            _ = view.update(cx, |view, cx| match result {
                Ok(()) => {
                    view.load_requests(cx);
                    view.load_conversations(cx);
                }
                Err(err) => {
                    tracing::error!(%err, request_id, "friend request response failed");
                    view.error = Some("Could not update the friend request".into());
                    cx.notify();
                }
            });
        })
        .detach();
    }

    fn render_sidebar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();
        let mut sidebar = v_flex()
            .w(px(260.))
            .h_full()
            .flex_shrink_0()
            .gap_2()
            .border_r_1()
            .border_color(theme.border)
            .pr_3();

        if !self.requests.is_empty() {
            sidebar = sidebar.child(
                div()
                    .text_size(px(12.))
                    .text_color(theme.muted_foreground)
                    .child("Friend requests"),
            );
            for (ix, request) in self.requests.clone().into_iter().enumerate() {
                let request_id = request.id;
                sidebar = sidebar.child(
                    h_flex()
                        .w_full()
                        .gap_1()
                        .child(
                            Icon::new(IconName::User)
                                .size_4()
                                .text_color(theme.muted_foreground),
                        )
                        .child(
                            div()
                                .flex_1()
                                .text_size(px(13.))
                                .text_color(theme.foreground)
                                .child(request.sender.username.clone()),
                        )
                        .child(
                            Button::new(("request-accept", ix))
                                .icon(IconName::Check)
                                .ghost()
                                .xsmall()
                                .on_click(cx.listener(move |this: &mut Self, _, _, cx| {
                                    this.respond_to_request(request_id, true, cx);
                                })),
                        )
                        .child(
                            Button::new(("request-decline", ix))
                                .icon(IconName::X)
                                .ghost()
                                .xsmall()
                                .on_click(cx.listener(move |this: &mut Self, _, _, cx| {
                                    this.respond_to_request(request_id, false, cx);
                                })),
                        ),
                );
            }
        }

        sidebar = sidebar.child(
            div()
                .text_size(px(12.))
                .text_color(theme.muted_foreground)
                .child("Conversations"),
        );

        if self.conversations.is_empty() {
            sidebar = sidebar.child(
                div()
                    .text_size(px(12.))
                    .text_color(theme.muted_foreground)
                    .child("No conversations yet"),
            );
        }

        for (ix, conversation) in self.conversations.clone().into_iter().enumerate() {
            let conversation_id = conversation.id;
            let is_selected = self.selected_conversation == Some(conversation_id);
            sidebar = sidebar.child(
                v_flex()
                    .id(("conversation", ix))
                    .w_full()
                    .p_2()
                    .rounded(theme.radius)
                    .when(is_selected, |this| this.bg(theme.table_active))
                    .cursor_pointer()
                    .hover(|style| style.bg(cx.theme().secondary))
                    .on_click(cx.listener(move |this: &mut Self, _, _, cx| {
                        this.select_conversation(conversation_id, cx);
                    }))
                    .child(
                        h_flex()
                            .w_full()
                            .justify_between()
                            .child(
                                div()
                                    .text_size(px(13.))
                                    .text_color(theme.foreground)
                                    .child(conversation.friend.username.clone()),
                            )
                            .when(conversation.unread_count > 0, |this| {
                                this.child(
                                    div()
                                        .px_1()
                                        .rounded(theme.radius)
                                        .bg(theme.primary)
                                        .text_size(px(10.))
                                        .text_color(theme.primary_foreground)
                                        .child(conversation.unread_count.to_string()),
                                )
                            }),
                    )
                    .when_some(conversation.last_message.clone(), |this, last| {
                        this.child(
                            div()
                                .text_size(px(11.))
                                .text_color(theme.muted_foreground)
                                .overflow_hidden()
                                .whitespace_nowrap()
                                .child(last),
                        )
                    }),
            );
        }

        sidebar
    }

    fn render_thread(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();
        let my_id = cx.global::<AuthState>().user_id();

        let mut thread = v_flex().flex_1().h_full().gap_2().pl_3();

        if self.selected_conversation.is_none() {
            return thread.child(
                div()
                    .text_size(px(12.))
                    .text_color(theme.muted_foreground)
                    .child("Select a conversation"),
            );
        }

        let mut messages = v_flex().flex_1().gap_1().id("messages").overflow_y_scroll();
        for message in &self.messages {
            let mine = Some(message.sender_id) == my_id;
            messages = messages.child(
                h_flex()
                    .w_full()
                    .when(mine, |this| this.justify_end())
                    .child(
                        div()
                            .max_w(px(420.))
                            .px_2()
                            .py_1()
                            .rounded(theme.radius_lg)
                            .bg(if mine { theme.primary } else { theme.secondary })
                            .text_size(px(13.))
                            .text_color(if mine {
                                theme.primary_foreground
                            } else {
                                theme.foreground
                            })
                            .child(message.body.clone()),
                    ),
            );
        }

        thread = thread.child(messages).child(
            h_flex()
                .w_full()
                .gap_2()
                .pb_3()
                .child(div().flex_1().child(self.composer.clone()))
                .child(
                    Button::new("send-message")
                        .icon(IconName::Send)
                        .primary()
                        .small()
                        .on_click(cx.listener(|this: &mut Self, _, _, cx| {
                            this.send_message(cx)
                        })),
                ),
        );

        thread
    }
}

impl Render for SocialPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if !cx.global::<AuthState>().signed_in() {
            let auth = self.services.auth.clone();
            let sign_in = self
                .sign_in
                .get_or_insert_with(|| cx.new(|cx| SignInView::new(auth, cx)))
                .clone();
            return v_flex().size_full().child(sign_in);
        }

        let theme = cx.theme().clone();

        v_flex()
            .size_full()
            .px_4()
            .pt_3()
            .gap_2()
            .bg(theme.table)
            .child(
                div()
                    .text_size(px(16.))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(theme.foreground)
                    .child("Friends & messages"),
            )
            .when_some(self.error.clone(), |this, error| {
                this.child(
                    div()
                        .text_size(px(12.))
                        .text_color(theme.danger)
                        .child(error),
                )
            })
            .child(
                h_flex()
                    .w_full()
                    .flex_1()
                    .items_start()
                    .child(self.render_sidebar(cx))
                    .child(self.render_thread(cx)),
            )
    }
}
