//! Floating FAQ assistant shown on every page

pub mod responder;

use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::shared::icons::icon;

const TYPING_MIN_MS: f64 = 1000.0;
const TYPING_JITTER_MS: f64 = 500.0;
/// Quick replies disappear once the conversation grows past this
const QUICK_REPLY_LIMIT: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sender {
    Bot,
    User,
}

#[derive(Clone, Debug, PartialEq)]
struct ChatMessage {
    sender: Sender,
    text: String,
    time: String,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            time: chrono::Local::now().format("%H:%M").to_string(),
        }
    }
}

fn typing_delay_ms() -> u32 {
    (TYPING_MIN_MS + js_sys::Math::random() * TYPING_JITTER_MS) as u32
}

#[component]
pub fn SupportChat() -> impl IntoView {
    let open = RwSignal::new(false);
    let input = RwSignal::new(String::new());
    let typing = RwSignal::new(false);
    let messages = RwSignal::new(vec![ChatMessage::new(Sender::Bot, responder::GREETING)]);
    let bottom = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        messages.track();
        typing.track();
        if let Some(el) = bottom.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let send = move |text: String| {
        let text = text.trim().to_string();
        if text.is_empty() {
            return;
        }
        let reply = responder::reply_for(&text);
        messages.update(|m| m.push(ChatMessage::new(Sender::User, text)));
        input.set(String::new());
        typing.set(true);

        spawn_local(async move {
            TimeoutFuture::new(typing_delay_ms()).await;
            messages.update(|m| m.push(ChatMessage::new(Sender::Bot, reply)));
            typing.set(false);
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send(input.get_untracked());
        }
    };

    view! {
        <div class="support-chat">
            <Show when=move || open.get()>
                <div class="support-chat__window" role="dialog" aria-label="Support chat">
                    <div class="support-chat__header">
                        <span class="support-chat__avatar">{icon("chat")}</span>
                        <div class="support-chat__heading">
                            <h3>"Support Assistant"</h3>
                            <p><span class="support-chat__dot"></span>"Online · Instant replies"</p>
                        </div>
                        <button
                            class="support-chat__close"
                            aria-label="Close chat"
                            on:click=move |_| open.set(false)
                        >
                            {icon("x")}
                        </button>
                    </div>

                    <div class="support-chat__messages">
                        <For
                            each=move || messages.get().into_iter().enumerate()
                            key=|(i, _)| *i
                            children=move |(_, msg)| {
                                let class = match msg.sender {
                                    Sender::User => "chat-bubble chat-bubble--user",
                                    Sender::Bot => "chat-bubble chat-bubble--bot",
                                };
                                view! {
                                    <div class=class>
                                        <p class="chat-bubble__text">{msg.text}</p>
                                        <p class="chat-bubble__time">{msg.time}</p>
                                    </div>
                                }
                            }
                        />
                        <Show when=move || typing.get()>
                            <div class="chat-bubble chat-bubble--bot chat-bubble--typing">
                                <span></span><span></span><span></span>
                            </div>
                        </Show>
                        <div node_ref=bottom></div>
                    </div>

                    <Show when=move || messages.with(|m| m.len() <= QUICK_REPLY_LIMIT)>
                        <div class="support-chat__quick">
                            <p>"Quick questions:"</p>
                            {responder::QUICK_REPLIES.iter().map(|&reply| view! {
                                <button class="support-chat__chip" on:click=move |_| send(reply.to_string())>
                                    {reply}
                                </button>
                            }).collect_view()}
                        </div>
                    </Show>

                    <div class="support-chat__input">
                        <input
                            type="text"
                            placeholder="Type your message..."
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button
                            class="support-chat__send"
                            aria-label="Send"
                            disabled=move || input.with(|v| v.trim().is_empty())
                            on:click=move |_| send(input.get_untracked())
                        >
                            {icon("send")}
                        </button>
                    </div>
                </div>
            </Show>

            <button
                class=move || if open.get() { "support-chat__toggle support-chat__toggle--open" } else { "support-chat__toggle" }
                aria-label="Toggle support chat"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {move || if open.get() { icon("x") } else { icon("chat") }}
            </button>
        </div>
    }
}
