use gloo_net::http::Request;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils::api_url;
use crate::shared::company;
use crate::shared::icons::icon;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "Quote desk online",
            ServerStatus::Offline => "Quote desk unreachable",
            ServerStatus::Checking => "Checking...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "footer__status footer__status--online",
            ServerStatus::Offline => "footer__status footer__status--offline",
            ServerStatus::Checking => "footer__status",
        }
    }
}

async fn ping_server() -> bool {
    match Request::get(&api_url("/health")).send().await {
        Ok(response) => response.ok(),
        Err(e) => {
            log::warn!("Health check failed: {}", e);
            false
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ServerStatus::Checking);

    Effect::new(move |_| {
        spawn_local(async move {
            let online = ping_server().await;
            status.set(if online {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    });

    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer class="footer">
            <div class="footer__grid container">
                <div class="footer__about">
                    <h3 class="footer__brand">{company::NAME}</h3>
                    <p>{company::TAGLINE}</p>
                    <span class=move || status.get().css_class()>
                        {move || status.get().display_text()}
                    </span>
                </div>

                <div>
                    <h4 class="footer__heading">"Quick Links"</h4>
                    <ul class="footer__links">
                        <li><a href="/">"Home"</a></li>
                        <li><a href="/products">"Products"</a></li>
                        <li><a href="/contact">"Request a Quote"</a></li>
                        <li><a href="/track">"Track Request"</a></li>
                    </ul>
                </div>

                <div>
                    <h4 class="footer__heading">"Contact"</h4>
                    <ul class="footer__contact">
                        <li>
                            {icon("map-pin")}
                            <span>
                                {company::ADDRESS_LINES.iter().map(|line| view! { <span class="footer__line">{*line}</span> }).collect_view()}
                            </span>
                        </li>
                        <li>{icon("phone")}<a href=company::PHONE_HREF>{company::PHONE}</a></li>
                        <li>{icon("mail")}<a href=format!("mailto:{}", company::EMAIL)>{company::EMAIL}</a></li>
                        <li>{icon("support")}<span>{company::HOURS}</span></li>
                    </ul>
                </div>
            </div>
            <div class="footer__bottom">
                {format!("© {} {}. All rights reserved.", year, company::NAME)}
            </div>
        </footer>
    }
}
