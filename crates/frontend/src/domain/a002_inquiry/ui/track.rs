use contracts::domain::a002_inquiry::aggregate::TrackInquiryResponse;
use contracts::domain::a002_inquiry::reference_code::ReferenceCode;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::domain::a002_inquiry::api;
use crate::shared::components::ui::{Button, Input, StatusBadge};
use crate::shared::icons::icon;

fn format_submitted(result: &TrackInquiryResponse) -> String {
    result.created_at.format("%d %b %Y, %H:%M UTC").to_string()
}

#[component]
fn TrackResult(result: TrackInquiryResponse) -> impl IntoView {
    let submitted = format_submitted(&result);
    let status = result.status;

    view! {
        <div class="track-result">
            <div class="track-result__header">
                <div>
                    <span class="track-result__label">"Reference"</span>
                    <p class="reference-code">{result.reference_code}</p>
                </div>
                <StatusBadge status=Signal::stored(status) />
            </div>
            <dl class="track-result__details">
                <dt>"Submitted"</dt>
                <dd>{submitted}</dd>
                {result.product_names.map(|names| view! {
                    <dt>"Products"</dt>
                    <dd>{names}</dd>
                })}
                <dt>"Your message"</dt>
                <dd class="track-result__message">{result.message}</dd>
            </dl>
        </div>
    }
}

/// Lookup of a quote request by its reference code
#[component]
pub fn TrackInquiry() -> impl IntoView {
    let query = use_query_map();
    let code = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let result = RwSignal::new(None::<TrackInquiryResponse>);

    let lookup = move || {
        if loading.get_untracked() {
            return;
        }
        let input = code.get_untracked();
        error.set(None);
        let reference = match ReferenceCode::parse(&input) {
            Ok(r) => r,
            Err(e) => {
                result.set(None);
                error.set(Some(e));
                return;
            }
        };
        code.set(reference.to_string());
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::track_inquiry(reference.as_str()).await {
                Ok(found) => result.set(Some(found)),
                Err(e) => {
                    result.set(None);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    };

    // A link from the confirmation screen carries ?code=...
    Effect::new(move |_| {
        if let Some(from_query) = query.get().get("code") {
            if !from_query.trim().is_empty() && from_query != code.get_untracked() {
                code.set(from_query);
                lookup();
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        lookup();
    };

    view! {
        <div class="track">
            <form class="track__form" on:submit=on_submit>
                <Input
                    id="track-code"
                    label="Reference code"
                    placeholder="SE-20250101-AB12"
                    value=code
                    on_input=Callback::new(move |v: String| code.set(v))
                    class="track__input"
                />
                <Button button_type="submit" disabled=Signal::derive(move || loading.get())>
                    {icon("search")}
                    {move || if loading.get() { " Checking..." } else { " Track" }}
                </Button>
            </form>

            {move || error.get().map(|e| view! {
                <div class="track__error" role="alert">{e}</div>
            })}
            {move || result.get().map(|r| view! { <TrackResult result=r /> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a002_inquiry::aggregate::InquiryStatus;

    #[test]
    fn submitted_time_is_labelled_utc() {
        let result = TrackInquiryResponse {
            success: true,
            reference_code: "SE-20250314-0A1B".into(),
            status: InquiryStatus::Pending,
            created_at: NaiveDate::from_ymd_opt(2025, 3, 14)
                .and_then(|d| d.and_hms_opt(9, 5, 0))
                .unwrap(),
            product_names: None,
            message: "Need 30 fans".into(),
        };
        assert_eq!(format_submitted(&result), "14 Mar 2025, 09:05 UTC");
    }
}
