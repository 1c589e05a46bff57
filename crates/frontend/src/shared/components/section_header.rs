use leptos::prelude::*;

/// Eyebrow line, title and optional subtitle at the top of a page section
#[component]
pub fn SectionHeader(
    #[prop(into)] eyebrow: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    /// Light text on a dark band
    #[prop(optional)]
    dark: bool,
) -> impl IntoView {
    let class = if dark {
        "section-header section-header--dark"
    } else {
        "section-header"
    };

    view! {
        <div class=class>
            <p class="section-header__eyebrow">{eyebrow}</p>
            <h2 class="section-header__title">{title}</h2>
            <div class="section-header__rule"></div>
            {move || subtitle.get().map(|s| view! {
                <p class="section-header__subtitle">{s}</p>
            })}
        </div>
    }
}
