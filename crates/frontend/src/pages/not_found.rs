use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <section class="page-hero">
                <p class="page-hero__eyebrow">"404"</p>
                <h1 class="page-hero__title">"Page not found"</h1>
                <p class="page-hero__subtitle">"The page you are looking for does not exist."</p>
                <a class="button button--light" href="/">"Back to home"</a>
            </section>
        </div>
    }
}
