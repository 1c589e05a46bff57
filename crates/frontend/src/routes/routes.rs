use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::layout::{Footer, Navbar};
use crate::pages::{ContactPage, LandingPage, NotFoundPage, ProductsPage, TrackPage};
use crate::widgets::SupportChat;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/products") view=ProductsPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/track") view=TrackPage />
                </Routes>
            </main>
            <Footer />
            <SupportChat />
        </Router>
    }
}
