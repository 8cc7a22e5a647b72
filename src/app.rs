//! Estates Frontend App
//!
//! Application shell: context providers, session start-up, the router and
//! the chrome around every page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::api;
use crate::components::{Footer, Navbar, ToastHost};
use crate::context::AuthContext;
use crate::pages::*;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    let store = Store::new(AppState::default());
    provide_context(store);
    let auth = AuthContext::new();
    provide_context(auth);

    auth.start(store);

    // Site settings feed the navbar, footer and contact page
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_settings().await {
                Ok(settings) => store.settings().set(Some(settings)),
                Err(e) => web_sys::console::warn_1(&format!("[APP] settings unavailable: {}", e).into()),
            }
        });
    });

    view! {
        <Router>
            <Navbar />
            <main class="main-content">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/units") view=UnitsPage />
                    <Route path=path!("/units/:id") view=UnitDetailPage />
                    <Route path=path!("/compounds") view=CompoundsPage />
                    <Route path=path!("/compounds/:id") view=CompoundDetailPage />
                    <Route path=path!("/developers") view=DevelopersPage />
                    <Route path=path!("/developers/:id") view=DeveloperDetailPage />
                    <Route path=path!("/sign-in") view=SignInPage />
                    <Route path=path!("/sign-up") view=SignUpPage />
                    <Route path=path!("/forgot-password") view=ForgotPasswordPage />
                    <Route path=path!("/reset-password") view=ResetPasswordPage />
                    <Route path=path!("/favorites") view=FavoritesPage />
                    <Route path=path!("/profile") view=ProfilePage />
                    <Route path=path!("/testimonials") view=TestimonialsPage />
                    <Route path=path!("/faq") view=FaqPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <Footer />
            <ToastHost />
        </Router>
    }
}
