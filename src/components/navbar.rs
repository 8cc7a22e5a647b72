//! Navigation Bar
//!
//! Brand, primary links, quick search and the account menu.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::config::SITE_NAME;
use crate::context::use_auth;
use crate::models::{format_price, Unit};
use crate::search::{quick_search_term, UnitFilter};
use crate::session::SessionState;
use crate::store::{push_toast, store_clear_favorites, use_app_store, AppStateStoreFields, ToastKind};

/// Type-ahead unit search. Nothing is requested until the trimmed input
/// reaches the minimum length.
#[component]
fn QuickSearch() -> impl IntoView {
    let store = use_app_store();
    let navigate = use_navigate();

    let (input, set_input) = signal(String::new());
    let (results, set_results) = signal(Vec::<Unit>::new());

    Effect::new(move |_| {
        let current = input.get();
        let Some(term) = quick_search_term(&current).map(str::to_string) else {
            set_results.set(Vec::new());
            return;
        };
        spawn_local(async move {
            match api::search_units(&term).await {
                // Drop answers for a query the user has already changed
                Ok(units) if quick_search_term(&input.get_untracked()) == Some(term.as_str()) => {
                    set_results.set(units);
                }
                Ok(_) => {}
                Err(e) => push_toast(&store, ToastKind::Error, e.user_message()),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let filter = UnitFilter { q: input.get_untracked().trim().to_string(), ..Default::default() };
        set_input.set(String::new());
        navigate(&filter.href(), Default::default());
    };

    view! {
        <form class="quick-search" role="search" on:submit=on_submit>
            <input
                type="search"
                placeholder="Search units, compounds, areas..."
                autocomplete="off"
                prop:value=move || input.get()
                on:input=move |ev| set_input.set(event_target_value(&ev))
            />
            <Show when=move || !results.get().is_empty()>
                <ul class="quick-search-results">
                    <For
                        each=move || results.get()
                        key=|unit| unit.id
                        children=move |unit| {
                            view! {
                                <li>
                                    <a
                                        href=format!("/units/{}", unit.id)
                                        on:click=move |_| set_input.set(String::new())
                                    >
                                        <span class="qs-title">{unit.title}</span>
                                        <span class="qs-price">{format_price(unit.price)}</span>
                                    </a>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </form>
    }
}

/// Account links; swaps between sign-in and the signed-in menu
#[component]
fn AccountMenu() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let navigate = use_navigate();

    let sign_out = move |_| {
        auth.sign_out();
        store_clear_favorites(&store);
        push_toast(&store, ToastKind::Info, "You have been signed out");
        navigate("/", Default::default());
    };

    view! {
        <div class="account-menu">
            <Show
                when=move || auth.is_authenticated()
                fallback=|| view! {
                    <A href="/sign-in" attr:class="nav-link">"Sign in"</A>
                    <A href="/sign-up" attr:class="btn btn-primary">"Sign up"</A>
                }
            >
                <Show when=move || auth.state.get() == SessionState::Expiring>
                    <span class="session-badge" title="Checking your session">"⟳"</span>
                </Show>
                <A href="/favorites" attr:class="nav-link">"♥ Favorites"</A>
                <A href="/profile" attr:class="nav-link">
                    {move || auth.user.get().map(|u| u.name).filter(|n| !n.is_empty()).unwrap_or_else(|| "My account".to_string())}
                </A>
            </Show>
            <button class="btn btn-link" hidden=move || !auth.is_authenticated() on:click=sign_out>
                "Sign out"
            </button>
        </div>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_app_store();
    let (menu_open, set_menu_open) = signal(false);

    let brand = move || {
        store
            .settings()
            .get()
            .and_then(|s| s.site_name)
            .unwrap_or_else(|| SITE_NAME.to_string())
    };

    view! {
        <header class="navbar">
            <A href="/" attr:class="nav-brand">{brand}</A>
            <button class="nav-toggle" on:click=move |_| set_menu_open.update(|v| *v = !*v)>"☰"</button>
            <nav
                class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }
                on:click=move |_| set_menu_open.set(false)
            >
                <A href="/units" attr:class="nav-link">"Units"</A>
                <A href="/compounds" attr:class="nav-link">"Compounds"</A>
                <A href="/developers" attr:class="nav-link">"Developers"</A>
                <A href="/testimonials" attr:class="nav-link">"Testimonials"</A>
                <A href="/faq" attr:class="nav-link">"FAQ"</A>
                <A href="/contact" attr:class="nav-link">"Contact"</A>
            </nav>
            <QuickSearch />
            <AccountMenu />
        </header>
    }
}
