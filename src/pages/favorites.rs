//! Favorites Page
//!
//! The signed-in user's saved units. Un-favoriting a card removes it from
//! the list once the server confirms.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, A};

use crate::api;
use crate::components::{EmptyState, ErrorState, Loading, Remote, UnitGrid};
use crate::context::use_auth;
use crate::guard::sign_in_path;
use crate::models::Unit;
use crate::store::{store_set_favorite, use_app_store};

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let auth = use_auth();

    move || {
        if auth.is_authenticated() {
            view! { <FavoritesList /> }.into_any()
        } else {
            view! { <Redirect path=sign_in_path("/favorites") /> }.into_any()
        }
    }
}

#[component]
fn FavoritesList() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let (units, set_units) = signal(Remote::<Vec<Unit>>::Loading);

    Effect::new(move |_| {
        let Some(token) = auth.token.get() else { return };
        spawn_local(async move {
            match api::list_favorites(&token).await {
                Ok(list) => {
                    // Overrides left by other pages must not contradict the list
                    for unit in &list {
                        store_set_favorite(&store, unit.id, true);
                    }
                    set_units.set(Remote::Ready(list));
                }
                Err(e) => {
                    auth.report(&store, &e);
                    set_units.set(Remote::Failed(e.user_message()));
                }
            }
        });
    });

    let on_favorite_change = Callback::new(move |(unit_id, is_favorite): (u64, bool)| {
        if !is_favorite {
            set_units.update(|state| {
                if let Remote::Ready(list) = state {
                    list.retain(|u| u.id != unit_id);
                }
            });
        }
    });

    view! {
        <div class="page favorites-page">
            <h1>"My favorites"</h1>
            {move || match units.get() {
                Remote::Loading => view! { <Loading /> }.into_any(),
                Remote::Failed(msg) => view! { <ErrorState message=msg /> }.into_any(),
                Remote::Ready(list) if list.is_empty() => view! {
                    <EmptyState message="You have not saved any units yet." />
                    <A href="/units">"Browse units"</A>
                }.into_any(),
                Remote::Ready(list) => view! {
                    <UnitGrid units=list on_favorite_change=Some(on_favorite_change) />
                }.into_any(),
            }}
        </div>
    }
}
