//! Favorite Button
//!
//! Heart toggle for a unit. Anonymous visitors are sent to sign-in and no
//! request is made; signed-in users get an optimistic flip that follows
//! the server's answer or rolls back on failure.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};

use crate::api;
use crate::context::use_auth;
use crate::favorites::FavoriteToggle;
use crate::guard::{return_path, run_protected};
use crate::store::{store_favorite, store_set_favorite, use_app_store};

#[component]
pub fn FavoriteButton(
    unit_id: u64,
    /// Flag from the payload that rendered this card
    initial: bool,
    /// Told about every server-confirmed change
    #[prop(default = None)] on_change: Option<Callback<(u64, bool)>>,
) -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let navigate = use_navigate();
    let location = use_location();

    let toggle = RwSignal::new(FavoriteToggle::new(
        store_favorite(&store, unit_id).unwrap_or(initial),
    ));

    // Follow confirmations made by other cards showing the same unit
    Effect::new(move |_| {
        if let Some(confirmed) = store_favorite(&store, unit_id) {
            toggle.update(|t| t.sync(confirmed));
        }
    });

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();

        let return_to = return_path(&location.pathname.get_untracked(), &location.search.get_untracked());
        let started = run_protected(auth.token.get_untracked(), &return_to, |token| {
            let mut began = false;
            toggle.update(|t| began = t.begin());
            began.then_some(token)
        });

        match started {
            Err(redirect) => navigate(&redirect.path, Default::default()),
            Ok(None) => {}
            Ok(Some(token)) => {
                spawn_local(async move {
                    match api::toggle_favorite(&token, unit_id).await {
                        Ok(server_value) => {
                            web_sys::console::log_1(&format!("[FAV] unit {} -> {}", unit_id, server_value).into());
                            toggle.update(|t| t.confirm(server_value));
                            store_set_favorite(&store, unit_id, server_value);
                            if let Some(cb) = on_change {
                                cb.run((unit_id, server_value));
                            }
                        }
                        Err(e) => {
                            toggle.update(|t| t.rollback());
                            auth.report(&store, &e);
                        }
                    }
                });
            }
        }
    };

    view! {
        <button
            class=move || {
                let t = toggle.get();
                match (t.shown, t.pending) {
                    (true, true) => "fav-btn active pending",
                    (true, false) => "fav-btn active",
                    (false, true) => "fav-btn pending",
                    (false, false) => "fav-btn",
                }
            }
            title=move || if toggle.get().shown { "Remove from favorites" } else { "Add to favorites" }
            aria-pressed=move || toggle.get().shown.to_string()
            on:click=on_click
        >
            {move || if toggle.get().shown { "♥" } else { "♡" }}
        </button>
    }
}
