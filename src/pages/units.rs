//! Units Page
//!
//! Filterable, paginated unit listing. The filter lives in the URL; the
//! form edits a draft and navigates on submit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::api::{self, Page};
use crate::components::{EmptyState, ErrorState, Loading, PaginationBar, Remote, UnitGrid};
use crate::context::use_auth;
use crate::models::{City, Unit};
use crate::search::{UnitFilter, SORT_OPTIONS, UNIT_TYPES};
use crate::store::use_app_store;

fn parse_opt<T: std::str::FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}

#[component]
pub fn UnitsPage() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let navigate = use_navigate();
    let query = use_query_map();

    let filter = Memo::new(move |_| query.with(|q| UnitFilter::from_query(|k| q.get(k))));

    let (units, set_units) = signal(Remote::<Page<Unit>>::Loading);
    let (cities, set_cities) = signal(Vec::<City>::new());
    let draft = RwSignal::new(filter.get_untracked());

    // Cities for the dropdown, once
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(list) = api::list_cities().await {
                set_cities.set(list);
            }
        });
    });

    // Re-fetch whenever the URL filter or the session changes
    Effect::new(move |_| {
        let current = filter.get();
        let token = auth.token.get();
        draft.set(current.clone());
        set_units.set(Remote::Loading);
        spawn_local(async move {
            match api::list_units(&current, token.as_deref()).await {
                Ok(page) => set_units.set(Remote::Ready(page)),
                Err(e) => {
                    auth.report(&store, &e);
                    set_units.set(Remote::Failed(e.user_message()));
                }
            }
        });
    });

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let next = draft.get_untracked().with_page(1);
            navigate(&next.href(), Default::default());
        }
    };

    let on_reset = move |_| navigate(&UnitFilter::default().href(), Default::default());

    view! {
        <div class="page units-page">
            <h1>"Units"</h1>

            <form class="filter-bar" on:submit=on_submit>
                <input
                    type="search"
                    placeholder="Keyword"
                    prop:value=move || draft.with(|d| d.q.clone())
                    on:input=move |ev| draft.update(|d| d.q = event_target_value(&ev))
                />
                <select on:change=move |ev| draft.update(|d| d.city_id = parse_opt(&event_target_value(&ev)))>
                    <option value="">"Any city"</option>
                    <For
                        each=move || cities.get()
                        key=|city| city.id
                        children=move |city| {
                            let id = city.id;
                            view! {
                                <option value=id.to_string() selected=move || draft.with(|d| d.city_id == Some(id))>
                                    {city.name}
                                </option>
                            }
                        }
                    />
                </select>
                <select on:change=move |ev| draft.update(|d| d.unit_type = event_target_value(&ev))>
                    {UNIT_TYPES.iter().map(|(value, label)| view! {
                        <option value=*value selected=move || draft.with(|d| d.unit_type == *value)>{*label}</option>
                    }).collect_view()}
                </select>
                <input
                    type="number"
                    min="0"
                    placeholder="Min price"
                    prop:value=move || draft.with(|d| d.min_price.map(|p| p.to_string()).unwrap_or_default())
                    on:input=move |ev| draft.update(|d| d.min_price = parse_opt(&event_target_value(&ev)))
                />
                <input
                    type="number"
                    min="0"
                    placeholder="Max price"
                    prop:value=move || draft.with(|d| d.max_price.map(|p| p.to_string()).unwrap_or_default())
                    on:input=move |ev| draft.update(|d| d.max_price = parse_opt(&event_target_value(&ev)))
                />
                <select on:change=move |ev| draft.update(|d| d.bedrooms = parse_opt(&event_target_value(&ev)))>
                    <option value="">"Any bedrooms"</option>
                    {(1..=5u32).map(|n| view! {
                        <option value=n.to_string() selected=move || draft.with(|d| d.bedrooms == Some(n))>
                            {format!("{}+", n)}
                        </option>
                    }).collect_view()}
                </select>
                <select on:change=move |ev| draft.update(|d| d.sort = event_target_value(&ev))>
                    {SORT_OPTIONS.iter().map(|(value, label)| view! {
                        <option value=*value selected=move || draft.with(|d| d.sort == *value)>{*label}</option>
                    }).collect_view()}
                </select>
                <button type="submit" class="btn btn-primary">"Search"</button>
                <button type="button" class="btn" on:click=on_reset>"Reset"</button>
            </form>

            {move || match units.get() {
                Remote::Loading => view! { <Loading /> }.into_any(),
                Remote::Failed(msg) => view! { <ErrorState message=msg /> }.into_any(),
                Remote::Ready(page) if page.items.is_empty() => {
                    view! { <EmptyState message="No units match your filters." /> }.into_any()
                }
                Remote::Ready(page) => {
                    let current = filter.get_untracked();
                    view! {
                        <UnitGrid units=page.items />
                        <PaginationBar
                            pagination=page.pagination
                            href_for=move |p: u32| current.with_page(p).href()
                        />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
