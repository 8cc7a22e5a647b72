//! Compound Pages
//!
//! Paginated compound list and a compound's detail with its units.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::{use_id_param, use_page_param};
use crate::api::{self, Page};
use crate::components::{CompoundCard, EmptyState, ErrorState, Loading, PaginationBar, Remote, UnitGrid};
use crate::context::use_auth;
use crate::models::{Compound, Unit};
use crate::store::use_app_store;

#[component]
pub fn CompoundsPage() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let page = use_page_param();
    let (compounds, set_compounds) = signal(Remote::<Page<Compound>>::Loading);

    Effect::new(move |_| {
        let page = page.get();
        set_compounds.set(Remote::Loading);
        spawn_local(async move {
            match api::list_compounds(page).await {
                Ok(list) => set_compounds.set(Remote::Ready(list)),
                Err(e) => {
                    auth.report(&store, &e);
                    set_compounds.set(Remote::Failed(e.user_message()));
                }
            }
        });
    });

    view! {
        <div class="page compounds-page">
            <h1>"Compounds"</h1>
            {move || match compounds.get() {
                Remote::Loading => view! { <Loading /> }.into_any(),
                Remote::Failed(msg) => view! { <ErrorState message=msg /> }.into_any(),
                Remote::Ready(list) if list.items.is_empty() => {
                    view! { <EmptyState message="No compounds yet." /> }.into_any()
                }
                Remote::Ready(list) => view! {
                    <div class="card-grid">
                        {list.items.into_iter().map(|c| view! { <CompoundCard compound=c /> }).collect_view()}
                    </div>
                    <PaginationBar
                        pagination=list.pagination
                        href_for=|p: u32| format!("/compounds?page={}", p)
                    />
                }.into_any(),
            }}
        </div>
    }
}

#[component]
pub fn CompoundDetailPage() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let compound_id = use_id_param();
    let page = use_page_param();
    let (detail, set_detail) = signal(Remote::<(Compound, Page<Unit>)>::Loading);

    Effect::new(move |_| {
        let token = auth.token.get();
        let page = page.get();
        let Some(id) = compound_id.get() else {
            set_detail.set(Remote::Failed("Compound not found".to_string()));
            return;
        };
        set_detail.set(Remote::Loading);
        spawn_local(async move {
            let (compound, units) = futures::join!(
                api::get_compound(id),
                api::compound_units(id, page, token.as_deref()),
            );
            match (compound, units) {
                (Ok(compound), Ok(units)) => set_detail.set(Remote::Ready((compound, units))),
                (Err(e), _) if e.is_not_found() => {
                    set_detail.set(Remote::Failed("Compound not found".to_string()));
                }
                (Ok(compound), Err(e)) => {
                    // Compound still worth showing without its units
                    auth.report(&store, &e);
                    set_detail.set(Remote::Ready((compound, Page::default())));
                }
                (Err(e), _) => {
                    auth.report(&store, &e);
                    set_detail.set(Remote::Failed(e.user_message()));
                }
            }
        });
    });

    view! {
        <div class="page compound-detail">
            {move || match detail.get() {
                Remote::Loading => view! { <Loading /> }.into_any(),
                Remote::Failed(msg) => view! {
                    <ErrorState message=msg />
                    <A href="/compounds">"Back to compounds"</A>
                }.into_any(),
                Remote::Ready((compound, units)) => {
                    let id = compound.id;
                    view! {
                        <header class="entity-header">
                            {compound.image.map(|src| view! { <img class="entity-cover" src=src alt="" /> })}
                            <h1>{compound.name}</h1>
                            {compound.location.map(|l| view! { <p class="entity-sub">{l}</p> })}
                            {compound.developer.map(|d| view! {
                                <A href=format!("/developers/{}", d.id)>{format!("by {}", d.name)}</A>
                            })}
                        </header>
                        {compound.description.map(|d| view! { <p class="entity-description">{d}</p> })}
                        <h2>"Units in this compound"</h2>
                        {if units.items.is_empty() {
                            view! { <EmptyState message="No units listed here yet." /> }.into_any()
                        } else {
                            view! {
                                <UnitGrid units=units.items />
                                <PaginationBar
                                    pagination=units.pagination
                                    href_for=move |p: u32| format!("/compounds/{}?page={}", id, p)
                                />
                            }.into_any()
                        }}
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
