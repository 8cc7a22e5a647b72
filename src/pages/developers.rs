//! Developer Pages

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::{use_id_param, use_page_param};
use crate::api::{self, Page};
use crate::components::{CompoundCard, DeveloperCard, EmptyState, ErrorState, Loading, PaginationBar, Remote};
use crate::context::use_auth;
use crate::models::{Compound, Developer};
use crate::store::use_app_store;

#[component]
pub fn DevelopersPage() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let page = use_page_param();
    let (developers, set_developers) = signal(Remote::<Page<Developer>>::Loading);

    Effect::new(move |_| {
        let page = page.get();
        set_developers.set(Remote::Loading);
        spawn_local(async move {
            match api::list_developers(page).await {
                Ok(list) => set_developers.set(Remote::Ready(list)),
                Err(e) => {
                    auth.report(&store, &e);
                    set_developers.set(Remote::Failed(e.user_message()));
                }
            }
        });
    });

    view! {
        <div class="page developers-page">
            <h1>"Developers"</h1>
            {move || match developers.get() {
                Remote::Loading => view! { <Loading /> }.into_any(),
                Remote::Failed(msg) => view! { <ErrorState message=msg /> }.into_any(),
                Remote::Ready(list) if list.items.is_empty() => {
                    view! { <EmptyState message="No developers yet." /> }.into_any()
                }
                Remote::Ready(list) => view! {
                    <div class="card-grid">
                        {list.items.into_iter().map(|d| view! { <DeveloperCard developer=d /> }).collect_view()}
                    </div>
                    <PaginationBar
                        pagination=list.pagination
                        href_for=|p: u32| format!("/developers?page={}", p)
                    />
                }.into_any(),
            }}
        </div>
    }
}

#[component]
pub fn DeveloperDetailPage() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let developer_id = use_id_param();
    let (detail, set_detail) = signal(Remote::<(Developer, Vec<Compound>)>::Loading);

    Effect::new(move |_| {
        let Some(id) = developer_id.get() else {
            set_detail.set(Remote::Failed("Developer not found".to_string()));
            return;
        };
        set_detail.set(Remote::Loading);
        spawn_local(async move {
            let (developer, compounds) = futures::join!(api::get_developer(id), api::developer_compounds(id));
            match (developer, compounds) {
                (Ok(developer), Ok(compounds)) => set_detail.set(Remote::Ready((developer, compounds))),
                (Err(e), _) if e.is_not_found() => {
                    set_detail.set(Remote::Failed("Developer not found".to_string()));
                }
                (Ok(developer), Err(e)) => {
                    auth.report(&store, &e);
                    set_detail.set(Remote::Ready((developer, Vec::new())));
                }
                (Err(e), _) => {
                    auth.report(&store, &e);
                    set_detail.set(Remote::Failed(e.user_message()));
                }
            }
        });
    });

    view! {
        <div class="page developer-detail">
            {move || match detail.get() {
                Remote::Loading => view! { <Loading /> }.into_any(),
                Remote::Failed(msg) => view! {
                    <ErrorState message=msg />
                    <A href="/developers">"Back to developers"</A>
                }.into_any(),
                Remote::Ready((developer, compounds)) => {
                    let units_href = format!("/units?developer_id={}", developer.id);
                    view! {
                        <header class="entity-header">
                            {developer.logo.map(|src| view! { <img class="developer-logo large" src=src alt="" /> })}
                            <h1>{developer.name}</h1>
                            <A href=units_href>"See all units"</A>
                        </header>
                        {developer.description.map(|d| view! { <p class="entity-description">{d}</p> })}
                        <h2>"Compounds"</h2>
                        {if compounds.is_empty() {
                            view! { <EmptyState message="No compounds listed yet." /> }.into_any()
                        } else {
                            view! {
                                <div class="card-grid">
                                    {compounds.into_iter().map(|c| view! { <CompoundCard compound=c /> }).collect_view()}
                                </div>
                            }.into_any()
                        }}
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
