//! Unit Detail Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::use_id_param;
use crate::api;
use crate::components::{BookingForm, ErrorState, FavoriteButton, ImageGallery, Loading, Remote, ReviewSection};
use crate::context::use_auth;
use crate::models::{format_price, Unit};
use crate::store::use_app_store;

#[component]
pub fn UnitDetailPage() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let unit_id = use_id_param();
    let (unit, set_unit) = signal(Remote::<Unit>::Loading);

    Effect::new(move |_| {
        let token = auth.token.get();
        let Some(id) = unit_id.get() else {
            set_unit.set(Remote::Failed("Unit not found".to_string()));
            return;
        };
        set_unit.set(Remote::Loading);
        spawn_local(async move {
            match api::get_unit(id, token.as_deref()).await {
                Ok(found) => set_unit.set(Remote::Ready(found)),
                // Absent resource: plain not-found state, no toast
                Err(e) if e.is_not_found() => set_unit.set(Remote::Failed("Unit not found".to_string())),
                Err(e) => {
                    auth.report(&store, &e);
                    set_unit.set(Remote::Failed(e.user_message()));
                }
            }
        });
    });

    view! {
        <div class="page unit-detail">
            {move || match unit.get() {
                Remote::Loading => view! { <Loading /> }.into_any(),
                Remote::Failed(msg) => view! {
                    <ErrorState message=msg />
                    <A href="/units">"Back to units"</A>
                }.into_any(),
                Remote::Ready(u) => view! { <UnitDetail unit=u /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn UnitDetail(unit: Unit) -> impl IntoView {
    let id = unit.id;
    let gallery = unit.gallery();

    view! {
        <div class="unit-detail-layout">
            <div class="unit-detail-main">
                <ImageGallery images=gallery alt=unit.title.clone() />
                <div class="unit-detail-head">
                    <h1>{unit.title.clone()}</h1>
                    <FavoriteButton unit_id=id initial=unit.is_favorite />
                </div>
                <p class="unit-detail-price">{format_price(unit.price)}</p>
                <dl class="unit-facts">
                    {unit.unit_type.clone().map(|t| view! { <dt>"Type"</dt><dd>{t}</dd> })}
                    {unit.status.clone().map(|s| view! { <dt>"Status"</dt><dd>{s}</dd> })}
                    {unit.area.map(|a| view! { <dt>"Area"</dt><dd>{format!("{:.0} m²", a)}</dd> })}
                    {unit.bedrooms.map(|n| view! { <dt>"Bedrooms"</dt><dd>{n}</dd> })}
                    {unit.bathrooms.map(|n| view! { <dt>"Bathrooms"</dt><dd>{n}</dd> })}
                    {unit.city.clone().map(|c| view! { <dt>"City"</dt><dd>{c.name}</dd> })}
                    {unit.compound.clone().map(|c| view! {
                        <dt>"Compound"</dt>
                        <dd><A href=format!("/compounds/{}", c.id)>{c.name}</A></dd>
                    })}
                    {unit.developer.clone().map(|d| view! {
                        <dt>"Developer"</dt>
                        <dd><A href=format!("/developers/{}", d.id)>{d.name}</A></dd>
                    })}
                </dl>
                {unit.description.clone().map(|d| view! { <p class="unit-description">{d}</p> })}
                <ReviewSection unit_id=id />
            </div>
            <aside class="unit-detail-side">
                <BookingForm unit_id=id />
            </aside>
        </div>
    }
}
