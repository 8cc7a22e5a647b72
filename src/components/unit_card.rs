//! Unit Card
//!
//! Listing tile used by every unit grid.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::FavoriteButton;
use crate::models::{format_price, Unit};

#[component]
pub fn UnitCard(
    unit: Unit,
    #[prop(default = None)] on_favorite_change: Option<Callback<(u64, bool)>>,
) -> impl IntoView {
    let href = format!("/units/{}", unit.id);
    let cover = unit.cover().map(str::to_string);
    let title = unit.title.clone();
    let alt = title.clone();
    let location = unit
        .compound
        .as_ref()
        .map(|c| c.name.clone())
        .or_else(|| unit.city.as_ref().map(|c| c.name.clone()));

    view! {
        <article class="unit-card">
            <A href=href.clone() attr:class="unit-card-image">
                {match cover {
                    Some(src) => view! { <img src=src alt=alt loading="lazy" /> }.into_any(),
                    None => view! { <div class="image-placeholder"></div> }.into_any(),
                }}
            </A>
            <div class="unit-card-fav">
                <FavoriteButton unit_id=unit.id initial=unit.is_favorite on_change=on_favorite_change />
            </div>
            <div class="unit-card-body">
                <A href=href attr:class="unit-card-title">{title}</A>
                {location.map(|l| view! { <p class="unit-card-location">{l}</p> })}
                <p class="unit-card-price">{format_price(unit.price)}</p>
                <ul class="unit-card-specs">
                    {unit.bedrooms.map(|n| view! { <li>{n} " beds"</li> })}
                    {unit.bathrooms.map(|n| view! { <li>{n} " baths"</li> })}
                    {unit.area.map(|a| view! { <li>{format!("{:.0} m²", a)}</li> })}
                </ul>
            </div>
        </article>
    }
}

/// Grid of unit cards
#[component]
pub fn UnitGrid(
    units: Vec<Unit>,
    #[prop(default = None)] on_favorite_change: Option<Callback<(u64, bool)>>,
) -> impl IntoView {
    view! {
        <div class="card-grid">
            {units.into_iter().map(|unit| view! {
                <UnitCard unit=unit on_favorite_change=on_favorite_change />
            }).collect_view()}
        </div>
    }
}
