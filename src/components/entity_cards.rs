//! Compound and Developer Cards

use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::{Compound, Developer};

#[component]
pub fn CompoundCard(compound: Compound) -> impl IntoView {
    let href = format!("/compounds/{}", compound.id);
    let place = compound
        .location
        .clone()
        .or_else(|| compound.city.as_ref().map(|c| c.name.clone()));

    view! {
        <article class="entity-card">
            <A href=href>
                {compound.image.map(|src| view! { <img src=src alt="" loading="lazy" /> })}
                <h3>{compound.name}</h3>
            </A>
            {place.map(|p| view! { <p class="entity-card-sub">{p}</p> })}
            {compound.developer.map(|d| view! {
                <A href=format!("/developers/{}", d.id) attr:class="entity-card-link">{d.name}</A>
            })}
            {compound.units_count.map(|n| view! { <p class="entity-card-count">{n} " units"</p> })}
        </article>
    }
}

#[component]
pub fn DeveloperCard(developer: Developer) -> impl IntoView {
    let href = format!("/developers/{}", developer.id);

    view! {
        <article class="entity-card developer-card">
            <A href=href>
                {developer.logo.map(|src| view! { <img class="developer-logo" src=src alt="" loading="lazy" /> })}
                <h3>{developer.name}</h3>
            </A>
            {developer.compounds_count.map(|n| view! { <p class="entity-card-count">{n} " compounds"</p> })}
        </article>
    }
}
