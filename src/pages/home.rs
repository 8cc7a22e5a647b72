//! Home Page
//!
//! Hero, headline stats, services, featured units and testimonials. The
//! four fetches run as one batch and the page renders once all settle.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::{self, ApiError};
use crate::components::{Loading, StarRating, UnitGrid};
use crate::context::use_auth;
use crate::models::{Service, Stats, Testimonial, Unit};
use crate::store::use_app_store;

#[derive(Debug, Clone, Default)]
struct HomeData {
    stats: Option<Stats>,
    services: Vec<Service>,
    featured: Vec<Unit>,
    testimonials: Vec<Testimonial>,
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let (data, set_data) = signal::<Option<HomeData>>(None);

    Effect::new(move |_| {
        let token = auth.token.get();
        spawn_local(async move {
            let (stats, services, featured, testimonials) = futures::join!(
                api::get_stats(),
                api::list_services(),
                api::featured_units(token.as_deref()),
                api::list_testimonials(),
            );

            // One toast for the batch, not one per section
            let first_error: Option<ApiError> = [
                stats.as_ref().err(),
                services.as_ref().err(),
                featured.as_ref().err(),
                testimonials.as_ref().err(),
            ]
            .into_iter()
            .flatten()
            .next()
            .cloned();
            if let Some(e) = first_error {
                auth.report(&store, &e);
            }

            set_data.set(Some(HomeData {
                stats: stats.ok(),
                services: services.unwrap_or_default(),
                featured: featured.unwrap_or_default(),
                testimonials: testimonials.unwrap_or_default(),
            }));
        });
    });

    view! {
        <div class="page home">
            <section class="hero">
                <h1>"Find your next home"</h1>
                <p>"Browse units, compounds and developers in one place."</p>
                <div class="hero-actions">
                    <A href="/units" attr:class="btn btn-primary">"Browse units"</A>
                    <A href="/compounds" attr:class="btn">"Explore compounds"</A>
                </div>
            </section>

            {move || match data.get() {
                None => view! { <Loading /> }.into_any(),
                Some(home) => view! {
                    {home.stats.map(|s| view! {
                        <section class="stats">
                            <div class="stat"><strong>{s.units}</strong><span>"Units"</span></div>
                            <div class="stat"><strong>{s.compounds}</strong><span>"Compounds"</span></div>
                            <div class="stat"><strong>{s.developers}</strong><span>"Developers"</span></div>
                            <div class="stat"><strong>{s.clients}</strong><span>"Happy clients"</span></div>
                        </section>
                    })}

                    {(!home.featured.is_empty()).then(|| view! {
                        <section class="featured">
                            <h2>"Featured units"</h2>
                            <UnitGrid units=home.featured />
                        </section>
                    })}

                    <section class="services">
                        <h2>"Our services"</h2>
                        <div class="card-grid">
                            {home.services.into_iter().map(|svc| view! {
                                <article class="service-card">
                                    {svc.icon.map(|src| view! { <img src=src alt="" /> })}
                                    <h3>{svc.title}</h3>
                                    {svc.description.map(|d| view! { <p>{d}</p> })}
                                </article>
                            }).collect_view()}
                        </div>
                    </section>

                    <section class="testimonials-strip">
                        <h2>"What our clients say"</h2>
                        <div class="card-grid">
                            {home.testimonials.into_iter().take(3).map(|t| view! {
                                <blockquote class="testimonial">
                                    <p>{t.content}</p>
                                    <footer>
                                        <strong>{t.name}</strong>
                                        {t.rating.map(|r| view! { <StarRating value=r /> })}
                                    </footer>
                                </blockquote>
                            }).collect_view()}
                        </div>
                        <A href="/testimonials">"All testimonials"</A>
                    </section>
                }.into_any(),
            }}
        </div>
    }
}
