//! Site Footer
//!
//! Contact details and social links from the site settings.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::SITE_NAME;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Footer() -> impl IntoView {
    let store = use_app_store();

    view! {
        <footer class="footer">
            {move || {
                let settings = store.settings().get().unwrap_or_default();
                let name = settings.site_name.clone().unwrap_or_else(|| SITE_NAME.to_string());
                let socials: Vec<(&'static str, String)> = [
                    ("Facebook", settings.facebook.clone()),
                    ("Instagram", settings.instagram.clone()),
                    ("Twitter", settings.twitter.clone()),
                    ("WhatsApp", settings.whatsapp.clone()),
                ]
                .into_iter()
                .filter_map(|(label, url)| url.filter(|u| !u.is_empty()).map(|u| (label, u)))
                .collect();

                view! {
                    <div class="footer-cols">
                        <div>
                            <h4>{name.clone()}</h4>
                            {settings.about.map(|a| view! { <p class="footer-about">{a}</p> })}
                        </div>
                        <div>
                            <h4>"Contact"</h4>
                            {settings.address.map(|a| view! { <p>{a}</p> })}
                            {settings.phone.map(|p| view! { <p><a href=format!("tel:{}", p)>{p.clone()}</a></p> })}
                            {settings.email.map(|e| view! { <p><a href=format!("mailto:{}", e)>{e.clone()}</a></p> })}
                        </div>
                        <div>
                            <h4>"Explore"</h4>
                            <A href="/units">"Units"</A>
                            <A href="/compounds">"Compounds"</A>
                            <A href="/faq">"FAQ"</A>
                            <A href="/contact">"Contact us"</A>
                        </div>
                        <div class="footer-social">
                            {socials.into_iter().map(|(label, url)| view! {
                                <a href=url target="_blank" rel="noopener">{label}</a>
                            }).collect_view()}
                        </div>
                    </div>
                    <p class="footer-copy">{format!("© {}", name)}</p>
                }
            }}
        </footer>
    }
}
