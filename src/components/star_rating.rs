//! Star Rating
//!
//! Read-only stars, or an input when `on_change` is given.

use leptos::prelude::*;

pub const MAX_STARS: u8 = 5;

#[component]
pub fn StarRating(
    #[prop(into)] value: Signal<u8>,
    #[prop(optional)] on_change: Option<Callback<u8>>,
) -> impl IntoView {
    let class = if on_change.is_some() { "stars stars-input" } else { "stars" };

    view! {
        <span class=class>
            {(1..=MAX_STARS).map(|n| {
                let filled = move || value.get() >= n;
                view! {
                    <span
                        class=move || if filled() { "star filled" } else { "star" }
                        on:click=move |_| {
                            if let Some(cb) = on_change {
                                cb.run(n);
                            }
                        }
                    >
                        "★"
                    </span>
                }
            }).collect_view()}
        </span>
    }
}
