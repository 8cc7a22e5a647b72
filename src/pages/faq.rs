//! FAQ Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{EmptyState, ErrorState, Loading, Remote};
use crate::context::use_auth;
use crate::models::Faq;
use crate::store::use_app_store;

#[component]
pub fn FaqPage() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let (faqs, set_faqs) = signal(Remote::<Vec<Faq>>::Loading);
    // One answer open at a time
    let (open, set_open) = signal::<Option<u64>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_faqs().await {
                Ok(list) => set_faqs.set(Remote::Ready(list)),
                Err(e) => {
                    auth.report(&store, &e);
                    set_faqs.set(Remote::Failed(e.user_message()));
                }
            }
        });
    });

    view! {
        <div class="page faq-page">
            <h1>"Frequently asked questions"</h1>
            {move || match faqs.get() {
                Remote::Loading => view! { <Loading /> }.into_any(),
                Remote::Failed(msg) => view! { <ErrorState message=msg /> }.into_any(),
                Remote::Ready(list) if list.is_empty() => {
                    view! { <EmptyState message="Nothing here yet." /> }.into_any()
                }
                Remote::Ready(list) => view! {
                    <div class="accordion">
                        {list.into_iter().map(|faq| {
                            let id = faq.id;
                            let is_open = move || open.get() == Some(id);
                            view! {
                                <div class=move || if is_open() { "accordion-item open" } else { "accordion-item" }>
                                    <button
                                        type="button"
                                        class="accordion-question"
                                        aria-expanded=move || is_open().to_string()
                                        on:click=move |_| set_open.update(|o| {
                                            *o = if *o == Some(id) { None } else { Some(id) };
                                        })
                                    >
                                        {faq.question}
                                    </button>
                                    <div class="accordion-answer" hidden=move || !is_open()>
                                        <p>{faq.answer}</p>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
