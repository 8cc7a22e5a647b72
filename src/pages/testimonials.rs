//! Testimonials Page
//!
//! Published client testimonials, and a form for signed-in users to add
//! their own (held for moderation server-side).

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};

use crate::api::{self, TestimonialForm};
use crate::components::{EmptyState, ErrorState, Loading, Remote, StarRating};
use crate::context::use_auth;
use crate::guard::{return_path, run_protected};
use crate::models::Testimonial;
use crate::store::{push_toast, use_app_store, ToastKind};

#[component]
pub fn TestimonialsPage() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let navigate = use_navigate();
    let location = use_location();

    let (testimonials, set_testimonials) = signal(Remote::<Vec<Testimonial>>::Loading);
    let (rating, set_rating) = signal(5u8);
    let (content, set_content) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_testimonials().await {
                Ok(list) => set_testimonials.set(Remote::Ready(list)),
                Err(e) => {
                    auth.report(&store, &e);
                    set_testimonials.set(Remote::Failed(e.user_message()));
                }
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = content.get_untracked().trim().to_string();
        if text.is_empty() {
            push_toast(&store, ToastKind::Info, "Please write something first");
            return;
        }
        let form = TestimonialForm { content: text, rating: rating.get_untracked() };

        let return_to = return_path(&location.pathname.get_untracked(), &location.search.get_untracked());
        let outcome = run_protected(auth.token.get_untracked(), &return_to, |token| {
            set_submitting.set(true);
            spawn_local(async move {
                match api::create_testimonial(&token, &form).await {
                    Ok(message) => {
                        push_toast(&store, ToastKind::Success, message);
                        set_content.set(String::new());
                        set_rating.set(5);
                    }
                    Err(e) => auth.report(&store, &e),
                }
                set_submitting.set(false);
            });
        });
        if let Err(redirect) = outcome {
            navigate(&redirect.path, Default::default());
        }
    };

    view! {
        <div class="page testimonials-page">
            <h1>"Testimonials"</h1>
            {move || match testimonials.get() {
                Remote::Loading => view! { <Loading /> }.into_any(),
                Remote::Failed(msg) => view! { <ErrorState message=msg /> }.into_any(),
                Remote::Ready(list) if list.is_empty() => {
                    view! { <EmptyState message="No testimonials yet." /> }.into_any()
                }
                Remote::Ready(list) => view! {
                    <div class="card-grid">
                        {list.into_iter().map(|t| view! {
                            <blockquote class="testimonial">
                                {t.image.map(|src| view! { <img class="avatar" src=src alt="" /> })}
                                <p>{t.content}</p>
                                <footer>
                                    <strong>{t.name}</strong>
                                    {t.rating.map(|r| view! { <StarRating value=r /> })}
                                </footer>
                            </blockquote>
                        }).collect_view()}
                    </div>
                }.into_any(),
            }}

            <form class="testimonial-form" on:submit=on_submit>
                <h2>"Share your experience"</h2>
                <StarRating value=rating on_change=Callback::new(move |n| set_rating.set(n)) />
                <textarea
                    placeholder="How was working with us?"
                    prop:value=move || content.get()
                    on:input=move |ev| set_content.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Sending..." } else { "Submit" }}
                </button>
            </form>
        </div>
    }
}
