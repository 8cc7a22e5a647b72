//! Review Section
//!
//! Review list for a unit plus the form to add one.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};

use crate::api::{self, ReviewForm};
use crate::components::{EmptyState, ErrorState, Loading, Remote, StarRating};
use crate::context::use_auth;
use crate::guard::{return_path, run_protected};
use crate::models::Review;
use crate::store::{push_toast, use_app_store, ToastKind};

#[component]
pub fn ReviewSection(unit_id: u64) -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let navigate = use_navigate();
    let location = use_location();

    let (reviews, set_reviews) = signal(Remote::<Vec<Review>>::Loading);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (rating, set_rating) = signal(5u8);
    let (comment, set_comment) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            match api::unit_reviews(unit_id).await {
                Ok(list) => set_reviews.set(Remote::Ready(list)),
                Err(e) => set_reviews.set(Remote::Failed(e.user_message())),
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = comment.get_untracked().trim().to_string();
        if text.is_empty() {
            push_toast(&store, ToastKind::Info, "Please write a comment");
            return;
        }
        let form = ReviewForm { rating: rating.get_untracked(), comment: text };

        let return_to = return_path(&location.pathname.get_untracked(), &location.search.get_untracked());
        let outcome = run_protected(auth.token.get_untracked(), &return_to, |token| {
            set_submitting.set(true);
            spawn_local(async move {
                match api::create_review(&token, unit_id, &form).await {
                    Ok(message) => {
                        push_toast(&store, ToastKind::Success, message);
                        set_comment.set(String::new());
                        set_rating.set(5);
                        set_reload_trigger.update(|v| *v += 1);
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
        <section class="reviews">
            <h2>"Reviews"</h2>
            {move || match reviews.get() {
                Remote::Loading => view! { <Loading /> }.into_any(),
                Remote::Failed(msg) => view! { <ErrorState message=msg /> }.into_any(),
                Remote::Ready(list) if list.is_empty() => {
                    view! { <EmptyState message="No reviews yet. Be the first!" /> }.into_any()
                }
                Remote::Ready(list) => view! {
                    <ul class="review-list">
                        {list.into_iter().map(|review| view! {
                            <li class="review">
                                <div class="review-head">
                                    <strong>{review.user_name.unwrap_or_else(|| "Anonymous".to_string())}</strong>
                                    <StarRating value=review.rating />
                                    {review.created_at.map(|d| view! { <time>{d}</time> })}
                                </div>
                                <p>{review.comment}</p>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_any(),
            }}

            <form class="review-form" on:submit=on_submit>
                <h3>"Leave a review"</h3>
                <StarRating value=rating on_change=Callback::new(move |n| set_rating.set(n)) />
                <textarea
                    placeholder="Share your experience..."
                    prop:value=move || comment.get()
                    on:input=move |ev| set_comment.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Sending..." } else { "Submit review" }}
                </button>
            </form>
        </section>
    }
}
