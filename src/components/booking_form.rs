//! Booking Form
//!
//! Request a viewing for a unit. Anonymous visitors are sent to sign-in
//! before anything is posted.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};

use crate::api::{self, BookingForm as BookingArgs};
use crate::context::use_auth;
use crate::guard::{return_path, run_protected};
use crate::store::{push_toast, use_app_store, ToastKind};

/// Preset viewing slots
const TIME_SLOTS: &[&str] = &["10:00", "12:00", "14:00", "16:00", "18:00"];

#[component]
pub fn BookingForm(unit_id: u64) -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let navigate = use_navigate();
    let location = use_location();

    let (date, set_date) = signal(String::new());
    let (time, set_time) = signal(TIME_SLOTS[0].to_string());
    let (phone, set_phone) = signal(String::new());
    let (notes, set_notes) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    // Prefill phone from the profile once it is known
    Effect::new(move |_| {
        if let Some(p) = auth.user.get().and_then(|u| u.phone) {
            if phone.get_untracked().is_empty() {
                set_phone.set(p);
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let return_to = return_path(&location.pathname.get_untracked(), &location.search.get_untracked());
        let outcome = run_protected(auth.token.get_untracked(), &return_to, |token| {
            let args = BookingArgs {
                unit_id,
                date: date.get_untracked(),
                time: time.get_untracked(),
                phone: phone.get_untracked().trim().to_string(),
                notes: notes.get_untracked().trim().to_string(),
            };
            if args.date.is_empty() {
                push_toast(&store, ToastKind::Info, "Please pick a date");
                return;
            }
            set_submitting.set(true);
            spawn_local(async move {
                match api::create_booking(&token, &args).await {
                    Ok(message) => {
                        push_toast(&store, ToastKind::Success, message);
                        set_notes.set(String::new());
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
        <form class="booking-form" on:submit=on_submit>
            <h3>"Book a viewing"</h3>
            <label>
                "Date"
                <input
                    type="date"
                    required
                    prop:value=move || date.get()
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Time"
                <select on:change=move |ev| set_time.set(event_target_value(&ev))>
                    {TIME_SLOTS.iter().map(|slot| view! {
                        <option value=*slot selected=move || time.get() == *slot>{*slot}</option>
                    }).collect_view()}
                </select>
            </label>
            <label>
                "Phone"
                <input
                    type="tel"
                    prop:value=move || phone.get()
                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Notes"
                <textarea
                    prop:value=move || notes.get()
                    on:input=move |ev| set_notes.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Booking..." } else { "Request viewing" }}
            </button>
        </form>
    }
}
