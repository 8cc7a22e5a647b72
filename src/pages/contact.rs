//! Contact Page
//!
//! Contact form plus the office details from the site settings.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ContactForm};
use crate::context::use_auth;
use crate::store::{push_toast, use_app_store, AppStateStoreFields, ToastKind};

#[component]
pub fn ContactPage() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let form = RwSignal::new(ContactForm::default());
    let (sending, set_sending) = signal(false);

    // Signed-in visitors do not retype who they are
    Effect::new(move |_| {
        if let Some(user) = auth.user.get() {
            form.update(|f| {
                if f.name.is_empty() {
                    f.name = user.name;
                }
                if f.email.is_empty() {
                    f.email = user.email;
                }
                if f.phone.is_empty() {
                    f.phone = user.phone.unwrap_or_default();
                }
            });
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let args = form.get_untracked();
        if args.message.trim().is_empty() {
            push_toast(&store, ToastKind::Info, "Please write a message");
            return;
        }
        set_sending.set(true);
        spawn_local(async move {
            match api::send_contact(&args).await {
                Ok(message) => {
                    push_toast(&store, ToastKind::Success, message);
                    form.update(|f| {
                        f.subject.clear();
                        f.message.clear();
                    });
                }
                Err(e) => auth.report(&store, &e),
            }
            set_sending.set(false);
        });
    };

    let settings = move || store.settings().get().unwrap_or_default();

    view! {
        <div class="page contact-page">
            <h1>"Contact us"</h1>
            <div class="contact-layout">
                <form class="contact-form" on:submit=on_submit>
                    <label>
                        "Name"
                        <input
                            type="text"
                            required
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Email"
                        <input
                            type="email"
                            required
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Phone"
                        <input
                            type="tel"
                            prop:value=move || form.with(|f| f.phone.clone())
                            on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Subject"
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.subject.clone())
                            on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Message"
                        <textarea
                            required
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button type="submit" class="btn btn-primary" disabled=move || sending.get()>
                        {move || if sending.get() { "Sending..." } else { "Send message" }}
                    </button>
                </form>
                <aside class="contact-info">
                    {move || {
                        let s = settings();
                        view! {
                            {s.address.map(|a| view! { <p class="contact-address">{a}</p> })}
                            {s.phone.map(|p| view! { <p><a href=format!("tel:{}", p)>{p.clone()}</a></p> })}
                            {s.email.map(|e| view! { <p><a href=format!("mailto:{}", e)>{e.clone()}</a></p> })}
                            {s.whatsapp.map(|w| view! {
                                <p><a href=format!("https://wa.me/{}", w.trim_start_matches('+')) target="_blank">"WhatsApp"</a></p>
                            })}
                        }
                    }}
                </aside>
            </div>
        </div>
    }
}
