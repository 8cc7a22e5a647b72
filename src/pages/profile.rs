//! Profile Page
//!
//! Account details, password change, the user's bookings, and account
//! deletion.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, A};

use crate::api::{self, PasswordForm, ProfileForm};
use crate::components::{ConfirmButton, EmptyState, ErrorState, Loading, Remote};
use crate::context::{use_auth, AuthContext};
use crate::guard::sign_in_path;
use crate::models::Booking;
use crate::store::{push_toast, use_app_store, AppStore, ToastKind};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    // Set once the account is gone so the exit goes home, not to sign-in
    let deleted = RwSignal::new(false);

    move || {
        if auth.is_authenticated() {
            view! { <ProfileSections deleted=deleted /> }.into_any()
        } else if deleted.get() {
            view! { <Redirect path="/" /> }.into_any()
        } else {
            view! { <Redirect path=sign_in_path("/profile") /> }.into_any()
        }
    }
}

#[component]
fn ProfileSections(deleted: RwSignal<bool>) -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();

    view! {
        <div class="page profile-page">
            <h1>"My account"</h1>
            <ProfileDetails auth=auth store=store />
            <ChangePassword auth=auth store=store />
            <MyBookings auth=auth store=store />
            <section class="profile-section danger-zone">
                <h2>"Delete account"</h2>
                <p>"This permanently removes your account, bookings and favorites."</p>
                <ConfirmButton
                    label="Delete my account"
                    button_class="btn btn-danger"
                    on_confirm=move |_| {
                        let Some(token) = auth.token.get_untracked() else { return };
                        spawn_local(async move {
                            match api::delete_account(&token).await {
                                Ok(message) => {
                                    push_toast(&store, ToastKind::Success, message);
                                    deleted.set(true);
                                    auth.sign_out();
                                }
                                Err(e) => auth.report(&store, &e),
                            }
                        });
                    }
                />
            </section>
        </div>
    }
}

#[component]
fn ProfileDetails(auth: AuthContext, store: AppStore) -> impl IntoView {
    let form = RwSignal::new(ProfileForm::default());
    let (saving, set_saving) = signal(false);

    // Refill whenever the stored profile changes (e.g. after a refresh)
    Effect::new(move |_| {
        if let Some(user) = auth.user.get() {
            form.set(ProfileForm {
                name: user.name,
                email: user.email,
                phone: user.phone.unwrap_or_default(),
            });
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = auth.token.get_untracked() else { return };
        let args = form.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            match api::update_profile(&token, &args).await {
                Ok(profile) => {
                    auth.update_user(&profile);
                    push_toast(&store, ToastKind::Success, "Profile updated");
                }
                Err(e) => auth.report(&store, &e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="profile-section" on:submit=on_submit>
            <h2>"Details"</h2>
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
            <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Save changes" }}
            </button>
        </form>
    }
}

#[component]
fn ChangePassword(auth: AuthContext, store: AppStore) -> impl IntoView {
    let form = RwSignal::new(PasswordForm::default());
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = auth.token.get_untracked() else { return };
        let args = form.get_untracked();
        if args.password != args.password_confirmation {
            push_toast(&store, ToastKind::Info, "Passwords do not match");
            return;
        }
        set_saving.set(true);
        spawn_local(async move {
            match api::change_password(&token, &args).await {
                Ok(message) => {
                    push_toast(&store, ToastKind::Success, message);
                    form.set(PasswordForm::default());
                }
                Err(e) => auth.report(&store, &e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="profile-section" on:submit=on_submit>
            <h2>"Change password"</h2>
            <label>
                "Current password"
                <input
                    type="password"
                    required
                    autocomplete="current-password"
                    prop:value=move || form.with(|f| f.current_password.clone())
                    on:input=move |ev| form.update(|f| f.current_password = event_target_value(&ev))
                />
            </label>
            <label>
                "New password"
                <input
                    type="password"
                    required
                    autocomplete="new-password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
            </label>
            <label>
                "Confirm new password"
                <input
                    type="password"
                    required
                    autocomplete="new-password"
                    prop:value=move || form.with(|f| f.password_confirmation.clone())
                    on:input=move |ev| form.update(|f| f.password_confirmation = event_target_value(&ev))
                />
            </label>
            <button type="submit" class="btn" disabled=move || saving.get()>
                "Update password"
            </button>
        </form>
    }
}

#[component]
fn MyBookings(auth: AuthContext, store: AppStore) -> impl IntoView {
    let (bookings, set_bookings) = signal(Remote::<Vec<Booking>>::Loading);

    Effect::new(move |_| {
        let Some(token) = auth.token.get() else { return };
        spawn_local(async move {
            match api::my_bookings(&token).await {
                Ok(list) => set_bookings.set(Remote::Ready(list)),
                Err(e) => {
                    auth.report(&store, &e);
                    set_bookings.set(Remote::Failed(e.user_message()));
                }
            }
        });
    });

    let cancel = move |id: u64| {
        let Some(token) = auth.token.get_untracked() else { return };
        spawn_local(async move {
            match api::cancel_booking(&token, id).await {
                Ok(message) => {
                    push_toast(&store, ToastKind::Success, message);
                    set_bookings.update(|state| {
                        if let Remote::Ready(list) = state {
                            if let Some(b) = list.iter_mut().find(|b| b.id == id) {
                                b.status = Some("cancelled".to_string());
                            }
                        }
                    });
                }
                Err(e) => auth.report(&store, &e),
            }
        });
    };

    view! {
        <section class="profile-section">
            <h2>"My bookings"</h2>
            {move || match bookings.get() {
                Remote::Loading => view! { <Loading /> }.into_any(),
                Remote::Failed(msg) => view! { <ErrorState message=msg /> }.into_any(),
                Remote::Ready(list) if list.is_empty() => {
                    view! { <EmptyState message="No bookings yet." /> }.into_any()
                }
                Remote::Ready(list) => view! {
                    <table class="booking-table">
                        <thead>
                            <tr><th>"Unit"</th><th>"Date"</th><th>"Time"</th><th>"Status"</th><th></th></tr>
                        </thead>
                        <tbody>
                            {list.into_iter().map(|booking| {
                                let id = booking.id;
                                let cancellable = booking.is_cancellable();
                                view! {
                                    <tr>
                                        <td>
                                            {match booking.unit {
                                                Some(u) => view! { <A href=format!("/units/{}", u.id)>{u.name}</A> }.into_any(),
                                                None => view! { <span>"-"</span> }.into_any(),
                                            }}
                                        </td>
                                        <td>{booking.date}</td>
                                        <td>{booking.time.unwrap_or_default()}</td>
                                        <td>{booking.status.unwrap_or_else(|| "pending".to_string())}</td>
                                        <td>
                                            {cancellable.then(|| view! {
                                                <ConfirmButton
                                                    label="Cancel"
                                                    button_class="btn btn-small"
                                                    on_confirm=move |_| cancel(id)
                                                />
                                            })}
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any(),
            }}
        </section>
    }
}
