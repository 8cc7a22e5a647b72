//! Auth Pages
//!
//! Sign in, sign up, and the two halves of the password reset flow.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::api::{self, LoginForm, RegisterForm, ResetPasswordForm};
use crate::context::use_auth;
use crate::guard::safe_redirect;
use crate::store::{push_toast, use_app_store, ToastKind};

/// Check a new password and its confirmation before posting
fn check_passwords(password: &str, confirmation: &str) -> Result<(), &'static str> {
    if password.chars().count() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if password != confirmation {
        return Err("Passwords do not match");
    }
    Ok(())
}

// ========================
// Sign In
// ========================

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let navigate = use_navigate();
    let query = use_query_map();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        let target = safe_redirect(query.with_untracked(|q| q.get("redirect")).as_deref());
        let navigate = navigate.clone();
        set_submitting.set(true);
        spawn_local(async move {
            match api::login(&form).await {
                Ok(payload) => {
                    auth.sign_in(&payload.token, &payload.user);
                    let greeting = match payload.user() {
                        Some(user) if !user.name.is_empty() => format!("Welcome back, {}", user.name),
                        _ => "Welcome back".to_string(),
                    };
                    push_toast(&store, ToastKind::Success, greeting);
                    navigate(&target, Default::default());
                }
                Err(e) => {
                    auth.report(&store, &e);
                    set_password.set(String::new());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Sign in"</h1>
                <label>
                    "Email"
                    <input
                        type="email"
                        required
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        required
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-links">
                    <A href="/forgot-password">"Forgot your password?"</A>
                    " · "
                    <A href="/sign-up">"Create an account"</A>
                </p>
            </form>
        </div>
    }
}

// ========================
// Sign Up
// ========================

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut args = form.get_untracked();
        args.name = args.name.trim().to_string();
        args.email = args.email.trim().to_string();
        if let Err(msg) = check_passwords(&args.password, &args.password_confirmation) {
            push_toast(&store, ToastKind::Info, msg);
            return;
        }
        let navigate = navigate.clone();
        set_submitting.set(true);
        spawn_local(async move {
            match api::register(&args).await {
                Ok(payload) => {
                    auth.sign_in(&payload.token, &payload.user);
                    push_toast(&store, ToastKind::Success, "Your account is ready");
                    navigate("/", Default::default());
                }
                Err(e) => auth.report(&store, &e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Create an account"</h1>
                <label>
                    "Full name"
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
                    "Password"
                    <input
                        type="password"
                        required
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Confirm password"
                    <input
                        type="password"
                        required
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.password_confirmation.clone())
                        on:input=move |ev| form.update(|f| f.password_confirmation = event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating..." } else { "Sign up" }}
                </button>
                <p class="auth-links">
                    "Already registered? "
                    <A href="/sign-in">"Sign in"</A>
                </p>
            </form>
        </div>
    }
}

// ========================
// Password Reset
// ========================

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();

    let (email, set_email) = signal(String::new());
    let (sent, set_sent) = signal(false);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let address = email.get_untracked().trim().to_string();
        set_submitting.set(true);
        spawn_local(async move {
            match api::forgot_password(&address).await {
                Ok(message) => {
                    push_toast(&store, ToastKind::Success, message);
                    set_sent.set(true);
                }
                Err(e) => auth.report(&store, &e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page auth-page">
            <Show
                when=move || sent.get()
                fallback=move || view! {
                    <form class="auth-form" on:submit=on_submit>
                        <h1>"Reset your password"</h1>
                        <p>"Enter your email and we will send you a reset link."</p>
                        <label>
                            "Email"
                            <input
                                type="email"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </label>
                        <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                            "Send reset link"
                        </button>
                    </form>
                }
            >
                <div class="auth-form">
                    <h1>"Check your inbox"</h1>
                    <p>{move || format!("If {} has an account, a reset link is on its way.", email.get())}</p>
                    <A href="/sign-in">"Back to sign in"</A>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let navigate = use_navigate();
    let query = use_query_map();

    let form = RwSignal::new(ResetPasswordForm::default());
    let (submitting, set_submitting) = signal(false);

    // The emailed link carries the token and address
    Effect::new(move |_| {
        let (token, email) = query.with(|q| (q.get("token"), q.get("email")));
        form.update(|f| {
            f.token = token.unwrap_or_default();
            f.email = email.unwrap_or_default();
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let args = form.get_untracked();
        if args.token.is_empty() {
            push_toast(&store, ToastKind::Error, "This reset link is invalid, request a new one");
            return;
        }
        if let Err(msg) = check_passwords(&args.password, &args.password_confirmation) {
            push_toast(&store, ToastKind::Info, msg);
            return;
        }
        let navigate = navigate.clone();
        set_submitting.set(true);
        spawn_local(async move {
            match api::reset_password(&args).await {
                Ok(message) => {
                    push_toast(&store, ToastKind::Success, message);
                    navigate("/sign-in", Default::default());
                }
                Err(e) => auth.report(&store, &e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Choose a new password"</h1>
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
                    "Confirm password"
                    <input
                        type="password"
                        required
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.password_confirmation.clone())
                        on:input=move |ev| form.update(|f| f.password_confirmation = event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    "Reset password"
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_password_rejected() {
        assert_eq!(check_passwords("abc", "abc"), Err("Password must be at least 8 characters"));
    }

    #[test]
    fn test_mismatched_confirmation_rejected() {
        assert_eq!(check_passwords("longenough", "longenougH"), Err("Passwords do not match"));
    }

    #[test]
    fn test_matching_passwords_accepted() {
        assert_eq!(check_passwords("longenough", "longenough"), Ok(()));
    }
}
