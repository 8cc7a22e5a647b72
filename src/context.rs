//! Auth Context
//!
//! Session signals shared via the Leptos Context API, plus the operations
//! that keep localStorage, the signals and other tabs in step.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::api::{self, ApiError};
use crate::config::PROFILE_REFRESH_DELAY_MS;
use crate::models::User;
use crate::session::{self, sync, BrowserStorage, SessionEvent, SessionState, SessionStore};
use crate::store::{push_toast, store_clear_favorites, AppStore, ToastKind};

/// Session signals provided via context
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Session state machine - read
    pub state: ReadSignal<SessionState>,
    /// Session state machine - write
    set_state: WriteSignal<SessionState>,
    /// Bearer token - read
    pub token: ReadSignal<Option<String>>,
    /// Bearer token - write
    set_token: WriteSignal<Option<String>>,
    /// Parsed user profile - read
    pub user: ReadSignal<Option<User>>,
    /// Parsed user profile - write
    set_user: WriteSignal<Option<User>>,
    store: SessionStore<BrowserStorage>,
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthContext {
    /// Seed the signals from localStorage
    pub fn new() -> Self {
        let store = SessionStore::new(BrowserStorage);
        let (state, set_state) = signal(store.initial_state());
        let (token, set_token) = signal(store.token());
        let (user, set_user) = signal(store.user());
        Self { state, set_state, token, set_token, user, set_user, store }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.get() != SessionState::Anonymous
    }

    /// Feed one event through the state machine
    fn apply(&self, event: &SessionEvent) {
        let current = self.state.get_untracked();
        let next = session::transition(current, event);
        if next != current {
            web_sys::console::log_1(&format!("[AUTH] {:?} --{:?}--> {:?}", current, event, next).into());
            self.set_state.set(next);
        }
    }

    /// Listen for session changes made in other tabs, and refresh the
    /// profile of a session restored from storage
    pub fn start(&self, app_store: AppStore) {
        let ctx = *self;
        sync::subscribe(move |event| ctx.on_remote(&event, &app_store));
        if self.token.get_untracked().is_some() {
            self.refresh_profile();
        }
    }

    fn on_remote(&self, event: &SessionEvent, app_store: &AppStore) {
        if let SessionEvent::RemoteTokenChanged(token) = event {
            if token != &self.token.get_untracked() {
                store_clear_favorites(app_store);
            }
            self.set_token.set(token.clone());
        }
        self.set_user.set(self.store.user());
        self.apply(event);
    }

    /// Persist a fresh login and tell other tabs
    pub fn sign_in(&self, token: &str, user: &Value) {
        self.store.save(token, user);
        self.set_token.set(Some(token.to_string()));
        self.set_user.set(self.store.user());
        self.apply(&SessionEvent::SignedIn);
        sync::broadcast(Some(token));
        self.refresh_profile();
    }

    /// Forget the session here and in every other tab
    pub fn sign_out(&self) {
        self.store.clear();
        self.set_token.set(None);
        self.set_user.set(None);
        self.apply(&SessionEvent::SignedOut);
        sync::broadcast(None);
    }

    /// Replace the stored profile after an update
    pub fn update_user(&self, user: &Value) {
        self.store.save_user(user);
        self.set_user.set(self.store.user());
    }

    /// Re-fetch the profile after a short delay. A 401 ends the session;
    /// any other failure leaves the state untouched.
    pub fn refresh_profile(&self) {
        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(PROFILE_REFRESH_DELAY_MS).await;
            let Some(token) = ctx.token.get_untracked() else { return };
            let result = api::get_profile(&token).await;
            // Ignore answers for a token that was replaced meanwhile
            if !session::is_current_token(&token, ctx.token.get_untracked().as_deref()) {
                web_sys::console::log_1(&"[AUTH] profile answer for a replaced token dropped".into());
                return;
            }
            match result {
                Ok(profile) => {
                    ctx.update_user(&profile);
                    ctx.apply(&SessionEvent::ProfileRefreshed);
                }
                Err(ApiError::Unauthorized) => {
                    web_sys::console::warn_1(&"[AUTH] token rejected, signing out".into());
                    ctx.sign_out();
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("[AUTH] profile refresh failed: {}", e).into());
                }
            }
        });
    }

    /// Surface an API failure: toast it, and on 401 mark the session as
    /// expiring and let the profile refresh decide its fate
    pub fn report(&self, app_store: &AppStore, err: &ApiError) {
        if matches!(err, ApiError::Unauthorized) && self.state.get_untracked() == SessionState::Authenticated {
            self.apply(&SessionEvent::Unauthorized);
            self.refresh_profile();
        }
        push_toast(app_store, ToastKind::Error, err.user_message());
    }
}

/// Get the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
