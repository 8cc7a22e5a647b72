//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds only
//! view-level state shared across pages: toasts, favorite flags confirmed
//! by the server, and the site settings.

use std::collections::HashMap;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::config::TOAST_TIMEOUT_MS;
use crate::models::Settings;

/// Toasts beyond this many push the oldest off screen
pub const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

/// Transient, auto-dismissing notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Toasts currently on screen, oldest first
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
    /// Server-confirmed favorite flag per unit id
    pub favorites: HashMap<u64, bool>,
    /// Site settings, loaded once by the shell
    pub settings: Option<Settings>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a toast, dropping the oldest beyond `MAX_TOASTS`
pub fn enqueue_toast(toasts: &mut Vec<Toast>, toast: Toast) {
    toasts.push(toast);
    if toasts.len() > MAX_TOASTS {
        let overflow = toasts.len() - MAX_TOASTS;
        toasts.drain(..overflow);
    }
}

/// Show a toast and schedule its removal
pub fn push_toast(store: &AppStore, kind: ToastKind, message: impl Into<String>) {
    let id = {
        let next_field = store.next_toast_id();
        let mut next = next_field.write();
        *next = next.wrapping_add(1);
        *next
    };
    enqueue_toast(&mut store.toasts().write(), Toast { id, kind, message: message.into() });

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
        dismiss_toast(&store, id);
    });
}

pub fn dismiss_toast(store: &AppStore, id: u32) {
    store.toasts().write().retain(|toast| toast.id != id);
}

/// Record the favorite flag the server settled on
pub fn store_set_favorite(store: &AppStore, unit_id: u64, is_favorite: bool) {
    store.favorites().write().insert(unit_id, is_favorite);
}

/// Server-confirmed favorite flag, if this session has seen one
pub fn store_favorite(store: &AppStore, unit_id: u64) -> Option<bool> {
    store.favorites().read().get(&unit_id).copied()
}

/// Drop every confirmed flag (they belong to the previous user)
pub fn store_clear_favorites(store: &AppStore) {
    store.favorites().write().clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u32) -> Toast {
        Toast { id, kind: ToastKind::Info, message: format!("toast {}", id) }
    }

    #[test]
    fn test_enqueue_keeps_newest() {
        let mut toasts = Vec::new();
        for id in 1..=6 {
            enqueue_toast(&mut toasts, toast(id));
        }
        let ids: Vec<u32> = toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_enqueue_under_limit_keeps_all() {
        let mut toasts = vec![toast(1)];
        enqueue_toast(&mut toasts, toast(2));
        assert_eq!(toasts.len(), 2);
    }
}
