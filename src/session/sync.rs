//! Cross-Tab Session Sync
//!
//! Token changes reach other tabs two ways: a `BroadcastChannel` message
//! posted on sign-in/sign-out, and the browser's own `storage` event.
//! Both are fire-and-forget; a tab that misses one still sees the other.

use std::rc::Rc;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::SessionEvent;
use crate::config::{SESSION_CHANNEL, TOKEN_KEY, USER_KEY};

/// Payload posted on the session channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncMessage {
    /// Sender tab; a channel delivers to the sender's own listeners too
    pub origin: String,
    pub token: Option<String>,
}

static TAB_ID: OnceLock<String> = OnceLock::new();

/// Random per-tab id, fixed for the page's lifetime
pub fn tab_id() -> &'static str {
    TAB_ID.get_or_init(|| format!("{:016x}", (js_sys::Math::random() * u64::MAX as f64) as u64))
}

/// Channel message → session event, dropping our own echoes
pub fn event_from_message(msg: &SyncMessage, own_origin: &str) -> Option<SessionEvent> {
    if msg.origin == own_origin {
        return None;
    }
    let token = msg.token.clone().filter(|t| !t.trim().is_empty());
    Some(SessionEvent::RemoteTokenChanged(token))
}

/// `storage` event → session event. A `None` key means another tab called
/// `localStorage.clear()`.
pub fn event_from_storage_change(key: Option<&str>, new_value: Option<&str>) -> Option<SessionEvent> {
    match key {
        None => Some(SessionEvent::RemoteTokenChanged(None)),
        Some(k) if k == TOKEN_KEY => Some(SessionEvent::RemoteTokenChanged(
            new_value.map(str::to_string).filter(|t| !t.trim().is_empty()),
        )),
        Some(k) if k == USER_KEY => Some(SessionEvent::ProfileRefreshed),
        Some(_) => None,
    }
}

/// Tell other tabs the token changed (`None` = signed out)
pub fn broadcast(token: Option<&str>) {
    let msg = SyncMessage {
        origin: tab_id().to_string(),
        token: token.map(str::to_string),
    };
    let Ok(channel) = web_sys::BroadcastChannel::new(SESSION_CHANNEL) else {
        web_sys::console::warn_1(&"[SYNC] BroadcastChannel unavailable".into());
        return;
    };
    match serde_wasm_bindgen::to_value(&msg) {
        Ok(payload) => {
            if channel.post_message(&payload).is_err() {
                web_sys::console::warn_1(&"[SYNC] post_message failed".into());
            }
        }
        Err(e) => web_sys::console::warn_1(&format!("[SYNC] encode failed: {}", e).into()),
    }
    channel.close();
}

/// Install the channel and storage listeners for the lifetime of the page
pub fn subscribe(on_event: impl Fn(SessionEvent) + 'static) {
    let on_event: Rc<dyn Fn(SessionEvent)> = Rc::new(on_event);

    match web_sys::BroadcastChannel::new(SESSION_CHANNEL) {
        Ok(channel) => {
            let handler = on_event.clone();
            let onmessage = Closure::<dyn FnMut(web_sys::MessageEvent)>::new(move |ev: web_sys::MessageEvent| {
                match serde_wasm_bindgen::from_value::<SyncMessage>(ev.data()) {
                    Ok(msg) => {
                        if let Some(event) = event_from_message(&msg, tab_id()) {
                            web_sys::console::log_1(&format!("[SYNC] channel: {:?}", event).into());
                            handler(event);
                        }
                    }
                    Err(e) => web_sys::console::warn_1(&format!("[SYNC] bad message: {}", e).into()),
                }
            });
            channel.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
            onmessage.forget();
            // Listener must outlive this scope
            std::mem::forget(channel);
        }
        Err(_) => web_sys::console::warn_1(&"[SYNC] BroadcastChannel unavailable, storage events only".into()),
    }

    let Some(window) = web_sys::window() else { return };
    let handler = on_event;
    let onstorage = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
        let key = ev.key();
        let new_value = ev.new_value();
        if let Some(event) = event_from_storage_change(key.as_deref(), new_value.as_deref()) {
            web_sys::console::log_1(&format!("[SYNC] storage: {:?}", event).into());
            handler(event);
        }
    });
    if window
        .add_event_listener_with_callback("storage", onstorage.as_ref().unchecked_ref())
        .is_err()
    {
        web_sys::console::warn_1(&"[SYNC] could not listen for storage events".into());
    }
    onstorage.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_own_messages_are_ignored() {
        let msg = SyncMessage { origin: "tab-a".into(), token: None };
        assert_eq!(event_from_message(&msg, "tab-a"), None);
        assert_eq!(
            event_from_message(&msg, "tab-b"),
            Some(SessionEvent::RemoteTokenChanged(None))
        );
    }

    #[test]
    fn test_sign_in_message_carries_token() {
        let msg = SyncMessage { origin: "tab-a".into(), token: Some("tok".into()) };
        assert_eq!(
            event_from_message(&msg, "tab-b"),
            Some(SessionEvent::RemoteTokenChanged(Some("tok".into())))
        );
    }

    #[test]
    fn test_logout_elsewhere_is_observed_via_storage_event() {
        assert_eq!(
            event_from_storage_change(Some(TOKEN_KEY), None),
            Some(SessionEvent::RemoteTokenChanged(None))
        );
        assert_eq!(
            event_from_storage_change(None, None),
            Some(SessionEvent::RemoteTokenChanged(None))
        );
    }

    #[test]
    fn test_storage_event_routing() {
        assert_eq!(
            event_from_storage_change(Some(TOKEN_KEY), Some("new")),
            Some(SessionEvent::RemoteTokenChanged(Some("new".into())))
        );
        assert_eq!(
            event_from_storage_change(Some(USER_KEY), Some("{}")),
            Some(SessionEvent::ProfileRefreshed)
        );
        assert_eq!(event_from_storage_change(Some("theme"), Some("dark")), None);
    }
}
