//! Session
//!
//! Token + user persistence and the session state machine.
//!
//! The only state this client owns is two localStorage entries: the bearer
//! token and the user profile JSON exactly as the API returned it. Other
//! tabs learn about changes through [`sync`].

mod storage;
pub mod sync;

use serde_json::Value;

use crate::config::{TOKEN_KEY, USER_KEY};
use crate::models::User;

pub use storage::{BrowserStorage, KeyValueStorage};
#[cfg(test)]
pub use storage::MemoryStorage;

/// Where the current tab believes the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated,
    /// The API rejected the token; a profile refresh decides what happens
    Expiring,
}

/// Inputs of the session state machine
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    SignedIn,
    SignedOut,
    /// Profile fetched (or updated by another tab) with the current token
    ProfileRefreshed,
    /// An authenticated call came back 401
    Unauthorized,
    /// Another tab wrote or cleared the token
    RemoteTokenChanged(Option<String>),
}

/// Whether an answer for a request made with `sent` still concerns the
/// session. Another tab may have signed in again while it was in flight.
pub fn is_current_token(sent: &str, current: Option<&str>) -> bool {
    current == Some(sent)
}

/// Next session state. A late profile refresh never revives a signed-out
/// session, and an anonymous session ignores 401s.
pub fn transition(state: SessionState, event: &SessionEvent) -> SessionState {
    use SessionState::*;

    match (state, event) {
        (_, SessionEvent::SignedIn) => Authenticated,
        (_, SessionEvent::SignedOut) => Anonymous,
        (_, SessionEvent::RemoteTokenChanged(Some(_))) => Authenticated,
        (_, SessionEvent::RemoteTokenChanged(None)) => Anonymous,
        (Anonymous, SessionEvent::ProfileRefreshed) => Anonymous,
        (_, SessionEvent::ProfileRefreshed) => Authenticated,
        (Anonymous, SessionEvent::Unauthorized) => Anonymous,
        (_, SessionEvent::Unauthorized) => Expiring,
    }
}

/// Typed access to the two session keys
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Stored token; an empty string counts as no token
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    pub fn user_json(&self) -> Option<String> {
        self.storage.get(USER_KEY)
    }

    /// Parsed profile. An unreadable blob reads as `None` but stays stored.
    pub fn user(&self) -> Option<User> {
        self.user_json().and_then(|raw| serde_json::from_str(&raw).ok())
    }

    pub fn save(&self, token: &str, user: &Value) {
        self.storage.set(TOKEN_KEY, token);
        self.save_user(user);
    }

    pub fn save_user(&self, user: &Value) {
        self.storage.set(USER_KEY, &user.to_string());
    }

    /// Forget both keys
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }

    /// State a freshly opened tab starts in
    pub fn initial_state(&self) -> SessionState {
        if self.token().is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> SessionStore<MemoryStorage> {
        SessionStore::new(MemoryStorage::default())
    }

    #[test]
    fn test_answer_for_replaced_token_is_stale() {
        // Old token's refresh comes back after another tab signed in again
        assert!(!is_current_token("old", Some("new")));
        assert!(!is_current_token("old", None));
        assert!(is_current_token("new", Some("new")));
    }

    #[test]
    fn test_save_then_read_back() {
        let s = store();
        s.save("abc", &json!({"id": 4, "name": "Mona", "email": "m@x.io"}));

        assert_eq!(s.token().as_deref(), Some("abc"));
        let user = s.user().unwrap();
        assert_eq!(user.id, 4);
        assert_eq!(user.name, "Mona");
        assert_eq!(s.initial_state(), SessionState::Authenticated);
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let s = store();
        s.save("abc", &json!({"id": 1}));
        s.clear();

        assert_eq!(s.token(), None);
        assert_eq!(s.user_json(), None);
        assert_eq!(s.initial_state(), SessionState::Anonymous);
    }

    #[test]
    fn test_corrupt_user_blob_is_ignored_not_deleted() {
        let s = store();
        s.storage.set(USER_KEY, "{not json");
        assert_eq!(s.user(), None);
        assert_eq!(s.user_json().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_blank_token_counts_as_signed_out() {
        let s = store();
        s.storage.set(TOKEN_KEY, "  ");
        assert_eq!(s.token(), None);
        assert_eq!(s.initial_state(), SessionState::Anonymous);
    }

    #[test]
    fn test_transitions() {
        use SessionState::*;

        assert_eq!(transition(Anonymous, &SessionEvent::SignedIn), Authenticated);
        assert_eq!(transition(Authenticated, &SessionEvent::Unauthorized), Expiring);
        assert_eq!(transition(Expiring, &SessionEvent::ProfileRefreshed), Authenticated);
        assert_eq!(transition(Expiring, &SessionEvent::SignedOut), Anonymous);
        assert_eq!(transition(Anonymous, &SessionEvent::Unauthorized), Anonymous);
        assert_eq!(transition(Anonymous, &SessionEvent::ProfileRefreshed), Anonymous);
        assert_eq!(
            transition(Authenticated, &SessionEvent::RemoteTokenChanged(None)),
            Anonymous
        );
        assert_eq!(
            transition(Anonymous, &SessionEvent::RemoteTokenChanged(Some("t".into()))),
            Authenticated
        );
    }
}
