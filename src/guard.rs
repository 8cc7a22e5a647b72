//! Auth Guard
//!
//! Protected actions (favorites, bookings, reviews, testimonials) run only
//! with a token; otherwise the caller gets the sign-in path to navigate to.

use crate::api::encode_component;

/// Where to send an anonymous visitor who tried a protected action
#[derive(Debug, Clone, PartialEq)]
pub struct SignInRedirect {
    pub path: String,
}

pub fn sign_in_path(return_to: &str) -> String {
    if return_to.is_empty() || return_to == "/" {
        "/sign-in".to_string()
    } else {
        format!("/sign-in?redirect={}", encode_component(return_to))
    }
}

/// Run `action` with the token, or return the redirect without running it
pub fn run_protected<T>(
    token: Option<String>,
    return_to: &str,
    action: impl FnOnce(String) -> T,
) -> Result<T, SignInRedirect> {
    match token.filter(|t| !t.trim().is_empty()) {
        Some(token) => Ok(action(token)),
        None => Err(SignInRedirect { path: sign_in_path(return_to) }),
    }
}

/// Where to come back to after signing in: the path plus its query
pub fn return_path(pathname: &str, search: &str) -> String {
    match search.trim_start_matches('?') {
        "" => pathname.to_string(),
        query => format!("{pathname}?{query}"),
    }
}

/// Post-login destination from the `redirect` query param. Only local
/// absolute paths are honoured. Browsers drop tabs and newlines from URLs,
/// so control characters could turn `/\t/host` into `//host`.
pub fn safe_redirect(param: Option<&str>) -> String {
    match param {
        Some(p)
            if p.starts_with('/')
                && !p.starts_with("//")
                && !p.contains('\\')
                && !p.chars().any(|c| c.is_control()) =>
        {
            p.to_string()
        }
        _ => "/".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_anonymous_action_redirects_without_running() {
        let calls = Cell::new(0);
        let outcome = run_protected(None, "/units/5", |_| calls.set(calls.get() + 1));

        assert_eq!(calls.get(), 0);
        assert_eq!(
            outcome,
            Err(SignInRedirect { path: "/sign-in?redirect=%2Funits%2F5".into() })
        );
    }

    #[test]
    fn test_blank_token_is_anonymous() {
        let calls = Cell::new(0);
        let outcome = run_protected(Some("".into()), "/favorites", |_| calls.set(1));
        assert!(outcome.is_err());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_authenticated_action_gets_token() {
        let outcome = run_protected(Some("tok".into()), "/units/5", |t| format!("POST with {t}"));
        assert_eq!(outcome, Ok("POST with tok".to_string()));
    }

    #[test]
    fn test_safe_redirect() {
        assert_eq!(safe_redirect(Some("/profile")), "/profile");
        assert_eq!(safe_redirect(Some("//evil.example")), "/");
        assert_eq!(safe_redirect(Some("https://evil.example")), "/");
        assert_eq!(safe_redirect(None), "/");
    }

    #[test]
    fn test_safe_redirect_rejects_control_characters() {
        assert_eq!(safe_redirect(Some("/\t/evil.example")), "/");
        assert_eq!(safe_redirect(Some("/\n/evil.example")), "/");
        assert_eq!(safe_redirect(Some("/units/3")), "/units/3");
    }

    #[test]
    fn test_return_path_keeps_filters() {
        assert_eq!(return_path("/units", "?city_id=3&page=2"), "/units?city_id=3&page=2");
        assert_eq!(return_path("/units", "city_id=3"), "/units?city_id=3");
        assert_eq!(return_path("/units/7", ""), "/units/7");
        assert_eq!(
            sign_in_path(&return_path("/units", "city_id=3")),
            "/sign-in?redirect=%2Funits%3Fcity_id%3D3"
        );
    }

    #[test]
    fn test_sign_in_path_home_has_no_redirect() {
        assert_eq!(sign_in_path("/"), "/sign-in");
    }
}
