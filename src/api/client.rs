//! HTTP Client
//!
//! Request plumbing shared by the endpoint wrappers: URL building, bearer
//! auth, envelope decoding and failure classification.

use gloo_net::http::{Request, RequestBuilder};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::{ApiError, ApiResult, Envelope};
use crate::config::API_BASE_URL;

/// Unreserved characters (RFC 3986) stay as-is in query values
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

pub(crate) fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_ENCODE_SET).to_string()
}

/// `path?k=v&...`, skipping empty values
pub(crate) fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    let query = pairs
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect::<Vec<_>>()
        .join("&");
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

pub(crate) fn endpoint(path: &str) -> String {
    format!("{}/{}", API_BASE_URL.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Collect validation messages from `errors`, which the API sends either
/// as `{field: [msg, ...]}`, `[msg, ...]` or a bare string
pub(crate) fn flatten_errors(errors: Option<&Value>) -> Vec<String> {
    fn walk(value: &Value, out: &mut Vec<String>) {
        match value {
            Value::String(s) if !s.trim().is_empty() => out.push(s.clone()),
            Value::Array(items) => items.iter().for_each(|v| walk(v, out)),
            Value::Object(map) => map.values().for_each(|v| walk(v, out)),
            _ => {}
        }
    }

    let mut out = Vec::new();
    if let Some(value) = errors {
        walk(value, &mut out);
    }
    out
}

/// Turn an HTTP status + body into an envelope or a classified error.
/// A 401 only means an expired session when a token was sent; otherwise
/// (e.g. a wrong password) the server's own message is kept.
pub(crate) fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    body: &str,
    authenticated: bool,
) -> ApiResult<Envelope<T>> {
    if status == 401 && authenticated {
        return Err(ApiError::Unauthorized);
    }
    let ok_status = (200..300).contains(&status);

    let envelope: Envelope<T> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) if ok_status => return Err(ApiError::Decode(e.to_string())),
        Err(_) => {
            return Err(ApiError::Rejected {
                status,
                message: format!("Request failed ({status})"),
                errors: Vec::new(),
            })
        }
    };

    if !envelope.status || !ok_status {
        return Err(ApiError::Rejected {
            status,
            message: envelope.message_or(&format!("Request failed ({status})")),
            errors: flatten_errors(envelope.errors.as_ref()),
        });
    }
    Ok(envelope)
}

fn start(verb: Verb, url: &str) -> RequestBuilder {
    match verb {
        Verb::Get => Request::get(url),
        Verb::Post => Request::post(url),
        Verb::Put => Request::put(url),
        Verb::Delete => Request::delete(url),
    }
}

/// Send one request and decode its envelope
pub(crate) async fn call<T: DeserializeOwned>(
    verb: Verb,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> ApiResult<Envelope<T>> {
    let url = endpoint(path);
    let mut builder = start(verb, &url).header("Accept", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let sent = match body {
        Some(json) => match builder.json(&json) {
            Ok(request) => request.send().await,
            Err(e) => return Err(ApiError::Decode(e.to_string())),
        },
        None => builder.send().await,
    };

    let response = sent.map_err(|e| {
        web_sys::console::warn_1(&format!("[API] {} {} failed: {}", verb.as_str(), path, e).into());
        ApiError::Network(e.to_string())
    })?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let decoded = decode_envelope(status, &text, token.is_some());
    if let Err(e) = &decoded {
        web_sys::console::warn_1(&format!("[API] {} {} -> {}: {}", verb.as_str(), path, status, e).into());
    }
    decoded
}

pub(crate) async fn get<T: DeserializeOwned>(path: &str, token: Option<&str>) -> ApiResult<Envelope<T>> {
    call(Verb::Get, path, token, None).await
}

pub(crate) async fn send<B: Serialize, T: DeserializeOwned>(
    verb: Verb,
    path: &str,
    token: Option<&str>,
    body: &B,
) -> ApiResult<Envelope<T>> {
    let json = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    call(verb, path, token, Some(json)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;

    #[test]
    fn test_decode_success_with_pagination() {
        let body = r#"{"status":true,"data":[{"id":1,"title":"A"}],
            "pagination":{"current_page":1,"last_page":2,"per_page":1,"total":2}}"#;
        let env: Envelope<Vec<Unit>> = decode_envelope(200, body, false).unwrap();
        let page = env.into_page();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title, "A");
        assert!(page.pagination.unwrap().has_next());
    }

    #[test]
    fn test_status_false_is_rejected_with_validation_messages() {
        let body = r#"{"status":false,"message":"Invalid data",
            "errors":{"email":["The email has already been taken."]}}"#;
        let err = decode_envelope::<Value>(200, body, true).unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 200,
                message: "Invalid data".into(),
                errors: vec!["The email has already been taken.".into()],
            }
        );
        assert!(!err.is_transport());
        assert_eq!(err.user_message(), "Invalid data: The email has already been taken.");
    }

    #[test]
    fn test_401_with_token_is_unauthorized_regardless_of_body() {
        let err = decode_envelope::<Value>(401, "<html>nope</html>", true).unwrap_err();
        assert_eq!(err, ApiError::Unauthorized);
    }

    #[test]
    fn test_401_without_token_keeps_server_message() {
        let body = r#"{"status":false,"message":"Invalid email or password"}"#;
        let err = decode_envelope::<Value>(401, body, false).unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected { status: 401, message: "Invalid email or password".into(), errors: vec![] }
        );
        assert_eq!(err.user_message(), "Invalid email or password");
    }

    #[test]
    fn test_non_json_error_page_is_rejected() {
        let err = decode_envelope::<Value>(502, "Bad Gateway", false).unwrap_err();
        assert!(matches!(err, ApiError::Rejected { ref message, .. } if message == "Request failed (502)"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_only_404_counts_as_not_found() {
        let missing = decode_envelope::<Value>(404, r#"{"status":false,"message":"Unit not found"}"#, false)
            .unwrap_err();
        assert!(missing.is_not_found());

        let broken = decode_envelope::<Value>(500, r#"{"status":false,"message":"Server error"}"#, false)
            .unwrap_err();
        assert!(!broken.is_not_found());

        let refused = decode_envelope::<Value>(200, r#"{"status":false,"message":"Nope"}"#, false).unwrap_err();
        assert!(!refused.is_not_found());
    }

    #[test]
    fn test_non_json_success_is_decode_error() {
        let err = decode_envelope::<Value>(200, "<!doctype html>", false).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_missing_status_with_2xx_is_success() {
        let env: Envelope<Value> = decode_envelope(200, r#"{"data":{"ok":1}}"#, false).unwrap();
        assert!(env.status);
        assert!(env.into_data().is_ok());
    }

    #[test]
    fn test_into_data_without_data_fails() {
        let env: Envelope<Unit> = decode_envelope(200, r#"{"status":true}"#, false).unwrap();
        assert!(matches!(env.into_data(), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_with_query_encodes_and_skips_empty() {
        let url = with_query(
            "units",
            &[("q", "new cairo & more".to_string()), ("city_id", String::new()), ("page", "2".into())],
        );
        assert_eq!(url, "units?q=new%20cairo%20%26%20more&page=2");
        assert_eq!(with_query("units", &[("q", String::new())]), "units");
    }

    #[test]
    fn test_endpoint_joins_single_slash() {
        let base = API_BASE_URL.trim_end_matches('/');
        assert_eq!(endpoint("/units/3"), format!("{base}/units/3"));
        assert_eq!(endpoint("units"), format!("{base}/units"));
    }

    #[test]
    fn test_flatten_errors_shapes() {
        let v = serde_json::json!(["a", {"f": ["b", ""]}, 3]);
        assert_eq!(flatten_errors(Some(&v)), vec!["a".to_string(), "b".to_string()]);
        assert!(flatten_errors(None).is_empty());
    }
}
