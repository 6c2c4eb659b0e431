//! Curl argument rendering
//!
//! Walks a populated [`Request`] and emits the equivalent curl argument
//! vector, in a fixed order so downstream consumers can rely on it.

use crate::shorthand::error::ShorthandError;
use crate::shorthand::request::{marshal_queries, Request};

/// Render a request as a curl argument vector
///
/// Emission order: `-X METHOD`, one `-H key:value` per header, `-d <json>`
/// for a JSON body (keys lexicographically sorted), one
/// `--data-urlencode key=value` per form field, then the URL with the
/// marshaled query string appended. Form values are passed raw; curl performs
/// the encoding for `--data-urlencode` itself.
///
/// Fails only when the JSON body cannot be serialized.
///
/// # Examples
///
/// ```
/// use http2curl::shorthand::{make_curl_args, parse_tokens};
///
/// let req = parse_tokens(&["http", "GET", "http://example.com"]);
/// let args = make_curl_args(&req)?;
/// assert_eq!(args, vec!["-X", "GET", "http://example.com"]);
/// # Ok::<(), http2curl::shorthand::ShorthandError>(())
/// ```
pub fn make_curl_args(request: &Request) -> Result<Vec<String>, ShorthandError> {
    let mut args = Vec::new();
    if let Some(method) = &request.method {
        args.push("-X".to_string());
        args.push(method.as_str().to_string());
    }
    for (key, value) in &request.headers {
        args.push("-H".to_string());
        args.push(format!("{key}:{value}"));
    }
    if !request.json.is_empty() {
        let body = serde_json::to_string(&request.json)
            .map_err(|e| ShorthandError::Serialization(e.to_string()))?;
        args.push("-d".to_string());
        args.push(body);
    }
    for (key, value) in &request.forms {
        args.push("--data-urlencode".to_string());
        args.push(format!("{key}={value}"));
    }
    args.push(format!(
        "{}{}",
        request.url,
        marshal_queries(&request.queries)
    ));
    Ok(args)
}

/// Join rendered arguments into a display command line
///
/// The vector is what a shell would receive as separate argv entries; the
/// space join is purely for human-readable output.
pub fn command_line(args: &[String]) -> String {
    format!("curl {}", args.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;
    use serde_json::json;

    fn request_with_url(url: &str) -> Request {
        Request {
            url: url.to_string(),
            ..Request::default()
        }
    }

    #[test]
    fn test_render_url_only() {
        let req = request_with_url("http://example.com");
        assert_eq!(make_curl_args(&req).unwrap(), vec!["http://example.com"]);
    }

    #[test]
    fn test_render_empty_request() {
        let req = Request::default();
        assert_eq!(make_curl_args(&req).unwrap(), vec![String::new()]);
    }

    #[test]
    fn test_render_method() {
        let mut req = request_with_url("http://example.com");
        req.method = Some(Method::GET);
        assert_eq!(
            make_curl_args(&req).unwrap(),
            vec!["-X", "GET", "http://example.com"]
        );
    }

    #[test]
    fn test_render_headers_in_order() {
        let mut req = request_with_url("http://example.com");
        req.upsert_header("Content-Type", "application/json");
        req.upsert_header("Accept", "application/json");
        assert_eq!(
            make_curl_args(&req).unwrap(),
            vec![
                "-H",
                "Content-Type:application/json",
                "-H",
                "Accept:application/json",
                "http://example.com",
            ]
        );
    }

    #[test]
    fn test_render_json_body_sorted_keys() {
        let mut req = request_with_url("http://example.com");
        req.json.insert("foo".to_string(), json!("bar"));
        req.json.insert("baz".to_string(), json!(1));
        assert_eq!(
            make_curl_args(&req).unwrap(),
            vec!["-d", r#"{"baz":1,"foo":"bar"}"#, "http://example.com"]
        );
    }

    #[test]
    fn test_render_form_fields_in_order() {
        let mut req = request_with_url("http://example.com");
        req.push_form("foo", "bar");
        req.push_form("baz", "a b");
        assert_eq!(
            make_curl_args(&req).unwrap(),
            vec![
                "--data-urlencode",
                "foo=bar",
                // Form values pass through raw; curl encodes them
                "--data-urlencode",
                "baz=a b",
                "http://example.com",
            ]
        );
    }

    #[test]
    fn test_render_query_string() {
        let mut req = request_with_url("http://example.com");
        req.push_query("foo", "bar");
        req.push_query("baz", "1");
        assert_eq!(
            make_curl_args(&req).unwrap(),
            vec!["http://example.com?foo=bar&baz=1"]
        );
    }

    #[test]
    fn test_render_query_encoding() {
        let mut req = request_with_url("http://example.com");
        req.push_query("foo", "bar 1");
        assert_eq!(
            make_curl_args(&req).unwrap(),
            vec!["http://example.com?foo=bar+1"]
        );

        let mut req = request_with_url("http://example.com");
        req.push_query("foo", "あ");
        assert_eq!(
            make_curl_args(&req).unwrap(),
            vec!["http://example.com?foo=%E3%81%82"]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut req = request_with_url("http://example.com");
        req.method = Some(Method::POST);
        req.upsert_header("X-Test", "1");
        req.json.insert("foo".to_string(), json!([1, 2, 3]));
        req.push_query("q", "a b");
        let first = make_curl_args(&req).unwrap();
        let second = make_curl_args(&req).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_command_line_join() {
        let args = vec!["-X".to_string(), "GET".to_string(), "http://example.com".to_string()];
        assert_eq!(command_line(&args), "curl -X GET http://example.com");
    }
}
