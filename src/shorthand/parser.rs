//! Shorthand token classification
//!
//! Turns a raw token list into a [`Request`]. Each token is classified by
//! shape, first matching rule wins, and anything unrecognized is silently
//! ignored: the parser is deliberately lenient at the token level so a typo
//! never fails the whole run.

use http::Method;
use serde_json::Value;

use crate::shorthand::request::Request;

/// Parse shorthand tokens into a request
///
/// Never fails. Classification order per token:
///
/// 1. the literal `http` (the shorthand tool's own name) — ignored
/// 2. `-f` / `--form` — switch to form body mode for later field tokens
/// 3. a method name (`get`, `POST`, ... case-insensitive) — sets the method
/// 4. an `http://` or `https://` prefixed token — sets the URL, last one wins
/// 5. `key==value` — query pair
/// 6. `key:=value` — typed JSON field
/// 7. `key=value` — form field in form mode, JSON string field otherwise
/// 8. `key:value` — header
/// 9. anything else — ignored
///
/// The order matters: `foo:=1` also looks like a header and `a:b=c` also
/// looks like one, so the earlier rules must win.
///
/// # Examples
///
/// ```
/// use http::Method;
/// use http2curl::shorthand::parse_tokens;
///
/// let req = parse_tokens(&["http", "get", "http://example.com", "X-Test: 1"]);
/// assert_eq!(req.method, Some(Method::GET));
/// assert_eq!(req.url, "http://example.com");
/// assert_eq!(req.headers, vec![("X-Test".to_string(), "1".to_string())]);
/// ```
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Request {
    let mut request = Request::default();
    let mut form = false;

    for token in tokens {
        let token = token.as_ref();
        if token == "http" {
            continue;
        }
        if token == "-f" || token == "--form" {
            form = true;
            continue;
        }
        if let Some(method) = parse_shorthand_method(token) {
            request.method = Some(method);
            continue;
        }
        if token.starts_with("http://") || token.starts_with("https://") {
            request.url = token.to_string();
            continue;
        }
        if let Some((key, value)) = split_query(token) {
            request.push_query(key, value);
            continue;
        }
        if let Some((key, value)) = split_typed_field(token) {
            request.insert_json_field(key, parse_typed_value(value));
            continue;
        }
        if let Some((key, value)) = split_field(token) {
            if form {
                request.push_form(key, value);
            } else {
                request.insert_json_field(key, Value::String(value.to_string()));
            }
            continue;
        }
        if let Some((key, value)) = split_header(token) {
            request.upsert_header(key, value);
        }
    }

    request
}

/// Match a token against the supported method names, case-insensitively
fn parse_shorthand_method(token: &str) -> Option<Method> {
    match token.to_ascii_uppercase().as_str() {
        "GET" => Some(Method::GET),
        "POST" => Some(Method::POST),
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

/// Split a `key==value` query token
///
/// The key is one or more non-`=` characters; the value is everything after
/// the double equals and may be empty or contain further `=` signs.
fn split_query(token: &str) -> Option<(&str, &str)> {
    let i = token.find('=')?;
    if i == 0 || !token[i + 1..].starts_with('=') {
        return None;
    }
    Some((&token[..i], &token[i + 2..]))
}

/// Split a `key:=value` typed-field token
fn split_typed_field(token: &str) -> Option<(&str, &str)> {
    let i = token.find(':')?;
    if i == 0 || !token[i + 1..].starts_with('=') {
        return None;
    }
    Some((&token[..i], &token[i + 2..]))
}

/// Split a plain `key=value` field token
fn split_field(token: &str) -> Option<(&str, &str)> {
    match token.split_once('=') {
        Some((key, value)) if !key.is_empty() => Some((key, value)),
        _ => None,
    }
}

/// Split a `key:value` header token, stripping leading value whitespace
fn split_header(token: &str) -> Option<(&str, &str)> {
    match token.split_once(':') {
        Some((key, value)) if !key.is_empty() => Some((key, value.trim_start())),
        _ => None,
    }
}

/// Interpret a `key:=value` value as a typed JSON literal
///
/// Tried in fixed order, first success wins: integer (with optional sign and
/// `0x`/`0o`/`0b` base prefixes), float, boolean, JSON array, JSON object.
/// Falls back to the raw string, so this never fails.
fn parse_typed_value(value: &str) -> Value {
    if let Some(n) = parse_int_literal(value) {
        return Value::from(n);
    }
    if let Ok(f) = value.parse::<f64>() {
        // NaN and infinities have no JSON representation; fall through
        if let Some(n) = serde_json::Number::from_f64(f) {
            return Value::Number(n);
        }
    }
    match value {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if value.starts_with('[') && value.ends_with(']') {
        if let Ok(v @ Value::Array(_)) = serde_json::from_str::<Value>(value) {
            return v;
        }
    }
    if value.starts_with('{') && value.ends_with('}') {
        if let Ok(v @ Value::Object(_)) = serde_json::from_str::<Value>(value) {
            return v;
        }
    }
    Value::String(value.to_string())
}

/// Parse an integer literal with an optional sign and base prefix
fn parse_int_literal(value: &str) -> Option<i64> {
    let (sign, rest) = match value.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, value.strip_prefix('+').unwrap_or(value)),
    };
    let (radix, digits) = if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        (16, hex)
    } else if let Some(oct) = rest.strip_prefix("0o").or_else(|| rest.strip_prefix("0O")) {
        (8, oct)
    } else if let Some(bin) = rest.strip_prefix("0b").or_else(|| rest.strip_prefix("0B")) {
        (2, bin)
    } else {
        (10, rest)
    };
    i64::from_str_radix(digits, radix).ok().map(|n| sign * n)
}
