use http::Method;
use serde_json::{Map, Value};

/// An HTTP request assembled incrementally from shorthand tokens
///
/// Created empty at the start of parsing, mutated token-by-token through the
/// `set_*`/`push_*`/`upsert_*` operations below, then handed immutably to the
/// curl renderer. A request carries either a JSON body (`json`) or a form body
/// (`forms`), never both; the parser picks the mode before field tokens land
/// here.
///
/// # Examples
///
/// ```
/// use http::Method;
/// use http2curl::shorthand::Request;
///
/// let mut req = Request::default();
/// req.method = Some(Method::GET);
/// req.url = "http://example.com".to_string();
/// req.push_query("foo", "bar");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    /// Explicit HTTP method, if any method token was seen
    pub method: Option<Method>,
    /// Target URL; simple overwrite, the last scheme-prefixed token wins
    pub url: String,
    /// Ordered header pairs; insertion goes through `upsert_header`
    pub headers: Vec<(String, String)>,
    /// Query pairs in insertion order, no deduplication
    pub queries: Vec<(String, String)>,
    /// Form fields in insertion order, populated only in form mode
    pub forms: Vec<(String, String)>,
    /// JSON body fields; unique keys, last write wins, keys serialize sorted
    pub json: Map<String, Value>,
}

impl Request {
    /// Set or overwrite a header, preserving insertion order
    ///
    /// Keys are matched case-insensitively. On collision the value is replaced
    /// in place so the header keeps its original position; otherwise the pair
    /// is appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use http2curl::shorthand::Request;
    ///
    /// let mut req = Request::default();
    /// req.upsert_header("X-Test", "1");
    /// req.upsert_header("x-test", "2");
    /// assert_eq!(req.headers, vec![("X-Test".to_string(), "2".to_string())]);
    /// ```
    pub fn upsert_header(&mut self, key: &str, value: &str) {
        match self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
        {
            Some((_, v)) => *v = value.to_string(),
            None => self.headers.push((key.to_string(), value.to_string())),
        }
    }

    /// Append a query pair
    pub fn push_query(&mut self, key: &str, value: &str) {
        self.queries.push((key.to_string(), value.to_string()));
    }

    /// Append a form field
    pub fn push_form(&mut self, key: &str, value: &str) {
        self.forms.push((key.to_string(), value.to_string()));
    }

    /// Add a JSON body field, replacing any earlier value for the same key
    ///
    /// As a side effect the `Content-Type: application/json` header is set or
    /// overwritten, never duplicated.
    pub fn insert_json_field(&mut self, key: &str, value: Value) {
        self.json.insert(key.to_string(), value);
        self.upsert_header("Content-Type", "application/json");
    }
}

/// Percent-encode a query value using form-encoding rules
///
/// Unreserved characters (`A-Za-z0-9-_.~`) pass through, space becomes `+`,
/// everything else is escaped byte-wise over UTF-8.
fn encode_query_value(value: &str) -> String {
    // urlencoding never emits a bare space, so "%20" can only come from one
    urlencoding::encode(value).replace("%20", "+")
}

/// Marshal a single query pair as `key=encoded-value`
///
/// Only the value is encoded; the key passes through raw.
pub fn marshal_query(key: &str, value: &str) -> String {
    format!("{key}={}", encode_query_value(value))
}

/// Marshal query pairs into a `?`-prefixed query string
///
/// Returns the empty string for an empty list; otherwise pairs are joined by
/// `&` in insertion order.
///
/// # Examples
///
/// ```
/// use http2curl::shorthand::request::marshal_queries;
///
/// let queries = vec![("foo".to_string(), "bar 1".to_string())];
/// assert_eq!(marshal_queries(&queries), "?foo=bar+1");
/// ```
pub fn marshal_queries(queries: &[(String, String)]) -> String {
    let mut out = String::new();
    for (key, value) in queries {
        out.push(if out.is_empty() { '?' } else { '&' });
        out.push_str(&marshal_query(key, value));
    }
    out
}
