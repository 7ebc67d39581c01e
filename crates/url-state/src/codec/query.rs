//! Query-string parsing and building.
//!
//! Works on raw text only: no percent-decoding or encoding happens at this
//! layer.

use crate::model::RawParams;

/// Parses a query string into an ordered mapping.
///
/// A single leading `?` is stripped. Segments are split on `&`, then on the
/// first `=`; a segment without `=` maps its key to the empty string and a
/// segment with an empty key is dropped. For a repeated key the last value
/// wins while the key keeps the position of its first occurrence.
pub fn parse_search(search: &str) -> RawParams {
    let query = search.strip_prefix('?').unwrap_or(search);
    let mut params = RawParams::new();
    if query.is_empty() {
        return params;
    }

    for segment in query.split('&') {
        let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
        if key.is_empty() {
            continue;
        }
        params.insert(key, value);
    }

    tracing::trace!(keys = params.len(), "parsed query string");
    params
}

/// Builds a query string from a mapping.
///
/// Returns the empty string for an empty mapping, otherwise `?` followed by
/// `key=value` pairs joined by `&` in iteration order. Values are emitted
/// verbatim.
pub fn build_search(params: &RawParams) -> String {
    if params.is_empty() {
        return String::new();
    }

    let mut out = String::from("?");
    for (i, (key, value)) in params.iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        out.push_str(key);
        out.push('=');
        out.push_str(value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_empty() {
        assert!(parse_search("").is_empty());
        assert!(parse_search("?").is_empty());
    }

    #[test]
    fn test_parse_with_and_without_question_mark() {
        for search in ["?foo=bar&baz=qux", "foo=bar&baz=qux"] {
            let params = parse_search(search);
            assert_eq!(params.get("foo"), Some("bar"));
            assert_eq!(params.get("baz"), Some("qux"));
        }
    }

    #[test]
    fn test_parse_empty_values() {
        let params = parse_search("?foo=&bar=value");
        assert_eq!(params.get("foo"), Some(""));
        assert_eq!(params.get("bar"), Some("value"));
    }

    #[test]
    fn test_parse_key_without_value() {
        let params = parse_search("?foo&bar=value");
        assert_eq!(params.get("foo"), Some(""));
        assert_eq!(params.get("bar"), Some("value"));
    }

    #[test]
    fn test_parse_malformed_pairs() {
        let params = parse_search("?=value&key=");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("key"), Some(""));

        assert!(parse_search("?&&=x&").is_empty());
    }

    #[test]
    fn test_parse_duplicate_keys() {
        let params = parse_search("?foo=first&bar=1&foo=second");
        assert_eq!(params.get("foo"), Some("second"));
        assert_eq!(params.keys().collect::<Vec<_>>(), ["foo", "bar"]);
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let params = parse_search("?expr=a=b");
        assert_eq!(params.get("expr"), Some("a=b"));
    }

    #[test]
    fn test_parse_leaves_escapes_alone() {
        let params = parse_search("?q=hello%20world");
        assert_eq!(params.get("q"), Some("hello%20world"));
    }

    #[test]
    fn test_build_empty() {
        assert_eq!(build_search(&RawParams::new()), "");
    }

    #[test]
    fn test_build() {
        let params: RawParams = [("foo", "bar")].into_iter().collect();
        assert_eq!(build_search(&params), "?foo=bar");

        let params: RawParams = [("foo", "bar"), ("baz", "qux")].into_iter().collect();
        assert_eq!(build_search(&params), "?foo=bar&baz=qux");

        let params: RawParams = [("foo", ""), ("bar", "value")].into_iter().collect();
        assert_eq!(build_search(&params), "?foo=&bar=value");
    }

    #[test]
    fn test_build_preserves_order() {
        let mut params = RawParams::new();
        params.insert("z", "3");
        params.insert("a", "1");
        params.insert("m", "2");
        assert_eq!(build_search(&params), "?z=3&a=1&m=2");
    }

    #[test]
    fn test_build_normalizes() {
        let params = parse_search("foo&bar=1&foo=2");
        assert_eq!(build_search(&params), "?foo=2&bar=1");
    }

    proptest! {
        #[test]
        fn prop_parse_build_roundtrip(search in "[a-z0-9=&%,]{0,40}") {
            let params = parse_search(&search);
            prop_assert_eq!(parse_search(&build_search(&params)), params);
        }
    }
}
