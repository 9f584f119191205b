//! JSON Pointer codec for `#/` fragment references.
//!
//! Implements the RFC 6901 subset used by `$ref` objects in OpenAPI-style
//! documents: `/`-delimited segments under a `#/` prefix, with `~1` → `/`
//! and `~0` → `~` as the only escape sequences (no URI percent-escaping).

use thiserror::Error;

/// Errors produced while decoding a pointer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    /// The pointer does not start with `#/`.
    #[error("pointer must start with #/")]
    MissingPrefix,
}

/// Decode a `#/a/b/c` pointer into its decoded segments.
///
/// Strips the `#/` prefix, splits on `/`, then unescapes each segment.
/// `#/` alone decodes to the empty segment list, addressing the whole
/// document.
///
/// ```
/// let segments = refract_pointer::decode("#/components/schemas/foo~1bar~0baz").unwrap();
/// assert_eq!(segments, vec!["components", "schemas", "foo/bar~baz"]);
/// ```
pub fn decode(pointer: &str) -> Result<Vec<String>, PointerError> {
    let rest = match pointer.strip_prefix("#/") {
        Some(rest) => rest,
        None => return Err(PointerError::MissingPrefix),
    };
    if rest.is_empty() {
        return Ok(Vec::new());
    }
    Ok(rest.split('/').map(unescape_segment).collect())
}

/// Encode decoded segments back into a `#/` pointer; inverse of [`decode`].
pub fn encode<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::from("#");
    if segments.is_empty() {
        out.push('/');
        return out;
    }
    for segment in segments {
        out.push('/');
        out.push_str(&escape_segment(segment.as_ref()));
    }
    out
}

/// Unescape one pointer segment: `~1` → `/` then `~0` → `~`.
///
/// The order matters and decoded output is not re-scanned, so `~01`
/// decodes to `~1` and not to `/`.
pub fn unescape_segment(segment: &str) -> String {
    if !segment.contains('~') {
        return segment.to_string();
    }
    segment.replace("~1", "/").replace("~0", "~")
}

/// Escape one pointer segment: `~` → `~0` then `/` → `~1`.
pub fn escape_segment(segment: &str) -> String {
    if !segment.contains('~') && !segment.contains('/') {
        return segment.to_string();
    }
    segment.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_plain_segments() {
        assert_eq!(
            decode("#/components/schemas/user").unwrap(),
            vec!["components", "schemas", "user"]
        );
    }

    #[test]
    fn decode_whole_document_pointer() {
        assert_eq!(decode("#/").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn decode_escaped_segments() {
        assert_eq!(
            decode("#/components/schemas/foo~1bar~0baz").unwrap(),
            vec!["components", "schemas", "foo/bar~baz"]
        );
    }

    #[test]
    fn decode_does_not_rescan_output() {
        // "~01" is the escape for "~1", not a nested escape for "/".
        assert_eq!(decode("#/a~01b").unwrap(), vec!["a~1b"]);
    }

    #[test]
    fn decode_empty_segment() {
        assert_eq!(decode("#//a").unwrap(), vec!["", "a"]);
    }

    #[test]
    fn decode_rejects_missing_prefix() {
        assert_eq!(decode("/a/b"), Err(PointerError::MissingPrefix));
        assert_eq!(decode("#"), Err(PointerError::MissingPrefix));
        assert_eq!(decode(""), Err(PointerError::MissingPrefix));
        assert_eq!(
            decode("http://example.com/schema#/a"),
            Err(PointerError::MissingPrefix)
        );
    }

    #[test]
    fn decode_numeric_segments_stay_strings() {
        assert_eq!(decode("#/items/0/name").unwrap(), vec!["items", "0", "name"]);
    }

    #[test]
    fn escape_order_is_tilde_first() {
        assert_eq!(escape_segment("a/b~c"), "a~1b~0c");
        assert_eq!(escape_segment("~1"), "~01");
    }

    #[test]
    fn encode_decode_round_trip() {
        let cases: &[&[&str]] = &[
            &[],
            &["a"],
            &["a", "b", "c"],
            &["foo/bar~baz"],
            &["~", "/", "~/", "/~"],
            &["~0", "~1", "~01"],
            &["", "a", ""],
            &["paths", "/users/{id}", "get"],
        ];
        for segments in cases {
            let pointer = encode(segments);
            assert_eq!(&decode(&pointer).unwrap(), segments, "pointer: {pointer}");
        }
    }

    #[test]
    fn encode_whole_document() {
        assert_eq!(encode::<&str>(&[]), "#/");
    }
}
