use thiserror::Error;

/// Errors produced during reference resolution.
///
/// The first three variants are usage errors (programmer mistakes, not
/// recoverable at runtime); `UnresolvedRef` and `CircularRef` are data
/// errors in the document being resolved.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The reference argument is not a `{ "$ref": <string> }` object.
    #[error("not a reference object")]
    NotAReference,

    /// The document to resolve against is not an object.
    #[error("document must be an object")]
    DocumentNotObject,

    /// The `$ref` string does not use the same-document `#/` prefix.
    #[error("pointer must start with #/: {0}")]
    InvalidPointer(String),

    /// A pointer segment could not be traversed. Carries the original
    /// undecoded pointer so callers can report which `$ref` is broken.
    #[error("could not resolve component: {0}")]
    UnresolvedRef(String),

    /// A reference chain resolved back into itself during exhaustive
    /// dereferencing.
    #[error("circular $ref detected: {0}")]
    CircularRef(String),

    /// Resolution exceeded the configured depth bound.
    #[error("maximum resolution depth exceeded (limit {limit})")]
    DepthExceeded { limit: usize },
}

/// Errors produced while loading a document from text or a file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// YAML/JSON parse error.
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error reading the document file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
