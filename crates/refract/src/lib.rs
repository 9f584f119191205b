//! Lazy `$ref` resolution over JSON-like documents.
//!
//! Wraps a parsed document (e.g. an OpenAPI spec) in a [`DocumentView`]
//! whose reads transparently substitute `{ "$ref": "#/..." }` objects with
//! the value they point to, recursively, without mutating or copying the
//! source document. Pointers follow the RFC 6901 fragment subset: `#/`
//! prefix, `/`-delimited segments, `~0`/`~1` escapes, same-document
//! references only.

pub mod error;
pub mod loader;
pub mod reference;
pub mod resolver;
pub mod view;

pub use error::{LoadError, ResolveError};
pub use loader::{load_document, parse_document};
pub use reference::{is_reference, reference_target};
pub use resolver::{dereference, resolve_reference, ResolveOptions};
pub use view::DocumentView;
