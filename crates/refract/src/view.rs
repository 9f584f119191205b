use serde_json::Value;

use crate::error::ResolveError;
use crate::resolver::{follow_references, index, ResolveOptions, DEFAULT_MAX_REF_HOPS};

/// A read-only view of a document (or sub-value) that substitutes reference
/// objects with their targets on access.
///
/// A view borrows two things: the value it wraps and the root document all
/// `$ref` pointers inside that value are interpreted against. The two
/// coincide for a view over a whole document and diverge for sub-views
/// handed out by [`get`](DocumentView::get), which is what lets a subtree
/// obtained through a reference keep dereferencing pointers relative to the
/// original root.
///
/// Resolution is lazy: each access substitutes at most a bounded chain of
/// references, nothing is cached, and the underlying document is never
/// mutated or copied. A document containing a reference cycle is therefore
/// safe to hold a view over; no single access loops, but a caller that
/// exhaustively reads through the cycle without a depth limit of its own
/// will. Use [`dereference`](crate::dereference) for a cycle-checked
/// exhaustive copy.
#[derive(Debug, Clone, Copy)]
pub struct DocumentView<'a> {
    value: &'a Value,
    root: &'a Value,
    max_ref_hops: usize,
}

impl<'a> DocumentView<'a> {
    /// View of a whole document; pointers resolve against `document` itself.
    pub fn new(document: &'a Value) -> Self {
        Self::with_root(document, document)
    }

    /// View of `value` whose pointers resolve against a separate root.
    pub fn with_root(value: &'a Value, root: &'a Value) -> Self {
        Self {
            value,
            root,
            max_ref_hops: DEFAULT_MAX_REF_HOPS,
        }
    }

    /// Replace the resolution limits (the hop cap is the only one a lazy
    /// view uses).
    pub fn with_options(mut self, options: &ResolveOptions) -> Self {
        self.max_ref_hops = options.max_ref_hops;
        self
    }

    /// Read one key, substituting references in the result.
    ///
    /// Looks `key` up in the underlying value (map key, or decimal index
    /// into a sequence), follows the child through any chain of references
    /// against the root, and wraps the result in a new view sharing this
    /// view's root. An absent key is `Ok(None)`, matching ordinary property
    /// lookup; only a present-but-broken reference is an error.
    pub fn get(&self, key: &str) -> Result<Option<DocumentView<'a>>, ResolveError> {
        let child = match index(self.value, key) {
            Some(child) => child,
            None => return Ok(None),
        };
        let resolved = follow_references(child, self.root, self.max_ref_hops)?;
        Ok(Some(DocumentView {
            value: resolved,
            root: self.root,
            max_ref_hops: self.max_ref_hops,
        }))
    }

    /// Walk several segments at once, substituting references before each
    /// step.
    ///
    /// This is the accessor form of the view: at every step the current
    /// node is dereferenced first, then indexed, so references nested
    /// arbitrarily deep along the path are followed transparently. A
    /// missing segment fails with
    /// [`UnresolvedRef`](ResolveError::UnresolvedRef) carrying the path up
    /// to the failing segment, re-encoded in pointer form.
    pub fn get_path<S: AsRef<str>>(&self, segments: &[S]) -> Result<DocumentView<'a>, ResolveError> {
        let mut current = follow_references(self.value, self.root, self.max_ref_hops)?;
        for (position, segment) in segments.iter().enumerate() {
            current = match index(current, segment.as_ref()) {
                Some(child) => child,
                None => {
                    return Err(ResolveError::UnresolvedRef(refract_pointer::encode(
                        &segments[..=position],
                    )))
                }
            };
            current = follow_references(current, self.root, self.max_ref_hops)?;
        }
        Ok(DocumentView {
            value: current,
            root: self.root,
            max_ref_hops: self.max_ref_hops,
        })
    }

    /// The underlying value. For views returned by [`get`](Self::get) and
    /// [`get_path`](Self::get_path) this is already dereferenced.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn as_str(&self) -> Option<&'a str> {
        self.value.as_str()
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.value.as_bool()
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.value.as_f64()
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.value.as_u64()
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// Keys of the underlying object, in document order; empty for
    /// non-objects. Lets consumers enumerate (e.g. iterate `paths`) and
    /// read each entry back through [`get`](Self::get).
    pub fn keys(&self) -> Vec<&'a str> {
        match self.value {
            Value::Object(map) => map.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Entry count of an object or element count of a sequence; 0 for
    /// scalars.
    pub fn len(&self) -> usize {
        match self.value {
            Value::Object(map) => map.len(),
            Value::Array(items) => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
