use std::collections::HashSet;

use serde_json::Value;
use tracing::trace;

use crate::error::ResolveError;
use crate::reference::{is_reference, reference_target};

/// Default cap on chained `$ref` substitutions per access.
pub const DEFAULT_MAX_REF_HOPS: usize = 8;

/// Default nesting-depth cap for exhaustive dereferencing.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Resolution limits.
///
/// An explicit options struct so embedders can widen the bounds for
/// unusually deep documents.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Maximum chained `$ref` substitutions per access.
    pub max_ref_hops: usize,
    /// Maximum nesting depth when dereferencing exhaustively.
    pub max_depth: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            max_ref_hops: DEFAULT_MAX_REF_HOPS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Resolve a single reference object against `document`.
///
/// Decodes the `$ref` pointer and walks its segments from the document
/// root, returning the borrowed target. The target is returned as-is: a
/// target that is itself a reference is not followed here, that recursion
/// belongs to [`DocumentView`](crate::DocumentView).
pub fn resolve_reference<'a>(
    reference: &Value,
    document: &'a Value,
) -> Result<&'a Value, ResolveError> {
    let pointer = match reference_target(reference) {
        Some(pointer) => pointer,
        None => return Err(ResolveError::NotAReference),
    };
    if !document.is_object() {
        return Err(ResolveError::DocumentNotObject);
    }
    let segments = refract_pointer::decode(pointer)
        .map_err(|_| ResolveError::InvalidPointer(pointer.to_string()))?;

    trace!(pointer, "resolving reference");

    let mut current = document;
    for segment in &segments {
        current = match index(current, segment) {
            Some(child) => child,
            // Report the original pointer, not the decoded segment.
            None => return Err(ResolveError::UnresolvedRef(pointer.to_string())),
        };
    }
    Ok(current)
}

/// Index one step into `value` with a decoded segment: map key for objects,
/// decimal index for sequences.
pub(crate) fn index<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => items.get(segment.parse::<usize>().ok()?),
        _ => None,
    }
}

/// Substitute `value` while it is a reference, following chained references
/// up to `max_ref_hops`.
///
/// The cap converts a reference cycle into a clean error on the access that
/// would otherwise spin.
pub(crate) fn follow_references<'a>(
    mut value: &'a Value,
    document: &'a Value,
    max_ref_hops: usize,
) -> Result<&'a Value, ResolveError> {
    let mut hops = 0;
    while is_reference(value) {
        if hops == max_ref_hops {
            return Err(ResolveError::DepthExceeded { limit: max_ref_hops });
        }
        value = resolve_reference(value, document)?;
        hops += 1;
    }
    Ok(value)
}

/// Produce an owned copy of `value` with every reference inlined.
///
/// The lazy [`DocumentView`](crate::DocumentView) never loops on a cyclic
/// document because it resolves one access at a time; an exhaustive copy
/// does, so this walk keeps the set of in-flight pointers and reports a
/// [`CircularRef`](ResolveError::CircularRef) instead of recursing forever.
/// Nesting past `options.max_depth` fails with
/// [`DepthExceeded`](ResolveError::DepthExceeded) rather than overflowing
/// the stack.
pub fn dereference(
    value: &Value,
    document: &Value,
    options: &ResolveOptions,
) -> Result<Value, ResolveError> {
    if !document.is_object() {
        return Err(ResolveError::DocumentNotObject);
    }
    let mut visited = HashSet::new();
    dereference_inner(value, document, options, &mut visited, 0)
}

fn dereference_inner(
    value: &Value,
    document: &Value,
    options: &ResolveOptions,
    visited: &mut HashSet<String>,
    depth: usize,
) -> Result<Value, ResolveError> {
    if depth > options.max_depth {
        return Err(ResolveError::DepthExceeded {
            limit: options.max_depth,
        });
    }
    match value {
        Value::Object(map) => {
            if let Some(pointer) = reference_target(value) {
                // `visited` holds the current resolution chain only, so
                // diamond-shaped reuse of a target is fine; re-entering a
                // pointer already in flight is a cycle.
                if !visited.insert(pointer.to_string()) {
                    return Err(ResolveError::CircularRef(pointer.to_string()));
                }
                let target = resolve_reference(value, document)?;
                let resolved = dereference_inner(target, document, options, visited, depth + 1)?;
                visited.remove(pointer);
                Ok(resolved)
            } else {
                let mut out = serde_json::Map::with_capacity(map.len());
                for (key, child) in map {
                    out.insert(
                        key.clone(),
                        dereference_inner(child, document, options, visited, depth + 1)?,
                    );
                }
                Ok(Value::Object(out))
            }
        }
        Value::Array(items) => {
            let resolved: Result<Vec<_>, _> = items
                .iter()
                .map(|item| dereference_inner(item, document, options, visited, depth + 1))
                .collect();
            Ok(Value::Array(resolved?))
        }
        scalar => Ok(scalar.clone()),
    }
}
