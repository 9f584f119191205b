use serde_json::Value;

/// Returns true iff `value` is an object whose `$ref` entry is a string.
///
/// Purely structural: the `#/` prefix is not checked here, so the predicate
/// stays a total function usable for branching. The resolver owns the
/// descriptive failure for a bad prefix.
pub fn is_reference(value: &Value) -> bool {
    reference_target(value).is_some()
}

/// The `$ref` pointer string of a reference object, if `value` is one.
///
/// Other keys on the same object (summaries, descriptions) are ignored;
/// a syntactically valid `$ref` is sufficient.
pub fn reference_target(value: &Value) -> Option<&str> {
    value.as_object()?.get("$ref")?.as_str()
}
