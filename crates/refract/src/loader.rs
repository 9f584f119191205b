use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::LoadError;

/// Parse a YAML or JSON document into a value tree.
///
/// Parses YAML, which also handles JSON since JSON is valid YAML. The
/// result is the plain mapping/sequence/scalar tree the resolver operates
/// on; no shape is imposed beyond that.
pub fn parse_document(input: &str) -> Result<Value, LoadError> {
    serde_yaml::from_str(input).map_err(|e| LoadError::Parse(e.to_string()))
}

/// Read and parse a document from a file path.
pub fn load_document(path: &Path) -> Result<Value, LoadError> {
    let content = std::fs::read_to_string(path)?;
    let document = parse_document(&content)?;
    debug!(path = %path.display(), "loaded document");
    Ok(document)
}
