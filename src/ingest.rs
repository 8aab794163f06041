use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::{FeatLinkError, Result};
use crate::syntax::TranslationUnit;

/// Parses a translation unit from the JSON document emitted by the front
/// end.
pub fn parse_unit(json: &str) -> Result<TranslationUnit> {
    let unit = serde_json::from_str(json)?;
    Ok(unit)
}

/// Loads a translation unit from a JSON file on disk.
///
/// The front end writes one document per compiled source file; this reads
/// and decodes it, wrapping failures with the offending path.
pub fn load_unit(path: &Path) -> Result<TranslationUnit> {
    let contents = fs::read_to_string(path).map_err(|e| FeatLinkError::Ingest {
        message: format!("failed to read unit file: {}", e),
        path: path.display().to_string(),
    })?;

    let unit: TranslationUnit =
        serde_json::from_str(&contents).map_err(|e| FeatLinkError::Ingest {
            message: format!("failed to decode unit file: {}", e),
            path: path.display().to_string(),
        })?;

    debug!(
        unit = %unit.path,
        callables = unit.callables.len(),
        "loaded translation unit"
    );
    Ok(unit)
}
