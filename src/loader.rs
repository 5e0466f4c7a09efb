//! Loading bus route records from JSON, optionally gzip-compressed.

use flate2::read::GzDecoder;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{ReportError, Result};
use crate::model::RawRoute;

/// Records read from an input file, plus how many array elements could not
/// be read as a route.
#[derive(Debug, Default)]
pub struct LoadedRoutes {
    pub routes: Vec<RawRoute>,
    pub skipped: usize,
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decodes a JSON array of route records.
///
/// Elements that do not have the shape of a route record are skipped and
/// counted rather than failing the whole batch.
///
/// # Errors
///
/// Returns an error if the bytes are not valid JSON or the top-level value is
/// not an array.
pub fn parse_routes(bytes: &[u8]) -> Result<LoadedRoutes> {
    let value: Value = serde_json::from_slice(bytes)?;
    let elements = match value {
        Value::Array(elements) => elements,
        other => return Err(ReportError::NotASequence { found: kind(&other) }),
    };

    let mut loaded = LoadedRoutes::default();
    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<RawRoute>(element) {
            Ok(route) => loaded.routes.push(route),
            Err(e) => {
                warn!(index, error = %e, "Skipping unreadable route record");
                loaded.skipped += 1;
            }
        }
    }

    Ok(loaded)
}

/// Reads and decodes the route file at `path`. Paths ending in `.gz` are
/// decompressed first.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_routes(path: &Path) -> Result<LoadedRoutes> {
    let read_err = |source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    };

    let raw = std::fs::read(path).map_err(read_err)?;
    let bytes = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        let mut decoded = Vec::new();
        GzDecoder::new(raw.as_slice())
            .read_to_end(&mut decoded)
            .map_err(read_err)?;
        debug!(compressed = raw.len(), decompressed = decoded.len(), "Input decompressed");
        decoded
    } else {
        raw
    };

    let loaded = parse_routes(&bytes)?;
    info!(
        routes = loaded.routes.len(),
        skipped = loaded.skipped,
        "Loaded bus route data"
    );
    Ok(loaded)
}
