//! JSON interchange of delivery points.
//!
//! The format is the dashboard's: an array of point records with camelCase
//! keys, written with two-space indentation.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::models::DeliveryPoint;

/// File name used when exporting into a directory.
pub const EXPORT_FILE_NAME: &str = "delivery-points.json";

/// Parses a JSON array of delivery points.
///
/// # Examples
///
/// ```
/// use smart_route::data::import_points;
///
/// let json = r#"[{
///     "id": "sample-1",
///     "address": "123 Commerce St, Downtown",
///     "coordinates": { "x": 200, "y": 150 },
///     "priority": "high",
///     "estimatedDuration": 20
/// }]"#;
/// let points = import_points(json).unwrap();
/// assert_eq!(points[0].id(), "sample-1");
/// assert!(import_points("[{\"id\": 1}]").is_err());
/// ```
pub fn import_points(json: &str) -> Result<Vec<DeliveryPoint>> {
    Ok(serde_json::from_str(json)?)
}

/// Serializes points to indented JSON.
pub fn export_points(points: &[DeliveryPoint]) -> Result<String> {
    Ok(serde_json::to_string_pretty(points)?)
}

/// Reads and parses a points file.
pub fn read_points(path: impl AsRef<Path>) -> Result<Vec<DeliveryPoint>> {
    let path = path.as_ref();
    let points = import_points(&fs::read_to_string(path)?)?;
    info!(path = %path.display(), count = points.len(), "imported delivery points");
    Ok(points)
}

/// Writes points as [`EXPORT_FILE_NAME`] inside `dir`, returning the file path.
pub fn write_export(points: &[DeliveryPoint], dir: impl AsRef<Path>) -> Result<PathBuf> {
    let path = dir.as_ref().join(EXPORT_FILE_NAME);
    fs::write(&path, export_points(points)?)?;
    info!(path = %path.display(), count = points.len(), "exported delivery points");
    Ok(path)
}
