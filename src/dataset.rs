//! Candidate route loading from GeoJSON or plain JSON.
//!
//! Accepts either a GeoJSON `FeatureCollection`, whose features carry a
//! route id and display name in their properties, or a JSON array of
//! `{ "id", "name" }` objects. Geometry is ignored.

use derive_more::{Display, Error};
use routle_core::Route;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// The dataset could not produce any candidate routes.
#[derive(Debug, Clone, Display, Error)]
#[display("Data unavailable: {} at {}:{}", message, file, line)]
pub struct DataError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DataError {
    /// Creates a new data error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<serde_json::Error> for DataError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Invalid dataset JSON: {}", err))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Dataset {
    Routes(Vec<Route>),
    Features(FeatureCollection),
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

/// Property keys naming a feature's route id and display name.
#[derive(Debug, Clone, Copy)]
pub struct PropertyKeys<'a> {
    /// Key of the route id property.
    pub id: &'a str,
    /// Key of the display name property.
    pub name: &'a str,
}

impl Default for PropertyKeys<'static> {
    fn default() -> Self {
        Self {
            id: "route",
            name: "name",
        }
    }
}

/// Reads candidate routes from a dataset file.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_routes(path: impl AsRef<Path>, keys: PropertyKeys<'_>) -> Result<Vec<Route>, DataError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| DataError::new(format!("Failed to read dataset: {}", e)))?;
    let routes = parse_routes(&content, keys)?;
    info!(routes = routes.len(), "Dataset loaded");
    Ok(routes)
}

/// Parses candidate routes from dataset text.
///
/// Feature collections are reduced to one route per id, in first-seen
/// order; when an id repeats, its last name wins.
#[instrument(skip(content), fields(bytes = content.len()))]
pub fn parse_routes(content: &str, keys: PropertyKeys<'_>) -> Result<Vec<Route>, DataError> {
    let routes = match serde_json::from_str::<Dataset>(content)? {
        Dataset::Routes(routes) => routes,
        Dataset::Features(collection) => routes_from_features(collection, keys),
    };

    if routes.is_empty() {
        return Err(DataError::new("No routes found in dataset"));
    }
    Ok(routes)
}

fn routes_from_features(collection: FeatureCollection, keys: PropertyKeys<'_>) -> Vec<Route> {
    let mut routes: Vec<Route> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (i, feature) in collection.features.into_iter().enumerate() {
        let Some(properties) = feature.properties else {
            warn!(feature = i, "Feature without properties skipped");
            continue;
        };
        let (Some(id), Some(name)) = (
            property_text(&properties, keys.id),
            property_text(&properties, keys.name),
        ) else {
            warn!(feature = i, id_key = keys.id, name_key = keys.name, "Feature missing route keys skipped");
            continue;
        };

        match positions.get(&id) {
            Some(&pos) => {
                debug!(%id, %name, "Repeated route id, keeping latest name");
                routes[pos] = Route::new(id, name);
            }
            None => {
                positions.insert(id.clone(), routes.len());
                routes.push(Route::new(id, name));
            }
        }
    }

    routes
}

/// Reads a property as text. Numbers and other scalars are stringified.
fn property_text(properties: &Map<String, Value>, key: &str) -> Option<String> {
    match properties.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
