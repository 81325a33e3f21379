//! Tests for loading candidate routes and config from disk.

use routle::{load_routes, PropertyKeys, RoutleConfig};
use routle_core::Route;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "properties": {"route": "8", "name": "Halsted"},
     "geometry": {"type": "LineString", "coordinates": [[-87.64, 41.87], [-87.64, 41.90]]}},
    {"type": "Feature", "properties": {"route": "8", "name": "Halsted"},
     "geometry": {"type": "LineString", "coordinates": [[-87.64, 41.90], [-87.64, 41.95]]}},
    {"type": "Feature", "properties": {"route": 9, "name": "Ashland"},
     "geometry": {"type": "LineString", "coordinates": [[-87.66, 41.80], [-87.66, 41.95]]}}
  ]
}"#;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_load_geojson_from_file() {
    let file = write_temp(GEOJSON);
    let routes = load_routes(file.path(), PropertyKeys::default()).expect("Dataset loads");
    assert_eq!(
        routes,
        vec![Route::new("8", "Halsted"), Route::new("9", "Ashland")]
    );
}

#[test]
fn test_missing_file_is_unavailable() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let err = load_routes(dir.path().join("absent.geojson"), PropertyKeys::default())
        .expect_err("Missing file should fail");
    assert!(err.to_string().contains("Data unavailable"));
}

#[test]
fn test_config_from_file() {
    let file = write_temp(
        r#"
data_path = "cta_routes.geojson"
id_property = "rt"
seed = 11
"#,
    );
    let config = RoutleConfig::from_file(file.path()).expect("Config loads");
    assert_eq!(config.data_path(), &PathBuf::from("cta_routes.geojson"));
    assert_eq!(config.id_property(), "rt");
    assert_eq!(config.name_property(), "name");
    assert_eq!(config.seed(), &Some(11));
    assert!(*config.color());
}

#[test]
fn test_named_config_must_exist() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("routle.toml");
    let err = RoutleConfig::load(Some(missing.as_path())).expect_err("Missing config should fail");
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_config_rejected() {
    let file = write_temp("seed = \"not a number\"\n");
    assert!(RoutleConfig::from_file(file.path()).is_err());
}
