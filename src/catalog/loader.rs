//! Catalog loading.
//!
//! Provides two loading methods:
//! - `default_catalog()` - The four stock filaments embedded in the binary
//! - `load_catalog(path)` - A `.json` or `.toml` catalog file

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

use super::registry::MaterialCatalog;
use super::types::MaterialProfile;

/// Default catalog embedded at compile time from `config/materials.toml`.
const DEFAULT_MATERIALS: &str = include_str!("../../config/materials.toml");

/// On-disk shape shared by the JSON and TOML formats.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    materials: Vec<MaterialProfile>,
}

/// Load a catalog from disk.
///
/// Files ending in `.toml` are parsed as TOML (`[[materials]]` tables);
/// anything else is parsed as JSON (`{"materials": [...]}`).
pub fn load_catalog(path: &Path) -> Result<MaterialCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read material catalog {:?}", path))?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let file: CatalogFile = if is_toml {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML catalog {:?}", path))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON catalog {:?}", path))?
    };

    let catalog = MaterialCatalog::new(file.materials)?;
    info!("Loaded {} materials from {:?}", catalog.len(), path);
    Ok(catalog)
}

/// Get the stock catalog (ABS, PLA, PETG, TPU in that order).
///
/// # Panics
/// Panics if the embedded TOML is invalid (a build-time bug).
pub fn default_catalog() -> MaterialCatalog {
    let file: CatalogFile =
        toml::from_str(DEFAULT_MATERIALS).expect("embedded materials.toml must be valid TOML");
    MaterialCatalog::new(file.materials).expect("embedded materials.toml must be a valid catalog")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_catalog_loads_in_order() {
        let catalog = default_catalog();
        let ids: Vec<&str> = catalog.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["abs", "pla", "petg", "tpu"]);
    }

    #[test]
    fn test_default_prices() {
        let catalog = default_catalog();
        assert_eq!(catalog.get("abs").unwrap().price_per_kg, 450.0);
        assert_eq!(catalog.get("pla").unwrap().price_per_kg, 400.0);
        assert_eq!(catalog.get("petg").unwrap().price_per_kg, 500.0);
        assert_eq!(catalog.get("tpu").unwrap().price_per_kg, 600.0);
    }

    #[test]
    fn test_default_materials_have_properties_and_temperatures() {
        for material in default_catalog().iter() {
            assert!(
                material.properties.is_some(),
                "{} should have property scores",
                material.id
            );
            assert!(
                material.temperatures.is_some(),
                "{} should have temperatures",
                material.id
            );
        }
    }

    #[test]
    fn test_load_json_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("materials.json");
        std::fs::write(
            &path,
            r#"{"materials": [
                {"id": "asa", "name": "ASA", "price": 700, "properties": {"heatResistance": 9}},
                {"id": "pla", "name": "PLA", "price": 380}
            ]}"#,
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.properties_for("asa").unwrap().heat_resistance,
            Some(9.0)
        );
    }

    #[test]
    fn test_load_toml_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("materials.toml");
        std::fs::write(
            &path,
            "[[materials]]\nid = \"pc\"\nname = \"PC\"\nprice_per_kg = 900.0\n",
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.get("pc").unwrap().name, "PC");
    }

    #[test]
    fn test_load_rejects_invalid_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("materials.json");
        std::fs::write(
            &path,
            r#"{"materials": [{"id": "pla", "name": "PLA", "price": 0}]}"#,
        )
        .unwrap();
        assert!(load_catalog(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_catalog(&dir.path().join("missing.json")).is_err());
    }
}
