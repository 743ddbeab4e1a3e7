use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::config::VelofixConfig;
use crate::errors::VelofixError;

use super::entry::{Catalog, IssueCatalogEntry};
use super::schema::CATALOG_SCHEMA;

const MAX_CATALOG_BYTES: u64 = 1_048_576;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    issues: Vec<IssueCatalogEntry>,
}

pub async fn load_catalog(path: &Path) -> Result<Catalog, VelofixError> {
    if !path.exists() {
        return Err(VelofixError::Configuration(format!(
            "Catalog file not found: {}",
            path.display()
        )));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CATALOG_BYTES {
        return Err(VelofixError::Configuration("Catalog file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let catalog = parse_catalog(&content)?;
    info!(path = %path.display(), entries = catalog.len(), "Loaded issue catalog");
    Ok(catalog)
}

/// The configured catalog file, or the built-in reference catalog when none is set.
pub async fn resolve_catalog(config: &VelofixConfig) -> Result<Catalog, VelofixError> {
    match config.catalog_path() {
        Some(path) => load_catalog(Path::new(path)).await,
        None => Ok(Catalog::reference()),
    }
}

/// Parse and validate catalog YAML. Unlike config files, schema violations are fatal.
pub fn parse_catalog(content: &str) -> Result<Catalog, VelofixError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    validate_schema(&yaml)?;
    let file: CatalogFile = serde_yaml::from_value(yaml)?;
    Catalog::new(file.issues)
}

fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), VelofixError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| VelofixError::Configuration(format!("Catalog conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CATALOG_SCHEMA)
        .map_err(|e| VelofixError::Configuration(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        let messages: Vec<String> = errors
            .map(|e| format!("{} at {}", e, e.instance_path))
            .collect();
        if !messages.is_empty() {
            return Err(VelofixError::Configuration(format!(
                "Invalid catalog: {}",
                messages.join("; ")
            )));
        }
    }

    Ok(())
}
