use std::path::Path;
use crate::errors::VelofixError;
use super::types::VelofixConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::warn;

pub async fn parse_config(path: &Path) -> Result<VelofixConfig, VelofixError> {
    if !path.exists() {
        return Err(VelofixError::Configuration(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(VelofixError::Configuration("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_config_str(&content)
}

pub fn parse_config_str(content: &str) -> Result<VelofixConfig, VelofixError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    // An empty file is a valid, all-defaults config
    if yaml.is_null() {
        return Ok(VelofixConfig::default());
    }

    // JSON Schema validation
    validate_schema(&yaml)?;

    // Parse into typed config
    let config: VelofixConfig = serde_yaml::from_value(yaml)?;

    validate_semantics(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), VelofixError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| VelofixError::Configuration(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| VelofixError::Configuration(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory only: typed parsing below rejects anything truly unusable
        for e in errors {
            warn!(validation_error = %format!("{} at {}", e, e.instance_path), "Config schema warning");
        }
    }

    Ok(())
}

fn validate_semantics(config: &VelofixConfig) -> Result<(), VelofixError> {
    if let Some(catalog) = &config.catalog {
        if catalog.path.trim().is_empty() {
            return Err(VelofixError::Configuration("catalog.path must not be empty".into()));
        }
    }

    if let Some(server) = &config.server {
        if server.port == Some(0) {
            return Err(VelofixError::Configuration("server.port must be between 1 and 65535".into()));
        }
        if server.api_token.as_deref().is_some_and(|t| t.trim().is_empty()) {
            warn!("server.api_token is set but empty; API authentication stays disabled");
        }
    }

    Ok(())
}
