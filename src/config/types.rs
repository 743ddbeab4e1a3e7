use serde::{Deserialize, Serialize};

pub const DEFAULT_EMERGENCY_SURCHARGE: u32 = 20;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const API_TOKEN_ENV: &str = "VELOFIX_API_TOKEN";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct VelofixConfig {
    pub catalog: Option<CatalogConfig>,
    pub pricing: Option<PricingConfig>,
    pub server: Option<ServerConfig>,
    pub ids: Option<IdConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// YAML catalog file. Relative paths resolve against the working directory.
    pub path: String,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct PricingConfig {
    #[serde(default = "default_surcharge")]
    pub emergency_surcharge: u32,
}

fn default_surcharge() -> u32 {
    DEFAULT_EMERGENCY_SURCHARGE
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            emergency_surcharge: DEFAULT_EMERGENCY_SURCHARGE,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub api_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct IdConfig {
    pub strategy: Option<IdStrategy>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Uuid,
    Timestamp,
}

impl IdStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uuid => "uuid",
            Self::Timestamp => "timestamp",
        }
    }
}

impl std::fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl VelofixConfig {
    pub fn pricing(&self) -> PricingConfig {
        self.pricing.unwrap_or_default()
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.ids.as_ref().and_then(|i| i.strategy).unwrap_or_default()
    }

    pub fn catalog_path(&self) -> Option<&str> {
        self.catalog.as_ref().map(|c| c.path.as_str())
    }

    pub fn host(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|s| s.host.as_deref())
            .unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.server.as_ref().and_then(|s| s.port).unwrap_or(DEFAULT_PORT)
    }

    /// Bearer token required by the API. The environment variable wins over the file.
    pub fn api_token(&self) -> Option<String> {
        std::env::var(API_TOKEN_ENV)
            .ok()
            .filter(|t| !t.is_empty())
            .or_else(|| {
                self.server
                    .as_ref()
                    .and_then(|s| s.api_token.clone())
                    .filter(|t| !t.is_empty())
            })
    }
}
