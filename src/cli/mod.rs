pub mod catalog;
pub mod commands;
pub mod diagnose;
pub mod mechanics;
pub mod quote;
pub mod serve;
pub mod wizard;

pub use commands::{Cli, Commands};

use std::path::Path;
use crate::config::{parse_config, VelofixConfig};
use crate::errors::VelofixError;

/// Config from `--config`, or defaults when none was given.
pub async fn load_config(path: Option<&str>) -> Result<VelofixConfig, VelofixError> {
    match path {
        Some(p) => parse_config(Path::new(p)).await,
        None => Ok(VelofixConfig::default()),
    }
}
