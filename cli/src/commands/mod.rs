pub mod facets;
pub mod render;

use anyhow::Result;
use dogmap::MapConfig;

/// Config from `--config`, or the defaults.
pub(crate) fn load_config(cli: &crate::cli::Cli) -> Result<MapConfig> {
    match &cli.config {
        Some(path) => MapConfig::from_json_file(path),
        None => Ok(MapConfig::default()),
    }
}
