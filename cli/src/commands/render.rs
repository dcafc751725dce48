use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use dogmap::{ChoroplethRenderer, Dataset, DogSexFilter, Explorer, LoadCache, OwnerSexFilter, Predicates};
use tracing::info;

use crate::cli::OutputFormat;

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::RenderArgs) -> Result<()> {
    let config = super::load_config(cli)?;

    let owner_sex: OwnerSexFilter = args.owner_sex.parse()?;
    let dog_sex: DogSexFilter = args.dog_sex.parse()?;
    let predicates = Predicates::new(owner_sex, dog_sex);

    let cache = LoadCache::new();
    let dataset = Dataset::load(&cache, &args.records, &args.areas, &config)?;
    let explorer = Explorer::new(dataset, ChoroplethRenderer::from_config(&config));

    let snapshot = explorer.explore(&predicates);
    println!("Total number of dogs with these characteristics: {}", snapshot.count);

    let extension = match args.format {
        OutputFormat::Svg => "svg",
        OutputFormat::Plotly => "json",
        OutputFormat::Geojson => "geojson",
    };
    let out_path = args.output.clone().unwrap_or_else(|| PathBuf::from(format!("./map.{extension}")));

    info!(path = %out_path.display(), rows = snapshot.rows.len(), "writing map");
    match args.format {
        OutputFormat::Svg => snapshot.artifact.write_svg(&out_path, args.width)?,
        OutputFormat::Plotly | OutputFormat::Geojson => {
            let value = if args.format == OutputFormat::Plotly {
                snapshot.artifact.to_plotly()
            } else {
                snapshot.artifact.to_geojson()
            };
            let text = serde_json::to_string_pretty(&value).context("[render] Failed to serialize map")?;
            fs::write(&out_path, text)
                .with_context(|| format!("[render] Failed to write {}", out_path.display()))?;
        }
    }

    Ok(())
}
