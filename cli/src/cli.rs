use std::path::PathBuf;

/// Registered-dog explorer CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "dogmap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON map configuration (color domain, center, property names, ...)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List the available facet choices for a records file
    Facets(FacetsArgs),

    /// Filter, aggregate and render a choropleth map
    Render(RenderArgs),
}

#[derive(clap::Args, Debug)]
pub struct FacetsArgs {
    /// Registration records CSV
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub records: PathBuf,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Svg,
    Plotly,
    Geojson,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Registration records CSV
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub records: PathBuf,

    /// Area feature collection (GeoJSON)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub areas: PathBuf,

    /// Owner sex category value, or "All"
    #[arg(long, default_value = "All")]
    pub owner_sex: String,

    /// Dog sex: All, MalesOnly or FemalesOnly
    #[arg(long, default_value = "All")]
    pub dog_sex: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Output file, defaults to "./map.<format>"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// SVG width in pixels
    #[arg(long, default_value_t = 1200.0)]
    pub width: f64,
}
