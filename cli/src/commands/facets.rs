use anyhow::Result;
use dogmap::{DogSexFilter, LoadCache, owner_sex_options};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::FacetsArgs) -> Result<()> {
    let config = super::load_config(cli)?;
    let cache = LoadCache::new();
    let records = cache.load_records(&args.records, &config)?;

    println!("Owner's sex:");
    for option in owner_sex_options(&records) {
        println!("  {option}");
    }

    println!("Dog's sex:");
    for option in DogSexFilter::ALL {
        println!("  {}", option.label());
    }

    Ok(())
}
