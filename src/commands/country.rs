// src/commands/country.rs
//
// `mbtiframes country [NAME]`: the ranked distribution of one country.

use clap::Args;
use mbtiframes::format::{self, OutputFormat};
use mbtiframes::Error;

#[derive(Debug, Args)]
pub struct CountryCmd {
    /// Country name exactly as it appears in the data, e.g. "Korea, South".
    #[arg()]
    pub name: Option<String>,
}

pub fn run(ctx: &super::Context, cmd: &CountryCmd) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = ctx.dataset()?;
    let country = match &cmd.name {
        Some(name) => name.clone(),
        None => dataset
            .default_country(&ctx.config.default_country)
            .map(str::to_string)
            .ok_or_else(|| Error::UnknownCountry(ctx.config.default_country.clone()))?,
    };
    let view = dataset.distribution(&country)?;

    match ctx.format {
        OutputFormat::Table => {
            println!("MBTI distribution of {}", view.country);
            println!("{}", format::distribution_table(&view));
        }
        OutputFormat::Json => println!("{}", format::format_json(&view)),
    }

    Ok(())
}
