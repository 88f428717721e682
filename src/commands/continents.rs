// src/commands/continents.rs
//
// `mbtiframes continents`: average distribution per continent.

use mbtiframes::format::{self, OutputFormat};

pub fn run(ctx: &super::Context) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = ctx.dataset()?;
    let view = dataset.continent_averages(&ctx.classifier())?;

    match ctx.format {
        OutputFormat::Table => {
            println!("{}", format::continent_table(&view));
            if !view.unclassified.is_empty() {
                println!(
                    "Not assigned to a continent ({}): {}",
                    view.unclassified.len(),
                    view.unclassified.join("; ")
                );
            }
        }
        OutputFormat::Json => println!("{}", format::format_json(&format::round_means(&view, 3))),
    }

    Ok(())
}
