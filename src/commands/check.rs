// src/commands/check.rs
//
// `mbtiframes check`: list every data-quality warning for the source.

use mbtiframes::format::{self, OutputFormat};

pub fn run(ctx: &super::Context) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = ctx.dataset()?;
    let warnings = dataset.inspect(ctx.tolerance());

    match ctx.format {
        OutputFormat::Table if warnings.is_empty() => {
            println!(
                "No issues found in {} countries x {} types.",
                dataset.len(),
                dataset.types().len()
            );
        }
        OutputFormat::Table => println!("{}", format::warnings_table(&warnings)),
        OutputFormat::Json => println!("{}", format::format_json(&warnings)),
    }

    Ok(())
}
