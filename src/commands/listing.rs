// src/commands/listing.rs
//
// `mbtiframes types` and `mbtiframes countries`: the valid query parameters.

use mbtiframes::format::{self, OutputFormat};

fn print_list(ctx: &super::Context, items: &[&str]) {
    match ctx.format {
        OutputFormat::Table => {
            for item in items {
                println!("{}", item);
            }
        }
        OutputFormat::Json => println!("{}", format::format_json(&items)),
    }
}

pub fn types(ctx: &super::Context) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = ctx.dataset()?;
    print_list(ctx, &dataset.sorted_types());
    Ok(())
}

pub fn countries(ctx: &super::Context) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = ctx.dataset()?;
    print_list(ctx, &dataset.sorted_countries());
    Ok(())
}
