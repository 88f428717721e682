// src/commands/preview.rs
//
// `mbtiframes preview`: the first rows of the raw table.

use clap::Args;
use mbtiframes::format::{self, OutputFormat};
use serde_json::{Map, Value};

#[derive(Debug, Args)]
pub struct PreviewCmd {
    /// Number of rows to show (default: `preview_rows` from the configuration).
    #[arg(long)]
    pub rows: Option<usize>,
}

pub fn run(ctx: &super::Context, cmd: &PreviewCmd) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = ctx.dataset()?;
    let head = dataset.preview(cmd.rows.unwrap_or(ctx.config.preview_rows));

    match ctx.format {
        OutputFormat::Table => {
            println!("{}", format::frame_table(&head));
            println!(
                "Showing {} of {} countries.",
                head.len(),
                dataset.len()
            );
        }
        OutputFormat::Json => {
            let records: Vec<Value> = (0..head.len())
                .map(|row| {
                    let mut record = Map::new();
                    for (name, series) in head.columns.iter().zip(&head.data) {
                        let cell = match series {
                            mbtiframes::Series::Float64(v) => Value::from(v[row]),
                            mbtiframes::Series::Utf8(v) => Value::from(v[row].clone()),
                        };
                        record.insert(name.clone(), cell);
                    }
                    Value::Object(record)
                })
                .collect();
            println!("{}", format::format_json(&records));
        }
    }

    Ok(())
}
