// src/commands/top.rs
//
// `mbtiframes top <TYPE>`: countries with the highest share of one type.

use clap::Args;
use mbtiframes::format::{self, OutputFormat};
use mbtiframes::MbtiType;

#[derive(Debug, Args)]
pub struct TopCmd {
    /// MBTI type code, e.g. INFJ.
    #[arg()]
    pub mbti_type: MbtiType,

    /// Number of countries to show (default: `top_k` from the configuration).
    #[arg(short = 'k', long)]
    pub k: Option<usize>,
}

pub fn run(ctx: &super::Context, cmd: &TopCmd) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = ctx.dataset()?;
    let k = cmd.k.unwrap_or(ctx.config.top_k);
    let view = dataset.top_k(cmd.mbti_type.code(), k)?;

    match ctx.format {
        OutputFormat::Table => {
            println!("{}", format::top_k_heading(&view));
            println!("{}", format::top_k_table(&view));
        }
        OutputFormat::Json => println!("{}", format::format_json(&view)),
    }

    Ok(())
}
