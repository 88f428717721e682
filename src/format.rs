//! Rendering of views as text tables or JSON.

use crate::dataframe::DataFrame;
use crate::query::{ContinentAverageView, CountryDistributionView, TopKView};
use crate::quality::DataQualityWarning;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tabled::builder::Builder;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// A proportion as a percentage string, e.g. `0.1234` -> `"12.34%"`.
pub fn percent(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "-".to_string();
    }
    format!("{:.*}%", decimals, value * 100.0)
}

fn fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "-".to_string()
    } else {
        format!("{:.*}", decimals, value)
    }
}

pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}

#[derive(Tabled)]
struct RankedCountryRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct RankedTypeRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "MBTI")]
    mbti_type: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct WarningRow {
    #[tabled(rename = "Warning")]
    message: String,
}

/// Heading for a top-K table, counting the countries actually listed.
pub fn top_k_heading(view: &TopKView) -> String {
    format!("Top {} countries for {}", view.entries.len(), view.mbti_type)
}

pub fn top_k_table(view: &TopKView) -> String {
    let rows: Vec<RankedCountryRow> = view
        .entries
        .iter()
        .enumerate()
        .map(|(i, e)| RankedCountryRow {
            rank: i + 1,
            country: e.country.clone(),
            share: percent(e.value, 2),
        })
        .collect();
    Table::new(rows).to_string()
}

pub fn distribution_table(view: &CountryDistributionView) -> String {
    let rows: Vec<RankedTypeRow> = view
        .entries
        .iter()
        .enumerate()
        .map(|(i, e)| RankedTypeRow {
            rank: i + 1,
            mbti_type: e.mbti_type.clone(),
            share: percent(e.value, 2),
        })
        .collect();
    Table::new(rows).to_string()
}

/// A copy of the view with every mean rounded to `decimals` places.
pub fn round_means(view: &ContinentAverageView, decimals: u32) -> ContinentAverageView {
    let mut rounded = view.clone();
    for row in &mut rounded.rows {
        for mean in &mut row.means {
            *mean = round_to(*mean, decimals);
        }
    }
    rounded
}

/// One row per continent, one column per type, means to three decimals.
pub fn continent_table(view: &ContinentAverageView) -> String {
    let mut builder = Builder::default();
    let mut header = vec!["Continent".to_string(), "n".to_string()];
    header.extend(view.types.iter().cloned());
    builder.push_record(header);

    for row in &view.rows {
        let mut record = vec![row.continent.to_string(), row.countries.to_string()];
        record.extend(row.means.iter().map(|&m| fixed(round_to(m, 3), 3)));
        builder.push_record(record);
    }
    builder.build().to_string()
}

pub fn frame_table(df: &DataFrame) -> String {
    let mut builder = Builder::default();
    builder.push_record(df.columns.clone());
    for row in 0..df.len() {
        builder.push_record(df.row_strings(row));
    }
    builder.build().to_string()
}

pub fn warnings_table(warnings: &[DataQualityWarning]) -> String {
    let rows: Vec<WarningRow> = warnings
        .iter()
        .map(|w| WarningRow {
            message: w.to_string(),
        })
        .collect();
    Table::new(rows).to_string()
}
