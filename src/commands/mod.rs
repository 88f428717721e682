// src/commands/mod.rs
//
// Subcommands and the state they share.

pub mod check;
pub mod continents;
pub mod country;
pub mod listing;
pub mod preview;
pub mod top;

use std::sync::Arc;

use mbtiframes::format::OutputFormat;
use mbtiframes::{AppConfig, ContinentClassifier, Dataset, DatasetLoader};

/// Configuration plus the loader every subcommand reads the dataset through.
pub struct Context {
    pub config: AppConfig,
    pub format: OutputFormat,
    loader: DatasetLoader,
}

impl Context {
    pub fn new(config: AppConfig, format: OutputFormat) -> mbtiframes::Result<Self> {
        config.validate()?;
        let loader = DatasetLoader::new(config.delimiter_byte()?, config.row_sum_tolerance);
        Ok(Context {
            config,
            format,
            loader,
        })
    }

    pub fn dataset(&self) -> mbtiframes::Result<Arc<Dataset>> {
        self.loader.load(&self.config.data_path)
    }

    pub fn classifier(&self) -> ContinentClassifier {
        ContinentClassifier::builtin().with_overrides(&self.config.continents)
    }

    pub fn tolerance(&self) -> f64 {
        self.loader.row_sum_tolerance()
    }
}
