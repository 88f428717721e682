//! Loading the dataset from a CSV file, with a per-process cache.

use crate::dataframe::{CsvReadOptions, DataFrame};
use crate::dataset::{Dataset, COUNTRY_COLUMN};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// Reads datasets and memoizes them by canonical source path.
///
/// Sources are assumed not to change while the process runs: a second
/// `load` of the same file returns the same `Arc` without touching disk.
pub struct DatasetLoader {
    options: CsvReadOptions,
    row_sum_tolerance: f64,
    cache: Mutex<HashMap<PathBuf, Arc<Dataset>>>,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        DatasetLoader::new(b',', crate::config::DEFAULT_ROW_SUM_TOLERANCE)
    }
}

impl DatasetLoader {
    pub fn new(delimiter: u8, row_sum_tolerance: f64) -> Self {
        DatasetLoader {
            options: CsvReadOptions {
                delimiter,
                ..Default::default()
            }
            .with_text_column(COUNTRY_COLUMN),
            row_sum_tolerance,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Result<Arc<Dataset>> {
        let path = path.as_ref();
        let key = path.canonicalize().map_err(|e| Error::data_load(path, e))?;

        if let Some(hit) = self.cached(&key) {
            debug!(path = %key.display(), "dataset cache hit");
            return Ok(hit);
        }

        debug!(path = %key.display(), "dataset cache miss");
        let dataset = Arc::new(self.load_uncached(&key)?);

        let mut cache = self.cache.lock().unwrap_or_else(|p| p.into_inner());
        // A concurrent loader may have won the race; keep the first instance.
        Ok(cache.entry(key).or_insert(dataset).clone())
    }

    /// Read and validate the source, bypassing the cache.
    pub fn load_uncached(&self, path: impl AsRef<Path>) -> Result<Dataset> {
        let path = path.as_ref();
        let frame = DataFrame::read_csv(path, &self.options)?;
        let dataset = Dataset::from_frame(frame)?;

        for deviation in dataset.row_sum_deviations(self.row_sum_tolerance) {
            warn!("{}", deviation);
        }
        info!(
            path = %path.display(),
            countries = dataset.len(),
            types = dataset.types().len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    pub fn row_sum_tolerance(&self) -> f64 {
        self.row_sum_tolerance
    }

    fn cached(&self, key: &Path) -> Option<Arc<Dataset>> {
        let cache = self.cache.lock().unwrap_or_else(|p| p.into_inner());
        cache.get(key).cloned()
    }
}

/// Load a comma-separated file without caching.
pub fn load(path: impl AsRef<Path>) -> Result<Dataset> {
    DatasetLoader::default().load_uncached(path)
}
