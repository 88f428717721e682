//! # MbtiFrames
//!
//! MBTI personality-type proportions per country, queried through a small
//! columnar DataFrame.
//!
//! MbtiFrames provides:
//! - A minimal DataFrame with CSV I/O, stable sorting, filtering and groupby
//! - A validated, immutable `Dataset` of one row per country and one column
//!   per MBTI type, with a cached loader
//! - Three derived views: top-K countries for a type, the ranked type
//!   distribution of one country, and per-continent average distributions
//! - Non-fatal data-quality reporting for malformed inputs
//!
//! ## Quick Start
//!
//! ```rust
//! use mbtiframes::{ContinentClassifier, Dataset};
//!
//! let dataset = Dataset::from_rows(
//!     &["INFJ", "INTJ"],
//!     vec![("Japan", vec![0.6, 0.4]), ("Kenya", vec![0.7, 0.3])],
//! )?;
//!
//! let top = dataset.top_k("INFJ", 1)?;
//! assert_eq!(top.entries[0].country, "Kenya");
//!
//! let japan = dataset.distribution("Japan")?;
//! assert_eq!(japan.entries[0].mbti_type, "INFJ");
//!
//! let continents = dataset.continent_averages(&ContinentClassifier::builtin())?;
//! assert_eq!(continents.rows.len(), 2);
//! # Ok::<(), mbtiframes::Error>(())
//! ```

pub mod config;
pub mod continent;
pub mod dataframe;
pub mod dataset;
pub mod error;
pub mod format;
pub mod loader;
pub mod mbti;
pub mod quality;
pub mod query;

// Re-export main types for convenience
pub use config::AppConfig;
pub use continent::{Continent, ContinentClassifier};
pub use dataframe::{DataFrame, Series};
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use loader::{load, DatasetLoader};
pub use mbti::MbtiType;
pub use quality::DataQualityWarning;
pub use query::{ContinentAverageView, CountryDistributionView, TopKView};
