//! Derived views over a [`Dataset`].
//!
//! Each query is a pure function of the dataset and its parameters: nothing
//! is cached between calls and the dataset is only read. Views own their
//! data and hold no reference back to the dataset.

use crate::continent::{Continent, ContinentClassifier};
use crate::dataframe::{DataFrame, Series};
use crate::dataset::{Dataset, COUNTRY_COLUMN};
use crate::error::{Error, Result};
use serde::Serialize;
use tracing::debug;

const CONTINENT_COLUMN: &str = "Continent";
const TYPE_COLUMN: &str = "MBTI";
const VALUE_COLUMN: &str = "Value";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryValue {
    pub country: String,
    pub value: f64,
}

/// The countries with the highest proportion of one type, highest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopKView {
    pub mbti_type: String,
    pub entries: Vec<CountryValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeValue {
    pub mbti_type: String,
    pub value: f64,
}

/// Every type proportion of one country, highest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryDistributionView {
    pub country: String,
    pub entries: Vec<TypeValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContinentAverage {
    pub continent: Continent,
    /// Number of dataset countries classified into this continent.
    pub countries: usize,
    /// Unweighted mean per type, aligned with [`ContinentAverageView::types`].
    pub means: Vec<f64>,
}

/// Mean type distribution per continent. Only continents with at least one
/// classified country appear; rows are ordered by continent label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContinentAverageView {
    pub types: Vec<String>,
    pub rows: Vec<ContinentAverage>,
    /// Dataset countries the classifier does not know, in row order.
    pub unclassified: Vec<String>,
}

impl ContinentAverageView {
    pub fn get(&self, continent: Continent) -> Option<&ContinentAverage> {
        self.rows.iter().find(|r| r.continent == continent)
    }

    pub fn mean(&self, continent: Continent, mbti_type: &str) -> Option<f64> {
        let col = self.types.iter().position(|t| t == mbti_type)?;
        self.get(continent).map(|row| row.means[col])
    }

    pub fn continents(&self) -> Vec<Continent> {
        self.rows.iter().map(|r| r.continent).collect()
    }
}

impl Dataset {
    /// The `k` countries with the largest proportion of `mbti_type`.
    ///
    /// Ties keep dataset row order. Countries with no value for the type are
    /// left out, so the view may be shorter than `k`.
    pub fn top_k(&self, mbti_type: &str, k: usize) -> Result<TopKView> {
        if k == 0 {
            return Err(Error::InvalidArgument("k must be at least 1".to_string()));
        }
        let values = self.type_values(mbti_type)?;
        debug!(mbti_type, k, "top-k query");

        let present: Vec<bool> = values.iter().map(|v| !v.is_nan()).collect();
        let top = self
            .frame()
            .select(&[COUNTRY_COLUMN, mbti_type])?
            .filter(&present)?
            .sort_by(mbti_type, false)?
            .head(k);

        let entries = text_column(&top, COUNTRY_COLUMN)?
            .iter()
            .zip(float_column(&top, mbti_type)?)
            .map(|(country, &value)| CountryValue {
                country: country.clone(),
                value,
            })
            .collect();

        Ok(TopKView {
            mbti_type: mbti_type.to_string(),
            entries,
        })
    }

    /// All type proportions of `country`, largest first, without any
    /// renormalisation. Ties keep type-column order; missing values go last.
    pub fn distribution(&self, country: &str) -> Result<CountryDistributionView> {
        let row = self
            .row_index(country)
            .ok_or_else(|| Error::UnknownCountry(country.to_string()))?;
        debug!(country, "distribution query");

        let ranked = DataFrame::new(vec![
            (TYPE_COLUMN.to_string(), Series::from(self.types().to_vec())),
            (
                VALUE_COLUMN.to_string(),
                Series::Float64(self.row_values(row).collect()),
            ),
        ])?
        .sort_by(VALUE_COLUMN, false)?;

        let entries = text_column(&ranked, TYPE_COLUMN)?
            .iter()
            .zip(float_column(&ranked, VALUE_COLUMN)?)
            .map(|(t, &value)| TypeValue {
                mbti_type: t.clone(),
                value,
            })
            .collect();

        Ok(CountryDistributionView {
            country: country.to_string(),
            entries,
        })
    }

    /// Unweighted mean of every type per continent.
    ///
    /// Countries the classifier does not know are excluded. Sums accumulate
    /// in dataset row order, so repeated calls give bit-identical results.
    pub fn continent_averages(
        &self,
        classifier: &ContinentClassifier,
    ) -> Result<ContinentAverageView> {
        let labels: Vec<Option<Continent>> = self
            .countries()
            .iter()
            .map(|c| classifier.classify(c))
            .collect();
        let classified: Vec<bool> = labels.iter().map(Option::is_some).collect();
        let unclassified: Vec<String> = self
            .countries()
            .iter()
            .zip(&labels)
            .filter(|(_, label)| label.is_none())
            .map(|(c, _)| c.clone())
            .collect();
        debug!(
            classified = self.len() - unclassified.len(),
            unclassified = unclassified.len(),
            "continent average query"
        );

        let label_column = Series::Utf8(
            labels
                .iter()
                .map(|l| l.map(|c| c.label().to_string()).unwrap_or_default())
                .collect(),
        );
        // The grouping key must not shadow a type column of the same name.
        let mut key = CONTINENT_COLUMN.to_string();
        while self.frame().column_index(&key).is_some() {
            key.push('_');
        }
        let joined = self
            .frame()
            .with_column(&key, label_column)?
            .filter(&classified)?
            .drop(&[COUNTRY_COLUMN]);

        let grouped = joined.groupby(&key)?;
        let means = grouped.mean()?;
        let counts = grouped.count()?;

        let type_means: Vec<&[f64]> = self
            .types()
            .iter()
            .map(|t| float_column(&means, t))
            .collect::<Result<_>>()?;
        let member_counts = float_column(&counts, "count")?;

        let mut rows = Vec::with_capacity(grouped.len());
        for (group, label) in text_column(&means, &key)?.iter().enumerate() {
            rows.push(ContinentAverage {
                continent: label.parse()?,
                countries: member_counts[group] as usize,
                means: type_means.iter().map(|col| col[group]).collect(),
            });
        }
        rows.sort_by_key(|r| r.continent);

        Ok(ContinentAverageView {
            types: self.types().to_vec(),
            rows,
            unclassified,
        })
    }
}

fn text_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a [String]> {
    df.column(name)?
        .as_utf8()
        .ok_or_else(|| Error::Schema(format!("column '{}' is not text", name)))
}

fn float_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a [f64]> {
    df.column(name)?
        .as_f64()
        .ok_or_else(|| Error::Schema(format!("column '{}' is not numeric", name)))
}
