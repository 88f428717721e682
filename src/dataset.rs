//! The immutable country x MBTI-type proportion table.

use crate::dataframe::{DataFrame, Series};
use crate::error::{Error, Result};
use crate::mbti::MbtiType;
use crate::quality::DataQualityWarning;
use std::collections::HashMap;
use tracing::warn;

/// Header of the column holding country names.
pub const COUNTRY_COLUMN: &str = "Country";

/// One row per country, one numeric column per MBTI type.
///
/// The backing frame always has `Country` as its first column followed by
/// the type columns in source order. A `Dataset` is never mutated after
/// construction, so it can be shared freely behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Dataset {
    frame: DataFrame,
    countries: Vec<String>,
    types: Vec<String>,
    country_rows: HashMap<String, usize>,
    warnings: Vec<DataQualityWarning>,
}

impl Dataset {
    /// Validate a raw frame and build the dataset from it.
    ///
    /// Hard failures: no `Country` column, a non-text `Country` column, a
    /// non-numeric type column, or a country name that appears twice. Rows
    /// with a blank country are dropped with a warning. A type-column count
    /// other than 16 and unrecognised headers are warnings only.
    pub fn from_frame(frame: DataFrame) -> Result<Self> {
        let mut warnings = Vec::new();

        let names = frame
            .get_column(COUNTRY_COLUMN)
            .ok_or_else(|| {
                Error::Schema(format!("missing required '{}' column", COUNTRY_COLUMN))
            })?
            .as_utf8()
            .ok_or_else(|| Error::Schema(format!("'{}' column must be text", COUNTRY_COLUMN)))?;

        let keep: Vec<bool> = names.iter().map(|n| !n.is_empty()).collect();
        for (row, kept) in keep.iter().enumerate() {
            if !kept {
                warnings.push(DataQualityWarning::BlankCountry { row: row + 1 });
            }
        }

        let types: Vec<String> = frame
            .columns
            .iter()
            .filter(|c| c.as_str() != COUNTRY_COLUMN)
            .cloned()
            .collect();

        if types.len() != MbtiType::COUNT {
            warnings.push(DataQualityWarning::TypeColumnCount { found: types.len() });
        }
        for column in &types {
            if column.parse::<MbtiType>().is_err() {
                warnings.push(DataQualityWarning::UnrecognizedTypeColumn {
                    column: column.clone(),
                });
            }
        }

        let mut ordered: Vec<&str> = vec![COUNTRY_COLUMN];
        ordered.extend(types.iter().map(String::as_str));
        let frame = frame.select(&ordered)?.filter(&keep)?;

        for (name, series) in frame.columns.iter().zip(&frame.data).skip(1) {
            if !matches!(series, Series::Float64(_)) {
                return Err(Error::Schema(format!("type column '{}' is not numeric", name)));
            }
        }

        let countries: Vec<String> = frame
            .get_column(COUNTRY_COLUMN)
            .and_then(Series::as_utf8)
            .map(<[String]>::to_vec)
            .unwrap_or_default();

        let mut country_rows = HashMap::with_capacity(countries.len());
        for (row, country) in countries.iter().enumerate() {
            if country_rows.insert(country.clone(), row).is_some() {
                return Err(Error::Schema(format!("duplicate country '{}'", country)));
            }
        }

        let dataset = Dataset {
            frame,
            countries,
            types,
            country_rows,
            warnings: Vec::new(),
        };

        for (row, country) in dataset.countries.iter().enumerate() {
            for (t, value) in dataset.types.iter().zip(dataset.row_values(row)) {
                if value.is_nan() {
                    warnings.push(DataQualityWarning::MissingValue {
                        country: country.clone(),
                        mbti_type: t.clone(),
                    });
                }
            }
        }

        for warning in &warnings {
            warn!("{}", warning);
        }

        Ok(Dataset { warnings, ..dataset })
    }

    /// Build a dataset from literal rows, in the given order.
    pub fn from_rows(types: &[&str], rows: Vec<(&str, Vec<f64>)>) -> Result<Self> {
        let mut columns = vec![(
            COUNTRY_COLUMN.to_string(),
            Series::from(rows.iter().map(|(c, _)| *c).collect::<Vec<_>>()),
        )];
        for (i, t) in types.iter().enumerate() {
            let mut values = Vec::with_capacity(rows.len());
            for (country, row) in &rows {
                let value = row.get(i).copied().ok_or_else(|| {
                    Error::Schema(format!("row '{}' has no value for '{}'", country, t))
                })?;
                values.push(value);
            }
            columns.push((t.to_string(), Series::Float64(values)));
        }
        Self::from_frame(DataFrame::new(columns)?)
    }

    /// The validated table: `Country` then the type columns.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Country names in row order.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Type column headers in source order.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn warnings(&self) -> &[DataQualityWarning] {
        &self.warnings
    }

    pub fn has_type(&self, mbti_type: &str) -> bool {
        self.types.iter().any(|t| t == mbti_type)
    }

    /// Exact, case-sensitive lookup.
    pub fn row_index(&self, country: &str) -> Option<usize> {
        self.country_rows.get(country).copied()
    }

    pub fn type_values(&self, mbti_type: &str) -> Result<&[f64]> {
        if !self.has_type(mbti_type) {
            return Err(Error::UnknownType(mbti_type.to_string()));
        }
        self.frame
            .column(mbti_type)?
            .as_f64()
            .ok_or_else(|| Error::Schema(format!("type column '{}' is not numeric", mbti_type)))
    }

    pub fn value(&self, country: &str, mbti_type: &str) -> Result<f64> {
        let row = self
            .row_index(country)
            .ok_or_else(|| Error::UnknownCountry(country.to_string()))?;
        Ok(self.type_values(mbti_type)?[row])
    }

    /// The type proportions of one row, in type-column order.
    pub(crate) fn row_values(&self, row: usize) -> impl Iterator<Item = f64> + '_ {
        self.frame.data.iter().skip(1).map(move |series| {
            series
                .as_f64()
                .and_then(|v| v.get(row))
                .copied()
                .unwrap_or(f64::NAN)
        })
    }

    pub fn sorted_countries(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.countries.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn sorted_types(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// `preferred` when it is a known country, otherwise the first country in
    /// sorted order.
    pub fn default_country<'a>(&'a self, preferred: &str) -> Option<&'a str> {
        match self.row_index(preferred) {
            Some(row) => Some(self.countries[row].as_str()),
            None => self.sorted_countries().into_iter().next(),
        }
    }

    /// The first `n` rows of the table.
    pub fn preview(&self, n: usize) -> DataFrame {
        self.frame.head(n)
    }
}
