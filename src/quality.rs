//! Non-fatal findings about the input table.
//!
//! None of these stop a load or a query. They are logged when the dataset is
//! loaded and can be listed on demand.

use crate::dataset::Dataset;
use crate::mbti::MbtiType;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataQualityWarning {
    /// The table has a number of type columns other than 16.
    TypeColumnCount { found: usize },
    /// A non-`Country` column whose header is not an MBTI code.
    UnrecognizedTypeColumn { column: String },
    /// A data row with an empty `Country` cell; the row is skipped.
    BlankCountry { row: usize },
    /// An empty numeric cell.
    MissingValue { country: String, mbti_type: String },
    /// The row's proportions do not add up to 1.0 within the tolerance.
    RowSumDeviation { country: String, sum: f64 },
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataQualityWarning::TypeColumnCount { found } => write!(
                f,
                "expected {} MBTI columns, found {}",
                MbtiType::COUNT,
                found
            ),
            DataQualityWarning::UnrecognizedTypeColumn { column } => {
                write!(f, "column '{}' is not an MBTI type code", column)
            }
            DataQualityWarning::BlankCountry { row } => {
                write!(f, "data row {} has no country name and was skipped", row)
            }
            DataQualityWarning::MissingValue { country, mbti_type } => {
                write!(f, "{} has no value for {}", country, mbti_type)
            }
            DataQualityWarning::RowSumDeviation { country, sum } => {
                write!(f, "proportions for {} sum to {:.4}, not 1.0", country, sum)
            }
        }
    }
}

impl Dataset {
    /// Rows whose type proportions, ignoring missing cells, sum to something
    /// further than `tolerance` from 1.0.
    pub fn row_sum_deviations(&self, tolerance: f64) -> Vec<DataQualityWarning> {
        self.countries()
            .iter()
            .enumerate()
            .filter_map(|(row, country)| {
                let sum: f64 = self.row_values(row).filter(|v| !v.is_nan()).sum();
                ((sum - 1.0).abs() > tolerance).then(|| DataQualityWarning::RowSumDeviation {
                    country: country.clone(),
                    sum,
                })
            })
            .collect()
    }

    /// Schema warnings recorded at construction followed by row-sum deviations.
    pub fn inspect(&self, tolerance: f64) -> Vec<DataQualityWarning> {
        let mut warnings = self.warnings().to_vec();
        warnings.extend(self.row_sum_deviations(tolerance));
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_rows_outside_tolerance() {
        let ds = Dataset::from_rows(
            &["INTJ", "ENFP"],
            vec![("A", vec![0.5, 0.5]), ("B", vec![0.5, 0.4]), ("C", vec![0.5, 0.501])],
        )
        .unwrap();

        let warnings = ds.row_sum_deviations(0.005);
        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            &warnings[0],
            DataQualityWarning::RowSumDeviation { country, .. } if country == "B"
        ));
    }

    #[test]
    fn inspect_includes_schema_warnings() {
        let ds = Dataset::from_rows(&["INTJ", "ENFP"], vec![("A", vec![0.5, 0.5])]).unwrap();
        let warnings = ds.inspect(0.01);
        assert_eq!(warnings, vec![DataQualityWarning::TypeColumnCount { found: 2 }]);
        assert_eq!(warnings[0].to_string(), "expected 16 MBTI columns, found 2");
    }
}
