use super::{DataFrame, Series};
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Rows of a DataFrame partitioned by the values of one text column.
///
/// Groups are kept in order of first appearance, and the row indices inside
/// each group stay in DataFrame order, so every aggregation accumulates in
/// the same order on every call.
pub struct GroupBy<'a> {
    df: &'a DataFrame,
    key: String,
    groups: Vec<(String, Vec<usize>)>,
}

impl DataFrame {
    pub fn groupby(&self, by: &str) -> Result<GroupBy<'_>> {
        let keys = self
            .column(by)?
            .as_utf8()
            .ok_or_else(|| Error::Schema(format!("cannot group by non-text column '{}'", by)))?;

        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
        for (row, key) in keys.iter().enumerate() {
            let slot = *positions.entry(key.as_str()).or_insert_with(|| {
                groups.push((key.clone(), Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(row);
        }

        Ok(GroupBy {
            df: self,
            key: by.to_string(),
            groups,
        })
    }
}

impl<'a> GroupBy<'a> {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of rows in each group.
    pub fn count(&self) -> Result<DataFrame> {
        DataFrame::new(vec![
            (self.key.clone(), Series::from(self.key_values())),
            (
                "count".to_string(),
                Series::Float64(self.groups.iter().map(|(_, rows)| rows.len() as f64).collect()),
            ),
        ])
    }

    /// Arithmetic mean of every numeric column per group. NaN cells are
    /// skipped; a group with no values for a column gets NaN. Text columns
    /// other than the key are dropped.
    pub fn mean(&self) -> Result<DataFrame> {
        let mut columns = vec![(self.key.clone(), Series::from(self.key_values()))];

        for (name, series) in self.df.columns.iter().zip(&self.df.data) {
            if name == &self.key {
                continue;
            }
            if let Series::Float64(values) = series {
                let means = self
                    .groups
                    .iter()
                    .map(|(_, rows)| mean_skipna(rows.iter().map(|&r| values[r])))
                    .collect();
                columns.push((name.clone(), Series::Float64(means)));
            }
        }

        DataFrame::new(columns)
    }

    fn key_values(&self) -> Vec<String> {
        self.groups.iter().map(|(k, _)| k.clone()).collect()
    }
}

fn mean_skipna(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        f64::NAN
    } else {
        sum / n as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_keep_first_appearance_order() {
        let df = DataFrame::new(vec![
            ("k".to_string(), Series::from(vec!["b", "a", "b"])),
            ("v".to_string(), Series::from(vec![1.0, 2.0, 3.0])),
        ])
        .unwrap();
        let grouped = df.groupby("k").unwrap();
        let counts = grouped.count().unwrap();
        assert_eq!(counts.get_column("k"), Some(&Series::from(vec!["b", "a"])));
        assert_eq!(counts.get_column("count"), Some(&Series::Float64(vec![2.0, 1.0])));

        let means = grouped.mean().unwrap();
        assert_eq!(means.get_column("v"), Some(&Series::Float64(vec![2.0, 2.0])));
    }

    #[test]
    fn mean_skips_nan_cells() {
        let df = DataFrame::new(vec![
            ("k".to_string(), Series::from(vec!["x", "x", "y"])),
            ("v".to_string(), Series::from(vec![0.4, f64::NAN, f64::NAN])),
        ])
        .unwrap();
        let means = df.groupby("k").unwrap().mean().unwrap();
        let v = means.get_column("v").and_then(Series::as_f64).unwrap();
        assert_eq!(v[0], 0.4);
        assert!(v[1].is_nan());
    }

    #[test]
    fn grouping_by_numeric_column_is_rejected() {
        let df = DataFrame::new(vec![("v".to_string(), Series::from(vec![1.0]))]).unwrap();
        assert!(matches!(df.groupby("v"), Err(Error::Schema(_))));
        assert!(matches!(df.groupby("nope"), Err(Error::UnknownColumn(_))));
    }
}
