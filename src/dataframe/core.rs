use super::Series;
use crate::error::{Error, Result};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame {
    pub columns: Vec<String>,
    pub data: Vec<Series>,
}

impl DataFrame {
    /// Build a DataFrame from named columns. Every column must have the same
    /// length and every name must be unique.
    pub fn new(columns: Vec<(String, Series)>) -> Result<Self> {
        if let Some((_, first)) = columns.first() {
            let first_len = first.len();
            for (name, series) in &columns {
                if series.len() != first_len {
                    return Err(Error::Schema(format!(
                        "column '{}' has length {}, expected {}",
                        name,
                        series.len(),
                        first_len
                    )));
                }
            }
        }

        let mut seen = HashSet::new();
        for (name, _) in &columns {
            if !seen.insert(name.as_str()) {
                return Err(Error::Schema(format!("duplicate column '{}'", name)));
            }
        }

        let (names, series): (Vec<_>, Vec<_>) = columns.into_iter().unzip();
        Ok(DataFrame {
            columns: names,
            data: series,
        })
    }

    /// Get number of rows
    pub fn len(&self) -> usize {
        self.data.first().map_or(0, Series::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get shape (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.len(), self.columns.len())
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn get_column(&self, name: &str) -> Option<&Series> {
        self.column_index(name).map(|pos| &self.data[pos])
    }

    /// Like `get_column`, but a missing column is an error.
    pub fn column(&self, name: &str) -> Result<&Series> {
        self.get_column(name)
            .ok_or_else(|| Error::UnknownColumn(name.to_string()))
    }

    /// Get first n rows
    pub fn head(&self, n: usize) -> DataFrame {
        let indices: Vec<usize> = (0..n.min(self.len())).collect();
        self.take(&indices)
    }

    /// Get last n rows
    pub fn tail(&self, n: usize) -> DataFrame {
        let len = self.len();
        let indices: Vec<usize> = (len.saturating_sub(n)..len).collect();
        self.take(&indices)
    }

    /// Gather rows by position.
    pub fn take(&self, indices: &[usize]) -> DataFrame {
        DataFrame {
            columns: self.columns.clone(),
            data: self.data.iter().map(|s| s.take(indices)).collect(),
        }
    }

    /// Select specific columns, in the order given.
    pub fn select(&self, cols: &[&str]) -> Result<DataFrame> {
        let mut new_cols = Vec::with_capacity(cols.len());
        let mut new_data = Vec::with_capacity(cols.len());

        for col in cols {
            let pos = self
                .column_index(col)
                .ok_or_else(|| Error::UnknownColumn(col.to_string()))?;
            new_cols.push(self.columns[pos].clone());
            new_data.push(self.data[pos].clone());
        }

        Ok(DataFrame {
            columns: new_cols,
            data: new_data,
        })
    }

    /// Filter rows based on a boolean mask
    pub fn filter(&self, mask: &[bool]) -> Result<DataFrame> {
        if mask.len() != self.len() {
            return Err(Error::InvalidArgument(format!(
                "mask length {} does not match {} rows",
                mask.len(),
                self.len()
            )));
        }

        Ok(DataFrame {
            columns: self.columns.clone(),
            data: self.data.iter().map(|s| s.filter(mask)).collect(),
        })
    }

    /// Sort rows by one column. The sort is stable: rows with equal keys keep
    /// their original order. Missing (NaN) values sort last.
    pub fn sort_by(&self, column: &str, ascending: bool) -> Result<DataFrame> {
        let indices = self.column(column)?.sort_indices(ascending);
        Ok(self.take(&indices))
    }

    /// Add a column, replacing an existing one with the same name.
    pub fn with_column(&self, name: &str, series: Series) -> Result<DataFrame> {
        if !self.columns.is_empty() && series.len() != self.len() {
            return Err(Error::Schema(format!(
                "new column '{}' has length {}, expected {}",
                name,
                series.len(),
                self.len()
            )));
        }

        let mut new_columns = self.columns.clone();
        let mut new_data = self.data.clone();

        if let Some(pos) = self.column_index(name) {
            new_data[pos] = series;
        } else {
            new_columns.push(name.to_string());
            new_data.push(series);
        }

        Ok(DataFrame {
            columns: new_columns,
            data: new_data,
        })
    }

    /// Drop columns. Names that are not present are ignored.
    pub fn drop(&self, cols: &[&str]) -> DataFrame {
        let cols_to_drop: HashSet<&str> = cols.iter().copied().collect();
        let (columns, data) = self
            .columns
            .iter()
            .zip(&self.data)
            .filter(|(name, _)| !cols_to_drop.contains(name.as_str()))
            .map(|(name, series)| (name.clone(), series.clone()))
            .unzip();

        DataFrame { columns, data }
    }

    /// All cells of one row, rendered as text.
    pub fn row_strings(&self, row: usize) -> Vec<String> {
        self.data.iter().map(|s| s.cell_to_string(row)).collect()
    }
}
