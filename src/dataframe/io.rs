use super::{DataFrame, Series};
use crate::error::{Error, Result};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::io::Read;
use std::path::Path;

/// Options for reading delimited text.
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    pub delimiter: u8,
    /// Columns that stay text even when every cell parses as a number.
    pub text_columns: Vec<String>,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        CsvReadOptions {
            delimiter: b',',
            text_columns: Vec::new(),
        }
    }
}

impl CsvReadOptions {
    pub fn with_text_column(mut self, name: &str) -> Self {
        self.text_columns.push(name.to_string());
        self
    }
}

impl DataFrame {
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        Self::read_csv(path, &CsvReadOptions::default())
    }

    pub fn read_csv(path: impl AsRef<Path>, options: &CsvReadOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| Error::data_load(path, e))?;
        Self::parse_csv(file, options).map_err(|e| match e {
            Error::DataLoad { reason, .. } => Error::data_load(path, reason),
            other => other,
        })
    }

    /// Read CSV from any reader; errors report the source as `<reader>`.
    pub fn from_reader<R: Read>(reader: R, options: &CsvReadOptions) -> Result<Self> {
        Self::parse_csv(reader, options)
    }

    fn parse_csv<R: Read>(reader: R, options: &CsvReadOptions) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(options.delimiter)
            .trim(Trim::All)
            .from_reader(reader);
        let headers = rdr
            .headers()
            .map_err(|e| Error::data_load("<reader>", e))?
            .clone();
        let mut cols: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

        for result in rdr.records() {
            let record = result.map_err(|e| Error::data_load("<reader>", e))?;
            for (i, field) in record.iter().enumerate() {
                cols[i].push(field.to_string());
            }
        }

        let columns = headers
            .iter()
            .zip(cols)
            .map(|(name, raw)| {
                let keep_text = options.text_columns.iter().any(|c| c == name);
                let series = if keep_text { Series::Utf8(raw) } else { infer_series(raw) };
                (name.to_string(), series)
            })
            .collect();

        DataFrame::new(columns)
    }

    pub fn to_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut wtr = WriterBuilder::new()
            .from_path(path)
            .map_err(|e| Error::data_load(path, e))?;
        wtr.write_record(&self.columns)
            .map_err(|e| Error::data_load(path, e))?;
        for row in 0..self.len() {
            wtr.write_record(self.row_strings(row))
                .map_err(|e| Error::data_load(path, e))?;
        }
        wtr.flush().map_err(|e| Error::data_load(path, e))?;
        Ok(())
    }
}

/// A column is numeric when every non-empty cell parses as `f64`; empty
/// cells in a numeric column become NaN.
fn infer_series(raw: Vec<String>) -> Series {
    let parsed: Option<Vec<f64>> = raw
        .iter()
        .map(|cell| {
            if cell.is_empty() {
                Some(f64::NAN)
            } else {
                cell.parse::<f64>().ok()
            }
        })
        .collect();

    match parsed {
        Some(values) => Series::Float64(values),
        None => Series::Utf8(raw),
    }
}
