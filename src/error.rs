use thiserror::Error;

/// Errors raised while loading the dataset or answering a query.
#[derive(Debug, Error)]
pub enum Error {
    /// The source could not be opened, read or parsed as CSV.
    #[error("failed to load data from {path}: {reason}")]
    DataLoad { path: String, reason: String },

    /// The table does not have the shape the dataset requires.
    #[error("schema error: {0}")]
    Schema(String),

    /// The requested MBTI type is not a column of the dataset.
    #[error("unknown MBTI type '{0}'")]
    UnknownType(String),

    /// No row of the dataset carries this country name.
    #[error("unknown country '{0}'")]
    UnknownCountry(String),

    /// A DataFrame column lookup failed.
    #[error("column '{0}' not found")]
    UnknownColumn(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn data_load(path: impl AsRef<std::path::Path>, reason: impl ToString) -> Self {
        Error::DataLoad {
            path: path.as_ref().display().to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
