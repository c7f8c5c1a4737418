use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid regex for record '{record}': {source}")]
    PatternCompile {
        record: String,
        source: regex::Error,
    },

    #[error("record '{0}' has no regex pattern")]
    MissingPattern(String),

    #[error("'{0}' is not a valid country classification")]
    InvalidClassification(String),

    #[error("invalid exclusion pattern: {source}")]
    ExcludePrefix { source: regex::Error },

    #[error("failed to load country data from {}: {source}", path.display())]
    DataLoad { path: PathBuf, source: PolarsError },

    #[error("failed to merge country data sources: {source}")]
    Merge { source: PolarsError },

    #[error(transparent)]
    Table(#[from] PolarsError),
}
