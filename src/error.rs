use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Directory '{}' does not exist!", .0.display())]
    MissingRoot(PathBuf),

    #[error("Invalid ignore pattern \"{pattern}\": {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Filesystem Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk Error: {0}")]
    Walk(#[from] walkdir::Error),
}
