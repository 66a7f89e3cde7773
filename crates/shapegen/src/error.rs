use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShapeGenError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("failed to serialize toml: {0}")]
    TomlSer(#[from] toml::ser::Error),
    /// The requested filter type has no filter implementation.
    #[error("unsupported filter type: {0}")]
    UnsupportedFilterType(String),
}

pub type Result<T> = std::result::Result<T, ShapeGenError>;
