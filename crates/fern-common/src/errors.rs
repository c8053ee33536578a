use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("network error: {0}")]
    Network(String),

    #[error("http status {0}")]
    Http(u16),

    #[error("no data")]
    NoData,

    #[error("decode error: {0}")]
    Decode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FernError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
