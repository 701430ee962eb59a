use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid theme: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown theme mode \"{0}\", expected \"light\" or \"dark\"")]
    UnknownMode(String),

    #[error("invalid shadow \"{0}\", expected \"<x> <y> <blur> [<spread>] <color>\"")]
    InvalidShadow(String),
}
