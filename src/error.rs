use thiserror::Error;

/// Conditions that stop the app from starting. There is no degraded mode.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingCanvas(&'static str),
    #[error("#{0} is not a canvas")]
    NotACanvas(&'static str),
    #[error("2d context unavailable: {0}")]
    NoContext(String),
}
