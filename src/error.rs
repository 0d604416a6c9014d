use thiserror::Error;

/// Errors surfaced by a render call.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid camera configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("render worker failed: {0}")]
    Worker(String),
}

pub type RenderResult<T> = Result<T, RenderError>;
