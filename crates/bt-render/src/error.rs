use thiserror::Error;

/// Renderer failure — always an underlying terminal or stream write error.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
