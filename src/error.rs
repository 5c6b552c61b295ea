use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

// Vertex ids carried by errors are 1-based, as they appear in the input.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("invalid token {token:?}, expected a non-negative integer")]
    InvalidToken { token: String },

    #[error("vertex {vertex} is out of range [1, {n}]")]
    VertexOutOfRange { vertex: u64, n: usize },

    #[error("target vertex {target} is not reachable from the source")]
    UnreachableTarget { target: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
