/// Errors returned by the fallible graph mutations.
///
/// Queries never error: an unreachable or unknown room is a negative result,
/// and revisits on cyclic graphs are absorbed by the searches themselves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
