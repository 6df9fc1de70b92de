use std::path::PathBuf;

use thiserror::Error;

use crate::graph::VertexId;

/// Convenient result alias for the gridroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// The search engine itself never produces these; they are raised while a
/// graph is being built or loaded, or while a route request is validated.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a vertex identifier is inserted twice.
    #[error("vertex {id} already exists in the graph")]
    DuplicateVertex { id: VertexId },

    /// Raised when an edge or a route endpoint names a vertex that was never added.
    #[error("unknown vertex {id}")]
    UnknownVertex { id: VertexId },

    /// Raised when a graph file line cannot be parsed.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Raised when a graph file lacks its `S` (source) or `D` (destination) line.
    #[error("graph file does not designate a {marker} vertex")]
    MissingEndpoint { marker: &'static str },

    /// Raised when no graph file was given and `GRIDROUTE_GRAPH` is unset.
    #[error("no graph file specified; pass --graph or set GRIDROUTE_GRAPH")]
    GraphFileUnspecified,

    /// Graph file could not be located at the resolved path.
    #[error("graph file not found at {path}")]
    GraphFileNotFound { path: PathBuf },

    /// Raised when a heuristic is configured with unusable parameters.
    #[error("invalid heuristic configuration: {message}")]
    InvalidHeuristicConfig { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Attach a 1-based line number to a graph-building error raised while loading a file.
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            Error::Parse { .. } => self,
            other => Error::Parse {
                line,
                message: other.to_string(),
            },
        }
    }
}
