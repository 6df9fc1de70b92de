use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable consulted when no graph path is passed explicitly.
pub const GRAPH_ENV_VAR: &str = "GRIDROUTE_GRAPH";

/// Filename looked up when the resolved path is a directory.
pub const DEFAULT_GRAPH_FILENAME: &str = "graph.txt";

/// Resolve which graph file to load.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `GRIDROUTE_GRAPH` environment variable.
///
/// A directory resolves to `graph.txt` inside it. The resulting file must exist.
pub fn resolve_graph_path(target: Option<&Path>) -> Result<PathBuf> {
    resolve_graph_path_from(target, env::var_os(GRAPH_ENV_VAR))
}

fn resolve_graph_path_from(target: Option<&Path>, env_value: Option<OsString>) -> Result<PathBuf> {
    let candidate = match (target, env_value) {
        (Some(explicit), _) => explicit.to_path_buf(),
        (None, Some(value)) if !value.is_empty() => PathBuf::from(value),
        _ => return Err(Error::GraphFileUnspecified),
    };

    let resolved = canonical_graph_path(&candidate);
    if !resolved.is_file() {
        return Err(Error::GraphFileNotFound { path: resolved });
    }

    debug!(path = %resolved.display(), "resolved graph file");
    Ok(resolved)
}

fn canonical_graph_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(DEFAULT_GRAPH_FILENAME)
    } else {
        path.to_path_buf()
    }
}
