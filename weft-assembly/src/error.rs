//! Error types for emit operations

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can surface from an emit operation
///
/// Content-level problems (missing media, unmatched placeholders, malformed
/// grid markup) never show up here; they degrade to placeholders inside the
/// block stream. These variants cover the cases where no usable artifact can
/// be produced at all.
#[derive(Debug)]
pub enum EmitError {
    /// Emitter not found in registry
    EmitterNotFound(String),
    /// Error composing the document object
    Render(String),
    /// Error writing the output artifact
    Io(PathBuf, io::Error),
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::EmitterNotFound(name) => write!(f, "Emitter '{name}' not found"),
            EmitError::Render(msg) => write!(f, "Render error: {msg}"),
            EmitError::Io(path, err) => write!(f, "I/O error writing '{}': {err}", path.display()),
        }
    }
}

impl std::error::Error for EmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmitError::Io(_, err) => Some(err),
            _ => None,
        }
    }
}
