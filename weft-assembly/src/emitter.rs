//! Emitter trait definition
//!
//! This module defines the core Emitter trait that all output formats
//! implement. Emitters consume the flattened block sequence produced by
//! assembly and render the final artifact.

use std::fs;
use std::path::Path;

use crate::assemble::AssembledDocument;
use crate::error::EmitError;

/// Rendered output produced by an [`Emitter`] implementation.
pub enum RenderedDocument {
    /// UTF-8 text output (e.g., flat LaTeX markup)
    Text(String),
    /// Binary output (e.g., a Word file)
    Binary(Vec<u8>),
}

impl RenderedDocument {
    /// Consume the rendered output and return the underlying bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            RenderedDocument::Text(text) => text.into_bytes(),
            RenderedDocument::Binary(bytes) => bytes,
        }
    }
}

/// Trait for output document formats
///
/// Implementors turn an [`AssembledDocument`] into one artifact. All
/// emitters must honor identical block semantics: every `DocBlock` variant
/// renders to something (resolved assets embed, unresolved ones become
/// bracketed notices), so output forms stay behaviorally consistent for any
/// given input.
pub trait Emitter: Send + Sync {
    /// The name of this emitter (e.g., "latex", "docx")
    fn name(&self) -> &str;

    /// Optional description of this emitter
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this emitter (e.g., ["tex"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic emitter detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Deepest heading level this format can represent. Assembly clamps
    /// computed depths to this value.
    fn max_heading_depth(&self) -> u32;

    /// Render the assembled document.
    fn emit(&self, doc: &AssembledDocument<'_>) -> Result<RenderedDocument, EmitError>;
}

/// Render a document and write the artifact to `path`.
///
/// Parent directories are created as needed. The write is the only hard
/// failure in the whole pipeline; the file handle is scoped inside the write
/// call and released on every exit path.
pub fn emit_to_file(
    emitter: &dyn Emitter,
    doc: &AssembledDocument<'_>,
    path: &Path,
) -> Result<(), EmitError> {
    let rendered = emitter.emit(doc)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| EmitError::Io(path.to_path_buf(), e))?;
        }
    }
    fs::write(path, rendered.into_bytes()).map_err(|e| EmitError::Io(path.to_path_buf(), e))
}
