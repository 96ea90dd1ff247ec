//! Trait seams for external collaborators
//!
//! The engine is a pure transformation; everything that talks to a model,
//! renders a diagram, or parses a spreadsheet lives behind one of these
//! traits. Implementations are supplied by the embedding application; none
//! ships in this crate.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::outline::Section;

/// Failure reported by a collaborator. Collaborator failures are per-item;
/// they never abort a whole assembly run.
#[derive(Debug, Clone, PartialEq)]
pub struct CollabError(pub String);

impl fmt::Display for CollabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Collaborator error: {}", self.0)
    }
}

impl std::error::Error for CollabError {}

/// Produces raw section markup from a section description.
pub trait ContentGenerator: Send + Sync {
    fn generate(&self, section: &Section) -> Result<String, CollabError>;
}

/// A file found by scanning a media directory.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredAsset {
    pub path: PathBuf,
    pub caption_guess: String,
}

/// Lists candidate media files with a caption guess per file.
pub trait AssetScanner: Send + Sync {
    fn scan(&self, dir: &Path) -> Result<Vec<DiscoveredAsset>, CollabError>;
}

/// Renders diagram-description code into an image file on disk.
///
/// Fallible per diagram; callers render what they can and substitute
/// placeholders for the rest.
pub trait DiagramRenderer: Send + Sync {
    fn render(
        &self,
        code: &str,
        width: u32,
        height: u32,
        output: &Path,
    ) -> Result<(), CollabError>;
}

/// Reads a spreadsheet file into a grid of string cells, first row being the
/// header. Used by emitters for file-backed tables.
pub trait TabularReader: Send + Sync {
    fn read_grid(&self, path: &Path) -> Result<Vec<Vec<String>>, CollabError>;
}
