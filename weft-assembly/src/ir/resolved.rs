//! Resolved blocks handed to emitters

use crate::outline::{Figure, Table};
use crate::resolve::paths::ResolvedPath;

/// One unit of the final, flattened document.
///
/// Heading levels are absolute and already clamped to the emitter maximum.
/// Figure/Table variants borrow the declared asset from the outline;
/// the *Placeholder variants carry only the hints from an unmatched inline
/// marker. Emitters must render every variant; none is optional.
#[derive(Debug, Clone, PartialEq)]
pub enum DocBlock<'a> {
    Heading {
        level: u32,
        text: String,
    },
    Paragraph(String),
    Figure(ResolvedFigure<'a>),
    FigurePlaceholder {
        caption: String,
        description: Option<String>,
    },
    Table(ResolvedTable<'a>),
    TablePlaceholder {
        caption: String,
        description: Option<String>,
    },
    /// Keyword list emitted after an abstract section.
    Keywords {
        items: Vec<String>,
        english: bool,
    },
}

/// A declared figure bound to its media file, when one could be located.
///
/// `location` is `None` for suggested/missing/pathless figures. A present
/// location may still be marked non-existent; emitters fall back to a
/// placeholder in both cases.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFigure<'a> {
    pub figure: &'a Figure,
    pub location: Option<ResolvedPath>,
}

impl ResolvedFigure<'_> {
    /// Whether a real file backs this figure.
    pub fn has_file(&self) -> bool {
        self.location.as_ref().is_some_and(|loc| loc.exists)
    }
}

/// A declared table bound to whichever data source is authoritative.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTable<'a> {
    pub table: &'a Table,
    pub source: TableSource<'a>,
}

/// Where the table's cells come from.
#[derive(Debug, Clone, PartialEq)]
pub enum TableSource<'a> {
    /// A located spreadsheet file, read via the tabular collaborator.
    File(ResolvedPath),
    /// Inline grid markup declared on the table.
    Inline(&'a str),
    /// No usable source; render as a notice.
    Placeholder,
}
