//! The outline document model
//!
//! These types are constructed by the caller (usually deserialized from a
//! persisted outline file) and read by the assembly engine. The engine never
//! creates, deletes, or mutates them; upstream pipeline stages own `path` and
//! `kind` fields.

use serde::{Deserialize, Serialize};

/// The full document: front matter plus the section tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outline {
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub keywords_en: Vec<String>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Target language, which drives emitter labels (figure/table captions,
/// keyword prefixes). It does not affect assembly itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Zh,
    En,
}

impl Default for Language {
    fn default() -> Self {
        Language::Zh
    }
}

/// One node of the outline tree.
///
/// `level` is declared nesting metadata: 0 marks special front matter
/// (abstract, references), 1 a top-level chapter, 2+ subsection depth.
/// Heading depth during assembly is computed from the walk position, not
/// from this field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default = "default_section_level")]
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_words: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Section>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub figures: Vec<Figure>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<Table>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_markup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_markup: Option<String>,
}

fn default_section_level() -> u32 {
    1
}

/// Which content generation stage assembly should read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentStage {
    Draft,
    Final,
}

impl Section {
    /// Content at the selected stage. `Final` falls back to the draft when no
    /// finalized text exists yet.
    pub fn content_at(&self, stage: ContentStage) -> Option<&str> {
        match stage {
            ContentStage::Final => self
                .final_markup
                .as_deref()
                .or(self.draft_markup.as_deref()),
            ContentStage::Draft => self.draft_markup.as_deref(),
        }
    }
}

/// A declared figure asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub id: String,
    /// Absent while the figure is still a suggestion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub placement: Placement,
    #[serde(default)]
    pub kind: FigureKind,
    /// Diagram-description source, only meaningful for `Generated`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram_code: Option<String>,
}

/// Where the figure should float in the emitted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Inline,
    Top,
    Bottom,
}

impl Default for Placement {
    fn default() -> Self {
        Placement::Inline
    }
}

/// How the figure's backing file comes to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FigureKind {
    /// A real file is already known.
    Matched,
    /// Producible from diagram code not yet rendered.
    Generated,
    /// Believed to belong here but nothing exists.
    Suggested,
    /// A human must supply one.
    Missing,
}

impl Default for FigureKind {
    fn default() -> Self {
        FigureKind::Matched
    }
}

/// A declared table asset. At emission time exactly one of `path` (a tabular
/// source file) or `content` (inline grid markup) is authoritative; with
/// neither, the table renders as a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
