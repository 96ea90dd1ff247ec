//! Tokenized section blocks

/// A typed unit of content recognized in one section's markup.
///
/// Heading levels here are *relative* to the owning section (1..=3); the
/// tree builder turns them into absolute document depth. Produced
/// transiently per section and discarded after emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u32, text: String },
    Paragraph(String),
    FigureRef { caption: String, description: String },
    TableRef { caption: String, description: String },
}

impl Block {
    /// Whether this is a heading that introduces a subsection of the owning
    /// section (relative level 2 or deeper). The tree builder uses this to
    /// decide against recursing into declared children.
    pub fn is_subsection_heading(&self) -> bool {
        matches!(self, Block::Heading { level, .. } if *level >= 2)
    }
}
