//! Shared outline fixtures for the integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use weft_assembly::{Figure, FigureKind, Language, Outline, Placement, Section, Table};

/// A valid 1x1 RGBA PNG, small enough to inline.
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // signature
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15,
    0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, // IDAT
    0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00,
    0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82, // IEND
];

pub fn outline(sections: Vec<Section>) -> Outline {
    Outline {
        title: "City Platform Study".to_string(),
        authors: vec!["Li Wei".to_string()],
        keywords: vec![],
        keywords_en: vec![],
        language: Language::Zh,
        sections,
    }
}

pub fn section(id: &str, title: &str) -> Section {
    Section {
        id: id.to_string(),
        title: title.to_string(),
        level: 1,
        target_words: None,
        notes: None,
        children: vec![],
        figures: vec![],
        tables: vec![],
        draft_markup: None,
        final_markup: None,
    }
}

pub fn figure(id: &str, caption: &str) -> Figure {
    Figure {
        id: id.to_string(),
        path: None,
        caption: caption.to_string(),
        description: None,
        placement: Placement::Inline,
        kind: FigureKind::Matched,
        diagram_code: None,
    }
}

pub fn inline_table(id: &str, caption: &str) -> Table {
    Table {
        id: id.to_string(),
        caption: caption.to_string(),
        path: None,
        content: Some("| k | v |\n|---|---|\n| a | 1 |".to_string()),
        description: None,
    }
}

/// Write the tiny PNG under `dir` and return its relative name for use as a
/// declared figure path.
pub fn stage_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, TINY_PNG).unwrap();
    PathBuf::from(name)
}
