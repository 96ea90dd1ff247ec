//! Helpers shared by all emitters: grid-markup parsing, language labels, and
//! placeholder text shaping.

use log::warn;

use crate::collab::TabularReader;
use crate::ir::resolved::{ResolvedTable, TableSource};
use crate::outline::Language;

/// Parse lightweight pipe-grid markup into rows of cells.
///
/// Lines of the form `| a | b |` become rows; separator lines (`|---`) are
/// skipped. Non-grid lines are ignored, so a failed parse yields an empty
/// grid and the caller degrades to a placeholder.
pub fn parse_grid(content: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("|--") || line.starts_with("| --") {
            continue;
        }
        if let Some(inner) = line.strip_prefix('|') {
            let inner = inner.strip_suffix('|').unwrap_or(inner);
            let cells: Vec<String> = inner.split('|').map(|cell| cell.trim().to_string()).collect();
            if !cells.is_empty() {
                rows.push(cells);
            }
        }
    }
    rows
}

/// Materialize a resolved table's cells, following the fallback chain: a
/// located file is read through the tabular collaborator; a failed or empty
/// read falls back to inline grid markup; anything left empty renders as a
/// placeholder.
pub fn table_grid(
    resolved: &ResolvedTable<'_>,
    reader: Option<&dyn TabularReader>,
) -> Vec<Vec<String>> {
    match &resolved.source {
        TableSource::File(location) => {
            let from_file = match reader {
                Some(reader) => match reader.read_grid(&location.path) {
                    Ok(rows) => rows,
                    Err(err) => {
                        warn!(
                            "reading table file '{}' failed: {err}",
                            location.path.display()
                        );
                        Vec::new()
                    }
                },
                None => Vec::new(),
            };
            if from_file.is_empty() {
                resolved
                    .table
                    .content
                    .as_deref()
                    .map(parse_grid)
                    .unwrap_or_default()
            } else {
                from_file
            }
        }
        TableSource::Inline(content) => parse_grid(content),
        TableSource::Placeholder => Vec::new(),
    }
}

pub fn figure_label(language: Language) -> &'static str {
    match language {
        Language::Zh => "图",
        Language::En => "Figure",
    }
}

pub fn table_label(language: Language) -> &'static str {
    match language {
        Language::Zh => "表",
        Language::En => "Table",
    }
}

pub fn keywords_label(english: bool) -> &'static str {
    if english {
        "Keywords: "
    } else {
        "关键词："
    }
}

pub fn keywords_separator(english: bool) -> &'static str {
    if english {
        "; "
    } else {
        "；"
    }
}

/// Placeholder descriptions are capped so a long AI-written blurb does not
/// swallow the page.
pub fn truncate_description(description: &str) -> String {
    const MAX_CHARS: usize = 100;
    if description.chars().count() > MAX_CHARS {
        let head: String = description.chars().take(MAX_CHARS).collect();
        format!("{head}...")
    } else {
        description.to_string()
    }
}
