//! Placeholder-to-asset matching
//!
//! Binds FigureRef/TableRef blocks to the declared assets in scope, consuming
//! each asset at most once, and appends whatever the text never referenced so
//! no authored asset is silently dropped. Consumption bookkeeping is local to
//! one call; nothing is shared across sections or documents.

use std::path::Path;

use crate::ir::blocks::Block;
use crate::ir::resolved::{DocBlock, ResolvedFigure, ResolvedTable, TableSource};
use crate::outline::{Figure, FigureKind, Table};
use crate::resolve::paths::resolve_media_path;

/// Resolve one section's blocks against the assets in scope.
///
/// For each placeholder: an unconsumed asset with an exactly equal caption is
/// preferred; failing that, the first unconsumed asset of the right kind is
/// taken; failing that, the placeholder stays unresolved and will render as a
/// textual notice. Unconsumed assets are appended afterwards in declaration
/// order.
pub fn resolve_assets<'a>(
    blocks: Vec<Block>,
    figures: &[&'a Figure],
    tables: &[&'a Table],
    media_root: Option<&Path>,
) -> Vec<DocBlock<'a>> {
    let mut figures_used = vec![false; figures.len()];
    let mut tables_used = vec![false; tables.len()];
    let mut out = Vec::with_capacity(blocks.len() + figures.len() + tables.len());

    for block in blocks {
        match block {
            Block::Heading { level, text } => out.push(DocBlock::Heading { level, text }),
            Block::Paragraph(text) => out.push(DocBlock::Paragraph(text)),
            Block::FigureRef { caption, description } => {
                match take_match(figures, &mut figures_used, &caption, |f| &f.caption) {
                    Some(figure) => out.push(DocBlock::Figure(bind_figure(figure, media_root))),
                    None => out.push(DocBlock::FigurePlaceholder {
                        caption,
                        description: non_empty(description),
                    }),
                }
            }
            Block::TableRef { caption, description } => {
                match take_match(tables, &mut tables_used, &caption, |t| &t.caption) {
                    Some(table) => out.push(DocBlock::Table(bind_table(table, media_root))),
                    None => out.push(DocBlock::TablePlaceholder {
                        caption,
                        description: non_empty(description),
                    }),
                }
            }
        }
    }

    for (i, figure) in figures.iter().enumerate() {
        if !figures_used[i] {
            out.push(DocBlock::Figure(bind_figure(figure, media_root)));
        }
    }
    for (i, table) in tables.iter().enumerate() {
        if !tables_used[i] {
            out.push(DocBlock::Table(bind_table(table, media_root)));
        }
    }

    out
}

/// Exact caption match first, then the first unconsumed asset.
fn take_match<'a, T: ?Sized>(
    assets: &[&'a T],
    used: &mut [bool],
    caption: &str,
    caption_of: impl Fn(&T) -> &str,
) -> Option<&'a T> {
    let exact = assets
        .iter()
        .enumerate()
        .find(|(i, asset)| !used[*i] && caption_of(asset) == caption);
    let pick = exact.or_else(|| assets.iter().enumerate().find(|(i, _)| !used[*i]));
    pick.map(|(i, asset)| {
        used[i] = true;
        *asset
    })
}

fn bind_figure<'a>(figure: &'a Figure, media_root: Option<&Path>) -> ResolvedFigure<'a> {
    let location = match (figure.kind, figure.path.as_deref()) {
        (FigureKind::Matched | FigureKind::Generated, Some(path)) if is_usable_path(path) => {
            Some(resolve_media_path(path, media_root))
        }
        _ => None,
    };
    ResolvedFigure { figure, location }
}

fn bind_table<'a>(table: &'a Table, media_root: Option<&Path>) -> ResolvedTable<'a> {
    let file = table
        .path
        .as_deref()
        .filter(|path| is_usable_path(path))
        .map(|path| resolve_media_path(path, media_root));

    let source = match file {
        Some(resolved) if resolved.exists => TableSource::File(resolved),
        _ => match table.content.as_deref() {
            Some(content) => TableSource::Inline(content),
            None => TableSource::Placeholder,
        },
    };
    ResolvedTable { table, source }
}

fn is_usable_path(path: &str) -> bool {
    !matches!(path.trim(), "" | "." | "..")
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
