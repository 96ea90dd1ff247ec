//! Placeholder-to-asset matching behavior across a whole section.

use weft_assembly::ir::resolved::DocBlock;
use weft_assembly::{assemble, AssemblyOptions};

use crate::common::{figure, outline, section};

fn figure_ids(doc: &weft_assembly::AssembledDocument<'_>) -> Vec<String> {
    doc.blocks
        .iter()
        .filter_map(|b| match b {
            DocBlock::Figure(resolved) => Some(resolved.figure.id.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn each_declared_figure_is_consumed_exactly_once() {
    let mut body = section("s1", "Body");
    body.final_markup = Some(
        "{{FIGURE:One:a}}\nbetween\n{{FIGURE:Two:b}}\nmore\n{{FIGURE:Three:c}}".to_string(),
    );
    body.figures.push(figure("f1", "One"));
    body.figures.push(figure("f2", "Two"));
    body.figures.push(figure("f3", "Three"));

    let outline = outline(vec![body]);
    let doc = assemble(&outline, &AssemblyOptions::default());

    assert_eq!(figure_ids(&doc), vec!["f1", "f2", "f3"]);
    // Every placeholder matched, so nothing trails and nothing doubles.
    let placeholders = doc
        .blocks
        .iter()
        .filter(|b| matches!(b, DocBlock::FigurePlaceholder { .. }))
        .count();
    assert_eq!(placeholders, 0);
}

#[test]
fn extra_declared_figures_append_in_declaration_order() {
    let mut body = section("s1", "Body");
    body.final_markup = Some("only text, no markers".to_string());
    body.figures.push(figure("f1", "One"));
    body.figures.push(figure("f2", "Two"));

    let outline = outline(vec![body]);
    let doc = assemble(&outline, &AssemblyOptions::default());

    assert_eq!(figure_ids(&doc), vec!["f1", "f2"]);
    let last = doc.blocks.last().unwrap();
    assert!(matches!(last, DocBlock::Figure(resolved) if resolved.figure.id == "f2"));
}

#[test]
fn unmatched_marker_becomes_placeholder_without_consuming() {
    let mut body = section("s1", "Body");
    body.final_markup = Some("see {{FIGURE:Unknown Caption:sketch}} here".to_string());
    body.figures.clear();

    let outline = outline(vec![body]);
    let doc = assemble(&outline, &AssemblyOptions::default());

    let placeholder = doc.blocks.iter().find_map(|b| match b {
        DocBlock::FigurePlaceholder { caption, .. } => Some(caption.clone()),
        _ => None,
    });
    assert_eq!(placeholder.as_deref(), Some("Unknown Caption"));
    assert!(figure_ids(&doc).is_empty());
}
