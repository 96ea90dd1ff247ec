//! Whole-pipeline scenarios mixing inline markers, declared assets, and real
//! files on disk.

use weft_assembly::ir::resolved::DocBlock;
use weft_assembly::{assemble, AssemblyOptions};

use crate::common::{figure, inline_table, outline, section, stage_png};

#[test]
fn matched_figure_with_backing_file_resolves_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let relative = stage_png(dir.path(), "diagram.png");

    let mut intro = section("s1", "Opening");
    intro.final_markup =
        Some("\\section{Intro}\nHello {{FIGURE:Diagram:sys overview}}\nWorld".to_string());
    let mut fig = figure("fig1", "Diagram");
    fig.path = Some(relative.to_string_lossy().into_owned());
    intro.figures.push(fig);

    let options = AssemblyOptions {
        media_root: Some(dir.path().to_path_buf()),
        ..AssemblyOptions::default()
    };
    let outline = outline(vec![intro]);
    let doc = assemble(&outline, &options);

    // Section title heading first, then the inline structure.
    assert_eq!(doc.blocks.len(), 5);
    assert!(matches!(
        &doc.blocks[0],
        DocBlock::Heading { level: 1, text } if text == "Opening"
    ));
    assert!(matches!(
        &doc.blocks[1],
        DocBlock::Heading { level: 1, text } if text == "Intro"
    ));
    assert!(matches!(&doc.blocks[2], DocBlock::Paragraph(t) if t == "Hello"));
    match &doc.blocks[3] {
        DocBlock::Figure(resolved) => {
            assert_eq!(resolved.figure.id, "fig1");
            assert!(resolved.has_file());
        }
        other => panic!("expected a resolved figure, got {other:?}"),
    }
    assert!(matches!(&doc.blocks[4], DocBlock::Paragraph(t) if t == "World"));
}

#[test]
fn missing_backing_file_still_binds_without_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let mut intro = section("s1", "Opening");
    intro.final_markup =
        Some("\\section{Intro}\nHello {{FIGURE:Diagram:sys overview}}\nWorld".to_string());
    let mut fig = figure("fig1", "Diagram");
    fig.path = Some("nowhere/diagram.png".to_string());
    intro.figures.push(fig);

    let options = AssemblyOptions {
        media_root: Some(dir.path().to_path_buf()),
        ..AssemblyOptions::default()
    };
    let outline = outline(vec![intro]);
    let doc = assemble(&outline, &options);

    assert_eq!(doc.blocks.len(), 5);
    match &doc.blocks[3] {
        DocBlock::Figure(resolved) => {
            assert_eq!(resolved.figure.id, "fig1");
            assert!(!resolved.has_file());
        }
        other => panic!("expected a bound figure, got {other:?}"),
    }
}

#[test]
fn second_table_matches_marker_and_first_trails() {
    let mut body = section("s1", "Results");
    body.final_markup = Some("lead in text\n{{TABLE:Beta:rates}}".to_string());
    body.tables.push(inline_table("t1", "Alpha"));
    body.tables.push(inline_table("t2", "Beta"));

    let outline = outline(vec![body]);
    let doc = assemble(&outline, &AssemblyOptions::default());

    let table_ids: Vec<&str> = doc
        .blocks
        .iter()
        .filter_map(|b| match b {
            DocBlock::Table(resolved) => Some(resolved.table.id.as_str()),
            _ => None,
        })
        .collect();
    // The marker consumes Beta; Alpha appends after the section text.
    assert_eq!(table_ids, vec!["t2", "t1"]);
}
