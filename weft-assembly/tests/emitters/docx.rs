//! Packaging tests for the native Word emitter. Content-level assertions live
//! with the shared assembly tests; here we check that a well-formed package
//! comes out and lands on disk.

use std::fs;

use weft_assembly::emitters::docx::DocxEmitter;
use weft_assembly::{assemble, emit_to_file, AssemblyOptions, Emitter, RenderedDocument};

use crate::common::{figure, inline_table, outline, section, stage_png};

fn sample_outline(media_dir: &std::path::Path) -> weft_assembly::Outline {
    let relative = stage_png(media_dir, "arch.png");

    let mut body = section("s1", "Design");
    body.final_markup = Some(
        "lead paragraph\n{{FIGURE:Architecture:layers}}\n{{TABLE:Rates:per quarter}}".to_string(),
    );
    let mut fig = figure("fig1", "Architecture");
    fig.path = Some(relative.to_string_lossy().into_owned());
    body.figures.push(fig);
    body.tables.push(inline_table("t1", "Rates"));

    outline(vec![body])
}

#[test]
fn emits_a_zip_package_with_embedded_media() {
    let dir = tempfile::tempdir().unwrap();
    let outline = sample_outline(dir.path());

    let options = AssemblyOptions {
        media_root: Some(dir.path().to_path_buf()),
        ..AssemblyOptions::default()
    };
    let doc = assemble(&outline, &options);
    let rendered = DocxEmitter::new().emit(&doc).unwrap();

    match rendered {
        RenderedDocument::Binary(bytes) => {
            // OOXML packages are zip archives.
            assert!(bytes.starts_with(b"PK"));
        }
        RenderedDocument::Text(_) => panic!("docx emitter must produce bytes"),
    }
}

#[test]
fn unreadable_figure_degrades_to_placeholder_package() {
    let mut body = section("s1", "Design");
    body.final_markup = Some("{{FIGURE:Architecture:layers}}".to_string());
    let mut fig = figure("fig1", "Architecture");
    fig.path = Some("missing.png".to_string());
    body.figures.push(fig);

    let outline = outline(vec![body]);
    let doc = assemble(&outline, &AssemblyOptions::default());
    let rendered = DocxEmitter::new().emit(&doc).unwrap();
    assert!(matches!(rendered, RenderedDocument::Binary(bytes) if bytes.starts_with(b"PK")));
}

#[test]
fn emit_to_file_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let outline = sample_outline(dir.path());

    let options = AssemblyOptions {
        media_root: Some(dir.path().to_path_buf()),
        ..AssemblyOptions::default()
    };
    let doc = assemble(&outline, &options);

    let target = dir.path().join("out/final/report.docx");
    emit_to_file(&DocxEmitter::new(), &doc, &target).unwrap();

    let written = fs::read(&target).unwrap();
    assert!(written.starts_with(b"PK"));
}
