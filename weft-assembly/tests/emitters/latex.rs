//! Rendering tests for the flat LaTeX emitter.

use weft_assembly::emitters::latex::LatexEmitter;
use weft_assembly::{assemble, AssemblyOptions, Emitter, RenderedDocument};

use crate::common::{figure, inline_table, outline, section, stage_png};

fn render(outline: &weft_assembly::Outline, options: &AssemblyOptions) -> String {
    let doc = assemble(outline, options);
    match LatexEmitter::new().emit(&doc).unwrap() {
        RenderedDocument::Text(text) => text,
        RenderedDocument::Binary(_) => panic!("latex emitter must produce text"),
    }
}

#[test]
fn document_skeleton_and_headings() {
    let mut top = section("s1", "Methodology");
    let mut child = section("s1-1", "Data Sources");
    child.final_markup = Some("collected over two quarters".to_string());
    top.children.push(child);

    let tex = render(&outline(vec![top]), &AssemblyOptions::default());

    assert!(tex.starts_with("\\documentclass[12pt, a4paper]{article}"));
    assert!(tex.contains("\\title{City Platform Study}"));
    assert!(tex.contains("\\author{Li Wei}"));
    assert!(tex.contains("\\tableofcontents"));
    assert!(tex.contains("\\section{Methodology}"));
    assert!(tex.contains("\\subsection{Data Sources}"));
    assert!(tex.contains("collected over two quarters"));
    assert!(tex.trim_end().ends_with("\\end{document}"));
}

#[test]
fn existing_figure_becomes_includegraphics() {
    let dir = tempfile::tempdir().unwrap();
    let relative = stage_png(dir.path(), "arch.png");

    let mut body = section("s1", "Design");
    body.final_markup = Some("overview\n{{FIGURE:Architecture:layers}}".to_string());
    let mut fig = figure("fig1", "Architecture");
    fig.path = Some(relative.to_string_lossy().into_owned());
    body.figures.push(fig);

    let options = AssemblyOptions {
        media_root: Some(dir.path().to_path_buf()),
        ..AssemblyOptions::default()
    };
    let tex = render(&outline(vec![body]), &options);

    assert!(tex.contains("\\begin{figure}[h]"));
    assert!(tex.contains("\\includegraphics[width=0.8\\textwidth]"));
    assert!(tex.contains("\\caption{Architecture}"));
}

#[test]
fn missing_figure_renders_bracketed_notice() {
    let mut body = section("s1", "Design");
    body.final_markup = Some("overview\n{{FIGURE:Architecture:layers}}".to_string());
    let mut fig = figure("fig1", "Architecture");
    fig.path = Some("gone.png".to_string());
    fig.description = Some("layered runtime view".to_string());
    body.figures.push(fig);

    let tex = render(&outline(vec![body]), &AssemblyOptions::default());

    assert!(!tex.contains("\\includegraphics"));
    assert!(tex.contains("[图 fig1: Architecture]"));
    assert!(tex.contains("layered runtime view"));
}

#[test]
fn inline_table_renders_with_bold_header() {
    let mut body = section("s1", "Results");
    body.final_markup = Some("{{TABLE:Rates:per quarter}}".to_string());
    body.tables.push(inline_table("t1", "Rates"));

    let tex = render(&outline(vec![body]), &AssemblyOptions::default());

    assert!(tex.contains("\\begin{tabular}{cc}"));
    assert!(tex.contains("\\textbf{k} & \\textbf{v}"));
    assert!(tex.contains("a & 1"));
    assert!(tex.contains("\\caption{Rates}"));
}

#[test]
fn paragraph_text_is_escaped() {
    let mut body = section("s1", "Costs");
    body.final_markup = Some("growth of 40% at $3 per unit".to_string());

    let tex = render(&outline(vec![body]), &AssemblyOptions::default());

    assert!(tex.contains("growth of 40\\% at \\$3 per unit"));
}

#[test]
fn keywords_follow_the_abstract() {
    let mut front = section("abstract", "摘要");
    front.final_markup = Some("this work studies placeholder matching".to_string());
    let mut outline = outline(vec![front]);
    outline.keywords = vec!["检索".to_string(), "装配".to_string()];

    let tex = render(&outline, &AssemblyOptions::default());

    assert!(tex.contains("\\noindent\\textbf{关键词：} 检索；装配"));
}
