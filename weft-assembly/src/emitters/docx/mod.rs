//! Native Word emitter
//!
//! Composes a .docx document object directly: styled headings up to depth 9,
//! a centered title block, a TOC field, embedded images with numbered
//! captions, and grid tables with a bold header row. Media problems degrade
//! to italic bracketed notices; only packing/writing the artifact can fail.

use std::fs;
use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, Paragraph, Pic, Run, Style, StyleType,
    Table as GridTable, TableCell, TableOfContents, TableRow,
};
use log::warn;

use crate::assemble::AssembledDocument;
use crate::collab::TabularReader;
use crate::emitter::{Emitter, RenderedDocument};
use crate::emitters::common::{
    figure_label, keywords_label, keywords_separator, table_grid, table_label,
    truncate_description,
};
use crate::error::EmitError;
use crate::ir::resolved::{DocBlock, ResolvedFigure, ResolvedTable};
use crate::outline::Language;

// Embedded image box, in EMU (914400 per inch): 5in x 3.75in.
const IMAGE_WIDTH_EMU: u32 = 4_572_000;
const IMAGE_HEIGHT_EMU: u32 = 3_429_000;

// Run sizes are half-points.
const TITLE_SIZE: usize = 44;
const BODY_SIZE: usize = 24;
const CAPTION_SIZE: usize = 20;
const NOTE_SIZE: usize = 18;

/// The native-document emitter.
pub struct DocxEmitter {
    tabular_reader: Option<Box<dyn TabularReader>>,
}

impl DocxEmitter {
    pub fn new() -> Self {
        DocxEmitter { tabular_reader: None }
    }

    /// Attach a spreadsheet collaborator for file-backed tables.
    pub fn with_tabular_reader(reader: Box<dyn TabularReader>) -> Self {
        DocxEmitter {
            tabular_reader: Some(reader),
        }
    }

    fn add_figure(&self, docx: Docx, resolved: &ResolvedFigure<'_>, language: Language) -> Docx {
        let figure = resolved.figure;
        if let Some(location) = resolved.location.as_ref().filter(|loc| loc.exists) {
            match fs::read(&location.path) {
                Ok(bytes) if is_supported_image(&bytes) => {
                    let pic = Pic::new(&bytes).size(IMAGE_WIDTH_EMU, IMAGE_HEIGHT_EMU);
                    let docx = docx.add_paragraph(
                        Paragraph::new()
                            .add_run(Run::new().add_image(pic))
                            .align(AlignmentType::Center),
                    );
                    return docx.add_paragraph(caption_paragraph(&format!(
                        "{} {}: {}",
                        figure_label(language),
                        figure.id,
                        figure.caption
                    )));
                }
                Ok(_) => {
                    warn!(
                        "'{}' is not a supported image format, emitting placeholder",
                        location.path.display()
                    );
                }
                Err(err) => {
                    warn!(
                        "reading image '{}' failed: {err}, emitting placeholder",
                        location.path.display()
                    );
                }
            }
        }
        add_notice(
            docx,
            &format!("[{} {}: {}]", figure_label(language), figure.id, figure.caption),
            figure.description.as_deref(),
        )
    }

    fn add_table(&self, docx: Docx, resolved: &ResolvedTable<'_>, language: Language) -> Docx {
        let table = resolved.table;
        let grid = table_grid(resolved, self.tabular_reader.as_deref());
        if grid.is_empty() {
            return add_notice(
                docx,
                &format!("[{} {}: {}]", table_label(language), table.id, table.caption),
                table.description.as_deref(),
            );
        }

        let columns = grid.iter().map(|row| row.len()).max().unwrap_or(1);
        let rows: Vec<TableRow> = grid
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let cells: Vec<TableCell> = (0..columns)
                    .map(|c| {
                        let text = row.get(c).map(String::as_str).unwrap_or("");
                        let mut run = Run::new().add_text(text).size(CAPTION_SIZE);
                        if i == 0 {
                            run = run.bold();
                        }
                        TableCell::new().add_paragraph(
                            Paragraph::new()
                                .add_run(run)
                                .align(AlignmentType::Center),
                        )
                    })
                    .collect();
                TableRow::new(cells)
            })
            .collect();

        let docx = docx.add_table(GridTable::new(rows));
        docx.add_paragraph(caption_paragraph(&format!(
            "{} {}: {}",
            table_label(language),
            table.id,
            table.caption
        )))
    }
}

impl Default for DocxEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for DocxEmitter {
    fn name(&self) -> &str {
        "docx"
    }

    fn description(&self) -> &str {
        "Native Word document"
    }

    fn file_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn max_heading_depth(&self) -> u32 {
        9
    }

    fn emit(&self, doc: &AssembledDocument<'_>) -> Result<RenderedDocument, EmitError> {
        let mut docx = heading_styles(Docx::new());

        docx = docx.add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(doc.title).size(TITLE_SIZE).bold())
                .align(AlignmentType::Center),
        );
        if !doc.authors.is_empty() {
            docx = docx.add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text(doc.authors.join(", ")).size(BODY_SIZE))
                    .align(AlignmentType::Center),
            );
        }
        docx = docx.add_paragraph(page_break());
        docx = docx
            .add_table_of_contents(TableOfContents::new().heading_styles_range(1, 3).auto());
        docx = docx.add_paragraph(page_break());

        for block in &doc.blocks {
            docx = match block {
                DocBlock::Heading { level, text } => docx.add_paragraph(
                    Paragraph::new()
                        .add_run(Run::new().add_text(text))
                        .style(&format!("Heading{level}")),
                ),
                DocBlock::Paragraph(text) => docx.add_paragraph(
                    Paragraph::new().add_run(Run::new().add_text(text).size(BODY_SIZE)),
                ),
                DocBlock::Figure(resolved) => self.add_figure(docx, resolved, doc.language),
                DocBlock::FigurePlaceholder { caption, description } => add_notice(
                    docx,
                    &format!("[{}: {caption}]", figure_label(doc.language)),
                    description.as_deref(),
                ),
                DocBlock::Table(resolved) => self.add_table(docx, resolved, doc.language),
                DocBlock::TablePlaceholder { caption, description } => add_notice(
                    docx,
                    &format!("[{}: {caption}]", table_label(doc.language)),
                    description.as_deref(),
                ),
                DocBlock::Keywords { items, english } => docx.add_paragraph(
                    Paragraph::new()
                        .add_run(
                            Run::new()
                                .add_text(keywords_label(*english))
                                .size(BODY_SIZE)
                                .bold(),
                        )
                        .add_run(
                            Run::new()
                                .add_text(items.join(keywords_separator(*english)))
                                .size(BODY_SIZE),
                        ),
                ),
            };
        }

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|err| EmitError::Render(format!("packing docx failed: {err}")))?;
        Ok(RenderedDocument::Binary(buffer.into_inner()))
    }
}

fn heading_styles(docx: Docx) -> Docx {
    // Word resolves "Heading{n}" ids against these named styles, which the
    // TOC field ranges over.
    let sizes: [usize; 9] = [32, 28, 24, 24, 24, 24, 24, 24, 24];
    let mut docx = docx;
    for (i, size) in sizes.iter().enumerate() {
        let level = i + 1;
        docx = docx.add_style(
            Style::new(format!("Heading{level}"), StyleType::Paragraph)
                .name(format!("Heading {level}"))
                .size(*size)
                .bold(),
        );
    }
    docx
}

fn page_break() -> Paragraph {
    Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
}

fn caption_paragraph(text: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(text).size(CAPTION_SIZE))
        .align(AlignmentType::Center)
}

fn add_notice(docx: Docx, headline: &str, description: Option<&str>) -> Docx {
    let docx = docx.add_paragraph(
        Paragraph::new()
            .add_run(Run::new().add_text(headline).size(CAPTION_SIZE).italic())
            .align(AlignmentType::Center),
    );
    match description {
        Some(description) => docx.add_paragraph(
            Paragraph::new()
                .add_run(
                    Run::new()
                        .add_text(format!("({})", truncate_description(description)))
                        .size(NOTE_SIZE)
                        .italic(),
                )
                .align(AlignmentType::Center),
        ),
        None => docx,
    }
}

/// Formats the document object can actually embed. Anything else renders as
/// a placeholder instead of risking a malformed package.
fn is_supported_image(bytes: &[u8]) -> bool {
    bytes.starts_with(&[0x89, b'P', b'N', b'G'])
        || bytes.starts_with(&[0xFF, 0xD8, 0xFF])
        || bytes.starts_with(b"GIF8")
        || bytes.starts_with(b"BM")
}
