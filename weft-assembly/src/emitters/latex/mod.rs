//! Flat LaTeX emitter
//!
//! Produces one self-contained .tex file: fixed preamble, title block, table
//! of contents, then the block sequence. Headings map onto the four sectioning
//! commands this class offers, so the maximum representable depth is 4.

use std::fmt::Write as _;

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
use crate::outline::{Language, Placement};

const PREAMBLE: &str = r"\documentclass[12pt, a4paper]{article}

\usepackage{ctex}

\usepackage{geometry}
\geometry{left=2.5cm, right=2.5cm, top=2.5cm, bottom=2.5cm}

\usepackage{amsmath, amssymb, amsfonts}
\usepackage{graphicx}
\usepackage{hyperref}
\usepackage{booktabs}
\usepackage{enumitem}
\usepackage{caption}
\usepackage{fancyhdr}
\usepackage{setspace}

\onehalfspacing

\hypersetup{
    colorlinks=true,
    linkcolor=blue,
    citecolor=blue,
    urlcolor=blue
}

\pagestyle{fancy}
\fancyhf{}
\fancyhead[C]{\leftmark}
\fancyfoot[C]{\thepage}
";

/// The flat-markup emitter.
pub struct LatexEmitter {
    tabular_reader: Option<Box<dyn TabularReader>>,
}

impl LatexEmitter {
    pub fn new() -> Self {
        LatexEmitter { tabular_reader: None }
    }

    /// Attach a spreadsheet collaborator for file-backed tables.
    pub fn with_tabular_reader(reader: Box<dyn TabularReader>) -> Self {
        LatexEmitter {
            tabular_reader: Some(reader),
        }
    }

    fn write_figure(&self, out: &mut String, resolved: &ResolvedFigure<'_>, language: Language) {
        let figure = resolved.figure;
        if resolved.has_file() {
            let location = resolved
                .location
                .as_ref()
                .map(|loc| loc.path.display().to_string())
                .unwrap_or_default();
            let placement = match figure.placement {
                Placement::Inline => "h",
                Placement::Top => "t",
                Placement::Bottom => "b",
            };
            let _ = write!(
                out,
                "\\begin{{figure}}[{placement}]\n\\centering\n\
                 \\includegraphics[width=0.8\\textwidth]{{{location}}}\n\
                 \\caption{{{}}}\n\\end{{figure}}\n\n",
                escape_latex(&figure.caption)
            );
        } else {
            warn!("figure '{}' has no usable file, emitting placeholder", figure.id);
            self.write_notice(
                out,
                &format!(
                    "[{} {}: {}]",
                    figure_label(language),
                    figure.id,
                    figure.caption
                ),
                figure.description.as_deref(),
            );
        }
    }

    fn write_table(&self, out: &mut String, resolved: &ResolvedTable<'_>, language: Language) {
        let table = resolved.table;
        let grid = table_grid(resolved, self.tabular_reader.as_deref());

        if grid.is_empty() {
            self.write_notice(
                out,
                &format!("[{} {}: {}]", table_label(language), table.id, table.caption),
                table.description.as_deref(),
            );
            return;
        }

        let columns = grid.iter().map(|row| row.len()).max().unwrap_or(1);
        let spec = "c".repeat(columns);
        let _ = write!(out, "\\begin{{table}}[htbp]\n\\centering\n\\begin{{tabular}}{{{spec}}}\n\\toprule\n");
        for (i, row) in grid.iter().enumerate() {
            let cells: Vec<String> = (0..columns)
                .map(|c| {
                    let cell = row.get(c).map(String::as_str).unwrap_or("");
                    if i == 0 {
                        format!("\\textbf{{{}}}", escape_latex(cell))
                    } else {
                        escape_latex(cell)
                    }
                })
                .collect();
            let _ = writeln!(out, "{} \\\\", cells.join(" & "));
            if i == 0 {
                out.push_str("\\midrule\n");
            }
        }
        let _ = write!(
            out,
            "\\bottomrule\n\\end{{tabular}}\n\\caption{{{}}}\n\\end{{table}}\n\n",
            escape_latex(&table.caption)
        );
    }

    fn write_notice(&self, out: &mut String, headline: &str, description: Option<&str>) {
        let _ = write!(
            out,
            "\\begin{{center}}\n\\textit{{{}}}\n",
            escape_latex(headline)
        );
        if let Some(description) = description {
            let _ = writeln!(
                out,
                "\\\\ \\textit{{({})}}",
                escape_latex(&truncate_description(description))
            );
        }
        out.push_str("\\end{center}\n\n");
    }
}

impl Default for LatexEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for LatexEmitter {
    fn name(&self) -> &str {
        "latex"
    }

    fn description(&self) -> &str {
        "Flat LaTeX markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tex"]
    }

    fn max_heading_depth(&self) -> u32 {
        4
    }

    fn emit(&self, doc: &AssembledDocument<'_>) -> Result<RenderedDocument, EmitError> {
        let mut out = String::from(PREAMBLE);

        let _ = writeln!(out, "\n\\title{{{}}}", escape_latex(doc.title));
        let authors: Vec<String> = doc.authors.iter().map(|a| escape_latex(a)).collect();
        let _ = writeln!(out, "\\author{{{}}}", authors.join(" \\and "));
        out.push_str("\\date{\\today}\n\n\\begin{document}\n\n\\maketitle\n\n\\tableofcontents\n\\newpage\n\n");

        for block in &doc.blocks {
            match block {
                DocBlock::Heading { level, text } => {
                    let command = match level {
                        1 => "section",
                        2 => "subsection",
                        3 => "subsubsection",
                        _ => "paragraph",
                    };
                    let _ = write!(out, "\\{command}{{{}}}\n\n", escape_latex(text));
                }
                DocBlock::Paragraph(text) => {
                    let _ = write!(out, "{}\n\n", escape_latex(text));
                }
                DocBlock::Figure(resolved) => self.write_figure(&mut out, resolved, doc.language),
                DocBlock::FigurePlaceholder { caption, description } => self.write_notice(
                    &mut out,
                    &format!("[{}: {caption}]", figure_label(doc.language)),
                    description.as_deref(),
                ),
                DocBlock::Table(resolved) => self.write_table(&mut out, resolved, doc.language),
                DocBlock::TablePlaceholder { caption, description } => self.write_notice(
                    &mut out,
                    &format!("[{}: {caption}]", table_label(doc.language)),
                    description.as_deref(),
                ),
                DocBlock::Keywords { items, english } => {
                    let _ = write!(
                        out,
                        "\\noindent\\textbf{{{}}} {}\n\\vspace{{1em}}\n\n",
                        keywords_label(*english),
                        escape_latex(&items.join(keywords_separator(*english)))
                    );
                }
            }
        }

        out.push_str("\\end{document}\n");
        Ok(RenderedDocument::Text(out))
    }
}

/// Escape text for LaTeX body content. Single pass, so the braces introduced
/// by the replacement sequences are never re-escaped.
pub fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\textbackslash{}"),
            '&' => escaped.push_str("\\&"),
            '%' => escaped.push_str("\\%"),
            '$' => escaped.push_str("\\$"),
            '#' => escaped.push_str("\\#"),
            '_' => escaped.push_str("\\_"),
            '{' => escaped.push_str("\\{"),
            '}' => escaped.push_str("\\}"),
            '~' => escaped.push_str("\\textasciitilde{}"),
            '^' => escaped.push_str("\\textasciicircum{}"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
