//! Structural tokenization
//!
//! Turns normalized section text into an ordered sequence of typed blocks.
//! Recognition happens by rewriting matches into sentinel lines, so the pass
//! order below is a strict precedence contract; a later pass can never
//! corrupt a token an earlier pass produced:
//!   1. `{{FIGURE:caption:description}}` / `{{TABLE:caption:description}}`
//!      markers become figure/table sentinels isolated on their own
//!      paragraph, wherever they appear (own line or inline);
//!   2. heading commands in both dialects become heading sentinels carrying a
//!      *relative* level: `\section`/`\subsection`/`\subsubsection` and the
//!      `#`/`##`/`###` line prefixes map to 1/2/3;
//!   3. leftover commands are stripped: a command with an argument keeps the
//!      argument text, a bare command is deleted, stray grouping braces are
//!      removed, and residual `sec:`/`fig:`-style label ids are dropped;
//!   4. the text collapses into blank-line-separated paragraphs; non-sentinel
//!      chunks become Paragraph blocks with internal whitespace flattened.
//!
//! A chunk with fewer than two visible characters is dropped rather than
//! emitted, so stray punctuation never becomes a paragraph.

use regex::Regex;
use std::sync::LazyLock;

use crate::ir::blocks::Block;

// Pass 1: placeholder markers.
static RE_FIGURE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{FIGURE:([^:}]*):([^}]*)\}\}").expect("valid figure marker regex")
});
static RE_TABLE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{TABLE:([^:}]*):([^}]*)\}\}").expect("valid table marker regex")
});

// Pass 2: heading commands, both dialects.
static RE_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\section\{([^}]*)\}").expect("valid section regex"));
static RE_SUBSECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\subsection\{([^}]*)\}").expect("valid subsection regex"));
static RE_SUBSUBSECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\subsubsection\{([^}]*)\}").expect("valid subsubsection regex")
});
static RE_HASH3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^### (.+)$").expect("valid h3 regex"));
static RE_HASH2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## (.+)$").expect("valid h2 regex"));
static RE_HASH1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# (.+)$").expect("valid h1 regex"));

// Pass 3: leftover command stripping.
static RE_CMD_WITH_ARG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+\*?\{([^}]*)\}").expect("valid cmd-arg regex"));
static RE_BARE_CMD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+\*?").expect("valid bare cmd regex"));
static RE_BRACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[{}]").expect("valid brace regex"));
static RE_LABEL_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:sec|subsec|fig|tab|eq|chap):[A-Za-z0-9_-]+\b").expect("valid label-id regex")
});

// Pass 4: paragraph collapse.
static RE_EXCESS_BLANKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid blank collapse regex"));
static RE_INNER_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\n\s*").expect("valid inner newline regex"));
static RE_RUNS_OF_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

// Sentinel recognizers for pass 4.
static RE_HEADING_SENTINEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<<HEADING:(\d+):(.+)>>$").expect("valid heading sentinel"));
// Field classes must accept everything the pass-1 marker classes let through,
// `>` included, or a rewritten sentinel leaks into the output as a paragraph.
static RE_FIGURE_SENTINEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<<FIGURE:([^:]*):(.*)>>$").expect("valid figure sentinel"));
static RE_TABLE_SENTINEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<<TABLE:([^:]*):(.*)>>$").expect("valid table sentinel"));

/// Tokenize normalized section text into blocks.
pub fn tokenize(normalized: &str) -> Vec<Block> {
    let text = RE_FIGURE_MARKER.replace_all(normalized, "\n\n<<FIGURE:$1:$2>>\n\n");
    let text = RE_TABLE_MARKER.replace_all(&text, "\n\n<<TABLE:$1:$2>>\n\n");

    let text = RE_SECTION.replace_all(&text, "\n\n<<HEADING:1:$1>>\n\n");
    let text = RE_SUBSECTION.replace_all(&text, "\n\n<<HEADING:2:$1>>\n\n");
    let text = RE_SUBSUBSECTION.replace_all(&text, "\n\n<<HEADING:3:$1>>\n\n");
    let text = RE_HASH3.replace_all(&text, "\n\n<<HEADING:3:$1>>\n\n");
    let text = RE_HASH2.replace_all(&text, "\n\n<<HEADING:2:$1>>\n\n");
    let text = RE_HASH1.replace_all(&text, "\n\n<<HEADING:1:$1>>\n\n");

    let text = RE_CMD_WITH_ARG.replace_all(&text, "$1");
    let text = RE_BARE_CMD.replace_all(&text, "");
    let text = RE_BRACES.replace_all(&text, "");
    let text = RE_LABEL_ID.replace_all(&text, "");

    let text = RE_EXCESS_BLANKS.replace_all(&text, "\n\n");

    let mut blocks = Vec::new();
    for chunk in text.trim().split("\n\n") {
        let chunk = chunk.trim();
        if chunk.chars().filter(|c| !c.is_whitespace()).count() < 2 {
            continue;
        }

        if let Some(caps) = RE_HEADING_SENTINEL.captures(chunk) {
            let level = caps[1].parse::<u32>().unwrap_or(1);
            blocks.push(Block::Heading {
                level,
                text: caps[2].trim().to_string(),
            });
            continue;
        }
        if let Some(caps) = RE_FIGURE_SENTINEL.captures(chunk) {
            blocks.push(Block::FigureRef {
                caption: caps[1].trim().to_string(),
                description: caps[2].trim().to_string(),
            });
            continue;
        }
        if let Some(caps) = RE_TABLE_SENTINEL.captures(chunk) {
            blocks.push(Block::TableRef {
                caption: caps[1].trim().to_string(),
                description: caps[2].trim().to_string(),
            });
            continue;
        }

        let flat = RE_INNER_NEWLINES.replace_all(chunk, " ");
        let flat = RE_RUNS_OF_SPACE.replace_all(&flat, " ");
        blocks.push(Block::Paragraph(flat.trim().to_string()));
    }

    blocks
}
