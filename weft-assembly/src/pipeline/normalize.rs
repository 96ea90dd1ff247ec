//! Inline markup sanitation
//!
//! Generated section text arrives with inline formatting commands that carry
//! no meaning in the emitted document. Normalization strips or unwraps them,
//! leaving semantic content plus the placeholder markers the tokenizer
//! consumes. Pure, infallible, and idempotent on its own output: unrecognized
//! commands pass through as literal text because generated content is
//! unpredictable and sanitation must be resilient.
//!
//! Pass order is a contract (later passes must see the earlier passes'
//! output):
//!   1. escaped punctuation (`\%`, `\$`, `\&`, `\#`, `\_`, `\{`, `\}`)
//!      becomes the literal character;
//!   2. `$...$` math spans are unwrapped to their inner text;
//!   3. `\textbf`, `\textit`, `\emph` are unwrapped to their argument;
//!   4. `\cite{...}` becomes the fixed citation marker;
//!   5. `\label`, `\ref`, `\pageref`, `\autoref` are deleted outright.

use regex::Regex;
use std::sync::LazyLock;

/// What `\cite{...}` is replaced with.
pub const CITATION_MARKER: &str = "[citation]";

const ESCAPES: [(&str, &str); 7] = [
    (r"\%", "%"),
    (r"\$", "$"),
    (r"\&", "&"),
    (r"\#", "#"),
    (r"\_", "_"),
    (r"\{", "{"),
    (r"\}", "}"),
];

static RE_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([^$]+)\$").expect("valid math regex"));
static RE_BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\textbf\{([^}]*)\}").expect("valid bold regex"));
static RE_ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(?:textit|emph)\{([^}]*)\}").expect("valid italic regex"));
static RE_CITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\cite\{[^}]*\}").expect("valid cite regex"));
static RE_CROSSREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(?:label|ref|pageref|autoref)\{[^}]*\}").expect("valid crossref regex")
});

/// Sanitize one section's raw markup.
pub fn normalize(raw: &str) -> String {
    let mut text = raw.to_string();
    for (escaped, literal) in ESCAPES {
        text = text.replace(escaped, literal);
    }
    let text = RE_MATH.replace_all(&text, "$1");
    let text = RE_BOLD.replace_all(&text, "$1");
    let text = RE_ITALIC.replace_all(&text, "$1");
    let text = RE_CITE.replace_all(&text, CITATION_MARKER);
    let text = RE_CROSSREF.replace_all(&text, "");
    text.into_owned()
}
