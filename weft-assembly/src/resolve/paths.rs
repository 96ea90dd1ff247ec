//! Media path fallback search
//!
//! Declared asset paths come from generated or hand-edited outlines and often
//! duplicate a segment of the configured media directory (base `.../img`,
//! declared `img/1.png`). The search tolerates one level of that.

use log::warn;
use std::path::{Path, PathBuf};

/// Outcome of a media path search. `exists` is checked once at resolution
/// time; emitters treat a non-existent location as a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub path: PathBuf,
    pub exists: bool,
}

/// Locate a declared media path under an optional base directory.
///
/// Candidates, in order: the base joined with the declared path as-is; the
/// base joined with just the file name; the base joined with the declared
/// path minus its first segment. The first candidate that exists wins. When
/// none exists the direct join is returned marked non-existent, so callers
/// fall back to a placeholder instead of failing.
pub fn resolve_media_path(declared: &str, base: Option<&Path>) -> ResolvedPath {
    let declared_path = Path::new(declared);

    let Some(base) = base else {
        return ResolvedPath {
            exists: declared_path.exists(),
            path: declared_path.to_path_buf(),
        };
    };

    let direct = base.join(declared_path);
    if direct.exists() {
        return ResolvedPath { path: direct, exists: true };
    }

    if let Some(name) = declared_path.file_name() {
        let by_name = base.join(name);
        if by_name.exists() {
            return ResolvedPath { path: by_name, exists: true };
        }
    }

    let mut components = declared_path.components();
    if components.next().is_some() {
        let rest = components.as_path();
        if !rest.as_os_str().is_empty() {
            let stripped = base.join(rest);
            if stripped.exists() {
                return ResolvedPath { path: stripped, exists: true };
            }
        }
    }

    warn!(
        "media file '{declared}' not found under '{}'",
        base.display()
    );
    ResolvedPath { path: direct, exists: false }
}
