//! Document assembly for outline-driven writing
//!
//!     This crate turns an outline tree (title, nested sections, declared figures
//!     and tables) plus loosely structured generated markup per section into a
//!     finished document artifact (flat LaTeX or a native Word file).
//!
//!     TLDR: for emitter authors:
//!         - The engine never renders anything itself; it produces a flat sequence of
//!           resolved blocks and hands it to an Emitter implementation.
//!         - Section text is sanitized and tokenized by the pipeline modules, then
//!           placeholders are matched against declared assets by the resolvers.
//!         - Emitters only pattern-match on DocBlock variants; identical block
//!           semantics must hold across all emitters.
//!
//! Architecture
//!
//!     The goal is to keep everything that is common across output formats in a
//!     format agnostic layer. Section markup flows through a fixed pipeline
//!     (normalize -> tokenize -> resolve), producing typed blocks, so that the
//!     format specific code is reduced to rendering a small closed set of block
//!     variants. Recognition order inside the pipeline is a numbered contract,
//!     documented on each pass, because the input mixes two markup dialects and an
//!     ad-hoc placeholder syntax and later passes must not corrupt earlier tokens.
//!
//!     This is a pure lib, that is, it powers the weft CLI but is shell agnostic:
//!     no code here prints to std streams or reads env vars. Diagnostics go through
//!     the `log` facade.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── outline.rs              # Serializable document model
//!     ├── collab.rs               # External collaborator trait seams
//!     ├── pipeline
//!     │   ├── normalize.rs        # Inline command sanitation
//!     │   └── tokenize.rs         # Structural tokenization into blocks
//!     ├── resolve
//!     │   ├── assets.rs           # Placeholder <-> declared asset matching
//!     │   └── paths.rs            # Media path fallback search
//!     ├── assemble.rs             # Outline walk, heading depth math
//!     ├── emitter.rs              # Emitter trait definition
//!     ├── registry.rs             # EmitterRegistry for discovery and selection
//!     ├── emitters
//!     │   ├── common              # Shared grid parsing and labels
//!     │   ├── latex               # Flat markup emitter
//!     │   └── docx                # Native document emitter
//!     ├── ir                      # Block types (tokenized and resolved)
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── common/mod.rs           # Outline fixture builders
//!     ├── assembly/               # End-to-end pipeline scenarios
//!     └── emitters/               # Rendering and packaging tests
//!
//!     Note that rust does not by default discover tests in subdirectories, so we
//!     need to include these in the mod.
//!
//! Error handling
//!
//!     Everything content-shaped recovers locally: unmatched placeholders render as
//!     bracketed notices, missing media files fall back the same way, malformed
//!     grid markup degrades to a placeholder. The only hard error surfaced to the
//!     caller is failing to write the output artifact, because that means the run
//!     produced nothing usable.

pub mod assemble;
pub mod collab;
pub mod emitter;
pub mod emitters;
pub mod error;
pub mod ir;
pub mod outline;
pub mod pipeline;
pub mod registry;
pub mod resolve;

pub use assemble::{assemble, AssembledDocument, AssemblyOptions};
pub use emitter::{emit_to_file, Emitter, RenderedDocument};
pub use error::EmitError;
pub use outline::{ContentStage, Figure, FigureKind, Language, Outline, Placement, Section, Table};
pub use registry::EmitterRegistry;
