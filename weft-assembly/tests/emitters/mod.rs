//! Rendering and packaging tests for the built-in emitters.

mod docx;
mod latex;
