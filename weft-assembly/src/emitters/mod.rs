//! Built-in emitter implementations.

pub mod common;
pub mod docx;
pub mod latex;
