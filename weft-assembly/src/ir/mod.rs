//! Block types produced by the assembly pipeline
//!
//! `blocks` holds the tokenizer output (relative heading levels, unresolved
//! placeholder hints). `resolved` holds the emitter input (absolute clamped
//! levels, placeholders bound to declared assets or demoted to notices).

pub mod blocks;
pub mod resolved;
