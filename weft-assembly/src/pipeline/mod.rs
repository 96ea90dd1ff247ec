//! The per-section text pipeline: normalize, then tokenize.

pub mod normalize;
pub mod tokenize;

pub use normalize::normalize;
pub use tokenize::tokenize;
