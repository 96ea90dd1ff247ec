//! End-to-end assembly scenarios: outline in, resolved block sequence out.

mod end_to_end;
mod matching;
