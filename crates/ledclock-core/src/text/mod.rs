//! Text helpers shared across the firmware: delimiter tokenizing and the
//! Latin-1 downconversions the single-byte display path needs.

pub mod latin1;
pub mod tokenize;

pub use latin1::{latin1_clamp, latin1_clamp_in_place, utf8_to_latin1};
pub use tokenize::tokenize;
