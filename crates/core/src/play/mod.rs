//! The wordplay pipeline: normalize, sequence, mutate, decode, select, stylize.

pub mod decode;
pub mod mutate;
pub mod select;
pub mod sequence;
pub mod text;
pub mod wordplay;

pub use wordplay::{Wordplay, WordplayConfig};
