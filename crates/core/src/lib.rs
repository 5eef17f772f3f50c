//! Phonetic wordplay: respell a sentence as different dictionary words that
//! sound almost the same.
//!
//! Words are looked up in a CMU-style pronouncing dictionary, a few phonemes
//! are swapped for others of the same class (or dropped), and the mutated
//! phoneme stream is split back into real words.

pub mod error;
pub mod phonetic;
pub mod play;
pub mod types;

pub use error::{Result, WordplayError};
pub use phonetic::PhoneticIndex;
pub use play::{Wordplay, WordplayConfig};
pub use types::PlayResult;
