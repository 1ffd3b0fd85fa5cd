pub mod gameword;
pub mod word_loader;

pub use gameword::{Gameword, GuessOutcome};
