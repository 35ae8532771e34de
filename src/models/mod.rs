//! Polarity scorers usable with the sentiment analysis pipeline.

pub mod lexicon;
pub mod vader;

pub use lexicon::Lexicon;
pub use vader::{LexiconModel, LexiconOptions};
