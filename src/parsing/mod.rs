//! Parsing of scraped review dumps.
//!
//! A dump is UTF-8 text made of blocks. Each block opens with a delimiter
//! line `=== Reviews for <Title> ===` and is followed by zero or more lines
//! `Review <n>: <text>`. The parser turns it into a [`ReviewCorpus`], which
//! preserves the order in which movies were first seen and the order of
//! reviews within each movie.
//!
//! [`ReviewCorpus`]: crate::core::ReviewCorpus

pub mod review_parser;

pub use review_parser::{read_reviews, LineKind, ReviewParser};
