use std::path::Path;

use regex::Regex;

use crate::core::{PipelineError, Result, ReviewCorpus};

/// Classification of a single trimmed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Delimiter(&'a str),
    Review(&'a str),
    Blank,
    Malformed,
}

/// Parser for review dumps made of `=== Reviews for <Title> ===` blocks
/// followed by `Review <n>: <text>` lines.
#[derive(Debug, Clone)]
pub struct ReviewParser {
    delimiter: Regex,
    review: Regex,
}

impl Default for ReviewParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewParser {
    pub fn new() -> Self {
        Self {
            // Both patterns are literals; compilation cannot fail.
            delimiter: Regex::new(r"^=== Reviews for (.+?) ===$").unwrap(),
            review: Regex::new(r"^Review \d+:\s*(.*)$").unwrap(),
        }
    }

    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        let line = line.trim();
        if line.is_empty() {
            return LineKind::Blank;
        }
        if let Some(caps) = self.delimiter.captures(line) {
            if let Some(title) = caps.get(1) {
                return LineKind::Delimiter(title.as_str());
            }
        }
        if let Some(caps) = self.review.captures(line) {
            let text = caps.get(1).map_or("", |m| m.as_str().trim());
            return LineKind::Review(text);
        }
        LineKind::Malformed
    }

    /// Parses review dump text already held in memory.
    pub fn parse_str(&self, contents: &str) -> ReviewCorpus {
        let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
        let mut corpus = ReviewCorpus::new();
        let mut current: Option<usize> = None;

        for (line_no, line) in contents.lines().enumerate() {
            match self.classify(line) {
                LineKind::Blank => {}
                LineKind::Delimiter(title) => {
                    tracing::debug!(line = line_no + 1, title, "review block");
                    current = Some(corpus.start_movie(title));
                }
                LineKind::Review(text) => match current {
                    None => corpus.stats_mut().orphaned_reviews += 1,
                    Some(_) if text.is_empty() => corpus.stats_mut().empty_reviews += 1,
                    Some(idx) => corpus.push_review(idx, text),
                },
                LineKind::Malformed => {
                    tracing::trace!(line = line_no + 1, "skipping malformed line");
                    corpus.stats_mut().malformed_lines += 1;
                }
            }
        }

        let stats = corpus.stats();
        if stats.skipped_lines() > 0 {
            tracing::warn!(
                malformed = stats.malformed_lines,
                orphaned = stats.orphaned_reviews,
                empty = stats.empty_reviews,
                "skipped {} line(s) while parsing reviews",
                stats.skipped_lines()
            );
        }
        corpus
    }

    /// Reads and parses a review dump from disk.
    ///
    /// Returns [`PipelineError::FileNotFound`] when `path` does not exist.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ReviewCorpus> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PipelineError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))?;
        let corpus = self.parse_str(&contents);
        tracing::info!(
            "Parsed {} review(s) for {} movie(s) from {}",
            corpus.review_count(),
            corpus.len(),
            path.display()
        );
        Ok(corpus)
    }
}

/// Shorthand for `ReviewParser::new().parse_file(path)`.
pub fn read_reviews(path: impl AsRef<Path>) -> Result<ReviewCorpus> {
    ReviewParser::new().parse_file(path)
}
