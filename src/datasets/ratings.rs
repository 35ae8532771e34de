//! Structured decoding of OMDb `Ratings` cells.
//!
//! Scraped tables store the ratings list as a Python literal, e.g.
//! `[{'Source': 'Internet Movie Database', 'Value': '8.3/10'}]`, or as JSON.
//! Both are read with a small tokenizer; nothing is ever evaluated.

use std::iter::Peekable;
use std::str::Chars;

use serde::Serialize;

use crate::core::{PipelineError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OmdbRatings {
    /// IMDb rating out of 10.
    pub imdb: Option<f64>,
    /// Rotten Tomatoes score as a fraction in [0, 1].
    pub rotten_tomatoes: Option<f64>,
    /// Metacritic score out of 100.
    pub metacritic: Option<f64>,
}

/// Decode a ratings list and pick out the three known sources. Unknown
/// sources are ignored; unparseable values leave their field `None`.
pub fn parse_omdb_ratings(input: &str) -> Result<OmdbRatings> {
    let entries = RatingsReader::new(input).read_list()?;
    let mut ratings = OmdbRatings::default();

    for entry in entries {
        let field = |key: &str| {
            entry
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };
        let (Some(source), Some(value)) = (field("Source"), field("Value")) else {
            continue;
        };
        match source {
            "Internet Movie Database" => ratings.imdb = numerator(value),
            "Rotten Tomatoes" => {
                ratings.rotten_tomatoes = value
                    .trim()
                    .trim_end_matches('%')
                    .parse::<f64>()
                    .ok()
                    .map(|pct| pct / 100.0)
            }
            "Metacritic" => ratings.metacritic = numerator(value),
            other => tracing::trace!(source = other, "ignoring rating source"),
        }
    }
    Ok(ratings)
}

fn numerator(value: &str) -> Option<f64> {
    value.split('/').next()?.trim().parse().ok()
}

type Entry = Vec<(String, String)>;

struct RatingsReader<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> RatingsReader<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    fn skip_ws(&mut self) {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
    }

    fn expect(&mut self, want: char) -> Result<()> {
        self.skip_ws();
        match self.chars.next() {
            Some(c) if c == want => Ok(()),
            Some(c) => Err(PipelineError::Ratings(format!("expected '{want}', found '{c}'"))),
            None => Err(PipelineError::Ratings(format!("expected '{want}', found end of input"))),
        }
    }

    /// Consumes `close` or a `,` separator; returns true once `close` is hit.
    /// A trailing comma before `close` is accepted.
    fn separator_or_close(&mut self, close: char) -> Result<bool> {
        self.skip_ws();
        match self.chars.next() {
            Some(c) if c == close => Ok(true),
            Some(',') => {
                self.skip_ws();
                Ok(self.chars.next_if_eq(&close).is_some())
            }
            Some(c) => Err(PipelineError::Ratings(format!("expected ',' or '{close}', found '{c}'"))),
            None => Err(PipelineError::Ratings("unterminated collection".to_string())),
        }
    }

    fn read_list(mut self) -> Result<Vec<Entry>> {
        self.expect('[')?;
        let mut entries = Vec::new();
        self.skip_ws();
        if self.chars.next_if_eq(&']').is_none() {
            loop {
                entries.push(self.read_dict()?);
                if self.separator_or_close(']')? {
                    break;
                }
            }
        }
        self.skip_ws();
        if let Some(c) = self.chars.next() {
            return Err(PipelineError::Ratings(format!("trailing input starting at '{c}'")));
        }
        Ok(entries)
    }

    fn read_dict(&mut self) -> Result<Entry> {
        self.expect('{')?;
        let mut entry = Vec::new();
        self.skip_ws();
        if self.chars.next_if_eq(&'}').is_some() {
            return Ok(entry);
        }
        loop {
            let key = self.read_scalar()?;
            self.expect(':')?;
            let value = self.read_scalar()?;
            entry.push((key, value));
            if self.separator_or_close('}')? {
                return Ok(entry);
            }
        }
    }

    /// A quoted string (single or double quotes) or a bare number/word.
    fn read_scalar(&mut self) -> Result<String> {
        self.skip_ws();
        match self.chars.peek().copied() {
            Some(quote @ ('\'' | '"')) => {
                self.chars.next();
                let mut out = String::new();
                loop {
                    match self.chars.next() {
                        Some('\\') => match self.chars.next() {
                            Some('n') => out.push('\n'),
                            Some('t') => out.push('\t'),
                            Some(c) => out.push(c),
                            None => break,
                        },
                        Some(c) if c == quote => return Ok(out),
                        Some(c) => out.push(c),
                        None => break,
                    }
                }
                Err(PipelineError::Ratings("unterminated string".to_string()))
            }
            Some(c) if c.is_alphanumeric() || c == '-' || c == '.' => {
                let mut out = String::new();
                while let Some(c) = self
                    .chars
                    .next_if(|c| c.is_alphanumeric() || matches!(c, '-' | '.' | '_' | '+'))
                {
                    out.push(c);
                }
                Ok(out)
            }
            Some(c) => Err(PipelineError::Ratings(format!("unexpected '{c}'"))),
            None => Err(PipelineError::Ratings("unexpected end of input".to_string())),
        }
    }
}
