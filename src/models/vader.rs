//! Rule-based compound polarity in the style of VADER.
//!
//! Each token found in the [`Lexicon`] contributes its valence, adjusted for
//! preceding boosters and negations, ALL-CAPS emphasis and a contrastive
//! "but". The sum is amplified by exclamation/question marks and squashed
//! into [-1, 1] with `x / sqrt(x^2 + ALPHA)`.

use std::path::PathBuf;

use super::lexicon::Lexicon;
use crate::core::Result;
use crate::pipelines::sentiment_analysis_pipeline::SentimentAnalysisModel;

/// Emphasis added to an ALL-CAPS word in mixed-case text.
const C_INCR: f64 = 0.733;
/// Multiplier applied to a valence preceded by a negation.
const N_SCALAR: f64 = -0.74;
/// Normalization constant approximating the max expected sum.
const ALPHA: f64 = 15.0;
/// How far back boosters and negations are looked for.
const WINDOW: usize = 3;
const BOOSTER_DAMPING: [f64; WINDOW] = [1.0, 0.95, 0.9];

#[derive(Debug)]
struct Token<'a> {
    raw: &'a str,
    lower: String,
}

impl Token<'_> {
    fn is_all_caps(&self) -> bool {
        self.raw.chars().any(char::is_alphabetic)
            && self
                .raw
                .chars()
                .filter(|c| c.is_alphabetic())
                .all(char::is_uppercase)
    }
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .map(|tok| tok.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
        .map(|tok| tok.trim_matches('\''))
        .filter(|tok| !tok.is_empty())
        .map(|raw| Token {
            raw,
            lower: raw.to_lowercase(),
        })
        .collect()
}

/// Squashes an unbounded valence sum into [-1, 1].
pub fn normalize(score: f64) -> f64 {
    let norm = score / (score * score + ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}

#[derive(Debug, Clone, Default)]
pub struct LexiconOptions {
    /// VADER-format word table replacing the built-in valences.
    pub word_file: Option<PathBuf>,
}

/// Lexicon-backed polarity scorer.
#[derive(Debug, Clone, Default)]
pub struct LexiconModel {
    lexicon: Lexicon,
}

impl LexiconModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Compound polarity of `text`, rounded to four decimals.
    pub fn compound(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }

        let caps_count = tokens.iter().filter(|t| t.is_all_caps()).count();
        let caps_differential = caps_count > 0 && caps_count < tokens.len();

        let mut sentiments: Vec<f64> = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| self.token_valence(&tokens, i, token, caps_differential))
            .collect();

        if let Some(pivot) = tokens.iter().position(|t| t.lower == "but") {
            for (i, s) in sentiments.iter_mut().enumerate() {
                if i < pivot {
                    *s *= 0.5;
                } else if i > pivot {
                    *s *= 1.5;
                }
            }
        }

        let mut sum: f64 = sentiments.iter().sum();
        if sum == 0.0 {
            return 0.0;
        }

        let emphasis = punctuation_emphasis(text);
        if sum > 0.0 {
            sum += emphasis;
        } else {
            sum -= emphasis;
        }

        (normalize(sum) * 10_000.0).round() / 10_000.0
    }

    fn token_valence(
        &self,
        tokens: &[Token<'_>],
        i: usize,
        token: &Token<'_>,
        caps_differential: bool,
    ) -> f64 {
        if self.lexicon.booster(&token.lower).is_some() {
            return 0.0;
        }
        let Some(mut valence) = self.lexicon.valence(&token.lower) else {
            return 0.0;
        };

        if caps_differential && token.is_all_caps() {
            valence += valence.signum() * C_INCR;
        }

        for dist in 1..=WINDOW.min(i) {
            let prev = &tokens[i - dist];
            if let Some(mut scalar) = self.lexicon.booster(&prev.lower) {
                if caps_differential && prev.is_all_caps() {
                    scalar += scalar.signum() * C_INCR;
                }
                valence += valence.signum() * scalar * BOOSTER_DAMPING[dist - 1];
            }
            if self.lexicon.is_negation(&prev.lower) {
                valence *= N_SCALAR;
            }
        }
        valence
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64 * 0.292;
    let questions = match text.matches('?').count() {
        0 | 1 => 0.0,
        n if n <= 3 => n as f64 * 0.18,
        _ => 0.96,
    };
    exclamations + questions
}

impl SentimentAnalysisModel for LexiconModel {
    type Options = LexiconOptions;

    fn new(options: Self::Options) -> Result<Self> {
        let lexicon = match options.word_file {
            Some(path) => Lexicon::new().with_word_file(path)?,
            None => Lexicon::new(),
        };
        Ok(Self::with_lexicon(lexicon))
    }

    fn polarity(&self, text: &str) -> f64 {
        self.compound(text)
    }
}
