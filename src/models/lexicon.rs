//! # Polarity Lexicon
//!
//! Word valences on the VADER scale (roughly -4 to +4), plus the negation
//! and booster word lists the scorer consults.

use std::collections::HashMap;
use std::path::Path;

use crate::core::{PipelineError, Result};

/// Increment applied by a booster such as "very".
pub const B_INCR: f64 = 0.293;
/// Decrement applied by a dampener such as "slightly".
pub const B_DECR: f64 = -0.293;

/// Word-level polarity lexicon.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Lowercased word to valence
    words: HashMap<String, f64>,
    /// Negation words
    negations: Vec<String>,
    /// Booster/dampener words and their scalar
    boosters: HashMap<String, f64>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Create the built-in lexicon tuned for film reviews
    pub fn new() -> Self {
        let positive_words = vec![
            ("good", 1.9),
            ("great", 3.1),
            ("excellent", 2.7),
            ("amazing", 2.8),
            ("awesome", 3.1),
            ("fantastic", 2.6),
            ("wonderful", 2.7),
            ("brilliant", 2.8),
            ("superb", 3.1),
            ("outstanding", 3.0),
            ("perfect", 2.7),
            ("beautiful", 2.9),
            ("beautifully", 2.7),
            ("stunning", 2.1),
            ("love", 3.2),
            ("loved", 2.9),
            ("loves", 2.7),
            ("lovely", 2.8),
            ("like", 2.0),
            ("liked", 1.8),
            ("enjoy", 2.2),
            ("enjoyed", 2.3),
            ("enjoyable", 1.9),
            ("fun", 2.3),
            ("funny", 1.9),
            ("hilarious", 1.7),
            ("best", 3.2),
            ("better", 1.9),
            ("nice", 1.8),
            ("fine", 0.8),
            ("entertaining", 1.5),
            ("engaging", 1.4),
            ("masterpiece", 3.1),
            ("masterful", 2.8),
            ("epic", 1.9),
            ("impressive", 2.3),
            ("powerful", 1.8),
            ("moving", 1.4),
            ("touching", 1.5),
            ("charming", 2.8),
            ("clever", 1.8),
            ("smart", 1.7),
            ("fresh", 1.3),
            ("solid", 1.3),
            ("strong", 2.3),
            ("memorable", 2.0),
            ("recommend", 1.5),
            ("recommended", 1.8),
            ("worth", 0.9),
            ("happy", 2.7),
            ("glad", 2.0),
            ("joy", 2.8),
            ("delight", 2.9),
            ("delightful", 2.8),
            ("thrilling", 2.1),
            ("exciting", 2.2),
            ("gripping", 1.6),
            ("spectacular", 2.6),
            ("incredible", 2.0),
            ("favorite", 2.0),
            ("win", 2.8),
            ("won", 2.7),
            ("success", 2.7),
            ("successful", 2.8),
            ("haunting", 0.8),
            ("intense", 0.8),
            ("wow", 2.8),
            ("yes", 1.7),
            ("interesting", 1.7),
            ("inspiring", 2.4),
            ("genius", 2.5),
            ("pleasant", 2.3),
            ("satisfying", 2.0),
            ("thoughtful", 1.6),
            ("well", 1.1),
            ("top", 0.8),
            ("okay", 0.9),
            ("ok", 1.2),
            ("cool", 1.3),
            ("flawless", 2.9),
            ("award", 2.5),
            ("triumph", 2.7),
            ("hope", 1.9),
            ("care", 2.2),
            ("laugh", 2.6),
            ("laughed", 2.0),
            ("smile", 1.5),
        ];

        let negative_words = vec![
            ("bad", -2.5),
            ("terrible", -2.1),
            ("awful", -2.0),
            ("horrible", -2.5),
            ("worst", -3.1),
            ("worse", -2.1),
            ("boring", -1.3),
            ("bored", -1.1),
            ("dull", -1.7),
            ("poor", -2.1),
            ("poorly", -1.7),
            ("weak", -1.9),
            ("mess", -1.5),
            ("messy", -1.2),
            ("waste", -1.8),
            ("wasted", -2.2),
            ("disappointing", -2.2),
            ("disappointed", -1.9),
            ("disappointment", -2.3),
            ("hate", -2.7),
            ("hated", -3.2),
            ("stupid", -2.4),
            ("dumb", -2.3),
            ("annoying", -1.7),
            ("painful", -1.9),
            ("lame", -1.8),
            ("mediocre", -1.0),
            ("forgettable", -1.2),
            ("predictable", -0.6),
            ("pointless", -1.7),
            ("confusing", -1.3),
            ("confused", -1.3),
            ("tedious", -1.9),
            ("sad", -2.1),
            ("angry", -2.3),
            ("ugly", -2.3),
            ("fail", -2.5),
            ("failed", -2.3),
            ("failure", -2.3),
            ("flop", -1.4),
            ("problem", -1.7),
            ("problems", -1.7),
            ("wrong", -2.1),
            ("nonsense", -1.7),
            ("ridiculous", -1.5),
            ("cringe", -1.9),
            ("unwatchable", -2.6),
            ("overrated", -1.5),
            ("bland", -1.4),
            ("shallow", -1.2),
            ("slow", -0.7),
            ("lacking", -1.3),
            ("lacks", -1.3),
            ("sucks", -1.5),
            ("garbage", -2.0),
            ("trash", -2.0),
            ("unfortunately", -1.5),
            ("kill", -3.7),
            ("killed", -3.5),
            ("death", -2.9),
            ("dead", -3.3),
            ("war", -2.9),
            ("fear", -2.2),
            ("scary", -2.2),
            ("horror", -2.7),
            ("violent", -2.9),
            ("cry", -2.1),
            ("tragic", -3.4),
            ("no", -1.2),
            ("miss", -0.6),
            ("missed", -1.2),
            ("lost", -1.3),
            ("loss", -1.3),
            ("exhausting", -1.5),
            ("bloated", -1.1),
            ("hollow", -1.1),
            ("insult", -2.3),
            ("offensive", -2.0),
            ("shame", -2.1),
            ("unfunny", -1.9),
            ("clumsy", -1.6),
            ("cheap", -0.9),
            ("worthless", -1.9),
        ];

        let mut words = HashMap::new();
        for (word, score) in positive_words.into_iter().chain(negative_words) {
            words.insert(word.to_string(), score);
        }

        let negations = vec![
            "not", "never", "neither", "nor", "nobody", "nothing", "nowhere", "none",
            "cannot", "cant", "can't", "don't", "dont", "doesn't", "doesnt", "didn't",
            "didnt", "won't", "wont", "wouldn't", "wouldnt", "shouldn't", "shouldnt",
            "couldn't", "couldnt", "isn't", "isnt", "aren't", "arent", "wasn't", "wasnt",
            "weren't", "werent", "hardly", "barely", "scarcely", "without", "ain't", "aint",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let mut boosters = HashMap::new();
        for word in [
            "absolutely", "amazingly", "completely", "deeply", "especially",
            "exceptionally", "extremely", "fully", "greatly", "highly", "hugely",
            "incredibly", "intensely", "really", "remarkably", "so", "such",
            "thoroughly", "totally", "truly", "utterly", "very", "most", "more",
            "super", "particularly", "purely", "quite", "enormously", "entirely",
        ] {
            boosters.insert(word.to_string(), B_INCR);
        }
        for word in [
            "almost", "barely", "hardly", "kinda", "less", "little", "marginally",
            "occasionally", "partly", "slightly", "somewhat", "sorta", "scarcely",
        ] {
            boosters.insert(word.to_string(), B_DECR);
        }

        Self {
            words,
            negations,
            boosters,
        }
    }

    /// Replace the word valences with a VADER-format lexicon file.
    ///
    /// Each non-empty line is `token<TAB>mean<TAB>...`; only the first two
    /// fields are used. Negation and booster lists are kept.
    pub fn with_word_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PipelineError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))?;
        self.words = parse_word_table(&contents);
        tracing::info!("Loaded {} lexicon entries from {}", self.words.len(), path.display());
        Ok(self)
    }

    /// Get valence for a word
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Check if a word is a negation
    pub fn is_negation(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.negations.contains(&lower) || lower.ends_with("n't")
    }

    /// Booster scalar for a word, if it is one
    pub fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(&word.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn parse_word_table(contents: &str) -> HashMap<String, f64> {
    contents
        .lines()
        .filter_map(|line| {
            let mut fields = line.split('\t');
            let token = fields.next()?.trim();
            let mean = fields.next()?.trim().parse::<f64>().ok()?;
            (!token.is_empty()).then(|| (token.to_lowercase(), mean))
        })
        .collect()
}
