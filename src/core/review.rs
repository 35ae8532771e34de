use std::collections::HashMap;

/// A single review of a movie, in the order it appeared in its block.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Review {
    movie_title: String,
    ordinal: usize,
    text: String,
}

impl Review {
    pub fn new(movie_title: &str, ordinal: usize, text: &str) -> Self {
        Self {
            movie_title: movie_title.to_string(),
            ordinal,
            text: text.to_string(),
        }
    }

    pub fn movie_title(&self) -> &str {
        &self.movie_title
    }

    /// 1-based position within the movie's block.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// All review texts collected under one `=== Reviews for <Title> ===` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieReviews {
    pub title: String,
    pub reviews: Vec<String>,
}

impl MovieReviews {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            reviews: Vec::new(),
        }
    }

    /// Materializes the block as [`Review`] values numbered from 1.
    pub fn iter_reviews(&self) -> impl Iterator<Item = Review> + '_ {
        self.reviews
            .iter()
            .enumerate()
            .map(|(i, text)| Review::new(&self.title, i + 1, text))
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

/// Counters for lines the parser did not turn into reviews.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ParseStats {
    /// Non-blank lines matching neither the delimiter nor the review pattern.
    pub malformed_lines: usize,
    /// Review lines seen before the first delimiter.
    pub orphaned_reviews: usize,
    /// Review lines whose text was empty after stripping the prefix.
    pub empty_reviews: usize,
}

impl ParseStats {
    pub fn skipped_lines(&self) -> usize {
        self.malformed_lines + self.orphaned_reviews + self.empty_reviews
    }
}

/// Title to ordered reviews mapping, iterated in first-delimiter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewCorpus {
    movies: Vec<MovieReviews>,
    index: HashMap<String, usize>,
    stats: ParseStats,
}

impl ReviewCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a block for `title`. A title seen before has its reviews
    /// cleared but keeps its original position.
    pub fn start_movie(&mut self, title: &str) -> usize {
        if let Some(&idx) = self.index.get(title) {
            self.movies[idx].reviews.clear();
            return idx;
        }
        let idx = self.movies.len();
        self.movies.push(MovieReviews::new(title));
        self.index.insert(title.to_string(), idx);
        idx
    }

    pub(crate) fn push_review(&mut self, movie_idx: usize, text: &str) {
        self.movies[movie_idx].reviews.push(text.to_string());
    }

    pub(crate) fn stats_mut(&mut self) -> &mut ParseStats {
        &mut self.stats
    }

    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    pub fn get(&self, title: &str) -> Option<&[String]> {
        self.index
            .get(title)
            .map(|&idx| self.movies[idx].reviews.as_slice())
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|m| m.title.as_str())
    }

    pub fn movies(&self) -> &[MovieReviews] {
        &self.movies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieReviews> {
        self.movies.iter()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn review_count(&self) -> usize {
        self.movies.iter().map(|m| m.reviews.len()).sum()
    }
}

impl<'a> IntoIterator for &'a ReviewCorpus {
    type Item = &'a MovieReviews;
    type IntoIter = std::slice::Iter<'a, MovieReviews>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> FromIterator<(T, Vec<S>)> for ReviewCorpus
where
    T: AsRef<str>,
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (T, Vec<S>)>>(iter: I) -> Self {
        let mut corpus = ReviewCorpus::new();
        for (title, reviews) in iter {
            let idx = corpus.start_movie(title.as_ref());
            for review in reviews {
                corpus.push_review(idx, review.as_ref());
            }
        }
        corpus
    }
}
