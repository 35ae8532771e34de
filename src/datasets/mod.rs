//! Movie metadata tables consumed alongside the review sentiment.

pub mod financials;
pub mod ratings;

pub use financials::{load_financials, read_financials, MovieFinancials, REVENUE_COLUMNS};
pub use ratings::{parse_omdb_ratings, OmdbRatings};
