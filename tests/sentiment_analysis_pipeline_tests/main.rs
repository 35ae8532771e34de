// Integration tests for the sentiment analysis pipeline
// This is a separate crate that tests the public API

mod basic_sentiment_analysis;
mod fixed_model;
mod lexicon_sentiment_analysis;
mod sentiment_properties;
