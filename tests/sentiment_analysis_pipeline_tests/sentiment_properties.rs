use proptest::prelude::*;
use review_sentiment::pipelines::sentiment_analysis_pipeline::*;

proptest! {
    #[test]
    fn percentages_sum_to_one_hundred(labels in prop::collection::vec(0u8..3, 1..200)) {
        let counts = labels.iter().fold(LabelCounts::default(), |counts, l| {
            counts.record(match l {
                0 => SentimentLabel::Positive,
                1 => SentimentLabel::Negative,
                _ => SentimentLabel::Neutral,
            })
        });
        let summary = counts.summarize("Z");

        prop_assert_eq!(summary.total_reviews, labels.len());
        let total = summary.positive_pct + summary.negative_pct + summary.neutral_pct;
        prop_assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn compound_scores_stay_in_range(text in "[a-zA-Z!? ,.']{0,80}") {
        let model = LexiconModel::new();
        let compound = model.compound(&text);
        prop_assert!((-1.0..=1.0).contains(&compound));
    }
}
