use anyhow::Result;
use review_sentiment::pipelines::sentiment_analysis_pipeline::*;

fn main() -> Result<()> {
    println!("Building pipeline...");

    let pipeline = SentimentAnalysisPipelineBuilder::lexicon().build()?;

    println!("Pipeline built successfully.");

    let text = "This film was absolutely wonderful, but the ending was a bit slow!";

    let result = pipeline.predict(text);

    println!("\n=== Sentiment Analysis Result ===");
    println!("Text: \"{}\"", text);
    println!("Sentiment: {} (compound: {:.4})", result.label, result.compound);

    Ok(())
}
