// Integration tests for the flat-file writers

mod sentiment_outputs;
