// Integration tests for the revenue correlation pipeline
// This is a separate crate that tests the public API

mod basic_revenue_correlation;
