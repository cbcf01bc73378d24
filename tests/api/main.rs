//! tests/api/main.rs
mod aggregator;
mod pipeline;
