//! src/lib.rs
pub mod aggregator;
pub mod configuration;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod telemetry;
pub mod tokenizer;
