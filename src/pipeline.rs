//! src/pipeline.rs
use crate::aggregator::{GroupedAggregator, SortedGroupAggregator};
use crate::record::Pair;
use crate::tokenizer::emit_pairs;
use anyhow::Context;
use std::io::{BufRead, Write};

/// Map stage: reads raw text lines and writes one `word\t1` record per
/// extracted token. Stateless; lines that yield no tokens write nothing.
/// Read and write failures are fatal and propagated.
#[tracing::instrument(name = "Run tokenizer stage", skip_all)]
pub fn run_tokenizer<R: BufRead, W: Write>(reader: R, mut writer: W) -> anyhow::Result<()> {
    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        for pair in emit_pairs(&line) {
            writeln!(writer, "{pair}").context("Failed to write pair record")?;
        }
    }
    writer.flush().context("Failed to flush tokenizer output")?;
    Ok(())
}

/// Reduce stage over a stream already grouped by key (see
/// [`SortedGroupAggregator`] for the contiguity precondition). Writes one
/// `word\ttotal` record per key run, in input run order. Malformed records
/// are skipped without touching the running total; read failures are fatal.
#[tracing::instrument(name = "Run aggregator stage", skip_all)]
pub fn run_aggregator<R: BufRead, W: Write>(reader: R, mut writer: W) -> anyhow::Result<()> {
    let mut aggregator = SortedGroupAggregator::new();
    for line in reader.lines() {
        let line = line.context("Failed to read record line")?;
        let pair = match Pair::parse(&line) {
            Ok(pair) => pair,
            Err(error) => {
                tracing::debug!(%line, %error, "Skipping malformed record");
                continue;
            }
        };
        if let Some(finished) = aggregator.feed(pair) {
            writeln!(writer, "{finished}").context("Failed to write group total")?;
        }
    }
    if let Some(finished) = aggregator.finish() {
        writeln!(writer, "{finished}").context("Failed to write final group total")?;
    }
    writer.flush().context("Failed to flush aggregator output")?;
    Ok(())
}

/// Reduce stage without the ordering precondition: totals are held in memory
/// per distinct key and written in key order at end-of-stream. Same
/// malformed-record policy as [`run_aggregator`].
#[tracing::instrument(name = "Run grouped aggregator stage", skip_all)]
pub fn run_grouped_aggregator<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
) -> anyhow::Result<()> {
    let mut aggregator = GroupedAggregator::new();
    for line in reader.lines() {
        let line = line.context("Failed to read record line")?;
        match Pair::parse(&line) {
            Ok(pair) => aggregator.feed(pair),
            Err(error) => {
                tracing::debug!(%line, %error, "Skipping malformed record");
            }
        }
    }
    for total in aggregator.finish() {
        writeln!(writer, "{total}").context("Failed to write group total")?;
    }
    writer.flush().context("Failed to flush aggregator output")?;
    Ok(())
}

/// Single-process run of the whole job: tokenize, sort the pairs in memory
/// in place of the external sort barrier, then aggregate. Holds all pairs in
/// memory, so this is for local corpora, not the streaming deployment.
#[tracing::instrument(name = "Run local pipeline", skip_all)]
pub fn run_local<R: BufRead, W: Write>(reader: R, mut writer: W) -> anyhow::Result<()> {
    let mut pairs: Vec<Pair> = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        pairs.extend(emit_pairs(&line));
    }
    pairs.sort_by(|a, b| a.word.cmp(&b.word));

    let mut aggregator = SortedGroupAggregator::new();
    for pair in pairs {
        if let Some(finished) = aggregator.feed(pair) {
            writeln!(writer, "{finished}").context("Failed to write group total")?;
        }
    }
    if let Some(finished) = aggregator.finish() {
        writeln!(writer, "{finished}").context("Failed to write final group total")?;
    }
    writer.flush().context("Failed to flush pipeline output")?;
    Ok(())
}
