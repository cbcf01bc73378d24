//! tests/api/pipeline.rs
use crate::helpers::small_corpus;
use claims::assert_ok;
use wordfreq::pipeline::{run_aggregator, run_local, run_tokenizer};
use wordfreq::record::Pair;
use wordfreq::tokenizer::tokenize;

/// Runs map, an external-style sort of the records, then reduce.
fn run_staged(corpus: &str) -> Vec<Pair> {
    let mut mapped = Vec::new();
    assert_ok!(run_tokenizer(corpus.as_bytes(), &mut mapped));

    let mut records: Vec<&str> = std::str::from_utf8(&mapped)
        .expect("Map output was not UTF-8")
        .lines()
        .collect();
    records.sort_unstable();
    let sorted = records.join("\n");

    let mut reduced = Vec::new();
    assert_ok!(run_aggregator(sorted.as_bytes(), &mut reduced));
    String::from_utf8(reduced)
        .expect("Reduce output was not UTF-8")
        .lines()
        .map(|line| Pair::parse(line).expect("Reduce emitted a malformed record"))
        .collect()
}

#[test]
fn total_count_is_conserved_across_the_pipeline() {
    let corpus = small_corpus();
    let tokens_emitted: i64 = corpus.lines().map(|line| tokenize(line).count() as i64).sum();

    let totals = run_staged(&corpus);
    let summed: i64 = totals.iter().map(|pair| pair.count).sum();

    assert_eq!(summed, tokens_emitted);
}

#[test]
fn each_key_appears_exactly_once_after_a_real_sort() {
    let totals = run_staged(&small_corpus());
    let mut words: Vec<&str> = totals.iter().map(|pair| pair.word.as_str()).collect();
    let distinct = words.len();
    words.dedup();
    assert_eq!(words.len(), distinct);
}

#[test]
fn staged_run_and_local_run_agree() {
    let corpus = small_corpus();
    let staged = run_staged(&corpus);

    let mut local = Vec::new();
    assert_ok!(run_local(corpus.as_bytes(), &mut local));
    let local: Vec<Pair> = String::from_utf8(local)
        .unwrap()
        .lines()
        .map(|line| Pair::parse(line).expect("Local run emitted a malformed record"))
        .collect();

    assert_eq!(staged, local);
}

#[test]
fn known_corpus_produces_known_totals() {
    let totals = run_staged(&small_corpus());
    let the = totals
        .iter()
        .find(|pair| pair.word == "the")
        .expect("Corpus contains 'the'");
    assert_eq!(the.count, 4);
    let fox = totals
        .iter()
        .find(|pair| pair.word == "fox")
        .expect("Corpus contains 'fox'");
    assert_eq!(fox.count, 2);
}
