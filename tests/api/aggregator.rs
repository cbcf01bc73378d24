//! tests/api/aggregator.rs
use claims::assert_ok;
use wordfreq::pipeline::{run_aggregator, run_grouped_aggregator};

fn reduce_sorted(input: &str) -> String {
    let mut out = Vec::new();
    assert_ok!(run_aggregator(input.as_bytes(), &mut out));
    String::from_utf8(out).expect("Aggregator output was not UTF-8")
}

#[test]
fn sorted_stream_yields_one_total_per_key() {
    let input = "apple\t1\napple\t1\nbanana\t1\nbanana\t1\nbanana\t1\ncherry\t1\n";
    assert_eq!(reduce_sorted(input), "apple\t2\nbanana\t3\ncherry\t1\n");
}

#[test]
fn trailing_group_is_flushed_without_a_following_key() {
    let input = "apple\t1\ncherry\t1\n";
    assert_eq!(reduce_sorted(input), "apple\t1\ncherry\t1\n");
}

#[test]
fn malformed_records_do_not_disturb_surrounding_totals() {
    let input = "apple\t1\noops\napple\t1\nword\tNaN\napple\t1\nbanana\t1\n";
    assert_eq!(reduce_sorted(input), "apple\t3\nbanana\t1\n");
}

#[test]
fn unsorted_stream_degrades_to_partial_totals() {
    // Sort-barrier precondition violated: the aggregator must emit two
    // partials for "apple" rather than merging or failing.
    let input = "apple\t1\nbanana\t1\napple\t1\n";
    assert_eq!(reduce_sorted(input), "apple\t1\nbanana\t1\napple\t1\n");
}

#[test]
fn grouped_mode_matches_sorted_mode_on_sorted_input() {
    let input = "apple\t1\napple\t1\nbanana\t1\ncherry\t1\ncherry\t1\n";

    let mut grouped = Vec::new();
    assert_ok!(run_grouped_aggregator(input.as_bytes(), &mut grouped));

    assert_eq!(String::from_utf8(grouped).unwrap(), reduce_sorted(input));
}
