//! src/aggregator.rs
use crate::record::Pair;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Idle,
    Accumulating { word: String, total: i64 },
}

/// Single-pass reducer over a stream of `(word, count)` pairs.
///
/// Precondition: the input stream is grouped by key — all pairs sharing a
/// word arrive contiguously, as delivered by an upstream sort. The
/// aggregator never re-sorts; if the precondition is violated it emits one
/// partial total per contiguous run of a key instead of one merged total.
/// That degradation is deliberate: re-sorting internally would break the
/// memory-bounded streaming contract.
///
/// Lifecycle: [`SortedGroupAggregator::new`] → [`feed`](Self::feed) once per
/// pair → [`finish`](Self::finish) exactly once at end-of-stream.
pub struct SortedGroupAggregator {
    state: State,
}

impl SortedGroupAggregator {
    pub fn new() -> Self {
        SortedGroupAggregator { state: State::Idle }
    }

    /// Folds one pair into the running group. Returns the completed total
    /// for the previous group when the incoming key differs from the current
    /// one, `None` otherwise.
    pub fn feed(&mut self, pair: Pair) -> Option<Pair> {
        match &mut self.state {
            State::Idle => {
                self.state = State::Accumulating {
                    word: pair.word,
                    total: pair.count,
                };
                None
            }
            State::Accumulating { word, total } if *word == pair.word => {
                *total += pair.count;
                None
            }
            State::Accumulating { .. } => {
                let finished = std::mem::replace(
                    &mut self.state,
                    State::Accumulating {
                        word: pair.word,
                        total: pair.count,
                    },
                );
                match finished {
                    State::Accumulating { word, total } => Some(Pair::new(word, total)),
                    State::Idle => unreachable!("matched Accumulating above"),
                }
            }
        }
    }

    /// Flushes the in-flight group at end-of-stream. `None` when no pair was
    /// ever fed.
    pub fn finish(self) -> Option<Pair> {
        match self.state {
            State::Idle => None,
            State::Accumulating { word, total } => Some(Pair::new(word, total)),
        }
    }
}

impl Default for SortedGroupAggregator {
    fn default() -> Self {
        SortedGroupAggregator::new()
    }
}

/// Full in-memory alternative to [`SortedGroupAggregator`] for inputs that
/// never went through a sort stage: keeps one running total per distinct
/// word, so it has no ordering precondition but holds every distinct key in
/// memory. Output is in ascending key order.
pub struct GroupedAggregator {
    totals: BTreeMap<String, i64>,
}

impl GroupedAggregator {
    pub fn new() -> Self {
        GroupedAggregator {
            totals: BTreeMap::new(),
        }
    }

    pub fn feed(&mut self, pair: Pair) {
        *self.totals.entry(pair.word).or_insert(0) += pair.count;
    }

    pub fn finish(self) -> impl Iterator<Item = Pair> {
        self.totals
            .into_iter()
            .map(|(word, total)| Pair::new(word, total))
    }
}

impl Default for GroupedAggregator {
    fn default() -> Self {
        GroupedAggregator::new()
    }
}
