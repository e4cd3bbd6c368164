//! Data cleaning: dedup, numeric coercion, categorical encoding, splitting
//!
//! Cleaning fails silently by omission: a row that cannot be coerced is
//! excluded, never patched with a default. The one sanctioned exception is
//! the inference path, where an absent view count is not an error (the target
//! is unknown at prediction time) and coerces to zero.


use crate::types::{CleanedRecord, RawRecord};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

pub const DEFAULT_TEST_FRACTION: f64 = 0.2;
pub const DEFAULT_SPLIT_SEED: u64 = 42;

/// Stateless cleaning operations
pub struct Cleaner;

impl Cleaner {
    /// Clean a training batch: dedup, coerce counts, drop rows with any
    /// unparseable count. First occurrence of a duplicate wins, so output
    /// order is stable across repeated calls with the same input.
    pub fn clean(records: &[RawRecord]) -> Vec<CleanedRecord> {
        Self::clean_inner(records, false)
    }

    /// Clean an inference batch: identical to [`Cleaner::clean`] except that
    /// an absent or unparseable view count coerces to 0 instead of dropping
    /// the row.
    pub fn clean_for_inference(records: &[RawRecord]) -> Vec<CleanedRecord> {
        Self::clean_inner(records, true)
    }

    fn clean_inner(records: &[RawRecord], default_view_count: bool) -> Vec<CleanedRecord> {
        let mut seen: HashSet<&RawRecord> = HashSet::with_capacity(records.len());
        let mut out = Vec::with_capacity(records.len());
        let mut dropped = 0usize;

        for r in records {
            if !seen.insert(r) {
                continue;
            }
            if r.video_id.is_empty() {
                dropped += 1;
                continue;
            }
            let view_count = match parse_count(&r.view_count) {
                Some(v) => v,
                None if default_view_count => 0.0,
                None => {
                    dropped += 1;
                    continue;
                }
            };
            let (Some(like_count), Some(comment_count)) =
                (parse_count(&r.like_count), parse_count(&r.comment_count))
            else {
                dropped += 1;
                continue;
            };

            out.push(CleanedRecord {
                video_id: r.video_id.clone(),
                title: r.title.clone(),
                description: r.description.clone(),
                tags: r.tags.clone(),
                category_id: r.category_id.clone(),
                category_code: 0,
                publish_time: r.publish_time.clone(),
                duration: r.duration.clone(),
                view_count,
                like_count,
                comment_count,
            });
        }

        debug!(
            input = records.len(),
            kept = out.len(),
            dropped,
            duplicates = records.len() - out.len() - dropped,
            "cleaned record batch"
        );
        out
    }

    /// Deterministic random partition into (train, test).
    ///
    /// Same seed, same input ordering and size → same split.
    pub fn split<T: Clone>(records: &[T], test_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
        let mut indices: Vec<usize> = (0..records.len()).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let n_test = ((records.len() as f64) * test_fraction).ceil() as usize;
        let n_test = n_test.min(records.len());

        let test: Vec<T> = indices[..n_test].iter().map(|&i| records[i].clone()).collect();
        let train: Vec<T> = indices[n_test..].iter().map(|&i| records[i].clone()).collect();
        (train, test)
    }
}

fn parse_count(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}

/// Maps distinct category strings to dense integer codes.
///
/// Codes are assigned in first-seen-during-fit order. The fitted vocabulary
/// is serialized as part of the trained artifact and reused verbatim at
/// inference; a value never seen during fit maps to the reserved
/// out-of-vocabulary code `vocab.len()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryEncoder {
    vocab: Vec<String>,
}

impl CategoryEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit the vocabulary from the `category_id` column, replacing any
    /// previous fit.
    pub fn fit(&mut self, records: &[CleanedRecord]) {
        self.vocab.clear();
        for r in records {
            if !self.vocab.iter().any(|v| v == &r.category_id) {
                self.vocab.push(r.category_id.clone());
            }
        }
        debug!(categories = self.vocab.len(), "fitted category encoder");
    }

    /// Code for a fitted value, if present in the vocabulary.
    pub fn code(&self, value: &str) -> Option<u32> {
        self.vocab.iter().position(|v| v == value).map(|i| i as u32)
    }

    /// Reserved code for values outside the fitted vocabulary.
    pub fn unknown_code(&self) -> u32 {
        self.vocab.len() as u32
    }

    pub fn len(&self) -> usize {
        self.vocab.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocab.is_empty()
    }

    /// Rewrite `category_code` in place using the fitted vocabulary.
    pub fn encode_records(&self, records: &mut [CleanedRecord]) {
        for r in records.iter_mut() {
            r.category_code = self.code(&r.category_id).unwrap_or_else(|| {
                debug!(category = %r.category_id, "category unseen during fit, using OOV code");
                self.unknown_code()
            });
        }
    }

    /// Fit on the batch, then encode it.
    pub fn fit_encode(&mut self, records: &mut [CleanedRecord]) {
        self.fit(records);
        self.encode_records(records);
    }
}
