//! Feature engineering: text, time and sentiment features
//!
//! Every transform here is pure, stateless and total over well-formed
//! cleaned records. The only fields that can come out missing are the
//! time-derived ones, when the publish timestamp does not parse; callers
//! drop such rows before modeling, consistent with the cleaner's
//! drop-on-missing policy.

pub mod lexicon;
#[cfg(test)]
mod tests;

use crate::types::{CleanedRecord, FeatureVector};
use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};
use tracing::debug;

/// Prime-time window: publish hour in [18, 22]
const PRIME_TIME_START: u32 = 18;
const PRIME_TIME_END: u32 = 22;

/// Stateless feature derivation
pub struct FeatureEngineer;

impl FeatureEngineer {
    /// Apply text, then time, then sentiment transforms to a cleaned batch.
    /// The transforms touch disjoint fields; the order is fixed so the
    /// pipeline is deterministic.
    pub fn engineer_all(records: &[CleanedRecord]) -> Vec<FeatureVector> {
        let out: Vec<FeatureVector> = records.iter().map(Self::engineer_one).collect();
        let missing_time = out.iter().filter(|f| f.publish_hour.is_none()).count();
        debug!(
            rows = out.len(),
            missing_time_features = missing_time,
            "engineered features"
        );
        out
    }

    fn engineer_one(r: &CleanedRecord) -> FeatureVector {
        let time = parse_publish_time(&r.publish_time);

        FeatureVector {
            video_id: r.video_id.clone(),
            category_code: r.category_code as f64,
            view_count: r.view_count,
            like_count: r.like_count,
            comment_count: r.comment_count,
            title_length: r.title.chars().count() as f64,
            description_length: r.description.chars().count() as f64,
            tag_count: tag_count(&r.tags) as f64,
            publish_hour: time.map(|t| t.hour() as f64),
            publish_dayofweek: time.map(|t| t.weekday().num_days_from_monday() as f64),
            is_weekend: time.map(|t| {
                if t.weekday().num_days_from_monday() >= 5 {
                    1.0
                } else {
                    0.0
                }
            }),
            is_prime_time: time.map(|t| {
                if (PRIME_TIME_START..=PRIME_TIME_END).contains(&t.hour()) {
                    1.0
                } else {
                    0.0
                }
            }),
            title_sentiment: lexicon::polarity(&r.title),
            desc_sentiment: lexicon::polarity(&r.description),
        }
    }
}

/// Number of `|`-delimited tags. An empty or missing tags field counts as
/// zero tags, not one empty tag.
pub fn tag_count(tags: &str) -> usize {
    let t = tags.trim();
    if t.is_empty() {
        0
    } else {
        t.split('|').count()
    }
}

/// Parse a publish timestamp: RFC-3339 first, then the naive
/// `YYYY-MM-DD HH:MM:SS` form the manual-entry surface produces.
/// Unparseable input yields `None` and the derived fields stay missing.
pub fn parse_publish_time(s: &str) -> Option<NaiveDateTime> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(t) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(t, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(t, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}
