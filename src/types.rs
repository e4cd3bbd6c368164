//! Core record types shared across the pipeline
//!
//! A record moves through three shapes: `RawRecord` as acquired from the API
//! or a CSV upload, `CleanedRecord` after coercion and encoding, and
//! `FeatureVector` once the derived features have been attached.

use serde::{Deserialize, Serialize};

/// YouTube category id → human-readable name
pub const CATEGORY_MAP: &[(u32, &str)] = &[
    (1, "Film & Animation"),
    (2, "Autos & Vehicles"),
    (10, "Music"),
    (15, "Pets & Animals"),
    (17, "Sports"),
    (18, "Short Movies"),
    (19, "Travel & Events"),
    (20, "Gaming"),
    (21, "Videoblogging"),
    (22, "People & Blogs"),
    (23, "Comedy"),
    (24, "Entertainment"),
    (25, "News & Politics"),
    (26, "Howto & Style"),
    (27, "Education"),
    (28, "Science & Technology"),
    (29, "Nonprofits & Activism"),
    (30, "Movies"),
    (31, "Anime/Animation"),
    (32, "Action/Adventure"),
    (33, "Classics"),
    (34, "Comedy (Film)"),
    (35, "Documentary"),
    (36, "Drama"),
    (37, "Family"),
    (38, "Foreign"),
    (39, "Horror"),
    (40, "Sci-Fi/Fantasy"),
    (41, "Thriller"),
    (42, "Shorts"),
    (43, "Shows"),
    (44, "Trailers"),
];

/// Look up a category name by id
pub fn category_name(id: u32) -> Option<&'static str> {
    CATEGORY_MAP.iter().find(|(k, _)| *k == id).map(|(_, v)| *v)
}

/// One video's metadata as acquired from the source.
///
/// Count fields are kept as raw strings because the YouTube statistics API
/// returns them that way and CSV uploads may contain garbage; the cleaner owns
/// numeric coercion. Missing optional fields default to the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawRecord {
    pub video_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// `|`-delimited tag list
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub category_id: String,
    /// RFC-3339 or `YYYY-MM-DD HH:MM:SS`
    #[serde(default)]
    pub publish_time: String,
    /// ISO-8601 duration, e.g. `PT5M30S`
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub view_count: String,
    #[serde(default)]
    pub like_count: String,
    #[serde(default)]
    pub comment_count: String,
}

/// A record that survived cleaning: counts coerced, duplicates removed.
///
/// `category_code` starts at 0 and is rewritten by
/// [`crate::cleaner::CategoryEncoder::encode_records`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedRecord {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub tags: String,
    pub category_id: String,
    pub category_code: u32,
    pub publish_time: String,
    pub duration: String,
    pub view_count: f64,
    pub like_count: f64,
    pub comment_count: f64,
}

impl From<&CleanedRecord> for RawRecord {
    fn from(r: &CleanedRecord) -> Self {
        RawRecord {
            video_id: r.video_id.clone(),
            title: r.title.clone(),
            description: r.description.clone(),
            tags: r.tags.clone(),
            category_id: r.category_id.clone(),
            publish_time: r.publish_time.clone(),
            duration: r.duration.clone(),
            view_count: format_count(r.view_count),
            like_count: format_count(r.like_count),
            comment_count: format_count(r.comment_count),
        }
    }
}

fn format_count(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// A cleaned record with all derived features attached.
///
/// Time-derived fields are `None` when the publish timestamp did not parse;
/// such rows are excluded when the numeric matrix is assembled, consistent
/// with the cleaner's drop-on-missing policy.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub video_id: String,
    pub category_code: f64,
    pub view_count: f64,
    pub like_count: f64,
    pub comment_count: f64,
    pub title_length: f64,
    pub description_length: f64,
    pub tag_count: f64,
    pub publish_hour: Option<f64>,
    pub publish_dayofweek: Option<f64>,
    pub is_weekend: Option<f64>,
    pub is_prime_time: Option<f64>,
    pub title_sentiment: f64,
    pub desc_sentiment: f64,
}

impl FeatureVector {
    /// Canonical feature column order used when assembling training matrices.
    /// The identifier, raw text, timestamp and duration columns are already
    /// gone at this point; `view_count` is the target, not a feature.
    pub const COLUMN_NAMES: [&'static str; 12] = [
        "category_code",
        "like_count",
        "comment_count",
        "title_length",
        "description_length",
        "tag_count",
        "publish_hour",
        "publish_dayofweek",
        "is_weekend",
        "is_prime_time",
        "title_sentiment",
        "desc_sentiment",
    ];

    /// The columns that are defined for this row, by name. Time-derived
    /// columns are absent when the publish timestamp did not parse.
    pub fn present_columns(&self) -> Vec<(&'static str, f64)> {
        let mut cols = vec![
            ("category_code", self.category_code),
            ("like_count", self.like_count),
            ("comment_count", self.comment_count),
            ("title_length", self.title_length),
            ("description_length", self.description_length),
            ("tag_count", self.tag_count),
        ];
        if let Some(v) = self.publish_hour {
            cols.push(("publish_hour", v));
        }
        if let Some(v) = self.publish_dayofweek {
            cols.push(("publish_dayofweek", v));
        }
        if let Some(v) = self.is_weekend {
            cols.push(("is_weekend", v));
        }
        if let Some(v) = self.is_prime_time {
            cols.push(("is_prime_time", v));
        }
        cols.push(("title_sentiment", self.title_sentiment));
        cols.push(("desc_sentiment", self.desc_sentiment));
        cols
    }

    /// Named numeric columns, or `None` if a time-derived field is missing.
    pub fn columns(&self) -> Option<Vec<(&'static str, f64)>> {
        Some(vec![
            ("category_code", self.category_code),
            ("like_count", self.like_count),
            ("comment_count", self.comment_count),
            ("title_length", self.title_length),
            ("description_length", self.description_length),
            ("tag_count", self.tag_count),
            ("publish_hour", self.publish_hour?),
            ("publish_dayofweek", self.publish_dayofweek?),
            ("is_weekend", self.is_weekend?),
            ("is_prime_time", self.is_prime_time?),
            ("title_sentiment", self.title_sentiment),
            ("desc_sentiment", self.desc_sentiment),
        ])
    }
}
