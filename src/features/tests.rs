use super::*;
use crate::types::CleanedRecord;

fn cleaned(title: &str, description: &str, tags: &str, publish_time: &str) -> CleanedRecord {
    CleanedRecord {
        video_id: "v1".to_string(),
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.to_string(),
        category_id: "27".to_string(),
        category_code: 3,
        publish_time: publish_time.to_string(),
        duration: "PT5M30S".to_string(),
        view_count: 1000.0,
        like_count: 10.0,
        comment_count: 2.0,
    }
}

#[test]
fn test_text_features() {
    let fv = &FeatureEngineer::engineer_all(&[cleaned(
        "Intro to Go",
        "",
        "go|tutorial",
        "2024-01-01T12:00:00Z",
    )])[0];
    assert_eq!(fv.title_length, 12.0);
    assert_eq!(fv.description_length, 0.0);
    assert_eq!(fv.tag_count, 2.0);
}

#[test]
fn test_tag_count_conventions() {
    assert_eq!(tag_count(""), 0);
    assert_eq!(tag_count("   "), 0);
    assert_eq!(tag_count("solo"), 1);
    assert_eq!(tag_count("a|b|c"), 3);
}

#[test]
fn test_time_features_monday_noon() {
    // 2024-01-01 is a Monday
    let fv = &FeatureEngineer::engineer_all(&[cleaned("t", "d", "", "2024-01-01T12:00:00Z")])[0];
    assert_eq!(fv.publish_hour, Some(12.0));
    assert_eq!(fv.publish_dayofweek, Some(0.0));
    assert_eq!(fv.is_weekend, Some(0.0));
    assert_eq!(fv.is_prime_time, Some(0.0));
}

#[test]
fn test_time_features_saturday_prime_time() {
    // 2024-01-06 is a Saturday
    let fv = &FeatureEngineer::engineer_all(&[cleaned("t", "d", "", "2024-01-06 20:30:00")])[0];
    assert_eq!(fv.publish_hour, Some(20.0));
    assert_eq!(fv.publish_dayofweek, Some(5.0));
    assert_eq!(fv.is_weekend, Some(1.0));
    assert_eq!(fv.is_prime_time, Some(1.0));
}

#[test]
fn test_unparseable_timestamp_propagates_missing() {
    let fv = &FeatureEngineer::engineer_all(&[cleaned("t", "d", "", "last tuesday")])[0];
    assert_eq!(fv.publish_hour, None);
    assert_eq!(fv.is_weekend, None);
    assert!(fv.columns().is_none());
    // text and sentiment features are still defined
    assert_eq!(fv.title_length, 1.0);
    assert_eq!(fv.title_sentiment, 0.0);
}

#[test]
fn test_sentiment_polarity_bounds() {
    let positive = lexicon::polarity("amazing awesome perfect tutorial");
    let negative = lexicon::polarity("worst terrible broken scam");
    let neutral = lexicon::polarity("standard library documentation");
    assert!(positive > 0.0 && positive <= 1.0);
    assert!(negative < 0.0 && negative >= -1.0);
    assert_eq!(neutral, 0.0);
}

#[test]
fn test_missing_text_scores_neutral() {
    let fv = &FeatureEngineer::engineer_all(&[cleaned("", "", "", "2024-01-01T12:00:00Z")])[0];
    assert_eq!(fv.title_sentiment, 0.0);
    assert_eq!(fv.desc_sentiment, 0.0);
    assert_eq!(fv.title_length, 0.0);
}

#[test]
fn test_engineer_all_is_total_and_deterministic() {
    let batch: Vec<CleanedRecord> = vec![
        cleaned("", "", "", ""),
        cleaned("AMAZING!!!", "worst ever", "a", "not a date"),
        cleaned("Intro to Go", "", "go|tutorial", "2024-01-01T12:00:00Z"),
    ];
    let a = FeatureEngineer::engineer_all(&batch);
    let b = FeatureEngineer::engineer_all(&batch);
    assert_eq!(a, b);
    assert_eq!(a.len(), 3);
}

#[test]
fn test_columns_are_named_and_ordered() {
    let fv = &FeatureEngineer::engineer_all(&[cleaned("t", "d", "a|b", "2024-01-01T12:00:00Z")])[0];
    let cols = fv.columns().unwrap();
    let names: Vec<&str> = cols.iter().map(|(n, _)| *n).collect();
    assert_eq!(names, crate::types::FeatureVector::COLUMN_NAMES.to_vec());
}
