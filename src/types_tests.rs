//! Tests for core record types

#[cfg(test)]
mod tests {
    use super::super::types::*;

    #[test]
    fn test_category_map_lookup() {
        assert_eq!(category_name(27), Some("Education"));
        assert_eq!(category_name(10), Some("Music"));
        assert_eq!(category_name(999), None);
    }

    #[test]
    fn test_raw_record_deserializes_with_missing_fields() {
        let record: RawRecord = serde_json::from_str(r#"{"video_id": "abc"}"#).unwrap();
        assert_eq!(record.video_id, "abc");
        assert_eq!(record.title, "");
        assert_eq!(record.view_count, "");
    }

    #[test]
    fn test_cleaned_to_raw_round_trips_counts() {
        let cleaned = CleanedRecord {
            video_id: "v".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            tags: "a|b".to_string(),
            category_id: "27".to_string(),
            category_code: 0,
            publish_time: "2024-01-01T12:00:00Z".to_string(),
            duration: "PT5M30S".to_string(),
            view_count: 1000.0,
            like_count: 10.0,
            comment_count: 2.0,
        };
        let raw = RawRecord::from(&cleaned);
        assert_eq!(raw.view_count, "1000");
        assert_eq!(raw.like_count, "10");
        assert_eq!(raw.comment_count, "2");
    }

    #[test]
    fn test_feature_vector_column_names_cover_present_columns() {
        let fv = FeatureVector {
            video_id: "v".to_string(),
            category_code: 1.0,
            view_count: 0.0,
            like_count: 10.0,
            comment_count: 2.0,
            title_length: 5.0,
            description_length: 0.0,
            tag_count: 2.0,
            publish_hour: Some(12.0),
            publish_dayofweek: Some(0.0),
            is_weekend: Some(0.0),
            is_prime_time: Some(0.0),
            title_sentiment: 0.0,
            desc_sentiment: 0.0,
        };
        let present: Vec<&str> = fv.present_columns().iter().map(|(n, _)| *n).collect();
        assert_eq!(present, FeatureVector::COLUMN_NAMES.to_vec());

        let mut partial = fv;
        partial.publish_hour = None;
        assert!(partial.columns().is_none());
        assert_eq!(partial.present_columns().len(), FeatureVector::COLUMN_NAMES.len() - 1);
    }
}
