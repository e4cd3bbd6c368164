//! Tests for configuration

#[cfg(test)]
mod tests {
    use super::super::config::*;

    #[test]
    fn test_youtube_config_defaults() {
        let config: YouTubeConfig = toml::from_str("").unwrap();
        assert_eq!(config.api_key, "");
        assert_eq!(config.base_url, "https://www.googleapis.com/youtube/v3");
        assert_eq!(config.page_delay_ms, 1000);
        assert_eq!(config.default_query, "coding tutorial");
        assert_eq!(config.max_results, 50);
    }

    #[test]
    fn test_pipeline_config_defaults() {
        let config: PipelineConfig = toml::from_str("").unwrap();
        assert_eq!(config.artifact_path, "outputs/models/best_model.json");
        assert_eq!(config.test_fraction, 0.2);
        assert_eq!(config.split_seed, 42);
    }

    #[test]
    fn test_full_config_from_toml() {
        let toml_str = r#"
[youtube]
api_key = "k"
max_results = 200
page_delay_ms = 250

[pipeline]
artifact_path = "/tmp/model.json"
test_fraction = 0.3
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.youtube.api_key, "k");
        assert_eq!(config.youtube.max_results, 200);
        assert_eq!(config.youtube.page_delay_ms, 250);
        assert_eq!(config.pipeline.artifact_path, "/tmp/model.json");
        assert_eq!(config.pipeline.test_fraction, 0.3);
        // untouched sections keep their defaults
        assert_eq!(config.pipeline.split_seed, 42);
    }

    #[test]
    fn test_empty_config_is_complete() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.pipeline.test_fraction, 0.2);
        assert!(!config.youtube.base_url.is_empty());
    }
}
