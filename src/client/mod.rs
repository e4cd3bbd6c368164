//! YouTube Data API client
//!
//! Fetches video metadata in two modes: bulk search-and-fetch for building a
//! training set, and single-record lookup from a pasted video URL. Detail
//! requests are batched at the API limit of 50 ids and paginated search
//! pages are separated by a fixed delay.


use crate::config::YouTubeConfig;
use crate::error::{PredictorError, Result};
use crate::types::RawRecord;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Maximum video ids per `videos.list` call
const DETAILS_BATCH_SIZE: usize = 50;

#[derive(Clone)]
pub struct YouTubeClient {
    http: Client,
    api_key: String,
    base_url: String,
    page_delay: Duration,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchId,
}

#[derive(Debug, Deserialize)]
struct SearchId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    id: String,
    snippet: Option<Snippet>,
    statistics: Option<Statistics>,
    #[serde(rename = "contentDetails")]
    content_details: Option<ContentDetails>,
}

#[derive(Debug, Default, Deserialize)]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(rename = "categoryId", default)]
    category_id: String,
    #[serde(rename = "publishedAt", default)]
    published_at: String,
}

#[derive(Debug, Default, Deserialize)]
struct Statistics {
    #[serde(rename = "viewCount", default)]
    view_count: String,
    #[serde(rename = "likeCount", default)]
    like_count: String,
    #[serde(rename = "commentCount", default)]
    comment_count: String,
}

#[derive(Debug, Default, Deserialize)]
struct ContentDetails {
    #[serde(default)]
    duration: String,
}

impl YouTubeClient {
    pub fn new(config: &YouTubeConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_delay: Duration::from_millis(config.page_delay_ms),
        })
    }

    /// Search for up to `max_results` video ids matching a query, following
    /// pagination tokens with a fixed delay between pages.
    pub async fn search_video_ids(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        let url = format!("{}/search", self.base_url);
        let mut ids = Vec::new();
        let mut page_token: Option<String> = None;

        while ids.len() < max_results {
            let page_size = (max_results - ids.len()).min(DETAILS_BATCH_SIZE);
            let mut query_params = vec![
                ("part".to_string(), "id".to_string()),
                ("type".to_string(), "video".to_string()),
                ("q".to_string(), query.to_string()),
                ("maxResults".to_string(), page_size.to_string()),
                ("key".to_string(), self.api_key.clone()),
            ];
            if let Some(token) = &page_token {
                query_params.push(("pageToken".to_string(), token.clone()));
            }

            let resp: SearchResponse = self
                .http
                .get(&url)
                .query(&query_params)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            let page_ids: Vec<String> =
                resp.items.into_iter().filter_map(|i| i.id.video_id).collect();
            debug!(page_ids = page_ids.len(), total = ids.len(), "search page fetched");
            if page_ids.is_empty() {
                break;
            }
            ids.extend(page_ids);

            page_token = resp.next_page_token;
            if page_token.is_none() {
                break;
            }
            tokio::time::sleep(self.page_delay).await;
        }

        ids.truncate(max_results);
        Ok(ids)
    }

    /// Fetch full metadata for a list of video ids, batched at the API
    /// limit, with the fixed delay between batches.
    pub async fn get_video_details(&self, ids: &[String]) -> Result<Vec<RawRecord>> {
        let url = format!("{}/videos", self.base_url);
        let mut records = Vec::with_capacity(ids.len());

        for (batch_idx, batch) in ids.chunks(DETAILS_BATCH_SIZE).enumerate() {
            if batch_idx > 0 {
                tokio::time::sleep(self.page_delay).await;
            }
            let resp: VideosResponse = self
                .http
                .get(&url)
                .query(&[
                    ("part", "snippet,statistics,contentDetails"),
                    ("id", &batch.join(",")),
                    ("key", &self.api_key),
                ])
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            records.extend(resp.items.into_iter().map(to_raw_record));
        }

        debug!(requested = ids.len(), fetched = records.len(), "video details fetched");
        Ok(records)
    }

    /// Bulk acquisition: search then fetch details.
    pub async fn fetch(&self, query: &str, max_results: usize) -> Result<Vec<RawRecord>> {
        let ids = self.search_video_ids(query, max_results).await?;
        if ids.is_empty() {
            return Err(PredictorError::ApiResponse(format!(
                "search returned no videos for query '{query}'"
            )));
        }
        self.get_video_details(&ids).await
    }

    /// Single-record acquisition from a pasted video URL.
    pub async fn fetch_by_url(&self, url: &str) -> Result<RawRecord> {
        let id = parse_video_id(url)?;
        let records = self.get_video_details(&[id.clone()]).await?;
        records
            .into_iter()
            .next()
            .ok_or(PredictorError::VideoNotFound(id))
    }
}

fn to_raw_record(item: VideoItem) -> RawRecord {
    let snippet = item.snippet.unwrap_or_default();
    let stats = item.statistics.unwrap_or_default();
    let content = item.content_details.unwrap_or_default();

    RawRecord {
        video_id: item.id,
        title: snippet.title,
        description: snippet.description,
        tags: snippet.tags.join("|"),
        category_id: snippet.category_id,
        publish_time: snippet.published_at,
        duration: content.duration,
        view_count: stats.view_count,
        like_count: stats.like_count,
        comment_count: stats.comment_count,
    }
}

/// Extract a video id from the URL forms users paste:
/// `youtu.be/<id>`, `.../watch?v=<id>`, `.../embed/<id>`, `.../v/<id>`.
pub fn parse_video_id(url: &str) -> Result<String> {
    let trimmed = url.trim();
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);

    let id = if let Some(after) = rest.strip_prefix("youtu.be/") {
        Some(take_id(after))
    } else if let Some(pos) = rest.find("watch?") {
        rest[pos + "watch?".len()..]
            .split('&')
            .find_map(|pair| pair.strip_prefix("v="))
            .map(take_id)
    } else if let Some(pos) = rest.find("/embed/") {
        Some(take_id(&rest[pos + "/embed/".len()..]))
    } else if let Some(pos) = rest.find("/v/") {
        Some(take_id(&rest[pos + "/v/".len()..]))
    } else {
        None
    };

    match id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(PredictorError::InvalidUrl(url.to_string())),
    }
}

/// A video id runs until the first character outside its alphabet
fn take_id(s: &str) -> String {
    s.chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}
