//! Video lookup against the YouTube Data API v3.

use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;

use crate::error::LookupError;
use crate::youtube_endpoint;

/// Discriminator for a playable video result, as opposed to a channel or
/// playlist result.
const VIDEO_KIND: &str = "youtube#video";

const MAX_RESULTS: u8 = 20;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ResourceId,
}

#[derive(Debug, Deserialize)]
struct ResourceId {
    kind: String,
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

pub struct YoutubeClient {
    client: Client,
    key: String,
}

impl YoutubeClient {
    pub fn new(key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .expect("failed to build HTTP client");
        Self { client, key }
    }

    /// Returns the video id of the top search result for the terms, or
    /// `None` when the first result page holds no video-kind entry.
    /// Only one page is ever requested.
    pub async fn find_top_video(&self, terms: &str) -> Result<Option<String>, LookupError> {
        debug!("youtube search: {}", terms);
        let resp = self.client.get(self.search_url(terms)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            warn!("youtube returned {} searching for {}", status, terms);
            return Err(LookupError::Status(status));
        }
        let resp = resp
            .json::<SearchResponse>()
            .await
            .map_err(|err| LookupError::Parse(err.to_string()))?;
        Ok(first_video_id(resp))
    }

    fn search_url(&self, terms: &str) -> String {
        youtube_endpoint!(
            "/search?part=id,snippet&maxResults={MAX_RESULTS}&q={}&key={}",
            urlencoding::encode(terms),
            self.key
        )
    }
}

fn first_video_id(resp: SearchResponse) -> Option<String> {
    resp.items
        .into_iter()
        .find(|item| item.id.kind == VIDEO_KIND)
        .and_then(|item| item.id.video_id)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn picks_first_video_kind_result() {
        let payload = json!({ "items": [
            { "id": { "kind": "youtube#channel", "channelId": "c1" } },
            { "id": { "kind": "youtube#playlist", "playlistId": "p1" } },
            { "id": { "kind": "youtube#video", "videoId": "XYZ123" } },
            { "id": { "kind": "youtube#video", "videoId": "later" } }
        ]});
        let resp: SearchResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(first_video_id(resp), Some("XYZ123".to_string()));
    }

    #[test]
    fn no_video_kind_result_yields_none() {
        let payload = json!({ "items": [
            { "id": { "kind": "youtube#channel", "channelId": "c1" } }
        ]});
        let resp: SearchResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(first_video_id(resp), None);
    }

    #[test]
    fn missing_items_behaves_as_empty_page() {
        let resp: SearchResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(first_video_id(resp), None);
    }

    #[test]
    fn search_url_encodes_terms_and_requests_one_page() {
        let client = YoutubeClient::new("test-key".to_string());
        assert_eq!(
            client.search_url("queen & bowie live"),
            "https://www.googleapis.com/youtube/v3/search?part=id,snippet&maxResults=20&q=queen%20%26%20bowie%20live&key=test-key"
        );
    }
}
