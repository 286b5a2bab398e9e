use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{BrandlensError, Result};
use crate::source::{FragmentSearchSource, TranscriptSource, TranscriptStatus};
use crate::types::{FragmentHit, TranscriptSegment};

const MEMORIES_API_BASE: &str = "https://api.memories.ai";

/// Client for the memories.ai video-understanding service (v1.2 API).
///
/// `unique_id` scopes search and transcription to the library the video
/// was uploaded under, so it must match the id used at upload time.
pub struct MemoriesClient {
    http: reqwest::Client,
    api_key: String,
    unique_id: String,
    base_url: String,
}

/// Parse state of an uploaded video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoStatus {
    Parsed,
    Unparsed,
    Failed,
    Unknown(String),
}

#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    data: Option<T>,
}

#[derive(Deserialize, Default)]
struct TranscriptionData {
    #[serde(default)]
    transcriptions: Option<Vec<TranscriptSegment>>,
}

#[derive(Deserialize, Default)]
struct SearchData {
    #[serde(default)]
    videos: Vec<SearchVideo>,
}

/// The search endpoint is loose about casing and omits fields for some
/// hits, so everything is optional with the service's documented
/// fallbacks applied on conversion.
#[derive(Deserialize)]
struct SearchVideo {
    #[serde(rename = "videoNo", default)]
    video_no_camel: Option<String>,
    #[serde(rename = "video_no", default)]
    video_no_snake: Option<String>,
    #[serde(rename = "fragmentStartTime", default)]
    fragment_start_time: Option<f64>,
    #[serde(rename = "fragmentEndTime", default)]
    fragment_end_time: Option<f64>,
    #[serde(default)]
    similarity: Option<f64>,
}

#[derive(Deserialize, Default)]
struct ListVideosData {
    #[serde(default)]
    videos: Vec<ListedVideo>,
}

#[derive(Deserialize)]
struct ListedVideo {
    video_no: String,
    status: String,
}

impl SearchVideo {
    fn video_no(&self) -> Option<&str> {
        self.video_no_camel
            .as_deref()
            .or(self.video_no_snake.as_deref())
    }

    fn into_hit(self) -> FragmentHit {
        FragmentHit {
            fragment_start_time: self.fragment_start_time.unwrap_or(0.0),
            fragment_end_time: self.fragment_end_time.unwrap_or(10.0),
            similarity: self.similarity.unwrap_or(0.7),
        }
    }
}

impl MemoriesClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            unique_id: "brand-safety-app".to_string(),
            base_url: MEMORIES_API_BASE.to_string(),
        }
    }

    pub fn with_unique_id(mut self, unique_id: impl Into<String>) -> Self {
        self.unique_id = unique_id.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Check the parse status of one uploaded video.
    pub async fn video_status(&self, video_no: &str) -> Result<VideoStatus> {
        let response = self
            .http
            .post(format!("{}/serve/api/v1/list_videos", self.base_url))
            .header("Authorization", &self.api_key)
            .json(&serde_json::json!({
                "page": 1,
                "size": 50,
                "unique": self.unique_id,
                "video_no": video_no,
            }))
            .send()
            .await?
            .error_for_status()?;

        let envelope: Envelope<ListVideosData> = response.json().await?;
        let data = envelope.data.ok_or_else(|| BrandlensError::ApiResponse {
            reason: envelope
                .msg
                .unwrap_or_else(|| "list_videos returned no data".to_string()),
        })?;

        let video = data
            .videos
            .into_iter()
            .find(|v| v.video_no == video_no)
            .ok_or_else(|| BrandlensError::ApiResponse {
                reason: format!("video {video_no} not found in library"),
            })?;

        Ok(match video.status.as_str() {
            "PARSE" => VideoStatus::Parsed,
            "UNPARSE" => VideoStatus::Unparsed,
            "FAIL" => VideoStatus::Failed,
            other => VideoStatus::Unknown(other.to_string()),
        })
    }
}

#[async_trait]
impl TranscriptSource for MemoriesClient {
    async fn fetch_transcript(&self, video_no: &str) -> Result<TranscriptStatus> {
        let response = self
            .http
            .get(format!(
                "{}/serve/api/v1/get_audio_transcription",
                self.base_url
            ))
            .query(&[("video_no", video_no), ("unique_id", self.unique_id.as_str())])
            .header("Authorization", &self.api_key)
            .send()
            .await?
            .error_for_status()?;

        let envelope: Envelope<TranscriptionData> = response.json().await?;

        // Transcription runs asynchronously server-side; the field only
        // appears once it has finished.
        match envelope.data.and_then(|d| d.transcriptions) {
            Some(segments) => Ok(TranscriptStatus::Finished(segments)),
            None => Ok(TranscriptStatus::Processing),
        }
    }
}

#[async_trait]
impl FragmentSearchSource for MemoriesClient {
    async fn search_fragments(&self, video_no: &str, query: &str) -> Result<Vec<FragmentHit>> {
        let response = self
            .http
            .post(format!("{}/serve/api/v1/search", self.base_url))
            .header("Authorization", &self.api_key)
            .json(&serde_json::json!({
                "search_param": query,
                "unique_id": self.unique_id,
                "search_type": "BY_CLIP",
            }))
            .send()
            .await?
            .error_for_status()?;

        let envelope: Envelope<SearchData> = response.json().await?;

        if envelope.code.as_deref() != Some("SUCCESS") {
            return Ok(Vec::new());
        }

        // Search spans the whole library; keep only this video's hits.
        let hits = envelope
            .data
            .map(|d| d.videos)
            .unwrap_or_default()
            .into_iter()
            .filter(|v| v.video_no().is_none_or(|no| no == video_no))
            .map(SearchVideo::into_hit)
            .collect();

        Ok(hits)
    }
}
