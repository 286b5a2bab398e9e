use async_trait::async_trait;

use crate::error::Result;
use crate::types::{FragmentHit, TranscriptSegment};

/// State of a transcript fetch. The service transcribes asynchronously,
/// so a fetch can come back empty-handed for a while.
#[derive(Debug, Clone)]
pub enum TranscriptStatus {
    Processing,
    Finished(Vec<TranscriptSegment>),
}

/// Source of transcript segments for a video.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch_transcript(&self, video_no: &str) -> Result<TranscriptStatus>;
}

/// Visual similarity search over a video's fragments.
#[async_trait]
pub trait FragmentSearchSource: Send + Sync {
    async fn search_fragments(&self, video_no: &str, query: &str) -> Result<Vec<FragmentHit>>;
}
