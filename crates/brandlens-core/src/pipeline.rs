use tracing::{debug, warn};

use crate::config::AnalysisOptions;
use crate::error::{BrandlensError, Result};
use crate::extract::{extract_transcript_events, extract_visual_events};
use crate::reconcile::reconcile_events;
use crate::score::calculate_risk_score;
use crate::source::{FragmentSearchSource, TranscriptSource, TranscriptStatus};
use crate::types::{AnalysisResult, AnalysisSummary, TranscriptSegment};

/// Run the full analysis for one video.
///
/// Steps: poll the transcript until finished or out of attempts, run
/// both extractors, reconcile transcript candidates ahead of visual
/// ones, score. A transcript that never finishes degrades the run to
/// visual-only analysis; it does not fail it.
pub async fn analyze_video(
    transcripts: &dyn TranscriptSource,
    search: &dyn FragmentSearchSource,
    video_no: &str,
    options: &AnalysisOptions,
) -> Result<AnalysisResult> {
    if video_no.is_empty() {
        return Err(BrandlensError::MissingVideoNo);
    }

    let transcript = poll_transcript(transcripts, video_no, options).await;
    let transcript_available = transcript.is_some();

    let segments = transcript.unwrap_or_default();
    let mut candidates = extract_transcript_events(video_no, &segments);
    candidates.extend(extract_visual_events(search, video_no, options).await);

    let events = reconcile_events(candidates, options.dedup_window_secs);
    let risk_score = calculate_risk_score(&events);
    let summary = AnalysisSummary::from_events(&events);

    debug!(
        video_no,
        risk_score,
        events = events.len(),
        transcript_available,
        "analysis complete"
    );

    Ok(AnalysisResult {
        video_no: video_no.to_string(),
        events,
        risk_score,
        transcript_available,
        summary,
    })
}

/// Poll for the transcript within the configured budget.
///
/// A fetch error counts as one attempt, same as a still-processing
/// response; after the budget the caller proceeds without a transcript.
async fn poll_transcript(
    transcripts: &dyn TranscriptSource,
    video_no: &str,
    options: &AnalysisOptions,
) -> Option<Vec<TranscriptSegment>> {
    for attempt in 0..options.max_poll_attempts {
        if attempt > 0 {
            tokio::time::sleep(options.poll_interval).await;
        }

        match transcripts.fetch_transcript(video_no).await {
            Ok(TranscriptStatus::Finished(segments)) => return Some(segments),
            Ok(TranscriptStatus::Processing) => {}
            Err(e) => {
                warn!(video_no, attempt, error = %e, "transcript fetch failed");
            }
        }
    }

    warn!(video_no, "transcript incomplete, proceeding with visual analysis only");
    None
}
