use tracing::{debug, warn};

use crate::categories::{LEXICAL_CATEGORY_ID, RISK_CATEGORIES, lexical_category};
use crate::config::AnalysisOptions;
use crate::source::FragmentSearchSource;
use crate::types::{EventSource, RiskEvent, TranscriptSegment};

/// Tokens that flag a transcript segment as profanity. Substring match,
/// case-insensitive.
pub static PROFANITY_LEXICON: &[&str] = &["fuck", "shit", "damn", "hell", "bitch", "ass"];

/// Confidence assigned to lexicon matches; the transcript itself carries
/// no similarity signal.
pub const TRANSCRIPT_CONFIDENCE: f64 = 0.85;

const EVIDENCE_QUOTE_LEN: usize = 50;

/// Scan transcript segments for lexical risk signals.
///
/// Runs over whatever segments were fetched; an empty slice (transcript
/// never finished) simply yields no events.
pub fn extract_transcript_events(video_no: &str, segments: &[TranscriptSegment]) -> Vec<RiskEvent> {
    let category = lexical_category();

    let mut events = Vec::new();
    for segment in segments {
        let text = segment.content.to_lowercase();
        if !PROFANITY_LEXICON.iter().any(|word| text.contains(word)) {
            continue;
        }

        let quote: String = segment.content.chars().take(EVIDENCE_QUOTE_LEN).collect();
        events.push(RiskEvent {
            id: format!("transcript-{}", segment.start_time),
            video_no: video_no.to_string(),
            category,
            start_time: segment.start_time,
            end_time: segment.end_time,
            confidence: TRANSCRIPT_CONFIDENCE,
            evidence: format!("Transcript: \"{quote}...\""),
            severity: category.severity,
            source: EventSource::Transcript,
        });
    }

    debug!(count = events.len(), "transcript extraction done");
    events
}

/// Probe the visual-search capability for every non-lexical category.
///
/// Each (category, query) pair is one external call; a failed call is
/// absorbed as zero hits so the remaining pairs still run.
pub async fn extract_visual_events(
    search: &dyn FragmentSearchSource,
    video_no: &str,
    options: &AnalysisOptions,
) -> Vec<RiskEvent> {
    let mut events = Vec::new();

    for category in RISK_CATEGORIES {
        // Profanity is covered by the transcript extractor.
        if category.id == LEXICAL_CATEGORY_ID {
            continue;
        }

        for &query in category.search_queries {
            let hits = match search.search_fragments(video_no, query).await {
                Ok(hits) => hits,
                Err(e) => {
                    warn!(category = category.id, query, error = %e, "visual search failed");
                    continue;
                }
            };

            for hit in hits {
                if hit.similarity <= options.similarity_threshold {
                    continue;
                }
                events.push(RiskEvent {
                    id: format!("visual-{}-{}", category.id, hit.fragment_start_time),
                    video_no: video_no.to_string(),
                    category,
                    start_time: hit.fragment_start_time,
                    end_time: hit.fragment_end_time,
                    confidence: hit.similarity,
                    evidence: format!("Visual match: \"{query}\""),
                    severity: category.severity,
                    source: EventSource::Visual,
                });
            }
        }
    }

    debug!(count = events.len(), "visual extraction done");
    events
}
