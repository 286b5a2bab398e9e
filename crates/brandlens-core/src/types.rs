use serde::{Deserialize, Serialize};

use crate::categories::RiskCategory;

/// Severity tier of a risk category, ordered Low < Medium < High < Floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Floor,
}

impl Severity {
    /// Base score used by the risk scorer before confidence weighting.
    pub fn base_score(self) -> f64 {
        match self {
            Severity::Floor => 100.0,
            Severity::High => 80.0,
            Severity::Medium => 50.0,
            Severity::Low => 20.0,
        }
    }

    /// Floor and High events count as high-risk in report summaries.
    pub fn is_high_risk(self) -> bool {
        matches!(self, Severity::Floor | Severity::High)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSource {
    Visual,
    Transcript,
    Audio,
}

/// One transcript line as returned by the video-understanding service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptSegment {
    pub start_time: f64,
    pub end_time: f64,
    pub content: String,
}

/// One visual similarity-search result for a query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentHit {
    pub fragment_start_time: f64,
    pub fragment_end_time: f64,
    pub similarity: f64,
}

/// One detected occurrence of a risk category at a time range.
///
/// Created by an extractor and never mutated afterwards; the reconciler
/// may drop it but never rewrites it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskEvent {
    pub id: String,
    pub video_no: String,
    pub category: &'static RiskCategory,
    pub start_time: f64,
    pub end_time: f64,
    pub confidence: f64,
    pub evidence: String,
    pub severity: Severity,
    pub source: EventSource,
}

/// Aggregate counts attached to an analysis result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub total_events: usize,
    pub high_risk_events: usize,
    pub categories_detected: Vec<String>,
}

/// Terminal artifact of one analysis run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub video_no: String,
    pub events: Vec<RiskEvent>,
    pub risk_score: u32,
    pub transcript_available: bool,
    pub summary: AnalysisSummary,
}

impl AnalysisSummary {
    pub fn from_events(events: &[RiskEvent]) -> Self {
        let mut categories_detected: Vec<String> = Vec::new();
        for event in events {
            if !categories_detected.iter().any(|c| c == event.category.name) {
                categories_detected.push(event.category.name.to_string());
            }
        }
        Self {
            total_events: events.len(),
            high_risk_events: events.iter().filter(|e| e.severity.is_high_risk()).count(),
            categories_detected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering_matches_tiers() {
        assert!(Severity::Floor > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn base_scores() {
        assert_eq!(Severity::Floor.base_score(), 100.0);
        assert_eq!(Severity::High.base_score(), 80.0);
        assert_eq!(Severity::Medium.base_score(), 50.0);
        assert_eq!(Severity::Low.base_score(), 20.0);
    }

    #[test]
    fn source_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&EventSource::Transcript).unwrap(),
            "\"transcript\""
        );
    }
}
