use serde::Serialize;

use crate::types::RiskEvent;

/// Qualitative tier for an overall risk score. Downstream consumers use
/// this mapping instead of recomputing severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    #[serde(rename = "High Risk")]
    High,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Safe")]
    Safe,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::High => "High Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::Low => "Low Risk",
            RiskLevel::Safe => "Safe",
        }
    }
}

/// Reduce the final event sequence to a single 0-100 score.
///
/// Severity base score weighted by confidence, averaged over all events
/// and rounded. The clamp only matters for an all-Floor, all-certain
/// sequence.
pub fn calculate_risk_score(events: &[RiskEvent]) -> u32 {
    if events.is_empty() {
        return 0;
    }

    let total: f64 = events
        .iter()
        .map(|event| event.severity.base_score() * event.confidence)
        .sum();

    let mean = total / events.len() as f64;
    (mean.round() as u32).min(100)
}

pub fn risk_level(score: u32) -> RiskLevel {
    if score >= 80 {
        RiskLevel::High
    } else if score >= 50 {
        RiskLevel::Medium
    } else if score >= 20 {
        RiskLevel::Low
    } else {
        RiskLevel::Safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::category_by_id;
    use crate::types::{EventSource, Severity};

    fn event(category_id: &str, confidence: f64) -> RiskEvent {
        let category = category_by_id(category_id).unwrap();
        RiskEvent {
            id: format!("{category_id}-{confidence}"),
            video_no: "vid-1".to_string(),
            category,
            start_time: 0.0,
            end_time: 1.0,
            confidence,
            evidence: "test".to_string(),
            severity: category.severity,
            source: EventSource::Visual,
        }
    }

    #[test]
    fn empty_sequence_scores_zero() {
        assert_eq!(calculate_risk_score(&[]), 0);
    }

    #[test]
    fn single_floor_event_at_full_confidence_scores_100() {
        let events = vec![event("violence", 1.0)];
        assert_eq!(events[0].severity, Severity::Floor);
        assert_eq!(calculate_risk_score(&events), 100);
    }

    #[test]
    fn single_low_event_at_half_confidence_scores_10() {
        let events = vec![event("sponsorship", 0.5)];
        assert_eq!(events[0].severity, Severity::Low);
        assert_eq!(calculate_risk_score(&events), 10);
    }

    #[test]
    fn mean_over_mixed_events() {
        // Floor*1.0 = 100, Low*0.5 = 10, mean = 55.
        let events = vec![event("violence", 1.0), event("sponsorship", 0.5)];
        assert_eq!(calculate_risk_score(&events), 55);
    }

    #[test]
    fn score_stays_in_range() {
        let events: Vec<RiskEvent> = vec![
            event("violence", 1.0),
            event("hate_speech", 1.0),
            event("sexual", 1.0),
        ];
        let score = calculate_risk_score(&events);
        assert!(score <= 100);
    }

    #[test]
    fn score_rounds_to_nearest() {
        // Medium 50 * 0.85 = 42.5, rounds to 43.
        let events = vec![event("profanity", 0.85)];
        assert_eq!(calculate_risk_score(&events), 43);
    }

    #[test]
    fn level_tiers() {
        assert_eq!(risk_level(100), RiskLevel::High);
        assert_eq!(risk_level(80), RiskLevel::High);
        assert_eq!(risk_level(79), RiskLevel::Medium);
        assert_eq!(risk_level(50), RiskLevel::Medium);
        assert_eq!(risk_level(49), RiskLevel::Low);
        assert_eq!(risk_level(20), RiskLevel::Low);
        assert_eq!(risk_level(19), RiskLevel::Safe);
        assert_eq!(risk_level(0), RiskLevel::Safe);
    }
}
