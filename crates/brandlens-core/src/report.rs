use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::score::{RiskLevel, risk_level};
use crate::types::{AnalysisResult, EventSource, RiskEvent, Severity};

/// Output form of an exported report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Csv,
    Srt,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
            ReportFormat::Srt => "srt",
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    video_no: &'a str,
    generated_at: DateTime<Utc>,
    risk_score: u32,
    risk_level: RiskLevel,
    total_events: usize,
    events: Vec<JsonReportEvent<'a>>,
    summary: JsonReportSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReportEvent<'a> {
    category: &'a str,
    start_time: f64,
    end_time: f64,
    duration: f64,
    severity: Severity,
    confidence: u32,
    evidence: &'a str,
    source: EventSource,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReportSummary {
    categories_detected: Vec<String>,
    high_risk_events: usize,
    average_confidence: u32,
}

/// Render an analysis result in the requested export format.
pub fn render_report(result: &AnalysisResult, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => render_json(result),
        ReportFormat::Csv => Ok(render_csv(&result.events)),
        ReportFormat::Srt => Ok(render_srt(&result.events)),
    }
}

fn render_json(result: &AnalysisResult) -> Result<String> {
    let average_confidence = if result.events.is_empty() {
        0
    } else {
        let sum: f64 = result.events.iter().map(|e| e.confidence).sum();
        percent(sum / result.events.len() as f64)
    };

    let report = JsonReport {
        video_no: &result.video_no,
        generated_at: Utc::now(),
        risk_score: result.risk_score,
        risk_level: risk_level(result.risk_score),
        total_events: result.events.len(),
        events: result
            .events
            .iter()
            .map(|event| JsonReportEvent {
                category: event.category.name,
                start_time: event.start_time,
                end_time: event.end_time,
                duration: event.end_time - event.start_time,
                severity: event.severity,
                confidence: percent(event.confidence),
                evidence: &event.evidence,
                source: event.source,
            })
            .collect(),
        summary: JsonReportSummary {
            categories_detected: result.summary.categories_detected.clone(),
            high_risk_events: result.summary.high_risk_events,
            average_confidence,
        },
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

fn render_csv(events: &[RiskEvent]) -> String {
    let mut lines = vec![
        "Category,Start Time (s),End Time (s),Duration (s),Severity,Confidence (%),Evidence,Source"
            .to_string(),
    ];
    for event in events {
        lines.push(format!(
            "{},{:.2},{:.2},{:.2},{:?},{},{},{}",
            event.category.name,
            event.start_time,
            event.end_time,
            event.end_time - event.start_time,
            event.severity,
            percent(event.confidence),
            csv_quote(&event.evidence),
            source_label(event.source),
        ));
    }
    lines.join("\n")
}

fn render_srt(events: &[RiskEvent]) -> String {
    let mut output = String::new();
    for (index, event) in events.iter().enumerate() {
        output.push_str(&format!("{}\n", index + 1));
        output.push_str(&format!(
            "{} --> {}\n",
            format_srt_time(event.start_time),
            format_srt_time(event.end_time)
        ));
        output.push_str(&format!(
            "[{} {}] {}\n\n",
            event.category.icon, event.category.name, event.evidence
        ));
    }
    output
}

/// Human-readable terminal summary of an analysis run.
pub fn format_result_readable(result: &AnalysisResult) -> String {
    let mut output = String::new();

    let level = risk_level(result.risk_score);
    output.push_str(&format!(
        "Risk score: {}/100 ({})\n",
        result.risk_score,
        level.label()
    ));
    output.push_str(&format!(
        "Events: {} total, {} high-risk\n",
        result.summary.total_events, result.summary.high_risk_events
    ));
    if !result.transcript_available {
        output.push_str("Transcript unavailable; visual analysis only\n");
    }
    if !result.summary.categories_detected.is_empty() {
        output.push_str(&format!(
            "Categories: {}\n",
            result.summary.categories_detected.join(", ")
        ));
    }

    for event in &result.events {
        output.push_str(&format!(
            "  [{}–{}] {} {} ({}%, {}) {}\n",
            format_timestamp(event.start_time),
            format_timestamp(event.end_time),
            event.category.icon,
            event.category.name,
            percent(event.confidence),
            source_label(event.source),
            event.evidence,
        ));
    }

    output
}

/// Format seconds as MM:SS timestamp
pub fn format_timestamp(seconds: f64) -> String {
    let mins = (seconds / 60.0) as u32;
    let secs = (seconds % 60.0) as u32;
    format!("{:02}:{:02}", mins, secs)
}

/// Format seconds as an SRT cue time, HH:MM:SS,mmm.
fn format_srt_time(seconds: f64) -> String {
    let hours = (seconds / 3600.0) as u32;
    let minutes = ((seconds % 3600.0) / 60.0) as u32;
    let secs = (seconds % 60.0) as u32;
    let millis = ((seconds % 1.0) * 1000.0) as u32;
    format!("{hours:02}:{minutes:02}:{secs:02},{millis:03}")
}

fn csv_quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn source_label(source: EventSource) -> &'static str {
    match source {
        EventSource::Visual => "visual",
        EventSource::Transcript => "transcript",
        EventSource::Audio => "audio",
    }
}

fn percent(confidence: f64) -> u32 {
    (confidence * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::category_by_id;
    use crate::types::AnalysisSummary;

    fn event(category_id: &str, start: f64, end: f64, evidence: &str) -> RiskEvent {
        let category = category_by_id(category_id).unwrap();
        RiskEvent {
            id: format!("{category_id}-{start}"),
            video_no: "vid-1".to_string(),
            category,
            start_time: start,
            end_time: end,
            confidence: 0.85,
            evidence: evidence.to_string(),
            severity: category.severity,
            source: EventSource::Visual,
        }
    }

    fn result(events: Vec<RiskEvent>) -> AnalysisResult {
        let summary = AnalysisSummary::from_events(&events);
        AnalysisResult {
            video_no: "vid-1".to_string(),
            risk_score: crate::score::calculate_risk_score(&events),
            transcript_available: true,
            summary,
            events,
        }
    }

    #[test]
    fn csv_escapes_embedded_quotes_once() {
        let events = vec![event(
            "profanity",
            10.0,
            12.0,
            "Transcript: \"this is fine...\"",
        )];
        let csv = render_csv(&events);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("\"Transcript: \"\"this is fine...\"\"\""));
        // Unescaping the quoted field restores the original exactly.
        let quoted = csv_quote("Transcript: \"this is fine...\"");
        let inner = &quoted[1..quoted.len() - 1];
        assert_eq!(
            inner.replace("\"\"", "\""),
            "Transcript: \"this is fine...\""
        );
    }

    #[test]
    fn csv_header_and_row_shape() {
        let events = vec![event("violence", 5.5, 8.25, "Visual match: \"weapons\"")];
        let csv = render_csv(&events);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Category,Start Time (s),End Time (s),Duration (s),Severity,Confidence (%),Evidence,Source"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("Violence,5.50,8.25,2.75,Floor,85,"));
        assert!(row.ends_with(",visual"));
    }

    #[test]
    fn srt_cue_format() {
        let events = vec![event("violence", 65.5, 70.0, "Visual match: \"weapons\"")];
        let srt = render_srt(&events);
        assert_eq!(
            srt,
            "1\n00:01:05,500 --> 00:01:10,000\n[🔫 Violence] Visual match: \"weapons\"\n\n"
        );
    }

    #[test]
    fn srt_counters_are_one_based_and_sequential() {
        let events = vec![
            event("violence", 5.0, 8.0, "a"),
            event("sexual", 20.0, 22.0, "b"),
        ];
        let srt = render_srt(&events);
        assert!(srt.starts_with("1\n"));
        assert!(srt.contains("\n\n2\n"));
    }

    #[test]
    fn json_report_shape() {
        let res = result(vec![event("violence", 5.0, 8.0, "Visual match: \"x\"")]);
        let json = render_json(&res).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["videoNo"], "vid-1");
        assert_eq!(value["totalEvents"], 1);
        assert_eq!(value["riskScore"], 85);
        assert_eq!(value["riskLevel"], "High Risk");
        assert_eq!(value["events"][0]["category"], "Violence");
        assert_eq!(value["events"][0]["duration"], 3.0);
        assert_eq!(value["events"][0]["confidence"], 85);
        assert_eq!(value["events"][0]["source"], "visual");
        assert_eq!(value["summary"]["highRiskEvents"], 1);
        assert_eq!(value["summary"]["averageConfidence"], 85);
        assert_eq!(value["summary"]["categoriesDetected"][0], "Violence");
    }

    #[test]
    fn json_report_on_empty_events() {
        let res = result(Vec::new());
        let json = render_json(&res).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["riskScore"], 0);
        assert_eq!(value["riskLevel"], "Safe");
        assert_eq!(value["summary"]["averageConfidence"], 0);
    }

    #[test]
    fn timestamp_formatting() {
        assert_eq!(format_timestamp(0.0), "00:00");
        assert_eq!(format_timestamp(75.0), "01:15");
        assert_eq!(format_srt_time(3725.25), "01:02:05,250");
    }

    #[test]
    fn readable_summary_mentions_degraded_mode() {
        let mut res = result(Vec::new());
        res.transcript_available = false;
        let text = format_result_readable(&res);
        assert!(text.contains("Transcript unavailable"));
        assert!(text.contains("Risk score: 0/100 (Safe)"));
    }
}
