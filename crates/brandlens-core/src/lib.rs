//! Brandlens Core Library
//!
//! Core functionality for analyzing videos against brand-safety risk
//! categories: transcript and visual extraction, event reconciliation,
//! risk scoring, and report rendering.

pub mod categories;
pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod reconcile;
pub mod report;
pub mod score;
pub mod source;
pub mod types;

// Re-export commonly used items at crate root
pub use categories::{LEXICAL_CATEGORY_ID, RISK_CATEGORIES, RiskCategory, category_by_id};
pub use client::{MemoriesClient, VideoStatus};
pub use config::{API_KEY_ENV_VAR, AnalysisOptions, api_key_from_env};
pub use error::{BrandlensError, Result};
pub use pipeline::analyze_video;
pub use reconcile::reconcile_events;
pub use report::{ReportFormat, format_result_readable, format_timestamp, render_report};
pub use score::{RiskLevel, calculate_risk_score, risk_level};
pub use source::{FragmentSearchSource, TranscriptSource, TranscriptStatus};
pub use types::{
    AnalysisResult, AnalysisSummary, EventSource, FragmentHit, RiskEvent, Severity,
    TranscriptSegment,
};
