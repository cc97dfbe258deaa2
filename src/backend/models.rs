// Wire models — Rust structs that map to backend responses.
//
// These are the types that flow through the application. They're separate
// from the HTTP client so the renderer and exporters can use them without
// depending on reqwest directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed analysis of one forwarded message.
///
/// Created by the Analysis Service, persisted by the History Store, and
/// read-only downstream. History listings omit the evidence fields
/// (reasons, red flags, URLs), so those all default to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictRecord {
    /// Opaque unique identifier assigned by the History Store.
    pub id: String,
    /// The original submitted text, verbatim.
    pub message: String,
    /// Free-vocabulary verdict label ("Legitimate", "Scam", "Phishing",
    /// "Suspicious", ...). Displayed verbatim; see `verdict::classify`
    /// for the three-way visual grouping.
    pub verdict: String,
    /// Fractional confidence in [0, 1]. Always rendered as a rounded
    /// percentage — see `render::format_confidence`.
    pub confidence: f64,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub suspicious_urls: Vec<String>,
    #[serde(default)]
    pub safety_advice: String,
    /// Longer-form reasoning; absence suppresses its display section.
    #[serde(default)]
    pub explanation: Option<String>,
    /// Assigned by the History Store at creation; reverse-chronological
    /// ordering in history listings.
    pub timestamp: DateTime<Utc>,
}

/// Response from `GET /api/export?format=csv` — the raw tabular text is
/// wrapped in a field rather than streamed.
#[derive(Debug, Clone, Deserialize)]
pub struct TabularExport {
    pub format: String,
    pub data: String,
}
