// Result rendering — turns a verdict record into an ordered display model.
//
// The section list is what any frontend (terminal, document export, ...)
// consumes. Presence rules live here, in one place: Key Findings and
// Safety Advice always render, Red Flags / Suspicious URLs / Explanation
// only render when they have content.

use crate::backend::models::VerdictRecord;
use crate::verdict::{classify, VerdictCategory};

/// Shown in Key Findings when the backend returned no reasons — the
/// section is never rendered empty.
pub const NO_REASONS_FALLBACK: &str = "No specific reasons detected";

/// One display section of an analysis result, in render order.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    /// Verdict label (verbatim, not normalized), its category, and the
    /// rounded confidence badge text.
    Header {
        verdict: String,
        category: VerdictCategory,
        confidence_badge: String,
    },
    /// Bulleted reasons; exactly one fallback line when there are none.
    KeyFindings { bullets: Vec<String> },
    /// Always rendered, verbatim, even when empty.
    SafetyAdvice { advice: String },
    RedFlags { flags: Vec<String> },
    /// Raw literal URL strings — no validation or normalization.
    SuspiciousUrls { urls: Vec<String> },
    Explanation { text: String },
}

/// Format a fractional confidence as a rounded integer percentage.
///
/// Rounds, never truncates: 0.87 → "87%", 0.004 → "0%", 0.005 → "1%".
pub fn format_confidence(confidence: f64) -> String {
    format!("{}%", (confidence * 100.0).round() as i64)
}

/// Build the ordered section list for one record.
///
/// The order is fixed and never depends on which optional fields are
/// present — omitted sections are dropped, not reordered.
pub fn render_sections(record: &VerdictRecord) -> Vec<Section> {
    let mut sections = vec![Section::Header {
        verdict: record.verdict.clone(),
        category: classify(&record.verdict),
        confidence_badge: format_confidence(record.confidence),
    }];

    let bullets = if record.reasons.is_empty() {
        vec![NO_REASONS_FALLBACK.to_string()]
    } else {
        record.reasons.clone()
    };
    sections.push(Section::KeyFindings { bullets });

    sections.push(Section::SafetyAdvice {
        advice: record.safety_advice.clone(),
    });

    if !record.red_flags.is_empty() {
        sections.push(Section::RedFlags {
            flags: record.red_flags.clone(),
        });
    }

    if !record.suspicious_urls.is_empty() {
        sections.push(Section::SuspiciousUrls {
            urls: record.suspicious_urls.clone(),
        });
    }

    if let Some(explanation) = &record.explanation {
        if !explanation.is_empty() {
            sections.push(Section::Explanation {
                text: explanation.clone(),
            });
        }
    }

    sections
}
