// Verdict classification — maps free-form verdict labels to the three-way
// visual grouping used for coloring and iconography.
//
// The label vocabulary belongs to the backend and may grow; classification
// is total, so an unrecognized label is never an error, just Uncertain.

use serde::{Deserialize, Serialize};

/// The three-way visual/semantic grouping of a verdict label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerdictCategory {
    Legitimate,
    Malicious,
    Uncertain,
}

/// Icon shown next to a verdict.
///
/// Deliberately a two-way mapping nested inside the three-way color
/// mapping: only a legitimate verdict earns the affirmative mark, while
/// Uncertain shares the warning icon with Malicious.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictIcon {
    Affirmative,
    Warning,
}

/// Fixed style tokens for one category: card border, card background,
/// text color and badge fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub border: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub badge: &'static str,
}

/// Classify a verdict label, case-insensitively.
///
/// Pure and total: every possible string produces exactly one category,
/// with Uncertain as the fallback for anything unrecognized (including
/// the empty string).
pub fn classify(verdict: &str) -> VerdictCategory {
    match verdict.to_lowercase().as_str() {
        "legitimate" => VerdictCategory::Legitimate,
        "scam" | "phishing" => VerdictCategory::Malicious,
        _ => VerdictCategory::Uncertain,
    }
}

impl VerdictCategory {
    /// Style tokens for this category (emerald / rose / amber palette).
    pub fn style(self) -> CategoryStyle {
        match self {
            VerdictCategory::Legitimate => CategoryStyle {
                border: "emerald-500",
                background: "emerald-50",
                text: "emerald-800",
                badge: "emerald-100",
            },
            VerdictCategory::Malicious => CategoryStyle {
                border: "rose-500",
                background: "rose-50",
                text: "rose-800",
                badge: "rose-100",
            },
            VerdictCategory::Uncertain => CategoryStyle {
                border: "amber-500",
                background: "amber-50",
                text: "amber-800",
                badge: "amber-100",
            },
        }
    }

    /// Icon for this category — see `VerdictIcon` for why Uncertain
    /// warns rather than getting a third icon.
    pub fn icon(self) -> VerdictIcon {
        match self {
            VerdictCategory::Legitimate => VerdictIcon::Affirmative,
            VerdictCategory::Malicious | VerdictCategory::Uncertain => VerdictIcon::Warning,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictCategory::Legitimate => "Legitimate",
            VerdictCategory::Malicious => "Malicious",
            VerdictCategory::Uncertain => "Uncertain",
        }
    }
}

impl std::fmt::Display for VerdictCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
