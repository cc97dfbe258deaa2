// Unit tests for verdict classification.
//
// Covers totality (every string maps to a category), case-insensitivity,
// the fixed style palette, and the intentionally asymmetric icon mapping.

use verityflow::verdict::{classify, VerdictCategory, VerdictIcon};

// ============================================================
// classify — totality and case-insensitivity
// ============================================================

#[test]
fn legitimate_lowercase() {
    assert_eq!(classify("legitimate"), VerdictCategory::Legitimate);
}

#[test]
fn legitimate_uppercase() {
    assert_eq!(classify("LEGITIMATE"), VerdictCategory::Legitimate);
}

#[test]
fn legitimate_title_case() {
    assert_eq!(classify("Legitimate"), VerdictCategory::Legitimate);
}

#[test]
fn scam_is_malicious() {
    assert_eq!(classify("scam"), VerdictCategory::Malicious);
    assert_eq!(classify("Scam"), VerdictCategory::Malicious);
    assert_eq!(classify("SCAM"), VerdictCategory::Malicious);
}

#[test]
fn phishing_is_malicious() {
    assert_eq!(classify("phishing"), VerdictCategory::Malicious);
    assert_eq!(classify("Phishing"), VerdictCategory::Malicious);
}

#[test]
fn unrecognized_labels_are_uncertain() {
    assert_eq!(classify("Suspicious"), VerdictCategory::Uncertain);
    assert_eq!(classify("Fake News"), VerdictCategory::Uncertain);
    assert_eq!(classify("banana"), VerdictCategory::Uncertain);
}

#[test]
fn empty_string_is_uncertain() {
    assert_eq!(classify(""), VerdictCategory::Uncertain);
}

#[test]
fn whitespace_padding_is_not_normalized() {
    // Only case is folded; padding makes the label unrecognized
    assert_eq!(classify(" legitimate "), VerdictCategory::Uncertain);
}

#[test]
fn classify_is_idempotent_via_category_label() {
    // Re-classifying a category's own label lands on the same category
    assert_eq!(
        classify(VerdictCategory::Legitimate.as_str()),
        VerdictCategory::Legitimate
    );
}

// ============================================================
// Style palette — one fixed set of tokens per category
// ============================================================

#[test]
fn legitimate_style_is_emerald() {
    let style = VerdictCategory::Legitimate.style();
    assert_eq!(style.border, "emerald-500");
    assert_eq!(style.background, "emerald-50");
    assert_eq!(style.text, "emerald-800");
    assert_eq!(style.badge, "emerald-100");
}

#[test]
fn malicious_style_is_rose() {
    let style = VerdictCategory::Malicious.style();
    assert_eq!(style.border, "rose-500");
    assert_eq!(style.badge, "rose-100");
}

#[test]
fn uncertain_style_is_amber() {
    let style = VerdictCategory::Uncertain.style();
    assert_eq!(style.border, "amber-500");
    assert_eq!(style.badge, "amber-100");
}

// ============================================================
// Icon mapping — two-way inside the three-way color grouping
// ============================================================

#[test]
fn only_legitimate_gets_the_affirmative_icon() {
    assert_eq!(
        VerdictCategory::Legitimate.icon(),
        VerdictIcon::Affirmative
    );
}

#[test]
fn malicious_and_uncertain_share_the_warning_icon() {
    assert_eq!(VerdictCategory::Malicious.icon(), VerdictIcon::Warning);
    assert_eq!(VerdictCategory::Uncertain.icon(), VerdictIcon::Warning);
}

#[test]
fn category_display_matches_as_str() {
    for category in [
        VerdictCategory::Legitimate,
        VerdictCategory::Malicious,
        VerdictCategory::Uncertain,
    ] {
        assert_eq!(category.to_string(), category.as_str());
    }
}
