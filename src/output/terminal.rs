// Colored terminal output for analysis results and the history list.
//
// This module handles all terminal-specific formatting: colors, icons,
// placeholders. The main.rs command handlers delegate here; everything
// they print comes from the render display model, never raw records.

use colored::{ColoredString, Colorize};

use crate::backend::models::VerdictRecord;
use crate::render::{render_sections, Section};
use crate::verdict::{VerdictCategory, VerdictIcon};

/// Display one analysis result, section by section, in render order.
pub fn display_result(record: &VerdictRecord) {
    for section in render_sections(record) {
        match section {
            Section::Header {
                verdict,
                category,
                confidence_badge,
            } => {
                println!(
                    "\n{} {}   {}",
                    icon_glyph(category.icon()),
                    colorize_verdict(&verdict, category).bold(),
                    format!("{confidence_badge} Confidence").dimmed(),
                );
            }
            Section::KeyFindings { bullets } => {
                println!("\n{}", "Key Findings".bold());
                for bullet in &bullets {
                    println!("  • {bullet}");
                }
            }
            Section::SafetyAdvice { advice } => {
                println!("\n{}", "Safety Advice".bold());
                println!("  {advice}");
            }
            Section::RedFlags { flags } => {
                println!("\n{}", "Red Flags Detected".bold());
                for flag in &flags {
                    println!("  [{}]", flag.red());
                }
            }
            Section::SuspiciousUrls { urls } => {
                println!("\n{}", "Suspicious URLs".bold());
                for url in &urls {
                    println!("  {}", url.yellow());
                }
            }
            Section::Explanation { text } => {
                println!("\n{}", "Detailed Explanation".bold());
                println!("  {text}");
            }
        }
    }
    println!();
}

/// Display the history list, most recent first.
///
/// An empty list gets an explicit placeholder — it is a loaded, valid
/// state, not an error.
pub fn display_history(records: &[VerdictRecord]) {
    if records.is_empty() {
        println!("\n{}", "No History Yet".bold());
        println!("Analyze your first message to see it here");
        return;
    }

    println!(
        "\n{}",
        format!("=== Analysis History ({} entries) ===", records.len()).bold()
    );
    println!();

    for record in records {
        let category = crate::verdict::classify(&record.verdict);
        let badge = colorize_verdict(&record.verdict, category);
        let confidence = crate::render::format_confidence(record.confidence);
        let preview = super::truncate_chars(&record.message, 120);

        println!(
            "  {:<12} {}  {}",
            badge,
            format!("{confidence} confidence").dimmed(),
            record
                .timestamp
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .dimmed(),
        );
        println!("    {}", preview.dimmed());
    }
    println!();
}

/// Colorize a verdict label by its category.
fn colorize_verdict(verdict: &str, category: VerdictCategory) -> ColoredString {
    match category {
        VerdictCategory::Legitimate => verdict.green(),
        VerdictCategory::Malicious => verdict.red(),
        VerdictCategory::Uncertain => verdict.yellow(),
    }
}

fn icon_glyph(icon: VerdictIcon) -> ColoredString {
    match icon {
        VerdictIcon::Affirmative => "✔".green(),
        VerdictIcon::Warning => "⚠".yellow(),
    }
}
