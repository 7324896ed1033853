// src/render.rs
//! Maps a settled analysis into display sections and prints them

use colored::{Color, Colorize};

use crate::types::analysis::AnalysisResult;

/// Placeholder for absent contact fields.
const NOT_AVAILABLE: &str = "N/A";

/// Cells in the terminal confidence bar.
pub const CONFIDENCE_BAR_WIDTH: usize = 30;

/// One labelled row in the candidate information grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
}

/// Years plus the level label and its display style.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceSection {
    pub years: f64,
    pub level: String,
    pub level_color: Option<Color>,
}

/// Role label, formatted confidence and the filled-cell count of the
/// proportional indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationSection {
    pub label: String,
    pub confidence_percent: String,
    pub bar_filled: usize,
}

/// Display-ready projection of an [`AnalysisResult`]. Building one never
/// mutates the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub candidate: [InfoRow; 3],
    pub experience: ExperienceSection,
    pub classification: ClassificationSection,
    /// Present only when the service detected at least one skill.
    pub skills: Option<Vec<String>>,
    /// Present only when the service detected at least one education entry.
    pub education: Option<Vec<String>>,
}

impl Report {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let field =
            |value: &Option<String>| value.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Self {
            candidate: [
                InfoRow {
                    label: "Name",
                    value: field(&result.name),
                },
                InfoRow {
                    label: "Email",
                    value: field(&result.email),
                },
                InfoRow {
                    label: "Phone",
                    value: field(&result.phone),
                },
            ],
            experience: ExperienceSection {
                years: result.experience_years,
                level: result.experience_level.clone(),
                level_color: level_color(&result.experience_level),
            },
            classification: ClassificationSection {
                label: result.classification.clone(),
                confidence_percent: format_confidence(result.confidence),
                bar_filled: bar_fill(result.confidence, CONFIDENCE_BAR_WIDTH),
            },
            skills: (!result.skills.is_empty()).then(|| result.skills.clone()),
            education: (!result.education.is_empty()).then(|| result.education.clone()),
        }
    }
}

/// Fixed lookup from experience level to its display color, on the
/// lower-cased label. Levels outside the table render unstyled.
fn level_color(level: &str) -> Option<Color> {
    match level.to_lowercase().as_str() {
        "junior" => Some(Color::Green),
        "mid" => Some(Color::Yellow),
        "senior" => Some(Color::Magenta),
        _ => None,
    }
}

/// `0.873` formats as `87.3%`.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// Filled cells for a bar of `width` cells. The service guarantees the
/// confidence is already within [0, 1]; no re-clamping here.
fn bar_fill(confidence: f64, width: usize) -> usize {
    (confidence * width as f64).round() as usize
}

fn bar_string(filled: usize, width: usize) -> String {
    let empty = width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Print the report to stdout in the section order of the analysis UI.
pub fn print_report(report: &Report) {
    println!();
    println!("{}", "✅ Analysis Results".bold());

    println!();
    println!("{}", "👤 Candidate Information".bold());
    for row in &report.candidate {
        println!("   {:<7}{}", format!("{}:", row.label), row.value);
    }

    println!();
    println!("{}", "💼 Experience".bold());
    println!("   {:<7}{} years", "Years:", report.experience.years);
    let level = match report.experience.level_color {
        Some(color) => report.experience.level.as_str().color(color).to_string(),
        None => report.experience.level.clone(),
    };
    println!("   {:<7}{}", "Level:", level);

    println!();
    println!("{}", "🎯 Job Role Classification".bold());
    println!("   {}", report.classification.label.as_str().bold());
    println!("   Confidence: {}", report.classification.confidence_percent);
    println!(
        "   {}",
        bar_string(report.classification.bar_filled, CONFIDENCE_BAR_WIDTH)
    );

    if let Some(skills) = &report.skills {
        println!();
        println!("{}", "🔧 Detected Skills".bold());
        let tags: Vec<String> = skills.iter().map(|skill| format!("[{}]", skill)).collect();
        println!("   {}", tags.join(" "));
    }

    if let Some(education) = &report.education {
        println!();
        println!("{}", "🎓 Education".bold());
        for (idx, entry) in education.iter().enumerate() {
            println!("   {}. {}", idx + 1, entry);
        }
    }
    println!();
}
