// Report rendering and result persistence

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Local;

use crate::analysis::AnalysisResult;
use crate::error::Result;

/// Render one analysis as a human-readable text block.
pub fn render_result(result: &AnalysisResult) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Analysis: {}", result.source));
    lines.push("-".repeat(50));
    lines.push(format!(
        "Primary meaning:  {}",
        result.interpretation.primary_meaning
    ));
    lines.push(format!(
        "Emotional state:  {}",
        result.interpretation.emotional_state.as_str()
    ));
    lines.push(format!(
        "Urgency level:    {}",
        result.interpretation.urgency_level.as_str()
    ));
    lines.push(format!(
        "Confidence:       {} ({:.2})",
        result.confidence.label.as_str(),
        result.confidence.score
    ));

    lines.push(String::new());
    lines.push("Details:".to_string());
    for detail in &result.interpretation.details {
        lines.push(format!("  - {}", detail));
    }

    if !result.patterns.is_empty() {
        lines.push(String::new());
        lines.push("Vocal patterns:".to_string());
        for pattern in &result.patterns {
            lines.push(format!("  - {}: {}", pattern.name.as_str(), pattern.meaning));
        }
    }

    if !result.context.is_empty() {
        lines.push(String::new());
        lines.push("Context:".to_string());
        for finding in &result.context {
            lines.push(format!(
                "  - {} [{}]: {}",
                finding.category.as_str(),
                finding.label,
                finding.rationale
            ));
        }
    }

    if !result.health.is_empty() {
        lines.push(String::new());
        lines.push("Health observations:".to_string());
        for finding in &result.health {
            lines.push(format!(
                "  - {} ({}): {}",
                finding.category.as_str(),
                finding.severity.as_str(),
                finding.description
            ));
        }
    }

    if let Some(ref combined) = result.combined {
        lines.push(String::new());
        lines.push("Visual activity:".to_string());
        lines.push(format!(
            "  - Dominant: {} (motion mean {:.1}, variance {:.1}, {:.1}s)",
            combined.visual_activity.dominant_activity.as_str(),
            combined.visual_activity.motion_mean,
            combined.visual_activity.motion_variance,
            combined.visual_activity.duration_seconds
        ));
        if let Some(ref agreement) = combined.agreement {
            lines.push(format!(
                "  - Cross-validation: {} agreement with {} classifier opinion",
                agreement.level.as_str(),
                agreement.ml_opinion.class.as_str()
            ));
            for note in &agreement.supporting_evidence {
                lines.push(format!("    + {}", note));
            }
            for note in &agreement.conflicting_indicators {
                lines.push(format!("    ! {}", note));
            }
        }
    }

    if !result.insights.is_empty() {
        lines.push(String::new());
        lines.push("Insights:".to_string());
        for insight in &result.insights {
            lines.push(format!("  - {}", insight));
        }
    }

    lines.join("\n")
}

/// Render a batch summary header plus per-item reports. Per-item failures
/// are listed, never fatal to the report.
pub fn render_batch_report(results: &[AnalysisResult], failures: &[(String, String)]) -> String {
    let mut lines = Vec::new();

    lines.push("CAT BEHAVIOR ANALYSIS REPORT".to_string());
    lines.push("=".repeat(50));
    lines.push(format!(
        "Generated: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(format!("Analyzed: {}", results.len()));
    if !failures.is_empty() {
        lines.push(format!("Failed:   {}", failures.len()));
    }
    lines.push(String::new());

    if !results.is_empty() {
        let mut emotion_counts: BTreeMap<&str, usize> = BTreeMap::new();
        let mut urgency_counts: BTreeMap<&str, usize> = BTreeMap::new();
        for result in results {
            *emotion_counts
                .entry(result.interpretation.emotional_state.as_str())
                .or_insert(0) += 1;
            *urgency_counts
                .entry(result.interpretation.urgency_level.as_str())
                .or_insert(0) += 1;
        }

        lines.push("Summary:".to_string());
        if let Some((emotion, count)) = most_common(&emotion_counts) {
            lines.push(format!("  Most common emotional state: {} ({})", emotion, count));
        }
        if let Some((urgency, count)) = most_common(&urgency_counts) {
            lines.push(format!("  Most common urgency level:   {} ({})", urgency, count));
        }
        lines.push(String::new());
    }

    for result in results {
        lines.push(render_result(result));
        lines.push(String::new());
    }

    if !failures.is_empty() {
        lines.push("Failures:".to_string());
        for (source, error) in failures {
            lines.push(format!("  - {}: {}", source, error));
        }
        lines.push(String::new());
    }

    lines.push("Methodology:".to_string());
    lines.push(
        "  Acoustic features (pitch, loudness, spectral centroid, roughness) are \
         classified against fixed band tables; video adds frame-difference \
         activity and a cross-validated classifier opinion."
            .to_string(),
    );
    lines.push("  These are behavioral observations, not a veterinary diagnosis.".to_string());

    lines.join("\n")
}

/// Ties resolve to the first label in alphabetical order, keeping report
/// output stable run to run.
fn most_common<'a>(counts: &BTreeMap<&'a str, usize>) -> Option<(&'a str, usize)> {
    counts
        .iter()
        .max_by_key(|(_, count)| **count)
        .map(|(label, count)| (*label, *count))
}

/// Persist one result as pretty-printed JSON.
pub fn save_result(result: &AnalysisResult, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    std::fs::write(path, json)?;
    Ok(())
}
