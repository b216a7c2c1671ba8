// Behavioral insight generation
// Translates the structured findings into owner-facing guidance strings.

use crate::analysis::context::{ContextCategory, ContextFinding};
use crate::analysis::health::{HealthFinding, Severity};
use crate::analysis::interpreter::Interpretation;
use crate::analysis::patterns::{PatternMatch, PatternName};
use crate::analysis::{EmotionalState, UrgencyLevel};

/// Build the ordered insight list for one analysis. Urgency guidance comes
/// first, then emotional framing, pattern notes, context, and health.
pub fn generate_insights(
    interpretation: &Interpretation,
    patterns: &[PatternMatch],
    context: &[ContextFinding],
    health: &[HealthFinding],
) -> Vec<String> {
    let mut insights = Vec::new();

    match interpretation.urgency_level {
        UrgencyLevel::VeryHigh => insights.push(
            "Respond promptly: this call carries very high urgency, often food or door-related"
                .to_string(),
        ),
        UrgencyLevel::High => insights.push(
            "This call is insistent; check food, water, and litter before anything else"
                .to_string(),
        ),
        _ => {}
    }

    match interpretation.emotional_state {
        EmotionalState::SeekingAttention => insights.push(
            "Your cat is soliciting interaction; a short play or petting session usually settles it"
                .to_string(),
        ),
        EmotionalState::StressedStrained => insights.push(
            "Vocal signs of stress are present; look for environmental changes or conflict"
                .to_string(),
        ),
        EmotionalState::RelaxedContent => insights
            .push("A relaxed, content call; no action needed beyond acknowledgment".to_string()),
        EmotionalState::PlayfulExpressive => insights
            .push("An animated, playful call; a good moment for interactive play".to_string()),
        _ => {}
    }

    for pattern in patterns {
        match pattern.name {
            PatternName::Yowl => insights.push(
                "Yowling can indicate pain, territory stress, or an unspayed/unneutered cycle"
                    .to_string(),
            ),
            PatternName::SilentMeow => insights.push(
                "The near-silent meow is a high-trust appeal aimed directly at you".to_string(),
            ),
            PatternName::Chirp => insights.push(
                "Chirping usually means prey is visible; check the window".to_string(),
            ),
            _ => {}
        }
    }

    for finding in context {
        if finding.category == ContextCategory::TimeOfDay {
            insights.push(format!(
                "Acoustic shape matches a \"{}\" call pattern",
                finding.label
            ));
        }
    }

    for finding in health {
        if matches!(finding.severity, Severity::Concern | Severity::HighConcern) {
            insights.push(format!(
                "Health note ({}): {}",
                finding.category.as_str(),
                finding.description
            ));
        }
    }

    if insights.is_empty() {
        insights.push("An unremarkable, everyday vocalization".to_string());
    }

    insights
}
