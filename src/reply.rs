//! Assistant reply text built from a match outcome.

use crate::matcher::MatchOutcome;

/// Appended to every generated reply.
pub const DISCLAIMER: &str = "This AI health assistant is for informational purposes only. \
Always consult with healthcare professionals for medical advice.";

/// Reply when no condition matched.
pub const NEED_MORE_DETAIL: &str = "I couldn't match what you described to any condition I know about yet. \
Could you describe your symptoms in more detail? For example: how long you've had them, \
where you feel them, and anything that makes them better or worse.";

/// Opening assistant message for a fresh session.
pub const GREETING: &str = "Hello! I'm your HealthNexus AI assistant. How can I help you today?";

/// Further candidates listed after the top condition.
const MAX_ALTERNATIVES: usize = 2;

/// Render the assistant reply for `outcome`.
pub fn compose_reply(outcome: &MatchOutcome<'_>) -> String {
    let Some(top) = outcome.top() else {
        return format!("{NEED_MORE_DETAIL}\n\n{DISCLAIMER}");
    };

    let mut reply = format!(
        "Based on the symptoms you've described ({}), the closest match is {} ({}% confidence). {}",
        top.matched_symptoms.join(", ").to_lowercase(),
        top.condition.name,
        top.confidence,
        top.condition.description,
    );

    let alternatives: Vec<String> = outcome
        .ranked
        .iter()
        .skip(1)
        .take(MAX_ALTERNATIVES)
        .map(|m| format!("{} ({}%)", m.condition.name, m.confidence))
        .collect();
    if !alternatives.is_empty() {
        reply.push_str(&format!(
            "\n\nOther possibilities: {}.",
            alternatives.join(", ")
        ));
    }

    if !top.condition.causes.is_empty() {
        reply.push_str(&format!(
            "\n\nCommon causes include: {}.",
            top.condition.causes.join(", ").to_lowercase()
        ));
    }

    if outcome.top_formulas.is_empty() {
        reply.push_str("\n\nI don't have a formula recommendation for this condition yet.");
    } else {
        reply.push_str(if outcome.top_formulas.len() == 1 {
            "\n\nA formula that may help:"
        } else {
            "\n\nFormulas that may help:"
        });
        for formula in &outcome.top_formulas {
            reply.push_str(&format!(
                "\n- {} ({}% effectiveness): {} Components: {}. {}",
                formula.name,
                formula.effectiveness,
                formula.description,
                formula.components.join(", "),
                formula.research_basis,
            ));
        }
    }

    reply.push_str("\n\n");
    reply.push_str(DISCLAIMER);
    reply
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;
    use crate::catalog::tests::{catalog, condition, formula};
    use crate::matcher::match_symptoms;

    #[test]
    fn empty_outcome_asks_for_more_detail() {
        let outcome = match_symptoms(builtin(), "hello there");
        let reply = compose_reply(&outcome);
        assert!(reply.starts_with(NEED_MORE_DETAIL));
        assert!(reply.ends_with(DISCLAIMER));
    }

    #[test]
    fn reply_names_top_condition_and_confidence() {
        let outcome = match_symptoms(builtin(), "cough, sore throat, fever");
        let reply = compose_reply(&outcome);
        assert!(reply.contains("Respiratory Infection (60% confidence)"));
        assert!(reply.contains("(cough, sore throat, fever)"));
        assert!(reply.contains("viral infection"));
    }

    #[test]
    fn reply_includes_formula_details() {
        let outcome = match_symptoms(builtin(), "cough, sore throat, fever");
        let reply = compose_reply(&outcome);
        assert!(reply.contains("Respiratory Support Blend (78% effectiveness)"));
        assert!(reply.contains("Elderberry extract, N-acetyl cysteine"));
        assert!(reply.contains("reduce duration and severity"));
        assert!(reply.ends_with(DISCLAIMER));
    }

    #[test]
    fn reply_lists_alternatives() {
        let outcome = match_symptoms(builtin(), "headaches, fatigue, fever and a cough");
        let reply = compose_reply(&outcome);
        assert!(reply.contains("Other possibilities:"));
    }

    #[test]
    fn alternatives_capped_at_two() {
        let catalog = catalog(
            vec![
                condition(1, "One", &["a"]),
                condition(2, "Two", &["a", "b"]),
                condition(3, "Three", &["a", "c"]),
                condition(4, "Four", &["a", "d"]),
            ],
            vec![],
        );
        let outcome = match_symptoms(&catalog, "a");
        let reply = compose_reply(&outcome);
        assert!(reply.contains("Other possibilities: Two (50%), Three (50%)."));
        assert!(!reply.contains("Four"));
    }

    #[test]
    fn formula_header_agrees_with_count() {
        let single = compose_reply(&match_symptoms(builtin(), "fever"));
        assert!(single.contains("A formula that may help:"));

        let catalog = catalog(
            vec![condition(1, "Twice covered", &["x"])],
            vec![formula(1, 1, "First"), formula(2, 1, "Second")],
        );
        let reply = compose_reply(&match_symptoms(&catalog, "x"));
        assert!(reply.contains("Formulas that may help:"));
        assert!(!reply.contains("A formula that may help:"));
        assert!(reply.contains("\n- First (70% effectiveness)"));
        assert!(reply.contains("\n- Second (70% effectiveness)"));
    }

    #[test]
    fn reply_without_formula_says_so() {
        let catalog = catalog(vec![condition(1, "Lonely", &["x"])], vec![]);
        let reply = compose_reply(&match_symptoms(&catalog, "x"));
        assert!(reply.contains("don't have a formula recommendation"));
    }
}
