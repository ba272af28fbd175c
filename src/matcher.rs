//! Symptom matcher — scores catalog conditions against free-text input.
//!
//! Matching is raw case-insensitive substring containment: no tokenization,
//! no stemming, no word boundaries. "ache" inside "headache" counts, and one
//! phrase can raise the score of several conditions at once.
//!
//! Confidence = round(min(100, matched / total * 100)). Conditions with no
//! matched symptom are dropped. Ranking is by confidence descending; equal
//! scores keep catalog order.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::enums::ConfidenceBand;
use crate::models::{Condition, Formula};

// ═══════════════════════════════════════════
// Types
// ═══════════════════════════════════════════

/// One ranked condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionMatch<'a> {
    pub condition: &'a Condition,
    /// 0..=100.
    pub confidence: u8,
    pub band: ConfidenceBand,
    /// Symptoms found in the input, catalog spelling and order.
    pub matched_symptoms: Vec<&'a str>,
}

/// Result of scoring one input against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchOutcome<'a> {
    pub ranked: Vec<ConditionMatch<'a>>,
    /// Formulas of `ranked[0]`, catalog order. Empty when nothing matched.
    pub top_formulas: Vec<&'a Formula>,
}

impl<'a> MatchOutcome<'a> {
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn top(&self) -> Option<&ConditionMatch<'a>> {
        self.ranked.first()
    }
}

// ═══════════════════════════════════════════
// Scoring
// ═══════════════════════════════════════════

/// Percentage of `total` symptoms matched, rounded half up, capped at 100.
pub fn confidence(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (matched as f64 / total as f64 * 100.0).min(100.0);
    pct.round() as u8
}

/// Score a single condition. `None` when no symptom appears in the input.
fn score<'a>(condition: &'a Condition, normalized: &str) -> Option<ConditionMatch<'a>> {
    let matched_symptoms: Vec<&str> = condition
        .symptoms
        .iter()
        .filter(|symptom| normalized.contains(&symptom.to_lowercase()))
        .map(String::as_str)
        .collect();

    if matched_symptoms.is_empty() {
        return None;
    }

    let confidence = confidence(matched_symptoms.len(), condition.symptoms.len());
    Some(ConditionMatch {
        condition,
        confidence,
        band: ConfidenceBand::from_confidence(confidence),
        matched_symptoms,
    })
}

/// Rank catalog conditions for `input` and attach the top condition's formulas.
///
/// Pure: the same input against the same catalog always yields the same outcome.
pub fn match_symptoms<'a>(catalog: &'a Catalog, input: &str) -> MatchOutcome<'a> {
    let normalized = input.to_lowercase();

    let mut ranked: Vec<ConditionMatch<'a>> = catalog
        .conditions()
        .iter()
        .filter_map(|condition| score(condition, &normalized))
        .collect();

    // sort_by is stable: ties stay in catalog order.
    ranked.sort_by(|a, b| b.confidence.cmp(&a.confidence));

    let top_formulas = ranked
        .first()
        .map(|top| catalog.formulas_for_condition(top.condition.id))
        .unwrap_or_default();

    tracing::debug!(
        matched = ranked.len(),
        top = ranked.first().map(|m| m.condition.name.as_str()),
        formulas = top_formulas.len(),
        "Symptom match"
    );

    MatchOutcome {
        ranked,
        top_formulas,
    }
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
