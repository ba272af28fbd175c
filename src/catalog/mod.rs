//! Static reference catalog: conditions, formulas, research papers and
//! regional trends.
//!
//! Built once and never mutated. Lookups by condition id go through maps
//! built at construction instead of scanning the lists:
//! - `condition_index`: condition id → position in `conditions`
//! - `formulas_by_condition`: condition id → formula positions, catalog order
//!
//! A formula whose `condition_id` names no condition is kept and logged;
//! lookups for that id simply return nothing.

pub mod data;

use std::collections::HashMap;
use std::sync::LazyLock;

use thiserror::Error;

use crate::models::{Condition, Formula, RegionTrend, ResearchPaper};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate condition id: {0}")]
    DuplicateCondition(u32),

    #[error("Duplicate formula id: {0}")]
    DuplicateFormula(u32),

    #[error("Formula {id} effectiveness out of range: {value}")]
    EffectivenessOutOfRange { id: u32, value: u8 },
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(
        data::conditions(),
        data::formulas(),
        data::research_papers(),
        data::region_trends(),
    )
    .expect("Built-in catalog must be consistent")
});

/// The catalog shipped with the application.
pub fn builtin() -> &'static Catalog {
    &BUILTIN
}

#[derive(Debug, Clone)]
pub struct Catalog {
    conditions: Vec<Condition>,
    formulas: Vec<Formula>,
    research_papers: Vec<ResearchPaper>,
    region_trends: Vec<RegionTrend>,
    condition_index: HashMap<u32, usize>,
    formulas_by_condition: HashMap<u32, Vec<usize>>,
}

impl Catalog {
    pub fn new(
        conditions: Vec<Condition>,
        formulas: Vec<Formula>,
        research_papers: Vec<ResearchPaper>,
        region_trends: Vec<RegionTrend>,
    ) -> Result<Self, CatalogError> {
        let mut condition_index = HashMap::with_capacity(conditions.len());
        for (pos, condition) in conditions.iter().enumerate() {
            if condition_index.insert(condition.id, pos).is_some() {
                return Err(CatalogError::DuplicateCondition(condition.id));
            }
        }

        let mut seen_formulas = HashMap::with_capacity(formulas.len());
        let mut formulas_by_condition: HashMap<u32, Vec<usize>> = HashMap::new();
        for (pos, formula) in formulas.iter().enumerate() {
            if seen_formulas.insert(formula.id, pos).is_some() {
                return Err(CatalogError::DuplicateFormula(formula.id));
            }
            if formula.effectiveness > 100 {
                return Err(CatalogError::EffectivenessOutOfRange {
                    id: formula.id,
                    value: formula.effectiveness,
                });
            }
            if !condition_index.contains_key(&formula.condition_id) {
                tracing::warn!(
                    formula_id = formula.id,
                    condition_id = formula.condition_id,
                    "Formula references unknown condition"
                );
            }
            formulas_by_condition
                .entry(formula.condition_id)
                .or_default()
                .push(pos);
        }

        tracing::debug!(
            conditions = conditions.len(),
            formulas = formulas.len(),
            research_papers = research_papers.len(),
            regions = region_trends.len(),
            "Catalog built"
        );

        Ok(Self {
            conditions,
            formulas,
            research_papers,
            region_trends,
            condition_index,
            formulas_by_condition,
        })
    }

    /// Conditions in catalog order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Formulas in catalog order.
    pub fn formulas(&self) -> &[Formula] {
        &self.formulas
    }

    pub fn research_papers(&self) -> &[ResearchPaper] {
        &self.research_papers
    }

    pub fn region_trends(&self) -> &[RegionTrend] {
        &self.region_trends
    }

    pub fn condition(&self, id: u32) -> Option<&Condition> {
        self.condition_index.get(&id).map(|&pos| &self.conditions[pos])
    }

    /// Formulas linked to `condition_id`, in catalog order. Empty when the
    /// id is unknown or has no formulas.
    pub fn formulas_for_condition(&self, condition_id: u32) -> Vec<&Formula> {
        self.formulas_by_condition
            .get(&condition_id)
            .map(|positions| positions.iter().map(|&pos| &self.formulas[pos]).collect())
            .unwrap_or_default()
    }

    pub fn region(&self, name: &str) -> Option<&RegionTrend> {
        self.region_trends.iter().find(|trend| trend.region == name)
    }
}
