//! Explorer state — the UI selection state of one session, held in one place.
//!
//! Covers the condition picker, the formula library filters, the research
//! database filters and the trends tab. Every derived list is recomputed
//! from the catalog on demand; the struct stores selections only.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::{Formula, ResearchPaper};
use crate::trends::ChartPoint;
use crate::{library, research, trends};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerState {
    pub selected_condition: Option<u32>,
    pub formula_search: String,
    pub formula_category: Option<String>,
    pub research_search: String,
    pub research_keywords: Vec<String>,
    pub active_region: Option<String>,
}

impl ExplorerState {
    /// Fresh state with the first trend region active.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            active_region: trends::regions(catalog).first().map(|r| r.to_string()),
            ..Self::default()
        }
    }

    pub fn select_condition(&mut self, condition_id: Option<u32>) {
        self.selected_condition = condition_id;
    }

    /// Formulas of the selected condition; empty when nothing is selected.
    pub fn related_formulas<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Formula> {
        self.selected_condition
            .map(|id| catalog.formulas_for_condition(id))
            .unwrap_or_default()
    }

    pub fn set_formula_search(&mut self, term: &str) {
        self.formula_search = term.to_string();
    }

    /// Selecting the active category again clears the filter.
    pub fn toggle_formula_category(&mut self, category: &str) {
        if self.formula_category.as_deref() == Some(category) {
            self.formula_category = None;
        } else {
            self.formula_category = Some(category.to_string());
        }
    }

    pub fn filtered_formulas<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Formula> {
        library::search(
            catalog,
            &self.formula_search,
            self.formula_category.as_deref(),
        )
    }

    pub fn set_research_search(&mut self, term: &str) {
        self.research_search = term.to_string();
    }

    pub fn toggle_research_keyword(&mut self, keyword: &str) {
        research::toggle_keyword(&mut self.research_keywords, keyword);
    }

    pub fn research_results<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ResearchPaper> {
        research::search(catalog, &self.research_search, &self.research_keywords)
    }

    pub fn research_suggestions(&self, catalog: &Catalog) -> Vec<String> {
        research::suggestions(catalog, &self.research_search)
    }

    pub fn set_active_region(&mut self, region: &str) {
        self.active_region = Some(region.to_string());
    }

    pub fn trend_points<'a>(&self, catalog: &'a Catalog) -> Vec<ChartPoint<'a>> {
        match self.active_region.as_deref() {
            Some(region) => trends::chart_points(catalog, region),
            None => Vec::new(),
        }
    }
}
