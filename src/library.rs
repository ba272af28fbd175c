//! Formula library — text search and category filter over catalog formulas.
//!
//! A formula's category is the first word of its description; categories are
//! listed in first-seen order. The category filter is a case-sensitive prefix
//! match on the description, the search term a case-insensitive substring
//! match on name or description.

use crate::catalog::Catalog;
use crate::models::Formula;

/// Distinct categories in catalog order.
pub fn categories(catalog: &Catalog) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for formula in catalog.formulas() {
        let category = formula_category(formula);
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}

/// First space-separated word of the description.
pub fn formula_category(formula: &Formula) -> &str {
    formula.description.split(' ').next().unwrap_or_default()
}

/// Formulas matching both the search term and the optional category.
pub fn search<'a>(catalog: &'a Catalog, term: &str, category: Option<&str>) -> Vec<&'a Formula> {
    let needle = term.to_lowercase();
    let results: Vec<&Formula> = catalog
        .formulas()
        .iter()
        .filter(|formula| {
            needle.is_empty()
                || formula.name.to_lowercase().contains(&needle)
                || formula.description.to_lowercase().contains(&needle)
        })
        .filter(|formula| category.map_or(true, |c| formula.description.starts_with(c)))
        .collect();

    tracing::debug!(term, category, results = results.len(), "Formula search");
    results
}
