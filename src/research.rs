//! Research database — search, keyword filter and search suggestions over
//! the research paper records.

use crate::catalog::Catalog;
use crate::models::ResearchPaper;

/// Suggestions shown under the search box.
const MAX_SUGGESTIONS: usize = 5;

/// Title words must be longer than this to be suggested.
const MIN_TITLE_WORD_LEN: usize = 3;

/// All distinct keywords, sorted.
pub fn all_keywords(catalog: &Catalog) -> Vec<&str> {
    let mut keywords: Vec<&str> = catalog
        .research_papers()
        .iter()
        .flat_map(|paper| paper.keywords.iter().map(String::as_str))
        .collect();
    keywords.sort_unstable();
    keywords.dedup();
    keywords
}

/// Papers matching `term` (title, abstract or any author, case-insensitive)
/// and carrying every keyword in `selected`.
pub fn search<'a>(catalog: &'a Catalog, term: &str, selected: &[String]) -> Vec<&'a ResearchPaper> {
    let needle = term.to_lowercase();
    catalog
        .research_papers()
        .iter()
        .filter(|paper| needle.is_empty() || paper_contains(paper, &needle))
        .filter(|paper| selected.iter().all(|k| paper.keywords.contains(k)))
        .collect()
}

fn paper_contains(paper: &ResearchPaper, needle: &str) -> bool {
    paper.title.to_lowercase().contains(needle)
        || paper.abstract_text.to_lowercase().contains(needle)
        || paper
            .authors
            .iter()
            .any(|author| author.to_lowercase().contains(needle))
}

/// Search-box suggestions for a partially typed term.
///
/// Empty for terms of one character or less. Otherwise, per paper: title
/// words, then keywords, then authors (comma removed) that contain the term.
/// Deduplicated in first-seen order, at most five.
pub fn suggestions(catalog: &Catalog, term: &str) -> Vec<String> {
    if term.chars().count() <= 1 {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    let mut found: Vec<String> = Vec::new();
    let mut add = |candidate: String| {
        if !found.contains(&candidate) {
            found.push(candidate);
        }
    };

    for paper in catalog.research_papers() {
        for word in paper.title.to_lowercase().split(' ') {
            if word.chars().count() > MIN_TITLE_WORD_LEN && word.contains(&needle) {
                add(word.to_string());
            }
        }
        for keyword in &paper.keywords {
            if keyword.to_lowercase().contains(&needle) {
                add(keyword.clone());
            }
        }
        for author in &paper.authors {
            if author.to_lowercase().contains(&needle) {
                add(author.replacen(',', "", 1));
            }
        }
    }

    found.truncate(MAX_SUGGESTIONS);
    found
}

/// Add `keyword` to the selection, or remove it if already selected.
pub fn toggle_keyword(selected: &mut Vec<String>, keyword: &str) {
    if let Some(pos) = selected.iter().position(|k| k == keyword) {
        selected.remove(pos);
    } else {
        selected.push(keyword.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;

    fn ids(papers: &[&ResearchPaper]) -> Vec<u32> {
        papers.iter().map(|p| p.id).collect()
    }

    #[test]
    fn keywords_sorted_and_distinct() {
        let keywords = all_keywords(builtin());
        assert_eq!(keywords.len(), 16);
        assert_eq!(keywords[0], "GERD");
        let mut sorted = keywords.clone();
        sorted.sort();
        assert_eq!(keywords, sorted);
    }

    #[test]
    fn empty_search_returns_all_papers() {
        assert_eq!(ids(&search(builtin(), "", &[])), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn search_title_abstract_and_author() {
        assert_eq!(ids(&search(builtin(), "boswellia", &[])), vec![3]);
        assert_eq!(ids(&search(builtin(), "aloe vera", &[])), vec![5]);
        assert_eq!(ids(&search(builtin(), "patel", &[])), vec![2, 5]);
    }

    #[test]
    fn selected_keywords_must_all_match() {
        let selected = vec!["elderberry".to_string()];
        assert_eq!(ids(&search(builtin(), "", &selected)), vec![4]);

        let selected = vec!["elderberry".to_string(), "diabetes".to_string()];
        assert!(search(builtin(), "", &selected).is_empty());
    }

    #[test]
    fn term_and_keywords_combine() {
        let selected = vec!["clinical trial".to_string()];
        assert_eq!(ids(&search(builtin(), "hibiscus", &selected)), vec![1]);
        assert!(search(builtin(), "turmeric", &selected).is_empty());
    }

    #[test]
    fn short_terms_have_no_suggestions() {
        assert!(suggestions(builtin(), "").is_empty());
        assert!(suggestions(builtin(), "h").is_empty());
    }

    #[test]
    fn suggestions_collect_title_words_keywords_and_authors() {
        let found = suggestions(builtin(), "hyper");
        assert_eq!(found, vec!["hypertension"]);

        let found = suggestions(builtin(), "pat");
        assert_eq!(found, vec!["Patel S.", "Patel A."]);
    }

    #[test]
    fn suggestions_capped_at_five() {
        let found = suggestions(builtin(), "in");
        assert_eq!(found.len(), MAX_SUGGESTIONS);
        assert_eq!(
            found,
            vec![
                "clinical trial",
                "interventions",
                "botanical interventions",
                "anti-inflammatory",
                "joint",
            ]
        );
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selected = Vec::new();
        toggle_keyword(&mut selected, "turmeric");
        toggle_keyword(&mut selected, "GERD");
        assert_eq!(selected, vec!["turmeric", "GERD"]);
        toggle_keyword(&mut selected, "turmeric");
        assert_eq!(selected, vec!["GERD"]);
    }
}
