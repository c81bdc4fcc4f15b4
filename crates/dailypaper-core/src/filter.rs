//! Filter predicates over a loaded paper list.

use serde::{Deserialize, Serialize};

use crate::categories::ALL_CATEGORIES;
use crate::paper::Paper;

/// User-controlled filter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub selected_date: Option<String>,
    pub active_category: String,
    pub ai_only: bool,
    pub perturbation_only: bool,
    pub search_query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected_date: None,
            active_category: ALL_CATEGORIES.to_string(),
            ai_only: false,
            perturbation_only: false,
            search_query: String::new(),
        }
    }
}

impl FilterState {
    /// Switch to `date`. The category goes back to "All"; flags and search
    /// are kept.
    pub fn select_date(&mut self, date: &str) {
        self.selected_date = Some(date.to_string());
        self.active_category = ALL_CATEGORIES.to_string();
    }

    pub fn is_all_categories(&self) -> bool {
        self.active_category == ALL_CATEGORIES
    }

    fn matcher(&self) -> Matcher<'_> {
        Matcher {
            state: self,
            query: self.search_query.to_lowercase(),
        }
    }
}

/// A [`FilterState`] with the search query lowercased once per pass.
struct Matcher<'a> {
    state: &'a FilterState,
    query: String,
}

impl Matcher<'_> {
    fn matches(&self, paper: &Paper) -> bool {
        let s = self.state;
        let ai = !s.ai_only || paper.is_ai4science;
        let perturbation = !s.perturbation_only || paper.is_perturbation;
        let category = s.is_all_categories() || paper.category() == Some(s.active_category.as_str());
        ai && perturbation && category && self.matches_search(paper)
    }

    fn matches_search(&self, paper: &Paper) -> bool {
        self.query.is_empty()
            || paper.title.to_lowercase().contains(&self.query)
            || paper.summary.to_lowercase().contains(&self.query)
    }
}

/// The papers that pass `state`, in their original order.
pub fn apply_filters<'a>(papers: &'a [Paper], state: &FilterState) -> Vec<&'a Paper> {
    let matcher = state.matcher();
    papers.iter().filter(|p| matcher.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(title: &str, summary: &str, category: &str, ai: bool, perturbation: bool) -> Paper {
        Paper {
            title: title.into(),
            summary: summary.into(),
            primary_category: Some(category.into()),
            is_ai4science: ai,
            is_perturbation: perturbation,
            ..Default::default()
        }
    }

    fn dataset() -> Vec<Paper> {
        vec![
            paper("Graph Nets", "message passing", "cs.LG", true, false),
            paper("Protein Folding", "structure prediction", "q-bio.BM", false, false),
        ]
    }

    fn titles(papers: &[&Paper]) -> Vec<String> {
        papers.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn default_state_passes_everything() {
        let papers = dataset();
        let state = FilterState::default();
        assert!(state.is_all_categories());
        assert_eq!(apply_filters(&papers, &state).len(), 2);
    }

    #[test]
    fn ai_only_keeps_ai_papers() {
        let papers = dataset();
        let state = FilterState {
            ai_only: true,
            ..Default::default()
        };
        assert_eq!(titles(&apply_filters(&papers, &state)), vec!["Graph Nets"]);
    }

    #[test]
    fn search_is_case_insensitive_on_title() {
        let papers = dataset();
        for query in ["fold", "FOLD", "Fold"] {
            let state = FilterState {
                search_query: query.into(),
                ..Default::default()
            };
            assert_eq!(titles(&apply_filters(&papers, &state)), vec!["Protein Folding"]);
        }
    }

    #[test]
    fn search_matches_summary() {
        let papers = dataset();
        let state = FilterState {
            search_query: "Message PASSING".into(),
            ..Default::default()
        };
        assert_eq!(titles(&apply_filters(&papers, &state)), vec!["Graph Nets"]);
    }

    #[test]
    fn search_tolerates_missing_title_and_summary() {
        let papers = vec![Paper::default(), paper("Fold", "", "cs.LG", false, false)];
        let state = FilterState {
            search_query: "fold".into(),
            ..Default::default()
        };
        assert_eq!(titles(&apply_filters(&papers, &state)), vec!["Fold"]);
    }

    #[test]
    fn category_filter() {
        let papers = dataset();
        let state = FilterState {
            active_category: "q-bio.BM".into(),
            ..Default::default()
        };
        assert_eq!(titles(&apply_filters(&papers, &state)), vec!["Protein Folding"]);
    }

    #[test]
    fn uncategorized_paper_only_matches_all() {
        let papers = vec![Paper {
            title: "Loose".into(),
            ..Default::default()
        }];
        assert_eq!(apply_filters(&papers, &FilterState::default()).len(), 1);
        let state = FilterState {
            active_category: "cs.LG".into(),
            ..Default::default()
        };
        assert!(apply_filters(&papers, &state).is_empty());
    }

    #[test]
    fn predicates_are_anded() {
        let papers = vec![
            paper("A", "", "cs.LG", true, true),
            paper("B", "", "cs.LG", true, false),
            paper("C", "", "cs.AI", true, true),
            paper("D", "", "cs.LG", false, true),
        ];
        let state = FilterState {
            ai_only: true,
            perturbation_only: true,
            active_category: "cs.LG".into(),
            ..Default::default()
        };
        assert_eq!(titles(&apply_filters(&papers, &state)), vec!["A"]);
    }

    #[test]
    fn result_is_ordered_subsequence_and_idempotent() {
        let papers: Vec<Paper> = (0..20)
            .map(|i| paper(&format!("P{i}"), "", if i % 3 == 0 { "x" } else { "y" }, i % 2 == 0, i % 5 == 0))
            .collect();
        let state = FilterState {
            ai_only: true,
            active_category: "x".into(),
            ..Default::default()
        };

        let first = apply_filters(&papers, &state);
        let second = apply_filters(&papers, &state);
        assert_eq!(first, second);

        let positions: Vec<usize> = first
            .iter()
            .map(|p| papers.iter().position(|q| std::ptr::eq(q, *p)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(titles(&first), vec!["P0", "P6", "P12", "P18"]);
    }

    #[test]
    fn select_date_resets_category_only() {
        let mut state = FilterState {
            selected_date: Some("2024-01-01".into()),
            active_category: "cs.LG".into(),
            ai_only: true,
            perturbation_only: true,
            search_query: "graph".into(),
        };
        state.select_date("2024-01-02");
        assert_eq!(state.selected_date.as_deref(), Some("2024-01-02"));
        assert_eq!(state.active_category, "All");
        assert!(state.ai_only);
        assert!(state.perturbation_only);
        assert_eq!(state.search_query, "graph");
    }
}
