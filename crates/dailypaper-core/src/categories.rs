use crate::paper::Paper;

/// Category value that matches every paper.
pub const ALL_CATEGORIES: &str = "All";

/// Distinct primary categories for the quick-filter bar.
///
/// Always starts with [`ALL_CATEGORIES`], followed by each distinct
/// category in first-seen order. Papers without a category only match
/// "All" and contribute nothing here.
pub fn derive_categories(papers: &[Paper]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for cat in papers.iter().filter_map(Paper::category) {
        if !categories.iter().any(|c| c == cat) {
            categories.push(cat.to_string());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(category: Option<&str>) -> Paper {
        Paper {
            primary_category: category.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn all_first_then_first_seen_order() {
        let papers = vec![
            paper(Some("q-bio.BM")),
            paper(Some("cs.LG")),
            paper(Some("q-bio.BM")),
            paper(None),
            paper(Some("stat.ML")),
        ];
        assert_eq!(derive_categories(&papers), vec!["All", "q-bio.BM", "cs.LG", "stat.ML"]);
    }

    #[test]
    fn empty_list_only_has_all() {
        assert_eq!(derive_categories(&[]), vec!["All"]);
    }

    #[test]
    fn no_duplicates_even_when_a_category_is_named_all() {
        let papers = vec![paper(Some("All")), paper(Some("")), paper(Some("cs.AI"))];
        let cats = derive_categories(&papers);
        assert_eq!(cats, vec!["All", "cs.AI"]);
    }
}
