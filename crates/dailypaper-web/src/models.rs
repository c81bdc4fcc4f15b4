use serde::{Deserialize, Serialize};

use dailypaper_core::{ListView, Session};

/// Query parameters shared by the page and the papers API.
///
/// Flags come from HTML checkboxes, so any of `1`, `true`, `on`, `yes`
/// counts as set.
#[derive(Debug, Default, Deserialize)]
pub struct FeedParams {
    pub date: Option<String>,
    pub category: Option<String>,
    pub ai: Option<String>,
    pub perturbation: Option<String>,
    pub q: Option<String>,
}

impl FeedParams {
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref().map(str::trim).filter(|d| !d.is_empty())
    }

    pub fn ai_only(&self) -> bool {
        is_set(self.ai.as_deref())
    }

    pub fn perturbation_only(&self) -> bool {
        is_set(self.perturbation.as_deref())
    }

    /// Apply the filter parameters to a session whose papers are loaded.
    pub fn apply(&self, session: &mut Session) {
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty())
            && !session.set_category(category)
        {
            tracing::debug!(category, "unknown category ignored");
        }
        session.set_ai_only(self.ai_only());
        session.set_perturbation_only(self.perturbation_only());
        session.set_search_query(self.q.as_deref().unwrap_or_default());
    }
}

fn is_set(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "on" | "yes")
    )
}

/// Body of `GET /api/papers/{date}`.
#[derive(Debug, Serialize)]
pub struct PapersResponse {
    pub date: String,
    pub categories: Vec<String>,
    pub total: usize,
    pub skipped: usize,
    #[serde(flatten)]
    pub view: ListView,
}

impl PapersResponse {
    pub fn from_session(date: &str, session: &Session) -> Self {
        Self {
            date: date.to_string(),
            categories: session.categories().to_vec(),
            total: session.papers().len(),
            skipped: session.skipped(),
            view: session.view(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_values_count_as_set() {
        for v in ["1", "true", "on", "YES"] {
            let params = FeedParams {
                ai: Some(v.into()),
                ..Default::default()
            };
            assert!(params.ai_only(), "{v}");
        }
        let params = FeedParams {
            ai: Some("0".into()),
            perturbation: None,
            ..Default::default()
        };
        assert!(!params.ai_only());
        assert!(!params.perturbation_only());
    }

    #[test]
    fn blank_date_is_absent() {
        let params = FeedParams {
            date: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(params.date(), None);
    }
}
