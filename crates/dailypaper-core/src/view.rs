//! View model the front-ends bind to.
//!
//! Nothing here produces markup. Front-ends take [`PaperCard`]s and a
//! [`ListView`] and lay them out with their own toolkit.

use serde::Serialize;

use crate::paper::Paper;

/// One displayed paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperCard {
    /// 1-based position in the filtered list.
    pub index: usize,
    pub title: String,
    pub url: String,
    /// `url` when it is safe to put in a hyperlink (`http` or `https` only).
    pub link: Option<String>,
    pub authors: String,
    pub published: String,
    pub category: Option<String>,
    pub summary: String,
    pub ai4science: bool,
    pub perturbation: bool,
    pub reasoning: Option<String>,
}

impl PaperCard {
    fn from_paper(index: usize, paper: &Paper) -> Self {
        Self {
            index,
            title: paper.title.trim().to_string(),
            url: paper.url.trim().to_string(),
            link: web_link(&paper.url),
            authors: paper.authors.join(", "),
            published: paper.published.clone(),
            category: paper.category().map(str::to_string),
            summary: paper.summary.trim().to_string(),
            ai4science: paper.is_ai4science,
            perturbation: paper.is_perturbation,
            reasoning: paper.reasoning().map(|r| r.trim().to_string()),
        }
    }

    /// Tag labels in display order.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags = Vec::with_capacity(2);
        if self.ai4science {
            tags.push(AI4SCIENCE_TAG);
        }
        if self.perturbation {
            tags.push(PERTURBATION_TAG);
        }
        tags
    }
}

/// Feed URLs are untrusted; only `http(s)` ones may become links.
fn web_link(url: &str) -> Option<String> {
    let url = url.trim();
    let (scheme, rest) = url.split_once("://")?;
    let web = scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https");
    (web && !rest.is_empty()).then(|| url.to_string())
}

pub const AI4SCIENCE_TAG: &str = "AI4Science";
pub const PERTURBATION_TAG: &str = "Perturbation Prediction";
pub const NO_MATCHES_MESSAGE: &str = "No papers match your criteria.";

/// Project filtered papers into cards, numbering them from 1.
pub fn render(papers: &[&Paper]) -> Vec<PaperCard> {
    papers
        .iter()
        .enumerate()
        .map(|(i, paper)| PaperCard::from_paper(i + 1, paper))
        .collect()
}

/// What the paper list area shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ListView {
    /// A load is in flight (or nothing has been requested yet).
    Loading { date: Option<String> },
    Populated { cards: Vec<PaperCard> },
    /// Papers are loaded but none pass the current filters.
    Empty,
    Error { message: String },
}

impl ListView {
    /// `Populated` or `Empty` depending on whether any card survived.
    pub fn from_cards(cards: Vec<PaperCard>) -> Self {
        if cards.is_empty() {
            Self::Empty
        } else {
            Self::Populated { cards }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Loading { .. } => "loading",
            Self::Populated { .. } => "populated",
            Self::Empty => "empty",
            Self::Error { .. } => "error",
        }
    }

    /// Status line shown in place of the list, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Loading { date: Some(d) } => Some(format!("Loading papers for {d}...")),
            Self::Loading { date: None } => Some("Loading...".to_string()),
            Self::Populated { .. } => None,
            Self::Empty => Some(NO_MATCHES_MESSAGE.to_string()),
            Self::Error { message } => Some(message.clone()),
        }
    }

    pub fn cards(&self) -> &[PaperCard] {
        match self {
            Self::Populated { cards } => cards,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(title: &str) -> Paper {
        Paper {
            title: title.into(),
            authors: vec!["Ada".into(), "Grace".into()],
            primary_category: Some("cs.LG".into()),
            ..Default::default()
        }
    }

    #[test]
    fn indices_follow_filtered_position() {
        let all = vec![paper("a"), paper("b"), paper("c")];
        let filtered: Vec<&Paper> = vec![&all[0], &all[2]];
        let cards = render(&filtered);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].index, 1);
        assert_eq!(cards[1].index, 2);
        assert_eq!(cards[1].title, "c");
    }

    #[test]
    fn authors_are_joined() {
        let p = paper("a");
        let cards = render(&[&p]);
        assert_eq!(cards[0].authors, "Ada, Grace");
    }

    #[test]
    fn optional_parts_only_when_present() {
        let mut plain = paper("plain");
        plain.reasoning = Some("".into());
        let mut tagged = paper("tagged");
        tagged.is_ai4science = true;
        tagged.is_perturbation = true;
        tagged.reasoning = Some("because".into());

        let cards = render(&[&plain, &tagged]);
        assert!(cards[0].tags().is_empty());
        assert_eq!(cards[0].reasoning, None);
        assert_eq!(cards[1].tags(), vec![AI4SCIENCE_TAG, PERTURBATION_TAG]);
        assert_eq!(cards[1].reasoning.as_deref(), Some("because"));
    }

    #[test]
    fn only_web_urls_become_links() {
        let mut p = paper("a");
        for (url, link) in [
            ("https://arxiv.org/abs/2401.00001", true),
            (" HTTP://arxiv.org/abs/1 ", true),
            ("javascript:alert(1)", false),
            ("JaVaScRiPt://%0aalert(1)", false),
            ("data:text/html,<script>", false),
            ("http://", false),
            ("", false),
        ] {
            p.url = url.into();
            let card = &render(&[&p])[0];
            assert_eq!(card.link.is_some(), link, "{url:?}");
        }
    }

    #[test]
    fn render_does_not_touch_input() {
        let p = paper("  spaced  ");
        let before = p.clone();
        let cards = render(&[&p]);
        assert_eq!(cards[0].title, "spaced");
        assert_eq!(p, before);
    }

    #[test]
    fn empty_is_distinct_from_loading() {
        let empty = ListView::from_cards(vec![]);
        assert_eq!(empty, ListView::Empty);
        assert_eq!(empty.message().as_deref(), Some(NO_MATCHES_MESSAGE));

        let loading = ListView::Loading {
            date: Some("2024-01-01".into()),
        };
        assert_ne!(loading.message(), empty.message());
    }

    #[test]
    fn serializes_with_state_tag() {
        let json = serde_json::to_value(ListView::Empty).unwrap();
        assert_eq!(json["state"], "empty");
    }
}
