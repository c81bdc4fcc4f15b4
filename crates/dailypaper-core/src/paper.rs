//! Paper records as published in the per-date JSON files.

use serde::{Deserialize, Deserializer, Serialize};

/// A single entry in a date's paper list.
///
/// Every field is optional on the wire: missing strings become empty,
/// missing flags become `false`. The older crawler wrote `ai4science`,
/// `perturbation` and `reason`; those names are read too, and the current
/// name wins when a record carries both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PaperRecord")]
pub struct Paper {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub url: String,
    pub authors: Vec<String>,
    pub published: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_category: Option<String>,
    pub summary: String,
    pub is_ai4science: bool,
    pub is_perturbation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

/// Wire shape accepting both field-name generations.
#[derive(Deserialize)]
struct PaperRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    authors: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    published: String,
    #[serde(default)]
    primary_category: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    summary: String,
    #[serde(default)]
    is_ai4science: Option<bool>,
    #[serde(default)]
    ai4science: Option<bool>,
    #[serde(default)]
    is_perturbation: Option<bool>,
    #[serde(default)]
    perturbation: Option<bool>,
    #[serde(default)]
    reasoning: Option<String>,
    #[serde(default)]
    reason: Option<String>,
}

impl From<PaperRecord> for Paper {
    fn from(r: PaperRecord) -> Self {
        Self {
            id: r.id,
            title: r.title,
            url: r.url,
            authors: r.authors,
            published: r.published,
            primary_category: r.primary_category,
            summary: r.summary,
            is_ai4science: r.is_ai4science.or(r.ai4science).unwrap_or_default(),
            is_perturbation: r.is_perturbation.or(r.perturbation).unwrap_or_default(),
            reasoning: r.reasoning.or(r.reason),
        }
    }
}

/// `null` reads the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Paper {
    /// The primary category, treating an empty string as absent.
    pub fn category(&self) -> Option<&str> {
        self.primary_category.as_deref().filter(|c| !c.is_empty())
    }

    /// The AI annotation, treating an empty or whitespace-only string as absent.
    pub fn reasoning(&self) -> Option<&str> {
        self.reasoning.as_deref().filter(|r| !r.trim().is_empty())
    }
}

/// The papers loaded for one date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaperSet {
    pub papers: Vec<Paper>,
    /// Records in the file that could not be read as a [`Paper`].
    pub skipped: usize,
}

impl PaperSet {
    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }
}

/// Parse a `<date>.json` body record by record.
///
/// The body must be a JSON array. Elements that fail to deserialize are
/// dropped and counted in [`PaperSet::skipped`].
pub fn parse_papers(body: &str) -> Result<PaperSet, serde_json::Error> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(body)?;
    let mut set = PaperSet {
        papers: Vec::with_capacity(raw.len()),
        skipped: 0,
    };
    for (i, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<Paper>(value) {
            Ok(paper) => set.papers.push(paper),
            Err(e) => {
                tracing::warn!(index = i, error = %e, "skipping malformed paper record");
                set.skipped += 1;
            }
        }
    }
    Ok(set)
}
