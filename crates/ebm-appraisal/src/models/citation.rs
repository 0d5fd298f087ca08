//! Citation data model for bibliographic records under evaluation.

use serde::{Deserialize, Serialize};

/// One bibliographic record, as exported by a citation search provider.
///
/// Constructed once per search result and immutable for the duration of
/// an analysis run. All descriptive fields are opaque to the classifier
/// except `publication_types` (deterministic path) and title/abstract
/// (best-effort keyword fallback).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    /// Opaque external key (e.g., a database accession number).
    pub identifier: String,

    /// Free-text study-design tags; unordered, case-insensitive, may be empty.
    #[serde(default)]
    pub publication_types: Vec<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Article title.
    #[serde(default)]
    pub title: Option<String>,

    /// Author names in citation order.
    #[serde(default)]
    pub authors: Vec<String>,

    /// First author, when the provider reports it separately.
    #[serde(default)]
    pub first_author: Option<String>,

    /// Journal or venue name.
    #[serde(default)]
    pub journal: Option<String>,

    /// Abstract text.
    #[serde(default)]
    pub abstract_text: Option<String>,
}

impl Citation {
    /// Get the title, falling back to "Untitled" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// First author, preferring the explicit field over the author list.
    #[must_use]
    pub fn first_author_or_default(&self) -> &str {
        self.first_author
            .as_deref()
            .or_else(|| self.authors.first().map(String::as_str))
            .unwrap_or("Unknown")
    }

    /// Author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors.join(", ")
    }

    /// Lowercased title plus abstract, the haystack for keyword heuristics.
    #[must_use]
    pub fn combined_text(&self) -> String {
        let title = self.title.as_deref().unwrap_or("");
        let abs = self.abstract_text.as_deref().unwrap_or("");
        format!("{title} {abs}").to_lowercase()
    }

    /// Whether the record carries any publication-type tag.
    #[must_use]
    pub fn has_publication_types(&self) -> bool {
        !self.publication_types.is_empty()
    }
}
