use std::fmt;

use juce_kb::{Document, SearchHit};
use tracing::debug;

use super::JuceControlPlane;

/// Documents matched by a search, in knowledge-base order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    /// The query after case folding.
    pub query: String,
    pub hits: Vec<SearchHit>,
}

impl SearchResults {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.hits.len()
    }
}

impl fmt::Display for SearchResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hits.is_empty() {
            return write!(f, "No results found for: {}", self.query);
        }
        write!(f, "Found {} results:\n\n", self.hits.len())?;
        for (position, hit) in self.hits.iter().enumerate() {
            if position > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "- {}: {}\n  URI: {}", hit.name, hit.description, hit.locator)?;
        }
        Ok(())
    }
}

impl JuceControlPlane {
    /// Finds documents whose name, description or body contains `query`,
    /// ignoring case.
    ///
    /// An empty query matches every document.
    #[must_use]
    pub fn search(&self, query: &str) -> SearchResults {
        let query = query.to_lowercase();
        let hits: Vec<SearchHit> = self
            .kb
            .documents()
            .iter()
            .filter(|document| matches(document, &query))
            .map(Document::search_hit)
            .collect();
        debug!(query = %query, hits = hits.len(), "searched documents");
        SearchResults { query, hits }
    }
}

fn matches(document: &Document, folded_query: &str) -> bool {
    [document.name, document.description, document.body]
        .into_iter()
        .any(|field| field.to_lowercase().contains(folded_query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_case_insensitive() {
        let control = JuceControlPlane::new();
        let lower = control.search("reverb");
        let upper = control.search("REVERB");
        assert_eq!(lower.hits, upper.hits);
        assert!(
            lower
                .hits
                .iter()
                .any(|hit| hit.locator == "juce://docs/dsp-basics")
        );
    }

    #[test]
    fn search_matches_name_and_description_fields() {
        let control = JuceControlPlane::new();
        let by_name = control.search("getting started guide");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name.hits[0].locator, "juce://docs/getting-started");

        let by_description = control.search("minimal working vst");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description.hits[0].locator, "juce://templates/basic-plugin");
    }

    #[test]
    fn empty_query_matches_everything_in_order() {
        let control = JuceControlPlane::new();
        let results = control.search("");
        let locators: Vec<_> = results.hits.iter().map(|hit| hit.locator).collect();
        let expected: Vec<_> = control
            .list_documents()
            .iter()
            .map(|summary| summary.locator)
            .collect();
        assert_eq!(locators, expected);
    }

    #[test]
    fn renders_hits_as_bullet_list() {
        let results = SearchResults {
            query: "x".to_string(),
            hits: vec![
                SearchHit {
                    name: "A",
                    locator: "juce://docs/a",
                    description: "first",
                },
                SearchHit {
                    name: "B",
                    locator: "juce://docs/b",
                    description: "second",
                },
            ],
        };
        assert_eq!(
            results.to_string(),
            "Found 2 results:\n\n- A: first\n  URI: juce://docs/a\n\n- B: second\n  URI: juce://docs/b"
        );
    }

    #[test]
    fn renders_miss_with_folded_query() {
        let control = JuceControlPlane::new();
        let results = control.search("ZZZ-Not-Present");
        assert!(results.is_empty());
        assert_eq!(results.to_string(), "No results found for: zzz-not-present");
    }
}
