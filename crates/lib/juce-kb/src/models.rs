use serde::Serialize;

/// A single knowledge-base entry: a guide, a concept walkthrough, or a template.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Document {
    /// Internal lookup key, referenced by the concept explainer.
    pub key: &'static str,
    /// Externally addressable identifier in `juce://category/slug` form.
    pub locator: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub content_type: &'static str,
    pub body: &'static str,
}

impl Document {
    /// Returns the listing view of this document.
    #[must_use]
    pub const fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            locator: self.locator,
            name: self.name,
            description: self.description,
            content_type: self.content_type,
        }
    }

    /// Returns the search-result view of this document.
    #[must_use]
    pub const fn search_hit(&self) -> SearchHit {
        SearchHit {
            name: self.name,
            locator: self.locator,
            description: self.description,
        }
    }
}

/// Document metadata exposed by resource listings.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DocumentSummary {
    pub locator: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub content_type: &'static str,
}

/// A document matched by a text search.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SearchHit {
    pub name: &'static str,
    pub locator: &'static str,
    pub description: &'static str,
}
