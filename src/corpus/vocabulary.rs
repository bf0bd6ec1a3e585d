use std::collections::{BTreeSet, HashMap};

use super::Document;

/// Global term set with a fixed dimension order.
///
/// Terms are ordered lexicographically so that two runs over the same
/// corpus produce identical column layouts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Collect every distinct term across all fields of all documents
    pub fn build(documents: &[Document]) -> Self {
        let distinct: BTreeSet<&str> = documents
            .iter()
            .flat_map(|doc| doc.bag_of_words())
            .collect();

        Self::from_terms(distinct)
    }

    /// Build from an explicit term list; duplicates collapse
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sorted: BTreeSet<String> = terms.into_iter().map(|t| t.as_ref().to_string()).collect();
        let terms: Vec<String> = sorted.into_iter().collect();
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        Self { terms, index }
    }

    /// Number of dimensions
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in dimension order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Dimension index of a term
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }
}
