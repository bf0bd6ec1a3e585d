mod matrix;
mod tfidf;

#[cfg(test)]
mod tests;

pub use matrix::TfIdfMatrix;
pub use tfidf::{densify, inverse_document_frequency, term_counts, term_frequency, tf_idf};

use std::collections::HashSet;

use crate::corpus::{Document, Vocabulary};
use crate::error::{ClusterError, Result};

/// Fitted TF-IDF model: vocabulary plus per-dimension IDF weights
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    vocabulary: Vocabulary,
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Build the vocabulary and IDF weights, then vectorize every document
    pub fn fit(documents: &[Document]) -> Result<(Self, TfIdfMatrix)> {
        if documents.is_empty() {
            return Err(ClusterError::EmptyCorpus);
        }

        let mut seen = HashSet::new();
        for doc in documents {
            if !seen.insert(doc.id.as_str()) {
                return Err(ClusterError::DuplicateId(doc.id.clone()));
            }
        }

        let vocabulary = Vocabulary::build(documents);
        let idf = inverse_document_frequency(documents, &vocabulary);
        let vectorizer = Self { vocabulary, idf };

        let rows = documents.iter().map(|d| vectorizer.transform(d)).collect();
        let matrix = TfIdfMatrix {
            ids: documents.iter().map(|d| d.id.clone()).collect(),
            terms: vectorizer.vocabulary.terms().to_vec(),
            rows,
        };

        tracing::debug!(
            documents = matrix.len(),
            terms = matrix.dim(),
            "Built TF-IDF matrix"
        );
        Ok((vectorizer, matrix))
    }

    /// Vectorize a document against the fitted vocabulary.
    ///
    /// Terms unseen during fitting get no column but still count towards
    /// the bag-of-words size.
    pub fn transform(&self, doc: &Document) -> Vec<f64> {
        let counts = term_counts(doc, &self.vocabulary);
        let tf = term_frequency(&counts, doc.bag_of_words().len());
        let weights = tf_idf(&tf, &self.idf, &self.vocabulary);
        densify(&weights, &self.vocabulary)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// IDF weight per vocabulary dimension
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }
}
