use std::collections::BTreeMap;

use crate::corpus::{Document, Field, Vocabulary};

/// Count, per term, how many of the document's field term sets contain it.
///
/// Each field contributes at most one increment per term, so counts range
/// over 1..=3. Terms missing from the vocabulary are ignored.
pub fn term_counts<'a>(doc: &'a Document, vocabulary: &Vocabulary) -> BTreeMap<&'a str, usize> {
    let mut counts = BTreeMap::new();

    for field in Field::ALL {
        for term in doc.field_terms(field) {
            if vocabulary.contains(term) {
                *counts.entry(term).or_insert(0) += 1;
            }
        }
    }

    counts
}

/// Normalize counts by the size of the document's bag of words.
///
/// A zero-sized bag yields all-zero frequencies.
pub fn term_frequency<'a>(
    counts: &BTreeMap<&'a str, usize>,
    bow_size: usize,
) -> BTreeMap<&'a str, f64> {
    counts
        .iter()
        .map(|(&term, &count)| {
            let tf = if bow_size == 0 {
                0.0
            } else {
                count as f64 / bow_size as f64
            };
            (term, tf)
        })
        .collect()
}

/// `ln(N / df)` per vocabulary dimension, 0 where no document contains the term
pub fn inverse_document_frequency(documents: &[Document], vocabulary: &Vocabulary) -> Vec<f64> {
    let mut doc_freq = vec![0usize; vocabulary.len()];

    for doc in documents {
        for term in doc.bag_of_words() {
            if let Some(i) = vocabulary.index_of(term) {
                doc_freq[i] += 1;
            }
        }
    }

    let n = documents.len() as f64;
    doc_freq
        .into_iter()
        .map(|df| if df == 0 { 0.0 } else { (n / df as f64).ln() })
        .collect()
}

/// Elementwise TF * IDF over the keys of `tf`
pub fn tf_idf<'a>(
    tf: &BTreeMap<&'a str, f64>,
    idf: &[f64],
    vocabulary: &Vocabulary,
) -> BTreeMap<&'a str, f64> {
    tf.iter()
        .map(|(&term, &freq)| {
            let weight = vocabulary
                .index_of(term)
                .and_then(|i| idf.get(i))
                .copied()
                .unwrap_or(0.0);
            (term, freq * weight)
        })
        .collect()
}

/// Lay a sparse term map out densely in vocabulary order
pub fn densify(weights: &BTreeMap<&str, f64>, vocabulary: &Vocabulary) -> Vec<f64> {
    let mut row = vec![0.0; vocabulary.len()];
    for (term, &w) in weights {
        if let Some(i) = vocabulary.index_of(term) {
            row[i] = w;
        }
    }
    row
}
