use super::*;
use crate::corpus::{Document, Vocabulary};

const EPS: f64 = 1e-12;

fn corpus() -> Vec<Document> {
    vec![
        Document::new("1", "user", "light on", "user comfort"),
        Document::new("2", "user", "lock door", "secure"),
    ]
}

#[test]
fn test_term_counts_count_field_membership() {
    let docs = corpus();
    let vocab = Vocabulary::build(&docs);
    let counts = term_counts(&docs[0], &vocab);

    // "user" appears in role and benefit
    assert_eq!(counts["user"], 2);
    assert_eq!(counts["light"], 1);
    assert_eq!(counts.len(), 4);
}

#[test]
fn test_term_counts_ignore_repeats_within_field() {
    let doc = Document::new("1", "door door", "door", "door door door");
    let vocab = Vocabulary::build(std::slice::from_ref(&doc));
    let counts = term_counts(&doc, &vocab);
    assert_eq!(counts["door"], 3);
}

#[test]
fn test_term_counts_skip_out_of_vocabulary_terms() {
    let doc = Document::new("1", "user", "window", "");
    let vocab = Vocabulary::from_terms(["user"]);
    let counts = term_counts(&doc, &vocab);
    assert_eq!(counts.len(), 1);
    assert!(!counts.contains_key("window"));
}

#[test]
fn test_term_frequency_divides_by_bow_size() {
    let docs = corpus();
    let vocab = Vocabulary::build(&docs);
    let counts = term_counts(&docs[0], &vocab);
    let tf = term_frequency(&counts, docs[0].bag_of_words().len());

    assert!((tf["user"] - 0.5).abs() < EPS);
    assert!((tf["light"] - 0.25).abs() < EPS);
}

#[test]
fn test_term_frequency_zero_bow_is_all_zero() {
    let mut counts = std::collections::BTreeMap::new();
    counts.insert("ghost", 1);
    let tf = term_frequency(&counts, 0);
    assert_eq!(tf["ghost"], 0.0);
}

#[test]
fn test_idf_values() {
    let docs = corpus();
    let vocab = Vocabulary::build(&docs);
    let idf = inverse_document_frequency(&docs, &vocab);

    let user = vocab.index_of("user").unwrap();
    let light = vocab.index_of("light").unwrap();
    assert_eq!(idf[user], 0.0);
    assert!((idf[light] - 2f64.ln()).abs() < EPS);
}

#[test]
fn test_idf_zero_for_unused_term() {
    let docs = corpus();
    let vocab = Vocabulary::from_terms(["light", "unused"]);
    let idf = inverse_document_frequency(&docs, &vocab);
    assert_eq!(idf[vocab.index_of("unused").unwrap()], 0.0);
    assert!(idf.iter().all(|v| v.is_finite()));
}

#[test]
fn test_tf_idf_keeps_tf_keys() {
    let docs = corpus();
    let vocab = Vocabulary::build(&docs);
    let idf = inverse_document_frequency(&docs, &vocab);
    let counts = term_counts(&docs[0], &vocab);
    let tf = term_frequency(&counts, 4);
    let weights = tf_idf(&tf, &idf, &vocab);

    assert_eq!(
        weights.keys().collect::<Vec<_>>(),
        tf.keys().collect::<Vec<_>>()
    );
    assert_eq!(weights["user"], 0.0);
    assert!((weights["comfort"] - 0.25 * 2f64.ln()).abs() < EPS);
}

#[test]
fn test_vectors_have_vocabulary_dimension() {
    let docs = vec![
        Document::new("1", "user", "light", ""),
        Document::new("2", "", "", ""),
        Document::new("3", "admin", "lock door secure", "safe home"),
    ];
    let (vectorizer, matrix) = TfIdfVectorizer::fit(&docs).unwrap();

    assert_eq!(matrix.dim(), vectorizer.vocabulary().len());
    for row in &matrix.rows {
        assert_eq!(row.len(), vectorizer.vocabulary().len());
    }
    // Empty document maps to the zero vector
    assert!(matrix.rows[1].iter().all(|&v| v == 0.0));
}

#[test]
fn test_values_non_negative_and_zero_for_ubiquitous_terms() {
    let docs = vec![
        Document::new("1", "user", "light on", "comfort"),
        Document::new("2", "user", "lock door", "secure"),
        Document::new("3", "user", "light off", "save energy"),
    ];
    let (vectorizer, matrix) = TfIdfVectorizer::fit(&docs).unwrap();
    let user = vectorizer.vocabulary().index_of("user").unwrap();

    for row in &matrix.rows {
        assert!(row.iter().all(|&v| v >= 0.0));
        assert_eq!(row[user], 0.0);
    }
}

#[test]
fn test_fit_preserves_id_order() {
    let docs = vec![
        Document::new("b", "user", "light", ""),
        Document::new("a", "user", "door", ""),
    ];
    let (_, matrix) = TfIdfVectorizer::fit(&docs).unwrap();
    assert_eq!(matrix.ids, vec!["b".to_string(), "a".to_string()]);
    assert_eq!(matrix.row("a"), Some(matrix.rows[1].as_slice()));
    assert_eq!(matrix.row("zzz"), None);
}

#[test]
fn test_fit_rejects_empty_corpus() {
    let result = TfIdfVectorizer::fit(&[]);
    assert_eq!(result.unwrap_err(), ClusterError::EmptyCorpus);
}

#[test]
fn test_fit_rejects_duplicate_ids() {
    let docs = vec![
        Document::new("1", "user", "light", ""),
        Document::new("1", "user", "door", ""),
    ];
    let result = TfIdfVectorizer::fit(&docs);
    assert_eq!(result.unwrap_err(), ClusterError::DuplicateId("1".to_string()));
}

#[test]
fn test_transform_unseen_document() {
    let (vectorizer, matrix) = TfIdfVectorizer::fit(&corpus()).unwrap();
    let unseen = Document::new("x", "", "light window", "");
    let row = vectorizer.transform(&unseen);

    assert_eq!(row.len(), matrix.dim());
    let light = vectorizer.vocabulary().index_of("light").unwrap();
    // BoW size is 2 because "window" still counts
    assert!((row[light] - 0.5 * 2f64.ln()).abs() < EPS);
}

#[test]
fn test_write_csv_layout() {
    let matrix = TfIdfMatrix {
        ids: vec!["1".to_string(), "a,b".to_string()],
        terms: vec!["door".to_string(), "light".to_string()],
        rows: vec![vec![0.0, 0.5], vec![0.25, 0.0]],
    };
    let mut out = Vec::new();
    matrix.write_csv(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "id,door,light");
    assert_eq!(lines[1], "1,0,0.5");
    assert_eq!(lines[2], "\"a,b\",0.25,0");
}
