use super::*;
use std::io::Write;

fn story(id: &str, role: &str, feature: &str, benefit: &str) -> Document {
    Document::new(id, role, feature, benefit)
}

#[test]
fn test_bag_of_words_merges_fields() {
    let doc = story("1", "user", "turn light on", "save light energy");
    let bow = doc.bag_of_words();

    assert_eq!(bow.len(), 5);
    assert!(bow.contains("light"));
    assert!(bow.contains("energy"));
}

#[test]
fn test_bag_of_words_collapses_repeats_within_field() {
    let doc = story("1", "", "door door door", "");
    assert_eq!(doc.field_terms(Field::Feature).len(), 1);
    assert_eq!(doc.bag_of_words().len(), 1);
}

#[test]
fn test_empty_fields_contribute_nothing() {
    let doc = story("1", "", "   ", "");
    assert!(doc.field_terms(Field::Role).is_empty());
    assert!(doc.bag_of_words().is_empty());
}

#[test]
fn test_vocabulary_is_sorted_and_distinct() {
    let docs = vec![
        story("1", "user", "lock door", "secure"),
        story("2", "user", "light on", "see"),
    ];
    let vocab = Vocabulary::build(&docs);

    assert_eq!(
        vocab.terms(),
        &["door", "light", "lock", "on", "secure", "see", "user"]
    );
    assert_eq!(vocab.index_of("door"), Some(0));
    assert_eq!(vocab.index_of("user"), Some(6));
    assert!(!vocab.contains("window"));
}

#[test]
fn test_vocabulary_order_independent_of_document_order() {
    let a = story("1", "user", "lock door", "");
    let b = story("2", "admin", "light", "");

    let forward = Vocabulary::build(&[a.clone(), b.clone()]);
    let backward = Vocabulary::build(&[b, a]);
    assert_eq!(forward, backward);
}

#[test]
fn test_empty_corpus_gives_empty_vocabulary() {
    let vocab = Vocabulary::build(&[]);
    assert!(vocab.is_empty());
    assert_eq!(vocab.len(), 0);
}

#[test]
fn test_deserialize_integer_and_string_ids() {
    let docs: Vec<Document> = serde_json::from_str(
        r#"[{"id": 7, "role": "user", "feature": "lock door"},
            {"id": "US-2", "role": "admin", "feature": "", "benefit": "secure"}]"#,
    )
    .unwrap();

    assert_eq!(docs[0].id, "7");
    assert_eq!(docs[0].benefit, "");
    assert_eq!(docs[1].id, "US-2");
}

#[test]
fn test_parse_json_lines_skips_blank_lines() {
    let content = "{\"id\": 1, \"role\": \"user\"}\n\n{\"id\": 2, \"feature\": \"light\"}\n";
    let docs = parse_json_lines(content).unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[1].feature, "light");
}

#[test]
fn test_parse_json_lines_reports_line_number() {
    let err = parse_json_lines("{\"id\": 1}\nnot json\n").unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_load_documents_from_jsonl_file() {
    let mut file = tempfile::Builder::new().suffix(".jsonl").tempfile().unwrap();
    writeln!(file, "{{\"id\": 1, \"role\": \"user\", \"feature\": \"lock door\"}}").unwrap();
    writeln!(file, "{{\"id\": 2, \"role\": \"user\", \"feature\": \"light on\"}}").unwrap();

    let docs = load_documents(file.path()).unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].id, "1");
}

#[test]
fn test_load_documents_from_json_array() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "[{{\"id\": \"a\", \"benefit\": \"secure home\"}}]").unwrap();

    let docs = load_documents(file.path()).unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].bag_of_words().len(), 2);
}

#[test]
fn test_load_documents_missing_file() {
    let result = load_documents("/definitely/not/here.json");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Failed to read"));
}

#[test]
fn test_parse_csv_keeps_quoted_commas_in_one_field() {
    let content = "id,role,feature,benefit\n\
                   101,user,\"lock door, front\",secure home\n\
                   US-2,admin,light on,\n";
    let docs = parse_csv(content).unwrap();

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].id, "101");
    assert_eq!(docs[0].feature, "lock door, front");
    assert_eq!(docs[0].benefit, "secure home");
    assert_eq!(docs[1].id, "US-2");
    assert_eq!(docs[1].benefit, "");
}

#[test]
fn test_parse_csv_ignores_extra_columns_and_trailing_cells() {
    let content = "id,source,role,feature,benefit\n\
                   1,backlog,user,lock door,secure\n\
                   2,backlog,user,light on,see,stray\n";
    let docs = parse_csv(content).unwrap();

    assert_eq!(docs[0], Document::new("1", "user", "lock door", "secure"));
    assert_eq!(docs[1], Document::new("2", "user", "light on", "see"));
}

#[test]
fn test_parse_csv_reports_row_without_id() {
    let err = parse_csv("role,feature\nuser,lock door\n").unwrap_err();
    assert!(err.to_string().contains("CSV row 1"));
}

#[test]
fn test_load_documents_from_csv_file() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "id,role,feature,benefit").unwrap();
    writeln!(file, "1,user,\"lock, door\",secure").unwrap();
    writeln!(file, "2,user,light on,see").unwrap();

    let docs = load_documents(file.path()).unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].field_terms(Field::Feature).len(), 2);
    assert!(docs[0].bag_of_words().contains("lock,"));
}
