mod document;
mod loader;
mod vocabulary;

#[cfg(test)]
mod tests;

pub use document::{Document, Field};
pub use loader::{load_documents, parse_csv, parse_json_lines};
pub use vocabulary::Vocabulary;

/// Stable identifier of a user story
pub type DocumentId = String;
