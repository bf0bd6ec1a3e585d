use serde::Serialize;
use std::io::Write;

use crate::corpus::DocumentId;

/// Dense TF-IDF table: one row per document, one column per vocabulary term.
///
/// `ids[i]` is the document that produced `rows[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TfIdfMatrix {
    pub ids: Vec<DocumentId>,
    pub terms: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl TfIdfMatrix {
    /// Number of documents
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns (vocabulary size)
    pub fn dim(&self) -> usize {
        self.terms.len()
    }

    /// Row for a document id
    pub fn row(&self, id: &str) -> Option<&[f64]> {
        self.ids
            .iter()
            .position(|d| d == id)
            .map(|i| self.rows[i].as_slice())
    }

    /// Write as a flat CSV table with header `id,<term>...`
    pub fn write_csv<W: Write>(&self, writer: W) -> csv::Result<()> {
        let mut out = csv::Writer::from_writer(writer);

        let mut header = vec!["id"];
        header.extend(self.terms.iter().map(String::as_str));
        out.write_record(&header)?;

        for (id, row) in self.ids.iter().zip(&self.rows) {
            let mut cells = vec![id.clone()];
            cells.extend(row.iter().map(|v| v.to_string()));
            out.write_record(&cells)?;
        }

        out.flush()?;
        Ok(())
    }
}
