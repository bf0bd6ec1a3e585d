//! Serializable run artifacts: the per-run cluster report and the k-sweep score table.


use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::clusterer::{FitState, KMeans, KMeansConfig, NoopObserver};
use crate::corpus::DocumentId;
use crate::error::Result;
use crate::vectorizer::TfIdfMatrix;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterReport {
    pub created_at: String,
    pub generator: String,
    pub k: usize,
    pub documents: usize,
    pub terms: usize,
    pub iterations: usize,
    pub state: FitState,
    pub sse: f64,
    pub msc: f64,
    pub clusters: Vec<ClusterEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterEntry {
    pub id: usize,
    pub size: usize,
    pub document_ids: Vec<DocumentId>,
}

impl ClusterReport {
    /// Snapshot a fitted model against the matrix it was fitted on
    pub fn from_model(model: &KMeans, matrix: &TfIdfMatrix) -> Result<Self> {
        let clusters = model
            .clusters(&matrix.ids)?
            .into_iter()
            .enumerate()
            .map(|(id, document_ids)| ClusterEntry {
                id,
                size: document_ids.len(),
                document_ids,
            })
            .collect();

        Ok(Self {
            created_at: Utc::now().to_rfc3339(),
            generator: format!("storyclust v{}", env!("CARGO_PKG_VERSION")),
            k: model.config().k,
            documents: matrix.len(),
            terms: matrix.dim(),
            iterations: model.iterations(),
            state: model.state(),
            sse: model.sse()?,
            msc: model.msc()?,
            clusters,
        })
    }
}

/// Quality scores for one value of k
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub k: usize,
    pub sse: f64,
    pub msc: f64,
}

/// SSE/MSC for a range of k over one matrix
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSweep {
    pub rows: Vec<ScoreRow>,
}

impl ScoreSweep {
    /// Fit one model per k, reusing every other option from `base`.
    ///
    /// Values of k outside `1..=matrix.len()` are skipped.
    pub fn run(
        matrix: &TfIdfMatrix,
        base: &KMeansConfig,
        ks: impl IntoIterator<Item = usize>,
    ) -> Result<Self> {
        let mut rows = Vec::new();

        for k in ks {
            if k < 1 || k > matrix.len() {
                tracing::warn!(k, documents = matrix.len(), "Skipping k outside document count");
                continue;
            }

            let config = KMeansConfig { k, ..base.clone() };
            let mut model = KMeans::new(config)?;
            model.fit_with_observer(&matrix.rows, &mut NoopObserver)?;

            let row = ScoreRow {
                k,
                sse: model.sse()?,
                msc: model.msc()?,
            };
            tracing::info!(
                k,
                sse = row.sse,
                msc = row.msc,
                iterations = model.iterations(),
                "Scored partition"
            );
            rows.push(row);
        }

        Ok(Self { rows })
    }

    /// Write as CSV with the header `k,SSE Score,MSC Score`
    pub fn write_csv<W: Write>(&self, writer: W) -> csv::Result<()> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(["k", "SSE Score", "MSC Score"])?;
        for row in &self.rows {
            out.write_record([row.k.to_string(), row.sse.to_string(), row.msc.to_string()])?;
        }
        out.flush()?;
        Ok(())
    }
}
