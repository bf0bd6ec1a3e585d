//! Partition quality: SSE and mean silhouette coefficient over cosine distance.

mod silhouette;
mod sse;


pub use silhouette::{mean_silhouette, point_silhouette};
pub use sse::sse;
