use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

use super::DocumentId;

/// A single cleaned user story
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Stable identifier (integers in the input are kept as their decimal text)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: DocumentId,
    /// "As a ..." part, space-separated terms
    #[serde(default)]
    pub role: String,
    /// "I want ..." part, space-separated terms
    #[serde(default)]
    pub feature: String,
    /// "So that ..." part, space-separated terms
    #[serde(default)]
    pub benefit: String,
}

/// The three text fields of a user story
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Role,
    Feature,
    Benefit,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Role, Field::Feature, Field::Benefit];
}

impl Document {
    pub fn new(
        id: impl Into<DocumentId>,
        role: impl Into<String>,
        feature: impl Into<String>,
        benefit: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
            feature: feature.into(),
            benefit: benefit.into(),
        }
    }

    /// Raw text of one field
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Role => &self.role,
            Field::Feature => &self.feature,
            Field::Benefit => &self.benefit,
        }
    }

    /// Distinct terms of one field. Empty text yields an empty set.
    pub fn field_terms(&self, field: Field) -> BTreeSet<&str> {
        self.field(field).split_whitespace().collect()
    }

    /// Set-union of the role, feature and benefit term sets
    pub fn bag_of_words(&self) -> BTreeSet<&str> {
        Field::ALL
            .iter()
            .flat_map(|&field| self.field(field).split_whitespace())
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<DocumentId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Int(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}
