//! Presentation projection of talent records.
//!
//! Rows carry the fixed five-column shape the rendering layer expects; the
//! column labels and their order are part of the contract, not a styling
//! choice. Requirement substitution happens here so the renderer never sees
//! an absent value.

use crate::catalog::model::Talent;
use serde::Serialize;

/// Placeholder shown when a talent has no requirements.
pub const REQUIREMENT_PLACEHOLDER: &str = "None";

/// Column labels in their fixed presentation order.
pub const COLUMN_LABELS: [&str; 5] = ["Title", "Source", "Requirement", "Text", "Description"];

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
/// Display-ready projection of a single talent.
pub struct PresentationRow {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Requirement")]
    pub requirement: String,
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl PresentationRow {
    fn from_talent(talent: &Talent) -> Self {
        Self {
            title: talent.name.clone(),
            source: talent.source.display_title().to_string(),
            requirement: requirement_label(talent.requirements.as_deref()),
            text: talent.text.clone(),
            description: talent.flavor.clone(),
        }
    }

    /// Cell values in the fixed column order.
    pub fn columns(&self) -> [&str; 5] {
        [
            &self.title,
            &self.source,
            &self.requirement,
            &self.text,
            &self.description,
        ]
    }
}

/// Substitute the placeholder for an absent or empty requirement.
pub fn requirement_label(requirements: Option<&str>) -> String {
    match requirements {
        Some(requirements) if !requirements.is_empty() => requirements.to_string(),
        _ => REQUIREMENT_PLACEHOLDER.to_string(),
    }
}

/// Project talents into presentation rows, preserving input order.
///
/// Empty input produces empty output; the caller decides how to present a
/// query with no matches.
pub fn present_rows<'a, I>(talents: I) -> Vec<PresentationRow>
where
    I: IntoIterator<Item = &'a Talent>,
{
    talents.into_iter().map(PresentationRow::from_talent).collect()
}
