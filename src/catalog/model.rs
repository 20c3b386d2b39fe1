//! Deserializable representation of a talent catalog document.
//!
//! The types mirror `schema/talent_catalog.schema.json` so loading code and
//! tests can reason about catalog contents without ad-hoc JSON handling. Use
//! `CatalogStore` for validation and queries; use these structs when the raw
//! document surface is required.

use crate::catalog::identity::{SourceBook, TalentId};
use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize)]
/// Full talent catalog as stored on disk.
pub struct TalentCatalog {
    pub schema_version: String,
    pub title: String,
    pub talents: Vec<Talent>,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
/// One catalog entry describing a single in-game talent.
pub struct Talent {
    pub id: TalentId,
    pub name: String,
    pub source: SourceBook,
    #[serde(default)]
    pub requirements: Option<String>,
    pub flavor: String,
    pub text: String,
}

/// Read and parse a talent catalog from disk without additional validation.
pub fn load_catalog_from_path(path: &Path) -> Result<TalentCatalog> {
    let data = fs::read_to_string(path)?;
    let catalog: TalentCatalog = serde_json::from_str(&data)?;
    Ok(catalog)
}
