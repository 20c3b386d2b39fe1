//! Validated, ordered view of a talent catalog.
//!
//! The store enforces the catalog invariants at construction (unique ids,
//! non-empty names, expected schema version) and keeps records in the single
//! presentation order: name ascending, ties broken by id. It is intentionally
//! strict at load time so the query surface never has to handle malformed
//! records. The collection is immutable once built; queries borrow from it.

use crate::catalog::identity::TalentId;
use crate::catalog::model::{Talent, TalentCatalog, load_catalog_from_path};
use crate::criteria::SearchCriteria;
use anyhow::{Context, Result, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

// The compendium ships a single catalog format; reject unexpected versions
// rather than guess at field meanings.
pub const CATALOG_SCHEMA_VERSION: &str = "talent_catalog_v1";

#[derive(Debug)]
/// Read-only talent collection plus a derived index keyed by talent id.
pub struct CatalogStore {
    title: String,
    talents: Vec<Talent>,
    by_id: BTreeMap<TalentId, usize>,
}

impl CatalogStore {
    /// Load and validate a catalog file from disk.
    ///
    /// Validates the raw JSON against the catalog schema, checks the declared
    /// schema version, then builds the ordered collection.
    pub fn load(path: &Path) -> Result<Self> {
        validate_against_schema(path)?;

        let catalog =
            load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        validate_schema_version(&catalog.schema_version)?;
        let store = Self::from_catalog(catalog)?;
        tracing::debug!(talents = store.len(), path = %path.display(), "catalog loaded");
        Ok(store)
    }

    /// Build a store from an already-parsed catalog document.
    pub fn from_catalog(catalog: TalentCatalog) -> Result<Self> {
        Self::new(catalog.title, catalog.talents)
    }

    /// Build a store from bare records.
    ///
    /// This is the seam any seeding mechanism goes through: records are
    /// checked for unique ids and non-empty names, empty requirement strings
    /// are normalized to absent, and the collection is sorted into its
    /// presentation order.
    pub fn new(title: impl Into<String>, talents: Vec<Talent>) -> Result<Self> {
        let mut talents = talents;
        for talent in &mut talents {
            if talent.name.trim().is_empty() {
                bail!("talent {} has an empty name", talent.id.0);
            }
            talent.requirements = talent.requirements.take().filter(|req| !req.is_empty());
        }
        talents.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        let mut by_id = BTreeMap::new();
        for (position, talent) in talents.iter().enumerate() {
            if by_id.insert(talent.id, position).is_some() {
                bail!("duplicate talent id {}", talent.id.0);
            }
        }

        Ok(Self {
            title: title.into(),
            talents,
            by_id,
        })
    }

    /// Display title of the loaded compendium.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Every talent, ordered by name ascending with ties broken by id.
    ///
    /// The slice is the canonical presentation order; repeated calls observe
    /// the same sequence because the collection never changes after build.
    pub fn list_all(&self) -> &[Talent] {
        &self.talents
    }

    /// Talents satisfying every present criterion, in `list_all` order.
    ///
    /// An empty result is a normal outcome. Criteria with every field absent
    /// reproduce `list_all` exactly.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&Talent> {
        let hits: Vec<&Talent> = self
            .talents
            .iter()
            .filter(|talent| criteria.matches(talent))
            .collect();
        tracing::debug!(hits = hits.len(), total = self.talents.len(), "search complete");
        hits
    }

    /// Resolve a talent by id.
    ///
    /// Returns `None` instead of erroring; callers holding stale ids (for
    /// example a cache that outlived a reload) decide how to recover.
    pub fn get(&self, id: TalentId) -> Option<&Talent> {
        self.by_id.get(&id).map(|&position| &self.talents[position])
    }

    pub fn len(&self) -> usize {
        self.talents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.talents.is_empty()
    }
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version != CATALOG_SCHEMA_VERSION {
        bail!(
            "schema_version '{}' not supported (expected {})",
            schema_version,
            CATALOG_SCHEMA_VERSION
        );
    }
    Ok(())
}

fn validate_against_schema(catalog_path: &Path) -> Result<()> {
    let catalog_file = File::open(catalog_path)
        .with_context(|| format!("opening catalog {}", catalog_path.display()))?;
    let catalog_value: Value = serde_json::from_reader(BufReader::new(catalog_file))
        .with_context(|| format!("parsing catalog {}", catalog_path.display()))?;

    let schema_path = resolve_catalog_schema_path(catalog_path);
    let schema_file = File::open(&schema_path)
        .with_context(|| format!("opening schema {}", schema_path.display()))?;
    let schema_value: Value = serde_json::from_reader(BufReader::new(schema_file))
        .with_context(|| format!("parsing schema {}", schema_path.display()))?;

    let schema = match JSONSchema::compile(&schema_value) {
        Ok(schema) => schema,
        Err(err) => bail!("compiling schema {}: {err}", schema_path.display()),
    };
    if let Err(errors) = schema.validate(&catalog_value) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!(
            "talent catalog {} failed schema validation:\n{}",
            catalog_path.display(),
            details
        );
    }
    Ok(())
}

fn resolve_catalog_schema_path(catalog_path: &Path) -> PathBuf {
    if let Some(base) = catalog_path.parent().and_then(|p| p.parent()) {
        let candidate = base.join("schema/talent_catalog.schema.json");
        if candidate.exists() {
            return candidate;
        }
    }

    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("schema/talent_catalog.schema.json")
}
