//! Searchable talent compendium for Dune: Adventures in the Imperium.
//!
//! The crate exposes the catalog store (validated, ordered talent records
//! with predicate search) and the form adapter types (criteria construction,
//! presentation rows) that the `talents` CLI builds on. Catalog documents are
//! JSON files validated against `schema/talent_catalog.schema.json`; the
//! shipped compendium lives under `data/talents.json` and is located through
//! the discovery order below.

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod cache;
pub mod catalog;
pub mod criteria;
pub mod present;

pub use cache::{SearchCache, search_cached};
pub use catalog::{
    CATALOG_SCHEMA_VERSION, CatalogStore, SourceBook, Talent, TalentCatalog, TalentId,
    load_catalog_from_path,
};
pub use criteria::{InvalidCriteriaError, SearchCriteria, SearchForm};
pub use present::{
    COLUMN_LABELS, PresentationRow, REQUIREMENT_PLACEHOLDER, present_rows, requirement_label,
};

const CATALOG_RELATIVE_PATH: &str = "data/talents.json";

/// Returns true when `candidate` looks like the compendium repository root.
fn is_repo_root(candidate: &Path) -> bool {
    candidate.join(CATALOG_RELATIVE_PATH).is_file()
}

/// Verifies that an explicit `COMPENDIUM_CATALOG` hint points at a real file.
fn catalog_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.is_file() {
        return None;
    }
    Some(fs::canonicalize(&hint_path).unwrap_or(hint_path))
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_repo_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the shipped catalog file.
///
/// Search order: honor `COMPENDIUM_CATALOG` if it points at a real file,
/// climb up from the current executable looking for the repository layout,
/// then use the build-time hint. Callers can treat failure as fatal because
/// nothing works without a catalog.
pub fn find_catalog_path() -> Result<PathBuf> {
    if let Ok(env_path) = env::var("COMPENDIUM_CATALOG") {
        if let Some(path) = catalog_from_hint(&env_path) {
            return Ok(path);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = search_upwards(exe_dir) {
                return Ok(root.join(CATALOG_RELATIVE_PATH));
            }
        }
    }

    if let Some(hint) = option_env!("COMPENDIUM_ROOT_HINT") {
        let candidate = Path::new(hint).join(CATALOG_RELATIVE_PATH);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    bail!("Unable to locate a talent catalog. Set COMPENDIUM_CATALOG to a catalog JSON file.");
}
