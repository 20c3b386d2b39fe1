//! Search criteria construction and matching.
//!
//! The form adapter turns raw widget strings into a typed criteria structure
//! before any query runs; the store only ever sees validated criteria. Each
//! value constrains the attribute it was entered for and nothing else.

use crate::catalog::identity::SourceBook;
use crate::catalog::model::Talent;
use thiserror::Error;

/// Raw values read from the five search widgets.
///
/// An empty string means the field was left blank (or the select box has no
/// selection); no trimming or other cleanup happens here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub name: String,
    pub source: String,
    pub requirements: String,
    pub text: String,
    pub flavor: String,
}

/// A non-empty `source` value outside the known source books.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid search criteria: unknown source book '{value}'")]
pub struct InvalidCriteriaError {
    pub value: String,
}

/// Typed filter derived from a form submission.
///
/// Absent fields constrain nothing; criteria with every field absent match
/// the whole collection.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct SearchCriteria {
    pub name: Option<String>,
    pub source: Option<SourceBook>,
    pub requirements: Option<String>,
    pub text: Option<String>,
    pub flavor: Option<String>,
}

impl SearchCriteria {
    /// Validate raw form input into typed criteria.
    ///
    /// Empty fields become absent criteria. The only rejection is a source
    /// value outside the four known books; free-text fields are taken as-is.
    pub fn from_form(form: &SearchForm) -> Result<Self, InvalidCriteriaError> {
        let source = match form.source.as_str() {
            "" => None,
            raw => Some(SourceBook::parse(raw).ok_or_else(|| InvalidCriteriaError {
                value: raw.to_string(),
            })?),
        };

        Ok(Self {
            name: present(&form.name),
            source,
            requirements: present(&form.requirements),
            text: present(&form.text),
            flavor: present(&form.flavor),
        })
    }

    /// True when no field constrains the result set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.source.is_none()
            && self.requirements.is_none()
            && self.text.is_none()
            && self.flavor.is_none()
    }

    /// Whether a talent satisfies every present criterion.
    ///
    /// Free-text fields match as case-sensitive substrings anywhere in the
    /// corresponding attribute; `source` must match exactly. A requirements
    /// criterion never matches a talent that has no requirements.
    pub fn matches(&self, talent: &Talent) -> bool {
        if let Some(needle) = &self.name {
            if !talent.name.contains(needle) {
                return false;
            }
        }
        if let Some(source) = self.source {
            if talent.source != source {
                return false;
            }
        }
        if let Some(needle) = &self.requirements {
            match &talent.requirements {
                Some(requirements) if requirements.contains(needle) => {}
                _ => return false,
            }
        }
        if let Some(needle) = &self.text {
            if !talent.text.contains(needle) {
                return false;
            }
        }
        if let Some(needle) = &self.flavor {
            if !talent.flavor.contains(needle) {
                return false;
            }
        }
        true
    }
}

fn present(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}
