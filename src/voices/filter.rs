//! Voice records and the multi-predicate filter.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::engines::{CatalogError, Engine};

/// A Polly voice and the engines it supports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceProfile {
    /// Unique voice identifier (e.g. "Joanna").
    pub name: String,
    /// "Female" or "Male".
    pub gender: String,
    /// Locale tag (e.g. "en-US").
    pub language_code: String,
    /// Engines this voice can be used with.
    pub supported_engines: BTreeSet<Engine>,
    /// Free-text description.
    pub description: String,
}

/// Filter voice records, preserving input order.
///
/// All filters are optional, AND-combined, and case-insensitive. The
/// `language` filter is a prefix match, so "en" matches "en-US" and
/// "en-GB". An `engine` value outside the engine catalog is a usage
/// error and fails with [`CatalogError::UnknownEngine`] before any
/// filtering happens; an empty result is not an error.
pub fn list_voices(
    records: Vec<VoiceProfile>,
    engine: Option<&str>,
    language: Option<&str>,
    gender: Option<&str>,
) -> Result<Vec<(String, VoiceProfile)>, CatalogError> {
    // Validate the engine filter up front rather than matching nothing.
    let engine: Option<Engine> = engine.map(str::parse).transpose()?;
    let language = language.map(str::to_ascii_lowercase);
    let gender = gender.map(str::to_ascii_lowercase);

    Ok(records
        .into_iter()
        .filter(|voice| {
            engine.is_none_or(|e| voice.supported_engines.contains(&e))
                && language
                    .as_deref()
                    .is_none_or(|l| voice.language_code.to_ascii_lowercase().starts_with(l))
                && gender
                    .as_deref()
                    .is_none_or(|g| voice.gender.to_ascii_lowercase() == g)
        })
        .map(|voice| (voice.name.clone(), voice))
        .collect())
}
