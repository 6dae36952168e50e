//! Static engine reference data and lookup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during catalog lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown engine: '{0}'. Valid engines: standard, neural, generative, long-form")]
    UnknownEngine(String),
}

/// Polly synthesis engine, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Engine {
    Standard,
    Neural,
    Generative,
    LongForm,
}

impl Engine {
    /// All engines in canonical order.
    pub const ALL: [Engine; 4] = [
        Engine::Standard,
        Engine::Neural,
        Engine::Generative,
        Engine::LongForm,
    ];

    /// Returns the engine identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Standard => "standard",
            Engine::Neural => "neural",
            Engine::Generative => "generative",
            Engine::LongForm => "long-form",
        }
    }

    /// Returns the pricing and capability data for this engine.
    pub fn info(&self) -> &'static EngineInfo {
        match self {
            Engine::Standard => &STANDARD,
            Engine::Neural => &NEURAL,
            Engine::Generative => &GENERATIVE,
            Engine::LongForm => &LONG_FORM,
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Engine::Standard),
            "neural" => Ok(Engine::Neural),
            "generative" => Ok(Engine::Generative),
            "long-form" | "longform" | "long_form" => Ok(Engine::LongForm),
            _ => Err(CatalogError::UnknownEngine(s.to_string())),
        }
    }
}

/// Pricing and capability data for a single engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineInfo {
    /// Display name.
    pub name: &'static str,
    /// Synthesis technology.
    pub technology: &'static str,
    /// Qualitative tier.
    pub quality: &'static str,
    /// USD per 1 million input characters.
    pub pricing_per_million: f64,
    /// Maximum billed characters per request.
    pub char_limit: u32,
    /// Maximum concurrent requests.
    pub concurrent_requests: u32,
    /// Free tier allowance, or "N/A".
    pub free_tier: &'static str,
    /// Usage guidance.
    pub best_for: &'static str,
}

static STANDARD: EngineInfo = EngineInfo {
    name: "Standard",
    technology: "Concatenative",
    quality: "Good",
    pricing_per_million: 4.00,
    char_limit: 3000,
    concurrent_requests: 80,
    free_tier: "5M chars/month for 12 months",
    best_for: "High-volume, cost-sensitive applications",
};

static NEURAL: EngineInfo = EngineInfo {
    name: "Neural",
    technology: "Neural (seq2seq)",
    quality: "Very Good",
    pricing_per_million: 16.00,
    char_limit: 3000,
    concurrent_requests: 10,
    free_tier: "1M chars/month for 12 months",
    best_for: "Conversational interfaces, news narration",
};

static GENERATIVE: EngineInfo = EngineInfo {
    name: "Generative",
    technology: "Large language model",
    quality: "Excellent",
    pricing_per_million: 30.00,
    char_limit: 3000,
    concurrent_requests: 26,
    free_tier: "N/A",
    best_for: "Expressive, human-like conversational speech",
};

static LONG_FORM: EngineInfo = EngineInfo {
    name: "Long-form",
    technology: "Long-form neural",
    quality: "Excellent",
    pricing_per_million: 100.00,
    char_limit: 100_000,
    concurrent_requests: 26,
    free_tier: "500K chars/month for 12 months",
    best_for: "Audiobooks, articles, training content",
};

/// List all engines with their metadata, in canonical order.
pub fn list_all_engines() -> Vec<(Engine, &'static EngineInfo)> {
    Engine::ALL.iter().map(|e| (*e, e.info())).collect()
}

/// Look up engine metadata by identifier string.
pub fn get_engine(id: &str) -> Result<&'static EngineInfo, CatalogError> {
    let engine: Engine = id.parse()?;
    Ok(engine.info())
}
