//! Pipeline configuration: normalizer rules, vocabulary and matching
//! policies, output mode.

use std::collections::BTreeSet;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::stopwords::default_stop_words;
use crate::{Error, Result};

/// Characters deleted from every raw word before tokenization.
pub const DEFAULT_PUNCTUATION: &str = "?,\".{}!@#$%^&*()|:'`~\u{2013}<>]";

/// Marker token separating documents.
pub const DEFAULT_BOUNDARY_MARKER: char = ';';

/// Rules consumed by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Exact lowercase strings suppressed after cleaning.
    pub stop_words: BTreeSet<String>,
    /// Characters removed from each word.
    pub punctuation: String,
    /// Character that separates documents.
    pub boundary_marker: char,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            stop_words: default_stop_words(),
            punctuation: DEFAULT_PUNCTUATION.to_string(),
            boundary_marker: DEFAULT_BOUNDARY_MARKER,
        }
    }
}

impl NormalizerConfig {
    /// Same rules with no stop words at all.
    pub fn without_stop_words() -> Self {
        Self {
            stop_words: BTreeSet::new(),
            ..Self::default()
        }
    }
}

/// Which whole-corpus representatives become vocabulary columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VocabularyPolicy {
    /// Every representative, in aggregation order: the word half of the
    /// words-then-counts encoding of the corpus aggregation.
    #[default]
    Representatives,
    /// Only the first `floor(U / 2)` representatives.
    LeadingHalf,
}

/// How a document's representative is located in the vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Exact surface-form string equality, first match wins.
    #[default]
    SurfaceForm,
    /// Stem equality.
    Stem,
}

/// Whether an existing output file is replaced or extended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    #[default]
    Truncate,
    Append,
}

impl std::fmt::Display for VocabularyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Representatives => write!(f, "representatives"),
            Self::LeadingHalf => write!(f, "leading_half"),
        }
    }
}

impl std::fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SurfaceForm => write!(f, "surface_form"),
            Self::Stem => write!(f, "stem"),
        }
    }
}

impl std::fmt::Display for WriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Truncate => write!(f, "truncate"),
            Self::Append => write!(f, "append"),
        }
    }
}

impl FromStr for VocabularyPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "representatives" => Ok(Self::Representatives),
            "leading_half" | "leading-half" => Ok(Self::LeadingHalf),
            other => Err(Error::Config(format!("unknown vocabulary policy: {}", other))),
        }
    }
}

impl FromStr for MatchPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "surface_form" | "surface-form" | "surface" => Ok(Self::SurfaceForm),
            "stem" => Ok(Self::Stem),
            other => Err(Error::Config(format!("unknown match policy: {}", other))),
        }
    }
}

impl FromStr for WriteMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "truncate" => Ok(Self::Truncate),
            "append" => Ok(Self::Append),
            other => Err(Error::Config(format!("unknown write mode: {}", other))),
        }
    }
}

/// Output sink settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub write_mode: WriteMode,
    /// Field delimiter byte for delimited-text output.
    pub delimiter: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            write_mode: WriteMode::Truncate,
            delimiter: b',',
        }
    }
}

/// Top-level paratdm configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TdmConfig {
    pub normalizer: NormalizerConfig,
    pub vocabulary_policy: VocabularyPolicy,
    pub match_policy: MatchPolicy,
    pub output: OutputConfig,
}

impl TdmConfig {
    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read config {}: {}", path.display(), e))
        })?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Apply `PARATDM_*` environment overrides on top of `base`.
    pub fn from_env(base: Self) -> Result<Self> {
        Self::with_overrides(base, |key| std::env::var(key).ok())
    }

    fn with_overrides(mut base: Self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(mode) = lookup("PARATDM_WRITE_MODE") {
            base.output.write_mode = mode.parse()?;
        }
        if let Some(policy) = lookup("PARATDM_VOCABULARY_POLICY") {
            base.vocabulary_policy = policy.parse()?;
        }
        if let Some(policy) = lookup("PARATDM_MATCH_POLICY") {
            base.match_policy = policy.parse()?;
        }
        Ok(base)
    }
}
