//! paratdm core — error type, pipeline configuration, default stop words.

pub mod config;
pub mod error;
pub mod stopwords;

pub use config::{
    MatchPolicy, NormalizerConfig, OutputConfig, TdmConfig, VocabularyPolicy, WriteMode,
};
pub use error::{Error, Result};
pub use stopwords::{default_stop_words, load_stop_words, DEFAULT_STOP_WORDS};
