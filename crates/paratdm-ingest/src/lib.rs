//! paratdm ingest — corpus reading, normalization, stemming, segmentation.

pub mod file;
pub mod normalize;
pub mod segment;
pub mod stemmer;

pub use file::{content_hash, read_corpus, RawCorpus};
pub use normalize::{Normalizer, Token};
pub use segment::{Corpus, Document};
pub use stemmer::{stem, StemCache};
