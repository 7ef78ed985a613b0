// Text normalization: boilerplate stripping, tokenization, sentences.
//
// Everything downstream works on a Document produced here. Sentiment reads
// the original-case sentences; style metrics read the full lowercase token
// stream; frequencies and the corpus vectorizer read the filtered terms.

pub mod document;
pub mod normalize;
pub mod tokenize;

pub use document::Document;
pub use normalize::{BoilerplateMarkers, Normalizer};
