// Topic discovery: vocabulary, TF-IDF matrix, and seeded LDA.

pub mod lda;
pub mod model;
pub mod traits;
pub mod vectorizer;
pub mod vocabulary;

pub use model::{Topic, TopicFit, TopicMixture};
pub use traits::{LdaExtractor, TopicExtractor};
pub use vectorizer::DocumentTermMatrix;
pub use vocabulary::{Vocabulary, VocabularyParams};
