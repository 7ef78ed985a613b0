// Topic extractor trait: swap-ready abstraction.
//
// Like the SentimentScorer trait, this lets another factorization stand in
// for LDA without changing the rest of the pipeline. Extractors only ever
// see the frozen vocabulary and the weighted matrix.

use tracing::info;

use crate::error::PipelineError;

use super::lda::{self, LdaParams};
use super::model::TopicFit;
use super::vectorizer::DocumentTermMatrix;
use super::vocabulary::Vocabulary;

/// Trait for discovering latent topics in a vectorized corpus.
pub trait TopicExtractor: Send + Sync {
    /// Fit topics to the matrix and rank each topic's terms.
    fn extract(
        &self,
        vocabulary: &Vocabulary,
        matrix: &DocumentTermMatrix,
    ) -> Result<TopicFit, PipelineError>;
}

/// Seeded variational LDA, the default extractor.
pub struct LdaExtractor {
    pub params: LdaParams,
    /// How many terms to report per topic
    pub n_top_words: usize,
}

impl Default for LdaExtractor {
    fn default() -> Self {
        Self {
            params: LdaParams::default(),
            n_top_words: 10,
        }
    }
}

impl TopicExtractor for LdaExtractor {
    fn extract(
        &self,
        vocabulary: &Vocabulary,
        matrix: &DocumentTermMatrix,
    ) -> Result<TopicFit, PipelineError> {
        let fit = lda::fit(matrix, &self.params)?;
        info!(
            topics = self.params.n_topics,
            iterations = fit.iterations,
            seed = self.params.seed,
            "Fitted topic model"
        );
        Ok(TopicFit::from_lda(fit, vocabulary, self.n_top_words))
    }
}
