// Latent Dirichlet Allocation by batch variational Bayes.
//
// `fit` is a pure function of the matrix and the parameters: all iteration
// state (the variational topic-term parameters lambda and the per-document
// gammas) lives on its stack, and callers only see the converged
// distributions. The only randomness is the initialization of lambda, drawn
// from a StdRng seeded with `params.seed`, so a given corpus and seed
// always produce the same topics.
//
// Each outer iteration:
//   E-step: per document, iterate
//     gamma_dk = alpha + exp(E[log theta_dk]) * sum_v w_dv * exp(E[log beta_kv]) / phinorm_dv
//   until the mean change in gamma drops below `doc_tol`;
//   M-step: lambda_kv = eta + sum_d exp(E[log theta_dk]) * w_dv * exp(E[log beta_kv]) / phinorm_dv
// The loop ends after `max_iter` passes, or earlier once the normalized
// document-topic distributions move less than `tol` between passes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::PipelineError;

use super::vectorizer::DocumentTermMatrix;

/// Guards the per-word normalizer against division by zero.
const PHI_EPSILON: f64 = 1e-100;

/// Tuning knobs for the factorization.
#[derive(Debug, Clone)]
pub struct LdaParams {
    /// Number of topics (K)
    pub n_topics: usize,
    /// Outer variational passes over the corpus
    pub max_iter: usize,
    /// Seed for the lambda initialization
    pub seed: u64,
    /// Dirichlet prior on document-topic mixtures; defaults to 1/K
    pub doc_topic_prior: Option<f64>,
    /// Dirichlet prior on topic-term distributions; defaults to 1/K
    pub topic_word_prior: Option<f64>,
    /// Early-stop threshold on mean document-topic change between passes
    pub tol: f64,
    /// Cap on per-document E-step iterations
    pub max_doc_iter: usize,
    /// Per-document E-step convergence threshold
    pub doc_tol: f64,
}

impl Default for LdaParams {
    fn default() -> Self {
        Self {
            n_topics: 5,
            max_iter: 20,
            seed: 42,
            doc_topic_prior: None,
            topic_word_prior: None,
            tol: 1e-4,
            max_doc_iter: 100,
            doc_tol: 1e-3,
        }
    }
}

/// Converged output of the factorization.
#[derive(Debug, Clone, PartialEq)]
pub struct LdaFit {
    /// Per-document topic probabilities (documents x K), rows sum to 1
    pub doc_topic: Vec<Vec<f64>>,
    /// Per-topic term probabilities (K x terms), rows sum to 1
    pub topic_term: Vec<Vec<f64>>,
    /// Outer passes actually run
    pub iterations: usize,
}

/// Check that the requested factorization is meaningful for this matrix.
pub fn validate(n_documents: usize, n_terms: usize, n_topics: usize) -> Result<(), PipelineError> {
    if n_topics == 0 {
        return Err(PipelineError::InvalidConfig(
            "topic count must be at least 1".to_string(),
        ));
    }
    if n_topics > n_documents {
        return Err(PipelineError::TooManyTopics {
            requested: n_topics,
            documents: n_documents,
        });
    }
    if n_terms < 2 {
        return Err(PipelineError::DegenerateVocabulary { size: n_terms });
    }
    Ok(())
}

/// Fit LDA to a document-term matrix.
pub fn fit(dtm: &DocumentTermMatrix, params: &LdaParams) -> Result<LdaFit, PipelineError> {
    let n_docs = dtm.n_documents();
    let n_terms = dtm.n_terms();
    let k = params.n_topics;
    validate(n_docs, n_terms, k)?;

    let alpha = params.doc_topic_prior.unwrap_or(1.0 / k as f64);
    let eta = params.topic_word_prior.unwrap_or(1.0 / k as f64);

    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut lambda: Vec<Vec<f64>> = (0..k)
        .map(|_| (0..n_terms).map(|_| 0.5 + rng.random::<f64>()).collect())
        .collect();

    let documents: Vec<Vec<(usize, f64)>> = (0..n_docs).map(|d| dtm.nonzero(d)).collect();
    let mut gammas: Vec<Vec<f64>> = documents
        .iter()
        .map(|words| {
            let total: f64 = words.iter().map(|(_, w)| w).sum();
            vec![alpha + total / k as f64; k]
        })
        .collect();

    let mut previous = normalize_rows(&gammas);
    let mut iterations = 0;

    for iteration in 1..=params.max_iter {
        iterations = iteration;
        let exp_elog_beta = exp_dirichlet_expectation(&lambda);
        let mut sstats = vec![vec![0.0; n_terms]; k];

        for (d, words) in documents.iter().enumerate() {
            gammas[d] = infer_document(words, &gammas[d], &exp_elog_beta, alpha, params);
            accumulate_sstats(words, &gammas[d], &exp_elog_beta, &mut sstats);
        }

        for t in 0..k {
            for v in 0..n_terms {
                lambda[t][v] = eta + sstats[t][v] * exp_elog_beta[t][v];
            }
        }

        let current = normalize_rows(&gammas);
        let change = mean_abs_change(&previous, &current);
        debug!(iteration, change, "LDA pass complete");
        previous = current;

        if change < params.tol {
            break;
        }
    }

    // Final E-step against the converged lambda
    let exp_elog_beta = exp_dirichlet_expectation(&lambda);
    for (d, words) in documents.iter().enumerate() {
        gammas[d] = infer_document(words, &gammas[d], &exp_elog_beta, alpha, params);
    }

    Ok(LdaFit {
        doc_topic: normalize_rows(&gammas),
        topic_term: normalize_rows(&lambda),
        iterations,
    })
}

/// Per-document E-step, warm-started from `initial`.
fn infer_document(
    words: &[(usize, f64)],
    initial: &[f64],
    exp_elog_beta: &[Vec<f64>],
    alpha: f64,
    params: &LdaParams,
) -> Vec<f64> {
    let k = initial.len();
    if words.is_empty() {
        return vec![alpha; k];
    }

    let mut gamma = initial.to_vec();
    for _ in 0..params.max_doc_iter {
        let exp_elog_theta = exp_dirichlet_expectation_row(&gamma);
        let mut next = vec![alpha; k];

        for &(v, weight) in words {
            let phinorm = phi_norm(&exp_elog_theta, exp_elog_beta, v);
            for t in 0..k {
                next[t] += exp_elog_theta[t] * weight * exp_elog_beta[t][v] / phinorm;
            }
        }

        let change = next
            .iter()
            .zip(&gamma)
            .map(|(a, b)| (a - b).abs())
            .sum::<f64>()
            / k as f64;
        gamma = next;
        if change < params.doc_tol {
            break;
        }
    }
    gamma
}

fn accumulate_sstats(
    words: &[(usize, f64)],
    gamma: &[f64],
    exp_elog_beta: &[Vec<f64>],
    sstats: &mut [Vec<f64>],
) {
    let exp_elog_theta = exp_dirichlet_expectation_row(gamma);
    for &(v, weight) in words {
        let phinorm = phi_norm(&exp_elog_theta, exp_elog_beta, v);
        for (t, row) in sstats.iter_mut().enumerate() {
            row[v] += exp_elog_theta[t] * weight / phinorm;
        }
    }
}

fn phi_norm(exp_elog_theta: &[f64], exp_elog_beta: &[Vec<f64>], v: usize) -> f64 {
    exp_elog_theta
        .iter()
        .zip(exp_elog_beta)
        .map(|(theta, beta)| theta * beta[v])
        .sum::<f64>()
        + PHI_EPSILON
}

/// exp(E[log x]) for x ~ Dirichlet(row), applied to every row.
fn exp_dirichlet_expectation(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    rows.iter().map(|r| exp_dirichlet_expectation_row(r)).collect()
}

fn exp_dirichlet_expectation_row(row: &[f64]) -> Vec<f64> {
    let psi_total = digamma(row.iter().sum());
    row.iter().map(|&x| (digamma(x) - psi_total).exp()).collect()
}

/// Digamma function for positive arguments (recurrence + asymptotic series).
pub fn digamma(x: f64) -> f64 {
    let mut x = x;
    let mut result = 0.0;
    while x < 6.0 {
        result -= 1.0 / x;
        x += 1.0;
    }
    let f = 1.0 / (x * x);
    let series = f
        * (1.0 / 12.0 - f * (1.0 / 120.0 - f * (1.0 / 252.0 - f * (1.0 / 240.0 - f / 132.0))));
    result + x.ln() - 0.5 / x - series
}

/// Scale each row to sum to one. All-zero rows become uniform.
pub fn normalize_rows(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    rows.iter()
        .map(|row| {
            let total: f64 = row.iter().sum();
            if total > 0.0 {
                row.iter().map(|x| x / total).collect()
            } else {
                vec![1.0 / row.len() as f64; row.len()]
            }
        })
        .collect()
}

fn mean_abs_change(a: &[Vec<f64>], b: &[Vec<f64>]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for (ra, rb) in a.iter().zip(b) {
        for (x, y) in ra.iter().zip(rb) {
            sum += (x - y).abs();
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two clearly separated blocks of terms.
    fn block_matrix() -> DocumentTermMatrix {
        DocumentTermMatrix::from_rows(vec![
            vec![4.0, 3.0, 5.0, 0.0, 0.0, 0.0],
            vec![3.0, 5.0, 4.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0, 4.0, 5.0, 3.0],
            vec![0.0, 0.0, 0.0, 5.0, 3.0, 4.0],
        ])
        .unwrap()
    }

    fn params(k: usize) -> LdaParams {
        LdaParams {
            n_topics: k,
            max_iter: 50,
            ..LdaParams::default()
        }
    }

    #[test]
    fn test_digamma_known_values() {
        // psi(1) = -euler_gamma
        assert!((digamma(1.0) + 0.5772156649).abs() < 1e-8);
        // psi(0.5) = -euler_gamma - 2 ln 2
        assert!((digamma(0.5) + 1.9635100260).abs() < 1e-8);
        assert!((digamma(10.0) - 2.2517525891).abs() < 1e-8);
    }

    #[test]
    fn test_distributions_are_normalized() {
        let fit = fit(&block_matrix(), &params(2)).unwrap();
        assert_eq!(fit.doc_topic.len(), 4);
        assert_eq!(fit.topic_term.len(), 2);
        for row in fit.doc_topic.iter().chain(&fit.topic_term) {
            let sum: f64 = row.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "row sums to {sum}");
        }
    }

    #[test]
    fn test_separates_disjoint_blocks() {
        let fit = fit(&block_matrix(), &params(2)).unwrap();
        let dominant = |d: usize| {
            if fit.doc_topic[d][0] >= fit.doc_topic[d][1] {
                0
            } else {
                1
            }
        };
        assert_eq!(dominant(0), dominant(1));
        assert_eq!(dominant(2), dominant(3));
        assert_ne!(dominant(0), dominant(2));
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let a = fit(&block_matrix(), &params(2)).unwrap();
        let b = fit(&block_matrix(), &params(2)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_too_many_topics_rejected() {
        let err = fit(&block_matrix(), &params(5)).unwrap_err();
        assert_eq!(
            err,
            PipelineError::TooManyTopics {
                requested: 5,
                documents: 4
            }
        );
    }

    #[test]
    fn test_degenerate_vocabulary_rejected() {
        let dtm = DocumentTermMatrix::from_rows(vec![vec![1.0], vec![2.0]]).unwrap();
        let err = fit(&dtm, &params(1)).unwrap_err();
        assert_eq!(err, PipelineError::DegenerateVocabulary { size: 1 });
    }

    #[test]
    fn test_empty_document_gets_uniform_mixture() {
        let dtm = DocumentTermMatrix::from_rows(vec![
            vec![2.0, 1.0, 0.0],
            vec![0.0, 1.0, 2.0],
            vec![0.0, 0.0, 0.0],
        ])
        .unwrap();
        let fit = fit(&dtm, &params(2)).unwrap();
        assert!((fit.doc_topic[2][0] - 0.5).abs() < 1e-12);
    }
}
