//! Binary sentiment classifier.
//!
//! Logistic regression over averaged word embeddings, trained with
//! full-batch gradient descent. Weights start at zero, so identical
//! training data always produces an identical model.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, Result};

const LEARNING_RATE: f64 = 0.5;
const EPOCHS: usize = 300;

/// Trained logistic-regression model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    weights: Vec<f64>,
    bias: f64,
}

/// Standard binary-classification evaluation scores. Zero-denominator
/// precision/recall/f1 are reported as 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Metrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub accuracy: f64,
}

impl LogisticRegression {
    /// Fit model parameters to aligned feature vectors and binary labels.
    ///
    /// Fails with [`AppError::Training`] when the collections' lengths
    /// mismatch, the set is empty, the vectors have uneven dimensionality,
    /// or either class has no example.
    pub fn train(vectors: &[Vec<f32>], labels: &[u8]) -> Result<Self> {
        if vectors.len() != labels.len() {
            return Err(AppError::Training(format!(
                "{} feature vectors but {} labels",
                vectors.len(),
                labels.len()
            )));
        }
        if vectors.is_empty() {
            return Err(AppError::Training("empty training set".to_string()));
        }
        let dim = vectors[0].len();
        if vectors.iter().any(|v| v.len() != dim) {
            return Err(AppError::Training(
                "feature vectors have uneven dimensionality".to_string(),
            ));
        }
        let positives = labels.iter().filter(|&&label| label == 1).count();
        if positives == 0 || positives == labels.len() {
            return Err(AppError::Training(
                "training data must contain at least one example per class".to_string(),
            ));
        }

        let mut weights = vec![0.0f64; dim];
        let mut bias = 0.0f64;
        let n = vectors.len() as f64;

        for epoch in 0..EPOCHS {
            let mut grad_weights = vec![0.0f64; dim];
            let mut grad_bias = 0.0f64;

            for (vector, &label) in vectors.iter().zip(labels) {
                let predicted = sigmoid(dot(&weights, vector) + bias);
                let error = predicted - f64::from(label);
                for (grad, &component) in grad_weights.iter_mut().zip(vector) {
                    *grad += error * f64::from(component);
                }
                grad_bias += error;
            }

            for (weight, grad) in weights.iter_mut().zip(&grad_weights) {
                *weight -= LEARNING_RATE * grad / n;
            }
            bias -= LEARNING_RATE * grad_bias / n;

            if epoch % 100 == 0 {
                debug!(epoch, "training pass complete");
            }
        }

        Ok(Self { weights, bias })
    }

    /// Predict the binary label for one feature vector (threshold 0.5).
    pub fn predict(&self, vector: &[f32]) -> u8 {
        let probability = sigmoid(dot(&self.weights, vector) + self.bias);
        u8::from(probability >= 0.5)
    }

    /// Evaluate predictions against actual labels.
    pub fn evaluate(&self, vectors: &[Vec<f32>], labels: &[u8]) -> Result<Metrics> {
        if vectors.len() != labels.len() {
            return Err(AppError::Training(format!(
                "{} feature vectors but {} labels",
                vectors.len(),
                labels.len()
            )));
        }
        if vectors.is_empty() {
            return Err(AppError::Training("empty evaluation set".to_string()));
        }

        let mut true_positives = 0usize;
        let mut false_positives = 0usize;
        let mut false_negatives = 0usize;
        let mut true_negatives = 0usize;

        for (vector, &actual) in vectors.iter().zip(labels) {
            match (self.predict(vector), actual) {
                (1, 1) => true_positives += 1,
                (1, _) => false_positives += 1,
                (0, 1) => false_negatives += 1,
                _ => true_negatives += 1,
            }
        }

        let precision = ratio(true_positives, true_positives + false_positives);
        let recall = ratio(true_positives, true_positives + false_negatives);
        let f1 = if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        };
        let accuracy = ratio(true_positives + true_negatives, vectors.len());

        Ok(Metrics {
            precision,
            recall,
            f1,
            accuracy,
        })
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

fn dot(weights: &[f64], vector: &[f32]) -> f64 {
    weights
        .iter()
        .zip(vector)
        .map(|(weight, &component)| weight * f64::from(component))
        .sum()
}
