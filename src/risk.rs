//! Quadratic risk of fitted and re-fitted regressions
//!
//! Both estimators delegate the actual statistics to `linfa`: the loss is the
//! mean squared error of [`SingleTargetRegression`] and the folds come from
//! [`DatasetBase::fold`](linfa::DatasetBase::fold).

use linfa::metrics::SingleTargetRegression;
use log::debug;

use crate::encoding::Encoder;
use crate::error::{Result, SvrError};
use crate::learner::{Predictor, SvrLearner};
use crate::sample::{Point, SampleSet};

/// Mean quadratic loss of `predictor` over `samples`
pub fn empirical<E: Encoder<Point>>(predictor: &Predictor<E>, samples: &SampleSet) -> Result<f64> {
    if samples.is_empty() {
        return Err(SvrError::NotEnoughSamples);
    }

    let predicted = predictor.predict_batch(samples);
    let risk = predicted.mean_squared_error(&samples.targets())?;

    Ok(risk)
}

/// Outcome of a k-fold cross-validation
#[derive(Debug, Clone, PartialEq)]
pub struct CrossValidation {
    fold_risks: Vec<f64>,
}

impl CrossValidation {
    /// Quadratic risk of every held-out fold, in fold order
    pub fn fold_risks(&self) -> &[f64] {
        &self.fold_risks
    }

    pub fn nfolds(&self) -> usize {
        self.fold_risks.len()
    }

    /// Estimate of the real risk, averaged over all folds
    pub fn mean(&self) -> f64 {
        self.fold_risks.iter().sum::<f64>() / self.fold_risks.len() as f64
    }
}

/// Estimate the real quadratic risk of `learner` with `k` folds
///
/// The samples are split into `k` contiguous folds in sample order. Every fold
/// is held out once while a model is trained on the remaining ones.
pub fn cross_validation<E: Encoder<Point> + Clone>(
    learner: &SvrLearner<E>,
    samples: &SampleSet,
    k: usize,
) -> Result<CrossValidation> {
    if k < 2 || k > samples.len() {
        return Err(SvrError::InvalidFolds {
            folds: k,
            nsamples: samples.len(),
        });
    }

    let dataset = samples.to_dataset(learner.encoder());
    let mut fold_risks = Vec::with_capacity(k);
    for (i, (train, valid)) in dataset.fold(k).into_iter().enumerate() {
        let predictor = learner.fit_dataset(&train)?;
        let predicted = predictor.predict_records(valid.records());
        let risk = predicted.mean_squared_error(valid.targets())?;
        debug!("fold {}/{}: quadratic risk {}", i + 1, k, risk);

        fold_risks.push(risk);
    }

    Ok(CrossValidation { fold_risks })
}
