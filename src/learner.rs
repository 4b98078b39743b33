//! Training and persistence of epsilon support vector regressions
//!
//! A [`SvrLearner`] binds checked hyper-parameters to an input [`Encoder`]. Fitting
//! it on a [`SampleSet`] solves the regression problem with `linfa-svm` and
//! yields a [`Predictor`], which keeps the encoder around so that it can be
//! queried with plain points.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use linfa::traits::{Fit, Predict};
use linfa::Dataset;
use linfa_svm::Svm;
use log::{debug, info};
use ndarray::{Array1, Array2, Axis, Ix1};

use crate::encoding::{Encoder, PlanarEncoder};
use crate::error::{Result, SvrError};
use crate::hyperparams::SvrValidParams;
use crate::sample::{Point, SampleSet};

/// Epsilon-SVR learning algorithm with a fixed input encoding
#[derive(Clone, Debug, PartialEq)]
pub struct SvrLearner<E = PlanarEncoder> {
    params: SvrValidParams,
    encoder: E,
}

impl SvrLearner<PlanarEncoder> {
    pub fn new(params: SvrValidParams) -> Self {
        SvrLearner {
            params,
            encoder: PlanarEncoder,
        }
    }
}

impl<E: Encoder<Point> + Clone> SvrLearner<E> {
    pub fn with_encoder(params: SvrValidParams, encoder: E) -> Self {
        SvrLearner { params, encoder }
    }

    pub fn params(&self) -> &SvrValidParams {
        &self.params
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Fit a regression model on `samples`
    ///
    /// Fails with [`SvrError::NotEnoughSamples`] for an empty set and with
    /// [`SvrError::Training`] when the solver rejects the problem.
    pub fn fit(&self, samples: &SampleSet) -> Result<Predictor<E>> {
        if samples.is_empty() {
            return Err(SvrError::NotEnoughSamples);
        }

        let dataset = samples.to_dataset(&self.encoder);
        let predictor = self.fit_dataset(&dataset)?;
        info!(
            "fitted regression on {} samples with {} support vectors",
            samples.len(),
            predictor.nsupport()
        );

        Ok(predictor)
    }

    /// Fit on records that were already encoded with this learner's encoder
    pub(crate) fn fit_dataset(&self, dataset: &Dataset<f64, f64, Ix1>) -> Result<Predictor<E>> {
        let svm = self.params.svm_params().fit(dataset)?;
        debug!("{}", svm);

        Ok(Predictor {
            svm,
            encoder: self.encoder.clone(),
        })
    }
}

/// A fitted regression model together with the encoding of its inputs
pub struct Predictor<E = PlanarEncoder> {
    svm: Svm<f64, f64>,
    encoder: E,
}

impl<E: Encoder<Point>> Predictor<E> {
    /// Predict the output at a single point
    pub fn predict(&self, point: &Point) -> f64 {
        let row = self
            .encoder
            .encode(point)
            .to_dense(self.encoder.ndim())
            .insert_axis(Axis(0));

        self.predict_records(&row)[0]
    }

    /// Predict the output of every sample, in sample order
    pub fn predict_batch(&self, samples: &SampleSet) -> Array1<f64> {
        self.predict_records(&samples.records(&self.encoder))
    }

    pub(crate) fn predict_records(&self, records: &Array2<f64>) -> Array1<f64> {
        let predicted: Array1<f64> = self.svm.predict(records);
        predicted
    }

    /// Number of support vectors of the fitted model
    pub fn nsupport(&self) -> usize {
        self.svm.nsupport()
    }

    pub fn svm(&self) -> &Svm<f64, f64> {
        &self.svm
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Write the model to `path`
    ///
    /// Only the fitted model is stored, the encoder has to be supplied again
    /// when loading.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer(&mut writer, &self.svm)?;
        writer.flush()?;
        info!("model saved to \"{}\"", path.as_ref().display());

        Ok(())
    }

    /// Read a model written by [`Predictor::save`] and bind it to `encoder`
    pub fn load<P: AsRef<Path>>(path: P, encoder: E) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let svm: Svm<f64, f64> = serde_json::from_reader(reader)?;
        info!("model loaded from \"{}\"", path.as_ref().display());

        Ok(Predictor { svm, encoder })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyperparams::SvrParams;
    use crate::sample::Sample;
    use linfa::ParamGuard;

    /// Samples of `z = x + 2y` on a regular grid
    fn plane() -> SampleSet {
        let mut samples = Vec::new();
        for i in 0..10 {
            for j in 0..10 {
                let (x, y) = (i as f64 / 10.0 - 0.5, j as f64 / 10.0 - 0.5);
                samples.push(Sample::new(Point::new(x, y), x + 2.0 * y));
            }
        }
        samples.into()
    }

    fn learner() -> SvrLearner {
        SvrLearner::new(SvrParams::new().c(10.0).epsilon(0.01).check_unwrap())
    }

    #[test]
    fn empty_set_is_rejected() {
        let result = learner().fit(&SampleSet::default());
        assert!(matches!(result, Err(SvrError::NotEnoughSamples)));
    }

    #[test]
    fn fits_a_plane() {
        let samples = plane();
        let predictor = learner().fit(&samples).unwrap();

        assert!(predictor.nsupport() > 0);
        assert!(predictor.nsupport() <= samples.len());

        let predicted = predictor.predict(&Point::new(0.1, 0.1));
        assert!((predicted - 0.3).abs() < 0.1, "predicted {}", predicted);

        let batch = predictor.predict_batch(&samples);
        assert_eq!(batch.len(), samples.len());
        assert!((batch[0] - predictor.predict(&samples[0].input)).abs() < 1e-12);
    }

    #[test]
    fn saved_model_predicts_the_same() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.pred");

        let predictor = learner().fit(&plane()).unwrap();
        predictor.save(&path).unwrap();
        let loaded = Predictor::load(&path, PlanarEncoder).unwrap();

        assert_eq!(loaded.nsupport(), predictor.nsupport());
        for point in &[Point::new(0.0, 0.0), Point::new(-0.3, 0.4)] {
            assert!((loaded.predict(point) - predictor.predict(point)).abs() < 1e-9);
        }
    }

    #[test]
    fn loading_garbage_is_a_model_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.pred");
        std::fs::write(&path, "not a model").unwrap();

        let result = Predictor::load(&path, PlanarEncoder);
        assert!(matches!(result, Err(SvrError::Model(_))));
    }

    #[test]
    fn missing_model_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Predictor::load(dir.path().join("missing.pred"), PlanarEncoder);
        assert!(matches!(result, Err(SvrError::Io(_))));
    }
}
