//! `svrkit` fits epsilon support vector regressions on planar samples.
//!
//! The heavy lifting (the SMO solver, kernels, folds and regression metrics) is
//! done by [`linfa`](https://crates.io/crates/linfa) and
//! [`linfa-svm`](https://crates.io/crates/linfa-svm). This crate adds the glue
//! around them:
//!
//! * [`SampleSet`]s of `(x, y) -> z` samples and their sparse [`encoding`],
//! * checked hyper-parameters in [`SvrParams`],
//! * a [`SvrLearner`] producing [`Predictor`]s that can be saved and loaded,
//! * empirical and cross-validated quadratic [`risk`],
//! * gnuplot scripts of any field over the plane in [`plot`].
//!
//! Sample sources, a synthetic oracle and a tabular file loader, live in the
//! `svrkit-datasets` crate.
//!
//! ## Example
//!
//! ```no_run
//! use linfa::ParamGuard;
//! use svrkit::prelude::*;
//!
//! # fn main() -> svrkit::Result<()> {
//! let samples: SampleSet = (0..100)
//!     .map(|i| {
//!         let x = i as f64 / 100.0;
//!         Sample::new(Point::new(x, 1.0 - x), x * x)
//!     })
//!     .collect();
//!
//! let learner = SvrLearner::new(SvrParams::new().c(10.0).check()?);
//! let predictor = learner.fit(&samples)?;
//!
//! println!("empirical risk {}", risk::empirical(&predictor, &samples)?);
//! println!("cross-validated risk {}", risk::cross_validation(&learner, &samples, 10)?.mean());
//! # Ok(())
//! # }
//! ```

pub mod encoding;
pub mod error;
mod hyperparams;
mod learner;
pub mod plot;
pub mod prelude;
pub mod risk;
mod sample;

pub use encoding::{Encoder, FeatureNode, FeatureVector, PlanarEncoder};
pub use error::{Result, SvrError};
pub use hyperparams::{KernelKind, SvrParams, SvrValidParams};
pub use learner::{Predictor, SvrLearner};
pub use plot::PlotGrid;
pub use sample::{Point, Sample, SampleSet};
