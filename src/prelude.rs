//! Everything needed to fit a regression on a [`SampleSet`] and look at it
//!
//! `use svrkit::prelude::*;` brings in the sample types, the learner and its
//! parameters, the risk estimators and the plot writer. It also brings in
//! [`Result`], which shadows `std::result::Result` in the importing module.

#[doc(no_inline)]
pub use crate::error::{Result, SvrError};

#[doc(no_inline)]
pub use crate::encoding::{Encoder, FeatureVector, PlanarEncoder};

#[doc(no_inline)]
pub use crate::hyperparams::{KernelKind, SvrParams, SvrValidParams};

#[doc(no_inline)]
pub use crate::learner::{Predictor, SvrLearner};

#[doc(no_inline)]
pub use crate::plot::{write_plot, write_plot_file, PlotGrid};

#[doc(no_inline)]
pub use crate::risk::{self, CrossValidation};

#[doc(no_inline)]
pub use crate::sample::{Point, Sample, SampleSet};
