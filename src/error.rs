//! Error types in svrkit
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SvrError>;

#[derive(Error, Debug)]
pub enum SvrError {
    #[error("invalid parameter {0}")]
    InvalidParams(String),
    #[error("training failed: {0}")]
    Training(#[from] linfa_svm::SvmError),
    #[error(transparent)]
    Linfa(#[from] linfa::error::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid model file: {0}")]
    Model(#[from] serde_json::Error),
    #[error("at least one sample is required")]
    NotEnoughSamples,
    #[error("cannot split {nsamples} samples into {folds} folds")]
    InvalidFolds { folds: usize, nsamples: usize },
    #[error("invalid plot grid {0}")]
    InvalidPlotGrid(String),
}
