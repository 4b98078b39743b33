//! `svrkit-datasets` provides the sample sources used with `svrkit`.
//!
//! * [`generate`]: a synthetic oracle, `exp(-2.5 r) cos(8 sqrt(r))` with optional
//!   uniform noise, sampled on `[-1, 1)²`
//! * [`dataset`]: a loader for plain text tables of `z x y` samples, with optional
//!   down-sampling of oversized files
//!
//! Both return a [`svrkit::SampleSet`]. Randomness is always drawn from a
//! generator passed in by the caller, so seeded generators give reproducible sets.
//!
//! ```
//! use rand::{rngs::SmallRng, SeedableRng};
//! use svrkit_datasets::generate::Oracle;
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let samples = Oracle::default().samples(200, &mut rng);
//! assert_eq!(samples.len(), 200);
//! ```

pub mod dataset;
mod error;
pub mod generate;

pub use dataset::{count_lines, load, read_samples, LoaderParams};
pub use error::{DatasetError, Result};
pub use generate::Oracle;
