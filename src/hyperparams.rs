use linfa::ParamGuard;
use linfa_svm::{Svm, SvmParams};

use crate::error::SvrError;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Kernel used by the regression
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KernelKind {
    /// `k(u, v) = exp(-gamma * |u - v|^2)`
    Rbf { gamma: f64 },
    /// `k(u, v) = <u, v>`
    Linear,
    /// `k(u, v) = (<u, v> + constant)^degree`
    Polynomial { constant: f64, degree: f64 },
}

/// A verified hyper-parameter set ready for epsilon support vector regression
///
/// See [`SvrParams`](crate::SvrParams) for more information.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct SvrValidParams {
    pub(crate) kernel: KernelKind,
    pub(crate) c: f64,
    pub(crate) epsilon: f64,
    pub(crate) tolerance: f64,
    pub(crate) shrinking: bool,
}

impl SvrValidParams {
    pub fn kernel(&self) -> KernelKind {
        self.kernel
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn shrinking(&self) -> bool {
        self.shrinking
    }

    /// Translate into the parameter set of `linfa-svm`
    ///
    /// The gaussian kernel of `linfa-kernel` divides the squared distance by its
    /// width, so an RBF `gamma` becomes a width of `1 / gamma`.
    pub(crate) fn svm_params(&self) -> SvmParams<f64, f64> {
        let params = Svm::<f64, f64>::params()
            .eps(self.tolerance)
            .shrinking(self.shrinking)
            .c_svr(self.c, Some(self.epsilon));

        match self.kernel {
            KernelKind::Rbf { gamma } => params.gaussian_kernel(1.0 / gamma),
            KernelKind::Linear => params.linear_kernel(),
            KernelKind::Polynomial { constant, degree } => {
                params.polynomial_kernel(constant, degree)
            }
        }
    }
}

/// Hyper-parameters of an epsilon support vector regression
///
/// The defaults describe an RBF kernel with `gamma = 10`, a penalty `C = 1`,
/// an insensitive tube of half-width `0.05` and a solver tolerance of `1e-5`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct SvrParams(pub(crate) SvrValidParams);

impl Default for SvrParams {
    fn default() -> Self {
        Self::new()
    }
}

impl SvrParams {
    pub fn new() -> Self {
        Self(SvrValidParams {
            kernel: KernelKind::Rbf { gamma: 10.0 },
            c: 1.0,
            epsilon: 0.05,
            tolerance: 1e-5,
            shrinking: false,
        })
    }

    /// Set the kernel.
    ///
    /// Defaults to `KernelKind::Rbf { gamma: 10.0 }`
    pub fn kernel(mut self, kernel: KernelKind) -> Self {
        self.0.kernel = kernel;
        self
    }

    /// Shorthand for an RBF kernel with width `gamma`
    pub fn rbf(self, gamma: f64) -> Self {
        self.kernel(KernelKind::Rbf { gamma })
    }

    /// Set the penalty of samples outside the tube.
    ///
    /// Defaults to `1.0` if not set
    ///
    /// `c` must be positive and finite
    pub fn c(mut self, c: f64) -> Self {
        self.0.c = c;
        self
    }

    /// Set the half-width of the insensitive tube.
    ///
    /// Defaults to `0.05` if not set
    ///
    /// `epsilon` must be non-negative and finite
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.0.epsilon = epsilon;
        self
    }

    /// Set the stopping tolerance of the solver.
    ///
    /// Defaults to `1e-5` if not set
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.0.tolerance = tolerance;
        self
    }

    /// Ignore bounded multipliers during optimization
    ///
    /// Defaults to `false`
    pub fn shrinking(mut self, shrinking: bool) -> Self {
        self.0.shrinking = shrinking;
        self
    }
}

impl ParamGuard for SvrParams {
    type Checked = SvrValidParams;
    type Error = SvrError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        let params = &self.0;
        if !params.c.is_finite() || params.c <= 0.0 {
            return Err(SvrError::InvalidParams(format!(
                "C should be positive and finite, but is {}",
                params.c
            )));
        }
        if !params.epsilon.is_finite() || params.epsilon < 0.0 {
            return Err(SvrError::InvalidParams(format!(
                "epsilon should be non-negative and finite, but is {}",
                params.epsilon
            )));
        }
        if !params.tolerance.is_finite() || params.tolerance <= 0.0 {
            return Err(SvrError::InvalidParams(format!(
                "tolerance should be positive and finite, but is {}",
                params.tolerance
            )));
        }

        match params.kernel {
            KernelKind::Rbf { gamma } if !gamma.is_finite() || gamma <= 0.0 => Err(
                SvrError::InvalidParams(format!("gamma should be positive, but is {}", gamma)),
            ),
            KernelKind::Polynomial { degree, .. } if !degree.is_finite() || degree <= 0.0 => {
                Err(SvrError::InvalidParams(format!(
                    "polynomial degree should be positive, but is {}",
                    degree
                )))
            }
            KernelKind::Polynomial { constant, .. } if !constant.is_finite() => Err(
                SvrError::InvalidParams(format!("polynomial constant is {}", constant)),
            ),
            _ => Ok(params),
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = SvrParams::default().check().unwrap();
        assert_eq!(params.kernel(), KernelKind::Rbf { gamma: 10.0 });
        assert_eq!(params.c(), 1.0);
        assert_eq!(params.epsilon(), 0.05);
        assert_eq!(params.tolerance(), 1e-5);
        assert!(!params.shrinking());
    }

    #[test]
    fn zero_tube_is_allowed() {
        assert!(SvrParams::new().epsilon(0.0).check().is_ok());
    }

    #[test]
    fn invalid_values_are_configuration_errors() {
        let cases = vec![
            SvrParams::new().c(0.0),
            SvrParams::new().c(f64::NAN),
            SvrParams::new().epsilon(-0.1),
            SvrParams::new().tolerance(0.0),
            SvrParams::new().rbf(-1.0),
            SvrParams::new().kernel(KernelKind::Polynomial {
                constant: 1.0,
                degree: 0.0,
            }),
            SvrParams::new().kernel(KernelKind::Polynomial {
                constant: f64::INFINITY,
                degree: 2.0,
            }),
        ];

        for params in cases {
            assert!(matches!(params.check_ref(), Err(SvrError::InvalidParams(_))));
        }
    }
}
