use linfa::ParamGuard;
use svrkit::{KernelKind, SvrParams};

#[test]
#[should_panic]
fn c_cannot_be_zero() {
    SvrParams::new().c(0.).check_unwrap();
}

#[test]
#[should_panic]
fn c_cannot_be_negative() {
    SvrParams::new().c(-1.).check_unwrap();
}

#[test]
#[should_panic]
fn epsilon_cannot_be_negative() {
    SvrParams::new().epsilon(-0.05).check_unwrap();
}

#[test]
#[should_panic]
fn tolerance_has_to_be_positive() {
    SvrParams::new().tolerance(0.).check_unwrap();
}

#[test]
#[should_panic]
fn gamma_has_to_be_positive() {
    SvrParams::new().rbf(0.).check_unwrap();
}

#[test]
fn other_kernels_are_accepted() {
    let linear = SvrParams::new().kernel(KernelKind::Linear).check_unwrap();
    assert_eq!(linear.kernel(), KernelKind::Linear);

    let poly = SvrParams::new()
        .kernel(KernelKind::Polynomial {
            constant: 1.,
            degree: 3.,
        })
        .check_unwrap();
    assert_eq!(
        poly.kernel(),
        KernelKind::Polynomial {
            constant: 1.,
            degree: 3.
        }
    );
}
