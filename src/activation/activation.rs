use std::f64::consts::E;

/// The activation strategy applied after every weight multiplication.
///
/// Implementations must be pure and shape-preserving: the returned vector
/// has the same length as `input`, and the same input always yields the
/// same output. The network applies the strategy as supplied at
/// construction; swap in any implementation honoring this contract.
pub trait Activation: Send + Sync {
    fn apply(&self, input: &[f64]) -> Vec<f64>;
}

/// Passes layer outputs through unchanged. The default strategy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Identity;

impl Activation for Identity {
    fn apply(&self, input: &[f64]) -> Vec<f64> {
        input.to_vec()
    }
}

/// Element-wise logistic function: 1 / (1 + e^-x).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sigmoid;

impl Activation for Sigmoid {
    fn apply(&self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|&x| 1.0 / (1.0 + E.powf(-x))).collect()
    }
}

/// Element-wise rectifier: max(x, 0).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Relu;

impl Activation for Relu {
    fn apply(&self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|&x| if x > 0.0 { x } else { 0.0 }).collect()
    }
}

/// Element-wise hyperbolic tangent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tanh;

impl Activation for Tanh {
    fn apply(&self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|&x| x.tanh()).collect()
    }
}
