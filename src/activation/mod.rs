pub mod activation;

pub use activation::{Activation, Identity, Relu, Sigmoid, Tanh};
