pub mod math;
pub mod activation;
pub mod network;
pub mod loss;
pub mod eval;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::{Activation, Identity, Relu, Sigmoid, Tanh};
pub use network::network::Network;
pub use loss::mse::MseLoss;
pub use eval::evaluator::test_network;
