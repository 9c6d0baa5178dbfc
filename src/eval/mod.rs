pub mod evaluator;

pub use evaluator::test_network;
