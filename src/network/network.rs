use rand::Rng;

use crate::activation::activation::{Activation, Identity};
use crate::math::matrix::Matrix;
use crate::math::vector;

/// A feed-forward network with weights fixed at construction time.
///
/// For a topology of length L the network holds L-1 weight matrices;
/// weight *i* has shape (topology[i+1], topology[i]). Topologies of
/// length 0 or 1 are valid degenerate cases with no weights at all, and
/// `run` then returns its input unchanged.
///
/// ```
/// use cortex_nn::Network;
///
/// let mut network = Network::new(&[3, 5, 1]);
/// let output = network.run(&[0.5, -0.25, 1.0]);
/// assert_eq!(output.len(), 1);
/// ```
pub struct Network {
    /// Last-activation snapshots, one per weight matrix. Entry *i* starts
    /// as `topology[i]` standard-normal samples and after any `run` call
    /// holds the vector that was fed through weight *i* during the most
    /// recent propagation. Diagnostic state only; nothing downstream
    /// reads it. Owned exclusively by this network and rewritten by every
    /// `run` call, so one instance must not be shared across threads.
    pub layers: Vec<Vec<f64>>,
    /// One weight matrix per adjacent layer pair; never mutated after
    /// construction.
    pub weights: Vec<Matrix>,
    activation: Box<dyn Activation>,
}

impl Network {
    /// Builds a network from per-layer node counts, using thread-local
    /// entropy and the `Identity` activation.
    ///
    /// A topology is a slice of sizes; a bare integer is not one:
    ///
    /// ```compile_fail
    /// cortex_nn::Network::new(3);
    /// ```
    pub fn new(topology: &[usize]) -> Network {
        Network::with_activation(topology, Box::new(Identity))
    }

    /// Like `new`, with a caller-chosen activation strategy.
    pub fn with_activation(topology: &[usize], activation: Box<dyn Activation>) -> Network {
        Network::with_rng(topology, activation, &mut rand::thread_rng())
    }

    /// Builds a network drawing all initial values from `rng`: snapshot
    /// *i* gets `topology[i]` standard-normal samples, weight *i* gets
    /// uniform [0, 1) entries. Seed an `StdRng` for deterministic
    /// construction.
    pub fn with_rng<R: Rng>(
        topology: &[usize],
        activation: Box<dyn Activation>,
        rng: &mut R,
    ) -> Network {
        let pairs = topology.len().saturating_sub(1);
        let mut layers = Vec::with_capacity(pairs);
        let mut weights = Vec::with_capacity(pairs);

        for i in 0..pairs {
            layers.push(vector::standard_normal(topology[i], rng));
            weights.push(Matrix::random(topology[i + 1], topology[i], rng));
        }

        Network { layers, weights, activation }
    }

    /// Builds a network around caller-supplied weight matrices; snapshots
    /// start as zero vectors sized by each matrix's column count.
    ///
    /// Adjacent shapes are not validated here; a chain whose matrix *i+1*
    /// cannot consume the output of matrix *i* panics inside `run` at the
    /// offending multiplication.
    pub fn from_weights(weights: Vec<Matrix>, activation: Box<dyn Activation>) -> Network {
        let layers = weights.iter().map(|w| vec![0.0; w.cols]).collect();
        Network { layers, weights, activation }
    }

    /// Propagates `input` through every weight matrix in order, applying
    /// the activation strategy after each product, and returns the final
    /// output vector. The caller's slice is copied, never mutated.
    ///
    /// As a side effect, snapshot *i* is overwritten with the vector that
    /// was fed through weight *i*. With no weights the input comes back
    /// unchanged and no snapshot is touched.
    ///
    /// # Panics
    /// There is no upfront length check: an input that does not match
    /// the first matrix's column count panics when that product is
    /// attempted.
    pub fn run(&mut self, input: &[f64]) -> Vec<f64> {
        let mut output = input.to_vec();

        for (i, weight) in self.weights.iter().enumerate() {
            self.layers[i] = output.clone();
            output = self.activation.apply(&weight.dot(&output));
        }

        output
    }
}
