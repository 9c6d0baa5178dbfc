use crate::loss::mse::MseLoss;
use crate::network::network::Network;

/// Scores `network` over a labeled batch and returns the mean squared
/// error **per output dimension** (one entry per label component, not a
/// single scalar).
///
/// # Arguments
/// - `network` — mutable reference to the network; its snapshots are
///               rewritten by each forward pass
/// - `inputs`  — batch of input vectors, each of the first layer's size
/// - `labels`  — corresponding expected outputs, same length as `inputs`
///
/// # Panics
/// - if `inputs` is empty, or `inputs` and `labels` differ in length
/// - at the first sample whose output length differs from its label
///   length; no partial result is returned
/// - on an input that does not fit the network's first weight matrix
///   (the fault propagates out of `run`)
pub fn test_network(
    network: &mut Network,
    inputs: &[Vec<f64>],
    labels: &[Vec<f64>],
) -> Vec<f64> {
    assert!(!inputs.is_empty(), "inputs must not be empty");
    assert_eq!(
        inputs.len(),
        labels.len(),
        "inputs and labels must have equal length"
    );

    let mut mse = vec![0.0; labels[0].len()];

    for (input, label) in inputs.iter().zip(labels.iter()) {
        let output = network.run(input);
        let error = MseLoss::squared_error(&output, label);

        for (j, &e) in error.iter().enumerate() {
            mse[j] += e;
        }
    }

    let n = inputs.len() as f64;
    for m in mse.iter_mut() {
        *m /= n;
    }

    mse
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::Identity;
    use crate::math::matrix::Matrix;

    fn echo_network(dim: usize) -> Network {
        let mut eye = Matrix::zeros(dim, dim);
        for i in 0..dim {
            eye.data[i][i] = 1.0;
        }
        Network::from_weights(vec![eye], Box::new(Identity))
    }

    #[test]
    fn averages_squared_error_per_dimension() {
        let mut network = echo_network(2);
        let inputs = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let labels = vec![vec![1.0, 0.0], vec![3.0, 0.0]];
        assert_eq!(test_network(&mut network, &inputs, &labels), vec![0.0, 10.0]);
    }

    #[test]
    fn perfect_predictions_score_zero() {
        let mut network = echo_network(3);
        let batch = vec![vec![0.5, -1.0, 2.0], vec![0.0, 0.0, 0.0]];
        assert_eq!(test_network(&mut network, &batch.clone(), &batch), vec![0.0; 3]);
    }

    #[test]
    fn result_entries_are_never_negative() {
        let mut network = echo_network(2);
        let inputs = vec![vec![-5.0, 5.0], vec![2.5, -2.5]];
        let labels = vec![vec![5.0, -5.0], vec![-2.5, 2.5]];
        let mse = test_network(&mut network, &inputs, &labels);
        assert_eq!(mse.len(), 2);
        assert!(mse.iter().all(|&m| m >= 0.0));
    }

    #[test]
    #[should_panic(expected = "inputs must not be empty")]
    fn rejects_an_empty_batch() {
        let mut network = echo_network(2);
        test_network(&mut network, &[], &[]);
    }

    #[test]
    #[should_panic(expected = "inputs and labels must have equal length")]
    fn rejects_unequal_batch_lengths() {
        let mut network = echo_network(2);
        let inputs = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let labels = vec![vec![1.0, 2.0]];
        test_network(&mut network, &inputs, &labels);
    }

    #[test]
    #[should_panic(expected = "Vectors are of incorrect sizes")]
    fn aborts_at_the_first_label_mismatch() {
        let mut network = echo_network(2);
        let inputs = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let labels = vec![vec![1.0, 2.0], vec![3.0]];
        test_network(&mut network, &inputs, &labels);
    }
}
