pub struct MseLoss;

impl MseLoss {
    /// Element-wise squared error: (predicted - expected)²
    ///
    /// # Panics
    /// Panics if the two vectors differ in length.
    pub fn squared_error(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        if predicted.len() != expected.len() {
            panic!("Vectors are of incorrect sizes")
        }

        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .collect()
    }
}
