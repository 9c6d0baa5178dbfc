use rand::Rng;

use cortex_nn::math::vector;
use cortex_nn::{test_network, Network};

fn main() {
    let mut rng = rand::thread_rng();

    let mut network = Network::new(&[3, 5, 4, 1]);

    let input = vector::standard_normal(3, &mut rng);
    let output = network.run(&input);
    println!("Input: {:?} -> Output: {:?}", input, output);

    let inputs: Vec<Vec<f64>> = (0..10)
        .map(|_| (0..3).map(|_| rng.gen::<f64>()).collect())
        .collect();
    let labels: Vec<Vec<f64>> = (0..10)
        .map(|_| (0..1).map(|_| rng.gen::<f64>()).collect())
        .collect();

    let mse = test_network(&mut network, &inputs, &labels);
    println!("MSE per output dimension: {:?}", mse);
}
