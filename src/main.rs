// This binary crate is intentionally minimal.
// All evaluator logic lives in the library (src/lib.rs and its modules).
// Run the demo with:
//   cargo run --example smoke
fn main() {
    println!("cortex-nn: a minimal feed-forward network evaluator in Rust.");
    println!("Run `cargo run --example smoke` to see the forward/MSE demo.");
}
