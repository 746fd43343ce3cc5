//! # Training a small MLP on XOR
//!
//! Demonstrates the `nn` layer on top of the scalar engine:
//! 1.  Building an [`Mlp`] with a seeded random generator.
//! 2.  A manual training loop:
//!     -   the network is rebuilt from the current parameter values on a
//!         scratch graph (`Mlp::rebuild`),
//!     -   forward pass and squared-error loss,
//!     -   backward pass,
//!     -   plain gradient-descent update of the parameter values,
//!     -   `Graph::rewind` to discard every node of the step.
//!
//! ## Running
//! `cargo run --example xor_mlp`

use rand::rngs::StdRng;
use rand::SeedableRng;
use sgrad_core::nn::{Activation, Mlp, Module};
use sgrad_core::{Graph, SgradError};

const EPOCHS: usize = 500;
const LEARNING_RATE: f64 = 0.1;

fn main() -> Result<(), SgradError> {
    let data = [
        ([0.0, 0.0], 0.0),
        ([0.0, 1.0], 1.0),
        ([1.0, 0.0], 1.0),
        ([1.0, 1.0], 0.0),
    ];

    let init_graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(42);
    let template = Mlp::new(
        &init_graph,
        2,
        &[4, 1],
        Some(&[Activation::Tanh, Activation::Sigmoid]),
        &mut rng,
    )?;
    println!("Model: {}", template);

    let mut params: Vec<f64> = template.parameters().iter().map(|p| p.value()).collect();
    println!("{} parameters", params.len());

    let graph = Graph::new();
    let mark = graph.checkpoint();

    for epoch in 0..EPOCHS {
        let model = template.rebuild(&graph, &params)?;
        let mut loss = graph.scalar(0.0);
        for (x, y) in &data {
            let inputs = [graph.scalar(x[0]), graph.scalar(x[1])];
            let pred = model.forward(&inputs)?[0];
            let err = pred - *y;
            loss = loss + err * err;
        }
        loss.backward();

        for (value, p) in params.iter_mut().zip(model.parameters()) {
            *value -= LEARNING_RATE * p.grad();
        }
        if epoch % 100 == 0 || epoch + 1 == EPOCHS {
            println!("Epoch {:4}: loss = {:.6} ({} nodes)", epoch, loss.value(), graph.len());
        }
        graph.rewind(mark);
    }

    let model = template.rebuild(&graph, &params)?;
    for (x, y) in &data {
        let inputs = [graph.scalar(x[0]), graph.scalar(x[1])];
        let pred = model.forward(&inputs)?[0];
        println!("{:?} -> {:.3} (target {})", x, pred.value(), y);
    }
    Ok(())
}
