use rand::rngs::StdRng;
use rand::SeedableRng;
use sgrad_core::{Graph, Scalar};

// Shared by several test binaries; not every binary uses every helper.
#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[allow(dead_code)]
pub fn leaves<'g>(graph: &'g Graph, values: &[f64]) -> Vec<Scalar<'g>> {
    values.iter().map(|&v| graph.scalar(v)).collect()
}
