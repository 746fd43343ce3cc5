use crate::error::SgradError;
use crate::graph::Graph;
use crate::nn::module::{check_width, Module};
use crate::nn::{Activation, Init};
use crate::scalar::Scalar;
use rand::Rng;
use std::fmt;

/// A single neuron: `activation(b + Σ wᵢ·xᵢ)`.
#[derive(Debug, Clone)]
pub struct Neuron<'g> {
    weights: Vec<Scalar<'g>>,
    bias: Scalar<'g>,
    activation: Activation,
}

impl<'g> Neuron<'g> {
    /// Creates a neuron with `nin` weights drawn uniformly from `[-1, 1)` and
    /// a zero bias.
    pub fn new<R: Rng + ?Sized>(
        graph: &'g Graph,
        nin: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, SgradError> {
        Self::with_init(graph, nin, activation, &Init::default(), rng)
    }

    /// Creates a neuron whose weights are drawn from `init`. The bias starts
    /// at zero.
    pub fn with_init<R: Rng + ?Sized>(
        graph: &'g Graph,
        nin: usize,
        activation: Activation,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, SgradError> {
        let weights = init
            .sample(nin, rng)?
            .into_iter()
            .map(|w| graph.scalar(w))
            .collect();
        Ok(Neuron {
            weights,
            bias: graph.scalar(0.0),
            activation,
        })
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn weights(&self) -> &[Scalar<'g>] {
        &self.weights
    }

    pub fn bias(&self) -> Scalar<'g> {
        self.bias
    }

    /// Same neuron with new parameter values on `graph`: `values` holds the
    /// weights followed by the bias.
    pub(crate) fn rebuild<'h>(&self, graph: &'h Graph, values: &[f64]) -> Neuron<'h> {
        let nin = self.nin();
        Neuron {
            weights: values[..nin].iter().map(|&w| graph.scalar(w)).collect(),
            bias: graph.scalar(values[nin]),
            activation: self.activation,
        }
    }

    /// Forward pass for a single output.
    pub fn activate(&self, input: &[Scalar<'g>]) -> Result<Scalar<'g>, SgradError> {
        check_width(self.nin(), input, "Neuron::forward")?;
        let act = self
            .weights
            .iter()
            .zip(input)
            .fold(self.bias, |acc, (w, x)| acc + *w * *x);
        Ok(self.activation.apply(act))
    }
}

impl<'g> Module<'g> for Neuron<'g> {
    fn forward(&self, input: &[Scalar<'g>]) -> Result<Vec<Scalar<'g>>, SgradError> {
        Ok(vec![self.activate(input)?])
    }

    fn parameters(&self) -> Vec<Scalar<'g>> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, Scalar<'g>)> {
        let mut named: Vec<(String, Scalar<'g>)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w{}", i), *w))
            .collect();
        named.push(("b".to_string(), self.bias));
        named
    }
}

impl fmt::Display for Neuron<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Neuron({})", self.activation, self.nin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_neuron_forward_linear() -> Result<(), SgradError> {
        let graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(0);
        let n = Neuron::with_init(&graph, 2, Activation::Linear, &Init::Constant(0.5), &mut rng)?;
        let xs = [graph.scalar(2.0), graph.scalar(-4.0)];
        let out = n.activate(&xs)?;
        assert_relative_eq!(out.value(), 0.5 * 2.0 + 0.5 * -4.0);
        Ok(())
    }

    #[test]
    fn test_neuron_backward_reaches_parameters() -> Result<(), SgradError> {
        let graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(1);
        let n = Neuron::with_init(&graph, 3, Activation::Tanh, &Init::Constant(0.1), &mut rng)?;
        let xs = [graph.scalar(1.0), graph.scalar(2.0), graph.scalar(3.0)];
        let out = n.activate(&xs)?;
        out.backward();
        let act = 0.1_f64 * (1.0 + 2.0 + 3.0);
        let dact = 1.0 - act.tanh().powi(2);
        assert_relative_eq!(n.bias().grad(), dact, epsilon = 1e-12);
        for (w, x) in n.weights().iter().zip(&xs) {
            assert_relative_eq!(w.grad(), dact * x.value(), epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_neuron_parameters_and_names() -> Result<(), SgradError> {
        let graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(2);
        let n = Neuron::new(&graph, 3, Activation::Relu, &mut rng)?;
        assert_eq!(n.parameters().len(), 4);
        let names: Vec<String> = n.named_parameters().into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["w0", "w1", "w2", "b"]);
        assert_eq!(n.bias().value(), 0.0);
        assert_eq!(n.to_string(), "relu Neuron(3)");
        Ok(())
    }

    #[test]
    fn test_neuron_rebuild() -> Result<(), SgradError> {
        let graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(4);
        let n = Neuron::new(&graph, 2, Activation::Sigmoid, &mut rng)?;
        let other = Graph::new();
        let m = n.rebuild(&other, &[0.25, -0.5, 2.0]);
        assert_eq!(m.activation(), Activation::Sigmoid);
        let values: Vec<f64> = m.parameters().iter().map(|p| p.value()).collect();
        assert_eq!(values, vec![0.25, -0.5, 2.0]);
        assert_eq!(other.len(), 3);
        Ok(())
    }

    #[test]
    fn test_neuron_rejects_wrong_width() -> Result<(), SgradError> {
        let graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(3);
        let n = Neuron::new(&graph, 2, Activation::Linear, &mut rng)?;
        let xs = [graph.scalar(1.0)];
        assert!(matches!(
            n.activate(&xs),
            Err(SgradError::ShapeMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
        Ok(())
    }
}
