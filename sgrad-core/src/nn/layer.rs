use crate::error::SgradError;
use crate::graph::Graph;
use crate::nn::module::{check_width, Module};
use crate::nn::{Activation, Init, Neuron};
use crate::scalar::Scalar;
use rand::Rng;
use std::fmt;

/// A fully connected layer of `nout` neurons sharing the same input.
#[derive(Debug, Clone)]
pub struct Layer<'g> {
    neurons: Vec<Neuron<'g>>,
    nin: usize,
}

impl<'g> Layer<'g> {
    pub fn new<R: Rng + ?Sized>(
        graph: &'g Graph,
        nin: usize,
        nout: usize,
        activation: Activation,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, SgradError> {
        let neurons = (0..nout)
            .map(|_| Neuron::with_init(graph, nin, activation, init, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons, nin })
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron<'g>] {
        &self.neurons
    }

    /// `values` is laid out as [`Module::parameters`] orders them.
    pub(crate) fn rebuild<'h>(&self, graph: &'h Graph, values: &[f64]) -> Layer<'h> {
        let neurons = self
            .neurons
            .iter()
            .zip(values.chunks(self.nin + 1))
            .map(|(n, chunk)| n.rebuild(graph, chunk))
            .collect();
        Layer {
            neurons,
            nin: self.nin,
        }
    }
}

impl<'g> Module<'g> for Layer<'g> {
    fn forward(&self, input: &[Scalar<'g>]) -> Result<Vec<Scalar<'g>>, SgradError> {
        check_width(self.nin, input, "Layer::forward")?;
        self.neurons.iter().map(|n| n.activate(input)).collect()
    }

    fn parameters(&self) -> Vec<Scalar<'g>> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Scalar<'g>)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| {
                n.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("{}.{}", i, name), p))
            })
            .collect()
    }
}

impl fmt::Display for Layer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neurons: Vec<String> = self.neurons.iter().map(|n| n.to_string()).collect();
        write!(f, "Layer of [{}]", neurons.join(", "))
    }
}
