//! Multi-layer perceptron.
//!
//! An [`Mlp`] chains [`Layer`]s of sizes `nin -> nouts[0] -> ... -> nouts[k-1]`.
//! Unless told otherwise, hidden layers use [`Activation::Relu`] and the last
//! layer is [`Activation::Linear`].

use crate::error::SgradError;
use crate::graph::Graph;
use crate::nn::module::{check_width, Module};
use crate::nn::{Activation, Init, Layer};
use crate::scalar::Scalar;
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Mlp<'g> {
    layers: Vec<Layer<'g>>,
    nin: usize,
}

impl<'g> Mlp<'g> {
    /// Builds a network with the default uniform initialization.
    ///
    /// `activations`, when given, must hold one entry per layer.
    ///
    /// # Errors
    /// `ShapeMismatch` if `activations` does not match `nouts` in length.
    pub fn new<R: Rng + ?Sized>(
        graph: &'g Graph,
        nin: usize,
        nouts: &[usize],
        activations: Option<&[Activation]>,
        rng: &mut R,
    ) -> Result<Self, SgradError> {
        Self::with_init(graph, nin, nouts, activations, &Init::default(), rng)
    }

    pub fn with_init<R: Rng + ?Sized>(
        graph: &'g Graph,
        nin: usize,
        nouts: &[usize],
        activations: Option<&[Activation]>,
        init: &Init,
        rng: &mut R,
    ) -> Result<Self, SgradError> {
        let activations = match activations {
            Some(acts) if acts.len() != nouts.len() => {
                return Err(SgradError::ShapeMismatch {
                    expected: nouts.len(),
                    actual: acts.len(),
                    operation: "Mlp::new activations".to_string(),
                });
            }
            Some(acts) => acts.to_vec(),
            None => default_activations(nouts.len()),
        };

        let mut layers = Vec::with_capacity(nouts.len());
        let mut width = nin;
        for (&nout, &activation) in nouts.iter().zip(&activations) {
            layers.push(Layer::new(graph, width, nout, activation, init, rng)?);
            width = nout;
        }
        let mlp = Mlp { layers, nin };
        log::debug!(
            "Mlp::new: sizes {:?} -> {:?}, {} parameters",
            nin,
            nouts,
            mlp.parameters().len()
        );
        Ok(mlp)
    }

    /// Like [`Mlp::new`] with activations given by label (`"relu"`,
    /// `"tanh"`, ...).
    ///
    /// # Errors
    /// `UnknownActivation` for an unrecognized label, `ShapeMismatch` when
    /// the label count differs from the layer count.
    pub fn from_labels<R: Rng + ?Sized>(
        graph: &'g Graph,
        nin: usize,
        nouts: &[usize],
        labels: &[&str],
        rng: &mut R,
    ) -> Result<Self, SgradError> {
        let activations = labels
            .iter()
            .map(|l| l.parse::<Activation>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(graph, nin, nouts, Some(&activations), rng)
    }

    /// Builds the same architecture on `graph` with the given parameter
    /// values, in [`Module::parameters`] order.
    ///
    /// Node values are immutable, so a training loop keeps the parameters
    /// as plain numbers, rebuilds the network for each step and rewinds the
    /// graph afterwards.
    ///
    /// # Errors
    /// `ShapeMismatch` if `values` does not hold one entry per parameter.
    pub fn rebuild<'h>(&self, graph: &'h Graph, values: &[f64]) -> Result<Mlp<'h>, SgradError> {
        let expected: usize = self
            .layers
            .iter()
            .map(|l| l.nout() * (l.nin() + 1))
            .sum();
        if values.len() != expected {
            return Err(SgradError::ShapeMismatch {
                expected,
                actual: values.len(),
                operation: "Mlp::rebuild".to_string(),
            });
        }
        let mut layers = Vec::with_capacity(self.layers.len());
        let mut rest = values;
        for layer in &self.layers {
            let (head, tail) = rest.split_at(layer.nout() * (layer.nin() + 1));
            layers.push(layer.rebuild(graph, head));
            rest = tail;
        }
        Ok(Mlp {
            layers,
            nin: self.nin,
        })
    }

    pub fn layers(&self) -> &[Layer<'g>] {
        &self.layers
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.layers.last().map_or(self.nin, Layer::nout)
    }
}

fn default_activations(n: usize) -> Vec<Activation> {
    (0..n)
        .map(|i| {
            if i + 1 == n {
                Activation::Linear
            } else {
                Activation::Relu
            }
        })
        .collect()
}

impl<'g> Module<'g> for Mlp<'g> {
    fn forward(&self, input: &[Scalar<'g>]) -> Result<Vec<Scalar<'g>>, SgradError> {
        check_width(self.nin, input, "Mlp::forward")?;
        let mut x = input.to_vec();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }

    fn parameters(&self) -> Vec<Scalar<'g>> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Scalar<'g>)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| {
                l.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("{}.{}", i, name), p))
            })
            .collect()
    }
}

impl fmt::Display for Mlp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers: Vec<String> = self.layers.iter().map(|l| l.to_string()).collect();
        write!(f, "MLP of [{}]", layers.join(", "))
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
