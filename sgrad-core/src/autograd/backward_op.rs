use crate::graph::{NodeId, ScalarData};

/// Operation that produced a node, together with the operand ids and
/// constants its local derivative needs.
///
/// This is the propagation rule of a node: during the backward pass the
/// engine dispatches on the variant to push the node's gradient onto its
/// operands (see [`Op::propagate`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Op {
    /// Input or constant; propagation is a no-op.
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    /// Base raised to a node exponent.
    Pow { base: NodeId, exponent: NodeId },
    /// Base raised to a constant exponent.
    PowConst { base: NodeId, exponent: f64 },
    Sin(NodeId),
    Exp(NodeId),
    Log(NodeId),
    Relu(NodeId),
    /// Fused logistic sigmoid with closed-form derivative `σ(1 - σ)`.
    Sigmoid(NodeId),
    /// Fused hyperbolic tangent with closed-form derivative `1 - tanh²`.
    Tanh(NodeId),
}

/// Deduplicated operand ids of a node. At most two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Predecessors {
    ids: [Option<NodeId>; 2],
}

impl Predecessors {
    fn none() -> Self {
        Predecessors { ids: [None, None] }
    }

    fn one(a: NodeId) -> Self {
        Predecessors { ids: [Some(a), None] }
    }

    fn two(a: NodeId, b: NodeId) -> Self {
        if a == b {
            Self::one(a)
        } else {
            Predecessors {
                ids: [Some(a), Some(b)],
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids.iter().flatten().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.ids[0].is_none()
    }
}

impl Op {
    pub fn predecessors(&self) -> Predecessors {
        match *self {
            Op::Leaf => Predecessors::none(),
            Op::Add(a, b) | Op::Mul(a, b) => Predecessors::two(a, b),
            Op::Pow { base, exponent } => Predecessors::two(base, exponent),
            Op::PowConst { base, .. } => Predecessors::one(base),
            Op::Sin(a) | Op::Exp(a) | Op::Log(a) | Op::Relu(a) | Op::Sigmoid(a) | Op::Tanh(a) => {
                Predecessors::one(a)
            }
        }
    }

    /// Adds this node's local-derivative contribution into each operand's
    /// gradient.
    ///
    /// `out_value` and `out_grad` are the value and accumulated gradient of
    /// the node carrying this op. Contributions are applied once per *use*
    /// of an operand, so `Mul(x, x)` adds into `x` twice.
    pub(crate) fn propagate(&self, nodes: &mut [ScalarData], out_value: f64, out_grad: f64) {
        let value = |nodes: &[ScalarData], id: NodeId| nodes[id.index()].value;
        match *self {
            Op::Leaf => {}
            Op::Add(a, b) => {
                nodes[a.index()].grad += out_grad;
                nodes[b.index()].grad += out_grad;
            }
            Op::Mul(a, b) => {
                let (a_val, b_val) = (value(nodes, a), value(nodes, b));
                nodes[a.index()].grad += b_val * out_grad;
                nodes[b.index()].grad += a_val * out_grad;
            }
            Op::Pow { base, exponent } => {
                let (x, p) = (value(nodes, base), value(nodes, exponent));
                nodes[base.index()].grad += p * x.powf(p - 1.0) * out_grad;
                nodes[exponent.index()].grad += x.powf(p) * x.ln() * out_grad;
            }
            Op::PowConst { base, exponent } => {
                let x = value(nodes, base);
                nodes[base.index()].grad += exponent * x.powf(exponent - 1.0) * out_grad;
            }
            Op::Sin(a) => {
                let x = value(nodes, a);
                nodes[a.index()].grad += x.cos() * out_grad;
            }
            Op::Exp(a) => {
                nodes[a.index()].grad += out_value * out_grad;
            }
            Op::Log(a) => {
                let x = value(nodes, a);
                nodes[a.index()].grad += (1.0 / x) * out_grad;
            }
            Op::Relu(a) => {
                let slope = if out_value > 0.0 { 1.0 } else { 0.0 };
                nodes[a.index()].grad += slope * out_grad;
            }
            Op::Sigmoid(a) => {
                nodes[a.index()].grad += out_value * (1.0 - out_value) * out_grad;
            }
            Op::Tanh(a) => {
                nodes[a.index()].grad += (1.0 - out_value * out_value) * out_grad;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Graph;

    #[test]
    fn test_predecessors_deduplicated() {
        let graph = Graph::new();
        let x = graph.scalar(3.0);
        let y = graph.scalar(4.0);
        let sq = x * x;
        let prod = x * y;
        assert_eq!(sq.op().predecessors().len(), 1);
        assert_eq!(prod.op().predecessors().len(), 2);
        assert_eq!(
            prod.op().predecessors().iter().collect::<Vec<_>>(),
            vec![x.id(), y.id()]
        );
        assert!(Op::Leaf.predecessors().is_empty());
    }

    #[test]
    fn test_leaf_propagation_is_noop() {
        let graph = Graph::new();
        let x = graph.scalar(3.0);
        x.backward();
        assert_eq!(x.grad(), 1.0);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_add_same_operand_counts_each_use() {
        let graph = Graph::new();
        let x = graph.scalar(3.0);
        let y = x + x;
        assert_eq!(y.op(), Op::Add(x.id(), x.id()));
        y.backward();
        assert_eq!(x.grad(), 2.0);
    }
}
