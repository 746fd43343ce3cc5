use crate::autograd::backward_op::Op;
use crate::autograd::compute_gradients;
use crate::graph::{Graph, NodeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Handle to a scalar node of a [`Graph`].
///
/// `Scalar` is `Copy`: cloning a handle never copies the node, and every
/// copy refers to the same value and gradient. Two handles compare equal
/// when they address the same node of the same graph.
///
/// # Panics
///
/// Accessors panic when the handle is stale, i.e. its node was discarded by
/// [`Graph::rewind`].
#[derive(Clone, Copy)]
pub struct Scalar<'g> {
    graph: &'g Graph,
    id: NodeId,
}

impl<'g> Scalar<'g> {
    pub(crate) fn from_parts(graph: &'g Graph, id: NodeId) -> Self {
        Scalar { graph, id }
    }

    /// The forward value computed when the node was built.
    pub fn value(&self) -> f64 {
        self.graph.node(self.id).value
    }

    /// Gradient accumulated into this node by the last backward passes.
    pub fn grad(&self) -> f64 {
        self.graph.node(self.id).grad
    }

    /// Resets this node's gradient to zero.
    pub fn zero_grad(&self) {
        self.graph.node_mut(self.id).grad = 0.0;
    }

    /// Computes the gradient of this node with respect to every ancestor.
    /// See [`compute_gradients`].
    pub fn backward(&self) {
        compute_gradients(*self);
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// The operation that produced this node.
    pub fn op(&self) -> Op {
        self.graph.node(self.id).op
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.op(), Op::Leaf)
    }

    /// Direct operands of this node, deduplicated.
    pub fn predecessors(&self) -> Vec<Scalar<'g>> {
        self.op()
            .predecessors()
            .iter()
            .map(|id| Scalar::from_parts(self.graph, id))
            .collect()
    }

    pub(crate) fn same_graph(&self, other: &Scalar<'_>) -> bool {
        std::ptr::eq(self.graph, other.graph)
    }
}

impl PartialEq for Scalar<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_graph(other) && self.id == other.id
    }
}

impl Eq for Scalar<'_> {}

impl Hash for Scalar<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.graph, state);
        self.id.hash(state);
    }
}

impl fmt::Debug for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.graph.node(self.id);
        f.debug_struct("Scalar")
            .field("id", &self.id.index())
            .field("value", &node.value)
            .field("grad", &node.grad)
            .field("op", &node.op)
            .finish()
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.graph.node(self.id);
        write!(f, "Scalar(value={}, grad={})", node.value, node.grad)
    }
}
