//! Arena holding every node of a computation graph.
//!
//! Nodes are never addressed by pointer: a [`NodeId`] is an index into the
//! arena plus the generation the slot was written in, so a handle that
//! survived a [`Graph::rewind`] can be told apart from the newer node that
//! reused its slot.

use crate::autograd::backward_op::Op;
use crate::scalar::Scalar;
use std::cell::{Cell, Ref, RefCell, RefMut};
use std::fmt;

/// Stable identity of a node inside a [`Graph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    pub fn index(self) -> usize {
        self.index as usize
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

/// Storage slot of a single scalar node.
#[derive(Clone, Debug)]
pub(crate) struct ScalarData {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    generation: u32,
}

/// Arena length marker returned by [`Graph::checkpoint`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    len: usize,
}

impl Checkpoint {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Owner of all nodes of one computation.
///
/// Construction and traversal are single-threaded; the arena relies on
/// `RefCell` and is therefore `!Sync`.
#[derive(Default)]
pub struct Graph {
    nodes: RefCell<Vec<ScalarData>>,
    generation: Cell<u32>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a leaf node holding `value`.
    pub fn scalar(&self, value: f64) -> Scalar<'_> {
        self.push(value, Op::Leaf)
    }

    /// Number of live nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Resets the gradient of every live node to zero.
    pub fn zero_grad(&self) {
        for node in self.nodes.borrow_mut().iter_mut() {
            node.grad = 0.0;
        }
    }

    /// Marks the current arena length. Nodes created afterwards can be
    /// discarded with [`Graph::rewind`].
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint { len: self.len() }
    }

    /// Discards every node created after `checkpoint`.
    ///
    /// Handles to the discarded nodes become stale: using one panics.
    /// Nodes created before the checkpoint keep their values, gradients and
    /// handles.
    pub fn rewind(&self, checkpoint: Checkpoint) {
        let mut nodes = self.nodes.borrow_mut();
        if checkpoint.len >= nodes.len() {
            return;
        }
        let discarded = nodes.len() - checkpoint.len;
        nodes.truncate(checkpoint.len);
        self.generation.set(self.generation.get().wrapping_add(1));
        log::debug!(
            "Graph::rewind discarded {} nodes, {} remain",
            discarded,
            checkpoint.len
        );
    }

    pub(crate) fn push(&self, value: f64, op: Op) -> Scalar<'_> {
        let mut nodes = self.nodes.borrow_mut();
        let index = u32::try_from(nodes.len())
            .unwrap_or_else(|_| panic!("Graph arena exceeded {} nodes", u32::MAX));
        let generation = self.generation.get();
        nodes.push(ScalarData {
            value,
            grad: 0.0,
            op,
            generation,
        });
        Scalar::from_parts(self, NodeId { index, generation })
    }

    /// Borrows the slot behind `id`, panicking on a stale handle.
    pub(crate) fn node(&self, id: NodeId) -> Ref<'_, ScalarData> {
        let nodes = self.nodes.borrow();
        check_live(&nodes, id);
        Ref::map(nodes, |nodes| &nodes[id.index()])
    }

    pub(crate) fn node_mut(&self, id: NodeId) -> RefMut<'_, ScalarData> {
        let nodes = self.nodes.borrow_mut();
        check_live(&nodes, id);
        RefMut::map(nodes, |nodes| &mut nodes[id.index()])
    }

    pub(crate) fn nodes(&self) -> Ref<'_, Vec<ScalarData>> {
        self.nodes.borrow()
    }

    pub(crate) fn nodes_mut(&self) -> RefMut<'_, Vec<ScalarData>> {
        self.nodes.borrow_mut()
    }

    /// Panics if `id` was discarded by [`Graph::rewind`].
    pub(crate) fn assert_live(&self, id: NodeId) {
        check_live(&self.nodes.borrow(), id);
    }
}

fn check_live(nodes: &[ScalarData], id: NodeId) {
    match nodes.get(id.index()) {
        Some(slot) if slot.generation == id.generation => {}
        _ => panic!(
            "stale scalar handle {:?}: the node was discarded by Graph::rewind",
            id
        ),
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("len", &self.len())
            .field("generation", &self.generation.get())
            .finish()
    }
}
