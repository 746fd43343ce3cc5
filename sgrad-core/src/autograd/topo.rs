use crate::graph::{Graph, NodeId};
use crate::scalar::Scalar;

/// Builds a topological order of every node reachable from `root`.
///
/// Post-order depth-first traversal: each predecessor is emitted before
/// the node that consumes it, and `root` comes last. A visited set keyed by
/// arena index makes every node appear exactly once, however many paths
/// lead to it. The traversal keeps its own stack, so long chains do not
/// grow the call stack.
pub(crate) fn topological_sort(graph: &Graph, root: NodeId) -> Vec<NodeId> {
    graph.assert_live(root);
    let nodes = graph.nodes();
    let mut visited = vec![false; nodes.len()];
    let mut sorted_list = Vec::new();
    // (node, whether its predecessors have been pushed already)
    let mut stack: Vec<(NodeId, bool)> = vec![(root, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(id);
            continue;
        }
        if visited[id.index()] {
            continue;
        }
        visited[id.index()] = true;
        stack.push((id, true));
        let preds = nodes[id.index()].op.predecessors();
        // Reversed so the first operand is explored first.
        let preds: Vec<NodeId> = preds.iter().collect();
        for pred in preds.into_iter().rev() {
            if !visited[pred.index()] {
                stack.push((pred, false));
            }
        }
    }
    sorted_list
}

/// Computes the gradient of `root` with respect to every node it depends on.
///
/// Seeds `root.grad = 1`, then runs each node's propagation rule in reverse
/// topological order, so a node's gradient is complete before it is pushed
/// to its operands. Gradients accumulate: nodes are not zeroed first, and
/// nodes not reachable from `root` are left untouched.
pub fn compute_gradients(root: Scalar<'_>) {
    let graph = root.graph();
    let order = topological_sort(graph, root.id());

    let mut nodes = graph.nodes_mut();
    let seed = &mut nodes[root.id().index()];
    if seed.grad != 0.0 {
        log::warn!(
            "compute_gradients: root gradient was {} before seeding; call zero_grad between passes",
            seed.grad
        );
    }
    seed.grad = 1.0;

    for id in order.iter().rev() {
        let (op, out_value, out_grad) = {
            let node = &nodes[id.index()];
            (node.op, node.value, node.grad)
        };
        op.propagate(&mut nodes, out_value, out_grad);
    }
    log::debug!(
        "compute_gradients: propagated through {} nodes from root {}",
        order.len(),
        root.id().index()
    );
}
