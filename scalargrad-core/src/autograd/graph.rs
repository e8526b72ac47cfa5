use crate::error::ScalarGradError;
use crate::value::{NodeId, Value};
use std::collections::HashSet;

/// Builds a topological sort of the graph reachable from `root`.
///
/// Every node appears after all of its operands, so `root` is the last entry
/// and reversing the list gives the order used by `backward()`. Deduplication
/// is keyed by node identity (`NodeId`), not by value: a node shared by several
/// parents appears exactly once.
///
/// The walk is an iterative post-order DFS, so deep graphs cannot overflow the
/// call stack.
///
/// # Errors
/// `CycleDetected` if a node is reached again while it is still on the current
/// DFS path. The public API cannot build such a graph.
pub fn topological_sort(root: &Value) -> Result<Vec<Value>, ScalarGradError> {
    let mut sorted_list: Vec<Value> = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut on_path: HashSet<NodeId> = HashSet::new();
    // (node, operands_pushed)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, operands_pushed)) = stack.pop() {
        let node_id = node.node_id();

        if operands_pushed {
            on_path.remove(&node_id);
            log::trace!("[topological_sort] Adding node {:?} to sorted_list", node_id);
            sorted_list.push(node);
            continue;
        }

        if !visited.insert(node_id) {
            continue;
        }
        on_path.insert(node_id);

        let operands = node.operands();
        stack.push((node, true));
        // Reversed so operands are finished in operand order.
        for operand in operands.into_iter().rev() {
            let operand_id = operand.node_id();
            if on_path.contains(&operand_id) {
                return Err(ScalarGradError::CycleDetected);
            }
            if !visited.contains(&operand_id) {
                stack.push((operand, false));
            }
        }
    }

    Ok(sorted_list)
}
