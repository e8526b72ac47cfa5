use crate::autograd::graph::topological_sort;
use crate::autograd::OpTag;
use crate::error::ScalarGradError;
use crate::value::Value;

impl Value {
    /// Performs the backward pass starting from this node.
    ///
    /// Computes d(self)/d(node) for every node reachable from `self` and adds
    /// it into that node's `grad`. The pass:
    /// 1. orders the reachable nodes topologically (operands before parents),
    /// 2. resets the gradient of every reachable non-leaf node to 0 and seeds
    ///    `self.grad = 1.0`,
    /// 3. walks the order from `self` down to the leaves, letting each node
    ///    push its fully accumulated gradient onto its operands.
    ///
    /// Leaf gradients *accumulate* across passes. Call `zero_grad()` on the
    /// leaves (or `Module::zero_grad`) before each new pass.
    ///
    /// # Errors
    /// * `UnsupportedOperation` if the graph contains a division. The check
    ///   runs before any gradient is touched.
    /// * `CycleDetected` if the graph is not acyclic.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        let sorted_nodes = topological_sort(self)?;
        log::debug!("backward: {} nodes reachable from root", sorted_nodes.len());

        if sorted_nodes.iter().any(|node| node.op_tag() == OpTag::Divide) {
            return Err(ScalarGradError::UnsupportedOperation(
                "backward through division is not implemented".to_string(),
            ));
        }

        for node in sorted_nodes.iter().filter(|node| !node.is_leaf()) {
            node.zero_grad();
        }
        self.set_grad(1.0);

        // Iterate in reverse topological order: root first, leaves last.
        for node in sorted_nodes.iter().rev() {
            // Clone the context so no borrow of `node` is held while the
            // operands are mutated.
            let grad_fn = match node.read_data().grad_fn.as_ref() {
                Some(op) => op.clone(),
                None => continue,
            };
            let grad_output = node.grad();
            let input_grads = grad_fn.local_gradients(grad_output)?;
            let inputs = grad_fn.inputs();

            if input_grads.len() != inputs.len() {
                return Err(ScalarGradError::LengthMismatch {
                    expected: inputs.len(),
                    actual: input_grads.len(),
                    operation: format!("backward of {:?}", grad_fn.tag()),
                });
            }

            for (input, grad_to_add) in inputs.into_iter().zip(input_grads) {
                log::trace!(
                    "[backward] {:?} -> {:?}: {}",
                    node.node_id(),
                    input.node_id(),
                    grad_to_add
                );
                input.accumulate_grad(grad_to_add);
            }
        }

        Ok(())
    }
}
