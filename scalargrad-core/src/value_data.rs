// src/value_data.rs
use crate::autograd::BackwardOp;
use crate::value::Value;
use std::rc::Rc;

/// Internal storage for one node of the computation graph.
///
/// It is wrapped in `Rc<RefCell<ValueData>>` by the `Value` handle so that
/// several parent nodes can share it and gradients can be accumulated through
/// shared references during the backward pass.
#[derive(Debug)]
pub struct ValueData {
    /// The forward-computed result.
    pub(crate) value: f64,
    /// Accumulator for d(output)/d(this node). Starts at 0.
    pub(crate) grad: f64,
    /// The operation (and its operands) that produced this node.
    /// Leaf nodes, i.e. constants and trainable parameters, have `grad_fn = None`.
    /// Fixed at construction and never replaced afterwards.
    pub(crate) grad_fn: Option<BackwardOp>,
    /// Optional human-readable name, only set on leaves.
    pub(crate) label: Option<String>,
}

impl ValueData {
    /// Creates the payload of a leaf node.
    pub fn new(value: f64) -> Self {
        ValueData {
            value,
            grad: 0.0,
            grad_fn: None,
            label: None,
        }
    }

    /// Creates the payload of a node produced by `op`.
    pub fn from_op(value: f64, op: BackwardOp) -> Self {
        ValueData {
            value,
            grad: 0.0,
            grad_fn: Some(op),
            label: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.grad_fn.is_none()
    }
}

impl Drop for ValueData {
    /// Releases the operand subgraph iteratively.
    ///
    /// An operand whose last handle is held here gets its own `grad_fn`
    /// detached onto the work stack before it is dropped, so dropping a long
    /// chain never recurses through the `Rc`s.
    fn drop(&mut self) {
        let mut pending: Vec<Value> = match self.grad_fn.take() {
            Some(op) => op.into_inputs(),
            None => return,
        };
        while let Some(node) = pending.pop() {
            if Rc::strong_count(&node.data) == 1 {
                if let Some(op) = node.write_data().grad_fn.take() {
                    pending.extend(op.into_inputs());
                }
            }
        }
    }
}
