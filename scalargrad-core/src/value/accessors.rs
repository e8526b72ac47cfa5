use crate::autograd::OpTag;
use crate::value::{NodeId, Value};
use std::rc::Rc;

impl Value {
    /// Returns the forward-computed value of this node.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Returns the gradient accumulated so far.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the value of this node.
    ///
    /// Intended for trainable leaves updated between passes. Nodes already
    /// built from this one keep their recorded forward values.
    pub fn set_value(&self, value: f64) {
        self.write_data().value = value;
    }

    /// Resets the gradient to zero.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    pub(crate) fn accumulate_grad(&self, grad_to_add: f64) {
        self.write_data().grad += grad_to_add;
    }

    /// Returns which operation produced this node (`OpTag::None` for leaves).
    pub fn op_tag(&self) -> OpTag {
        self.read_data()
            .grad_fn
            .as_ref()
            .map_or(OpTag::None, |op| op.tag())
    }

    /// Returns handles to the direct operands of this node, in operand order.
    /// Empty for leaves.
    pub fn operands(&self) -> Vec<Value> {
        self.read_data()
            .grad_fn
            .as_ref()
            .map_or_else(Vec::new, |op| op.inputs().into_iter().cloned().collect())
    }

    /// Checks whether this node is a leaf (constant or parameter).
    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Returns the label given with `Value::with_label`, if any.
    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    /// Returns the identity of the underlying node.
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Checks whether two handles point to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}
