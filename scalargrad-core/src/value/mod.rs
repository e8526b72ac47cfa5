// src/value/mod.rs

use crate::autograd::BackwardOp;
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod accessors;
mod autograd_methods;
mod op_methods;
mod traits;

/// Identity of a node in the computation graph.
///
/// The pointer to the shared `RefCell<ValueData>` is stable for as long as any
/// `Value` handle keeps the node alive, so it can be used as a key in visited
/// sets. It is never dereferenced.
pub type NodeId = *const RefCell<ValueData>;

/// A scalar node of the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node used by several parents (a shared
///     subexpression) is referenced by all of them without copying. Cloning a
///     `Value` is cheap and yields a handle to the *same* node.
/// 2.  **Interior Mutability:** `grad` is accumulated during `backward()` and
///     `value` is updated in place by optimizers, both through shared handles.
///
/// The engine is single-threaded; `Value` is neither `Send` nor `Sync`.
/// Independent workers must build independent graphs.
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node holding `value` with a zero gradient.
    ///
    /// Non-finite values are accepted as-is.
    pub fn new(value: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::new(value))),
        }
    }

    /// Creates a labelled leaf node. The label shows up in `Debug` output.
    pub fn with_label(value: f64, label: impl Into<String>) -> Self {
        let mut data = ValueData::new(value);
        data.label = Some(label.into());
        Value {
            data: Rc::new(RefCell::new(data)),
        }
    }

    /// Creates an interior node produced by `op`.
    pub(crate) fn from_op(value: f64, op: BackwardOp) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::from_op(value, op))),
        }
    }

    /// Borrows the node payload immutably.
    ///
    /// Panics if the node is currently mutably borrowed, which cannot happen
    /// through the public API since no borrow outlives a method call.
    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    /// Borrows the node payload mutably.
    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
