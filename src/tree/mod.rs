//! Structural queries over the host tree: nearest common ancestor and document order.

pub(crate) mod ancestry;
pub(crate) mod order;
