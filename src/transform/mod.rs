//! Transform extraction and composition: parse the resolved transform, then place it at the
//! node's layout offset.

pub(crate) mod affine;
pub(crate) mod compose;
pub(crate) mod matrix;
pub(crate) mod reader;
