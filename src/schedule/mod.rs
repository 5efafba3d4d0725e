//! Post-render-frame checkpoint for consistent geometry reads.

pub(crate) mod post_frame;
