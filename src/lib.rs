//! `layer-geometry` reads back the rendered geometry of presentation layers.
//!
//! Given a host render tree (a browser binding, or the in-memory [`SnapshotHost`]), it answers:
//!
//! - **Which transform is applied to a node?** [`TransformReader::read_transform`] queries the
//!   resolved transform under each vendor-prefixed property name and parses the engine's
//!   `matrix(a, b, c, d, tx, ty)` serialization into a [`kurbo::Affine`].
//! - **Where does the node really sit?** [`effective_transform`] places that local transform at
//!   the node's layout offset: `offset * local`.
//! - **How are two nodes related?** [`document_order`] and [`common_ancestor`].
//!
//! Supporting pieces:
//!
//! - [`BrowserInfo`] / [`VendorPrefixes`]: vendor-prefix configuration, detected once at startup
//!   and injected into the reader.
//! - [`PostFrameScheduler`]: a post-render-frame checkpoint so composed reads see a settled frame.
//!
//! Everything here is single-threaded and synchronous. Reads are never cached.
#![forbid(unsafe_code)]

mod foundation;
mod host;
mod schedule;
mod style;
mod transform;
mod tree;

pub use foundation::core::{Affine, Coeffs, PREFIXABLE_PROPERTIES, Point, TRANSFORM_NONE, Vec2};
pub use foundation::error::{GeomError, GeomResult};
pub use host::snapshot::{NodeId, Snapshot, SnapshotHost, SnapshotNode};
pub use host::{DocumentPosition, RenderHost};
pub use schedule::post_frame::{
    FALLBACK_FRAME_INTERVAL, FrameStrategy, FrameTask, PostFrameScheduler,
};
pub use style::prefix::{Browser, BrowserInfo, TRANSFORM_CANDIDATES, VendorPrefixes};
pub use transform::affine::{coeffs, compose, identity, translation};
pub use transform::compose::{effective_transform, layout_offset_transform};
pub use transform::matrix::parse_transform;
pub use transform::reader::TransformReader;
pub use tree::ancestry::{ancestors, common_ancestor};
pub use tree::order::{document_order, order_sign};
