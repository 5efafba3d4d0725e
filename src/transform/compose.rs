use crate::foundation::core::Affine;
use crate::foundation::error::GeomResult;
use crate::host::RenderHost;
use crate::transform::affine::{compose, translation};
use crate::transform::reader::TransformReader;

/// Pure translation to the node's layout slot.
///
/// The offset is relative to the node's nearest *positioned* ancestor (`offsetLeft` /
/// `offsetTop`), which is not the immediate parent unless that parent is a positioning context.
pub fn layout_offset_transform<H: RenderHost>(host: &H, node: H::Node) -> Affine {
    translation(host.layout_offset(node))
}

/// The node's placement relative to its nearest positioned ancestor: the local transform,
/// then the layout offset (`offset * local`).
///
/// Style and layout are re-read on every call. The two reads are not atomic; callers that
/// mutate the tree should read after a [`PostFrameScheduler`](crate::PostFrameScheduler)
/// checkpoint. The same positioned-ancestor caveat as [`layout_offset_transform`] applies.
#[tracing::instrument(level = "trace", skip(host, reader))]
pub fn effective_transform<H: RenderHost>(
    host: &H,
    reader: &TransformReader,
    node: H::Node,
) -> GeomResult<Affine> {
    let offset = layout_offset_transform(host, node);
    let local = reader.read_transform(host, node)?;
    Ok(compose(offset, local))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/compose.rs"]
mod tests;
