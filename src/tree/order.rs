use std::cmp::Ordering;

use crate::foundation::error::{GeomError, GeomResult};
use crate::host::{DocumentPosition, RenderHost};
use crate::tree::ancestry::ancestors;

/// Compare `a` and `b` in document order.
///
/// `Greater` means `a` follows `b` or `a` lies inside `b`; `Less` otherwise; `Equal` only for
/// the same node. Nodes from different trees fail with [`GeomError::DisconnectedTree`].
///
/// Hosts without a native position query fall back to [`RenderHost::source_index`], which is
/// only meaningful within a single flat sibling list.
pub fn document_order<H: RenderHost>(host: &H, a: H::Node, b: H::Node) -> GeomResult<Ordering> {
    if a == b {
        return Ok(Ordering::Equal);
    }

    let Some(pos) = host.compare_document_position(a, b) else {
        return legacy_order(host, a, b);
    };

    if pos.has(DocumentPosition::DISCONNECTED) {
        return Err(GeomError::DisconnectedTree);
    }
    if pos.has(DocumentPosition::PRECEDING) || pos.has(DocumentPosition::CONTAINS) {
        Ok(Ordering::Greater)
    } else {
        Ok(Ordering::Less)
    }
}

/// `-1`, `0` or `1` for an ordering.
pub fn order_sign(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

fn legacy_order<H: RenderHost>(host: &H, a: H::Node, b: H::Node) -> GeomResult<Ordering> {
    tracing::trace!(?a, ?b, "no native document position, using source index");
    if ancestors(host, a)[0] != ancestors(host, b)[0] {
        return Err(GeomError::DisconnectedTree);
    }
    Ok(host.source_index(a).cmp(&host.source_index(b)))
}

#[cfg(test)]
#[path = "../../tests/unit/tree/order.rs"]
mod tests;
