use crate::host::RenderHost;

/// Root-first chain of `node`'s ancestors, ending with `node` itself.
pub fn ancestors<H: RenderHost>(host: &H, node: H::Node) -> Vec<H::Node> {
    let mut chain = vec![node];
    let mut cur = node;
    while let Some(parent) = host.parent(cur) {
        chain.push(parent);
        cur = parent;
    }
    chain.reverse();
    chain
}

/// Nearest node that is an ancestor of, or equal to, both `a` and `b`.
///
/// Returns `None` when the nodes live in different trees. Unlike
/// [`document_order`](crate::document_order), a disconnected pair is not an error here.
pub fn common_ancestor<H: RenderHost>(host: &H, a: H::Node, b: H::Node) -> Option<H::Node> {
    let chain_a = ancestors(host, a);
    let chain_b = ancestors(host, b);
    if chain_a[0] != chain_b[0] {
        return None;
    }

    // Chains agree from the root down to the common ancestor, then split.
    chain_a
        .iter()
        .zip(&chain_b)
        .take_while(|(x, y)| x == y)
        .last()
        .map(|(x, _)| *x)
}

#[cfg(test)]
#[path = "../../tests/unit/tree/ancestry.rs"]
mod tests;
