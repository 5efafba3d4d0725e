use crate::foundation::core::Affine;
use crate::foundation::error::{GeomError, GeomResult};
use crate::host::RenderHost;
use crate::style::prefix::VendorPrefixes;
use crate::transform::matrix::parse_transform;

/// Reads the affine transform currently applied to a node.
///
/// The candidate property names come from the injected [`VendorPrefixes`]; the reader holds no
/// other state and never touches the node.
#[derive(Clone, Debug, Default)]
pub struct TransformReader {
    prefixes: VendorPrefixes,
}

impl TransformReader {
    pub fn new(prefixes: VendorPrefixes) -> Self {
        Self { prefixes }
    }

    pub fn prefixes(&self) -> &VendorPrefixes {
        &self.prefixes
    }

    /// First non-empty resolved value among the candidate property names.
    pub fn resolved_value<H: RenderHost>(&self, host: &H, node: H::Node) -> Option<String> {
        self.prefixes
            .transform_candidates()
            .iter()
            .filter_map(|name| host.computed_style(node, name))
            .find(|value| !value.trim().is_empty())
    }

    /// Local transform of `node`: identity for `none`, otherwise the parsed `matrix(...)`.
    pub fn read_transform<H: RenderHost>(&self, host: &H, node: H::Node) -> GeomResult<Affine> {
        let value = self
            .resolved_value(host, node)
            .ok_or(GeomError::MissingTransform)?;
        tracing::trace!(?node, %value, "resolved transform");
        parse_transform(&value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/reader.rs"]
mod tests;
