//! Affine transform helpers.

use crate::foundation::core::{Affine, Coeffs, Vec2};

/// `outer * inner`: apply `inner` first, then `outer`.
#[inline]
pub fn compose(outer: Affine, inner: Affine) -> Affine {
    outer * inner
}

#[inline]
pub fn identity() -> Affine {
    Affine::IDENTITY
}

#[inline]
pub fn translation(offset: Vec2) -> Affine {
    Affine::translate(offset)
}

/// Coefficients in `[a, b, c, d, tx, ty]` order.
#[inline]
pub fn coeffs(affine: Affine) -> Coeffs {
    affine.as_coeffs()
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
