pub use kurbo::{Affine, Point, Vec2};

/// Six affine coefficients in `[a, b, c, d, tx, ty]` order.
pub type Coeffs = [f64; 6];

/// Prefixable CSS properties tracked by [`crate::VendorPrefixes`].
pub const PREFIXABLE_PROPERTIES: [&str; 2] = ["transform", "transform-origin"];

/// The literal resolved value meaning "no transform applied".
pub const TRANSFORM_NONE: &str = "none";
