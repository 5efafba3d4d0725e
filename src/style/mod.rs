//! Vendor-prefix detection and the prefix table the transform reader is configured with.

pub(crate) mod prefix;
