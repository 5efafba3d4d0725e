use std::collections::BTreeMap;

use crate::foundation::core::PREFIXABLE_PROPERTIES;

/// Property names tried, in order, when reading a node's resolved transform.
pub const TRANSFORM_CANDIDATES: [&str; 5] = [
    "-webkit-transform",
    "-moz-transform",
    "-ms-transform",
    "-o-transform",
    "transform",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Browser {
    Edge,
    InternetExplorer,
    Chrome,
    Firefox,
    Safari,
    WebKit,
    /// No user agent at all (not running in a browser).
    Headless,
    Unknown,
}

/// Rendering engine identity sniffed from a user-agent string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct BrowserInfo {
    pub browser: Browser,
    /// Major version; `0` when the user agent does not carry one.
    pub version: u32,
    /// CSS vendor prefix such as `-webkit-`; empty for unprefixed engines.
    pub vendor_prefix: &'static str,
}

impl BrowserInfo {
    /// Classify a user agent. The first matching rule wins, so `Edge` beats the `Chrome`
    /// token Edge also sends, and `Chrome` beats `Safari`.
    pub fn detect(user_agent: Option<&str>) -> Self {
        let Some(ua) = user_agent else {
            return Self::new(Browser::Headless, 0, "");
        };

        let info = if let Some(v) = version_after(ua, "Edge/") {
            Self::new(Browser::Edge, v, "-ms-")
        } else if let Some(v) = version_after(ua, "MSIE ") {
            Self::new(Browser::InternetExplorer, v, "-ms-")
        } else if let Some(v) = trident_version(ua) {
            Self::new(Browser::InternetExplorer, v, "-ms-")
        } else if let Some(v) = version_after(ua, "Chrome/") {
            Self::new(Browser::Chrome, v, "-webkit-")
        } else if let Some(v) = version_after(ua, "Firefox/") {
            Self::new(Browser::Firefox, v, "")
        } else if let Some(v) = version_after(ua, "Safari/") {
            Self::new(Browser::Safari, v, "-webkit-")
        } else if ua.contains("AppleWebKit") {
            Self::new(Browser::WebKit, 0, "-webkit-")
        } else {
            Self::new(Browser::Unknown, 0, "")
        };
        tracing::debug!(browser = ?info.browser, version = info.version, "detected browser");
        info
    }

    fn new(browser: Browser, version: u32, vendor_prefix: &'static str) -> Self {
        Self {
            browser,
            version,
            vendor_prefix,
        }
    }
}

fn version_after(ua: &str, marker: &str) -> Option<u32> {
    let at = ua.find(marker)?;
    Some(leading_number(&ua[at + marker.len()..]))
}

// `Trident/7.0; rv:11.0`: the version lives in the last `rv:` after the Trident token.
fn trident_version(ua: &str) -> Option<u32> {
    let tail = &ua[ua.find("Trident")?..];
    let at = tail.rfind("rv:")?;
    Some(leading_number(&tail[at + "rv:".len()..]))
}

fn leading_number(s: &str) -> u32 {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    s[..end].parse().unwrap_or(0)
}

/// Vendor-prefix configuration, built once at startup and injected into
/// [`TransformReader`](crate::TransformReader).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct VendorPrefixes {
    transform_candidates: Vec<String>,
    prefixed: BTreeMap<String, String>,
}

impl Default for VendorPrefixes {
    fn default() -> Self {
        Self {
            transform_candidates: TRANSFORM_CANDIDATES.iter().map(|s| s.to_string()).collect(),
            prefixed: PREFIXABLE_PROPERTIES
                .iter()
                .map(|p| (p.to_string(), p.to_string()))
                .collect(),
        }
    }
}

impl VendorPrefixes {
    /// Prefixed property names for the detected engine. The transform candidate order stays
    /// fixed regardless of the engine.
    pub fn from_browser(info: &BrowserInfo) -> Self {
        let prefixed = PREFIXABLE_PROPERTIES
            .iter()
            .map(|p| (p.to_string(), format!("{}{p}", info.vendor_prefix)))
            .collect();
        Self {
            prefixed,
            ..Self::default()
        }
    }

    /// Replace the transform candidate list (synthetic tables for tests and embedders).
    pub fn with_transform_candidates<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transform_candidates = candidates.into_iter().map(Into::into).collect();
        self
    }

    pub fn transform_candidates(&self) -> &[String] {
        &self.transform_candidates
    }

    /// Engine-specific name for `property`; unknown properties pass through unchanged.
    pub fn prefixed<'a>(&'a self, property: &'a str) -> &'a str {
        self.prefixed.get(property).map_or(property, String::as_str)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/prefix.rs"]
mod tests;
