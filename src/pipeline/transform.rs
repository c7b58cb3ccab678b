/// A forward/inverse pair applied around writes and reads.
///
/// Nothing forces `inverse` to undo `forward`; [`Truncate`] deliberately
/// does not.
pub trait Transform {
    fn name(&self) -> &str;
    fn forward(&self, data: &str) -> String;
    fn inverse(&self, data: &str) -> String;
}

/// Placeholder "encryption": reverses the string. Applying it twice gives the
/// input back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reverse;

impl Reverse {
    fn apply(data: &str) -> String {
        data.chars().rev().collect()
    }
}

impl Transform for Reverse {
    fn name(&self) -> &str {
        "encryption"
    }

    fn forward(&self, data: &str) -> String {
        Self::apply(data)
    }

    fn inverse(&self, data: &str) -> String {
        Self::apply(data)
    }
}

pub const DEFAULT_KEEP: usize = 5;
pub const DEFAULT_MARKER: &str = ".decompressed";

/// Placeholder "compression": keeps a prefix on write and appends a marker
/// on read. Lossy, so a round trip only preserves the first `keep` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncate {
    keep: usize,
    marker: String,
}

impl Truncate {
    pub fn new(keep: usize, marker: impl Into<String>) -> Self {
        Self {
            keep,
            marker: marker.into(),
        }
    }

    pub fn keep(&self) -> usize {
        self.keep
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }
}

impl Default for Truncate {
    fn default() -> Self {
        Self::new(DEFAULT_KEEP, DEFAULT_MARKER)
    }
}

impl Transform for Truncate {
    fn name(&self) -> &str {
        "compression"
    }

    fn forward(&self, data: &str) -> String {
        data.chars().take(self.keep).collect()
    }

    fn inverse(&self, data: &str) -> String {
        format!("{data}{}", self.marker)
    }
}
