//! Configuration options for HTML to Markdown conversion.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options controlling the conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConversionOptions {
    /// Emit `<img>` elements as their raw start-tag markup instead of
    /// Markdown image syntax.
    pub keep_img_tags: bool,
}

impl ConversionOptions {
    /// Set whether raw `<img>` markup is preserved.
    #[must_use]
    pub const fn with_keep_img_tags(mut self, keep: bool) -> Self {
        self.keep_img_tags = keep;
        self
    }
}
