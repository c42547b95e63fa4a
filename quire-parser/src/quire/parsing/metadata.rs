//! Pending block metadata
//!
//!     Attribute lines and `.Title` lines do not produce blocks. They are buffered here until
//!     the next block (or heading) takes them. Several attribute lines in a row merge, later
//!     keys winning. Blank lines and comments leave the buffer alone.

use crate::quire::ast::{AttributeSet, Block};

#[derive(Debug, Default, Clone, PartialEq)]
pub(super) struct PendingMetadata {
    pub title: Option<String>,
    pub attributes: AttributeSet,
}

impl PendingMetadata {
    pub fn absorb(&mut self, attributes: AttributeSet) {
        self.attributes.merge(attributes);
    }

    pub fn set_title(&mut self, title: &str) {
        if let Some(previous) = self.title.replace(title.to_string()) {
            tracing::trace!(previous = %previous, "block title replaced");
        }
    }

    pub fn style(&self) -> Option<&str> {
        self.attributes.style()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.attributes.is_empty()
    }

    /// Hand the buffered metadata over, leaving the buffer empty.
    pub fn take(&mut self) -> PendingMetadata {
        std::mem::take(self)
    }

    /// Attach to `block`. Attributes already on the block win.
    pub fn apply_to(self, block: &mut Block) {
        if self.title.is_some() {
            block.title = self.title;
        }
        let mut attributes = self.attributes;
        attributes.merge(std::mem::take(&mut block.attributes));
        block.attributes = attributes;
    }
}
