//! Pooled open-tag node
//!
//! One render pass may touch millions of tags, so tag nodes are built to
//! be rebound in place rather than reallocated per occurrence. A node is
//! *detached* until its first [`bind`](OpenElementTag::bind) and may be
//! rebound any number of times afterwards; rebinding discards all prior
//! content. Pool acquisition and release policy live outside this crate;
//! a node only promises that binding fully resets it.

use std::io::Write;

use crate::attrs::ElementAttributes;
use crate::error::{Error, Result};

/// Mutable, reusable representation of one open-tag occurrence
#[derive(Debug, Default)]
pub struct OpenElementTag {
    name: String,
    line: u32,
    col: u32,
    attributes: ElementAttributes,
    bound: bool,
}

impl OpenElementTag {
    /// Create a detached node with no bound content
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind this node to a tag occurrence.
    ///
    /// Clears every attribute held for the previous occupant before
    /// taking the new name and position, so no state leaks between
    /// bindings. Safe to call in any state; rebinding is the normal
    /// reuse path.
    pub fn bind(&mut self, name: &str, line: u32, col: u32) {
        self.attributes.clear();
        self.name.clear();
        self.name.push_str(name);
        self.line = line;
        self.col = col;
        self.bound = true;
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn col(&self) -> u32 {
        self.col
    }

    pub fn attributes(&self) -> &ElementAttributes {
        &self.attributes
    }

    /// Mutable attribute access, for processors rewriting the tag
    pub fn attributes_mut(&mut self) -> &mut ElementAttributes {
        &mut self.attributes
    }

    /// Serialize the tag as `<name attrs>` to the sink.
    ///
    /// Fails with [`Error::Unbound`] on a node that has never been
    /// bound. Sink errors propagate unchanged; partial output already
    /// written is not rolled back.
    pub fn write(&self, sink: &mut impl Write) -> Result<()> {
        if !self.bound {
            return Err(Error::Unbound);
        }
        sink.write_all(b"<")?;
        sink.write_all(self.name.as_bytes())?;
        self.attributes.write(sink)?;
        sink.write_all(b">")?;
        Ok(())
    }

    /// Detach an independent copy of this node's bound content.
    ///
    /// The clone shares no mutable state with the original: rebinding
    /// or mutating either never affects the other. Clones belong to the
    /// caller and must not be returned to any pool.
    pub fn clone_element_tag(&self) -> Result<Self> {
        if !self.bound {
            return Err(Error::Unbound);
        }
        Ok(Self {
            name: self.name.clone(),
            line: self.line,
            col: self.col,
            attributes: self.attributes.clone(),
            bound: true,
        })
    }
}
