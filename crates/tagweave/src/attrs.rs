//! Order-preserving attribute collection for element tags

use std::io::Write;

use indexmap::IndexMap;

use crate::error::Result;

/// Attributes of one open tag, kept in first-insertion order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementAttributes {
    attrs: IndexMap<String, String>,
}

impl ElementAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an attribute. Overwriting keeps the
    /// attribute's original position.
    pub fn set(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Remove an attribute, preserving the order of the rest
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.attrs.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn clear(&mut self) {
        self.attrs.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as ` name="value"` pairs, one leading space per
    /// attribute, in insertion order
    pub fn write(&self, sink: &mut impl Write) -> Result<()> {
        for (name, value) in &self.attrs {
            sink.write_all(b" ")?;
            sink.write_all(name.as_bytes())?;
            sink.write_all(b"=\"")?;
            sink.write_all(value.as_bytes())?;
            sink.write_all(b"\"")?;
        }
        Ok(())
    }
}
