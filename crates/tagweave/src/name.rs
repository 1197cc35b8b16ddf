//! Attribute name identities and the shared text comparison rule

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Dialect an attribute name belongs to, selecting its comparison rule
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeKind {
    Html,
    Xml,
}

impl AttributeKind {
    /// HTML names compare ASCII-case-insensitively, XML names byte-exact
    pub const fn is_case_sensitive(self) -> bool {
        matches!(self, Self::Xml)
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => f.write_str("HTML"),
            Self::Xml => f.write_str("XML"),
        }
    }
}

/// Compare two name fragments under the given case-sensitivity rule.
///
/// This single routine backs both [`AttributeName`] equality and
/// prefix-wildcard matching, so the two can never diverge.
pub fn text_eq(case_sensitive: bool, a: &str, b: &str) -> bool {
    if case_sensitive {
        a == b
    } else {
        a.eq_ignore_ascii_case(b)
    }
}

fn text_cmp(case_sensitive: bool, a: &str, b: &str) -> Ordering {
    if case_sensitive {
        a.cmp(b)
    } else {
        a.bytes()
            .map(|b| b.to_ascii_lowercase())
            .cmp(b.bytes().map(|b| b.to_ascii_lowercase()))
    }
}

fn text_hash<H: Hasher>(case_sensitive: bool, text: &str, state: &mut H) {
    if case_sensitive {
        text.hash(state);
    } else {
        for b in text.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
        // terminator, as str's own Hash impl does
        state.write_u8(0xff);
    }
}

/// Immutable identity of one attribute within a dialect.
///
/// Typically constructed once per distinct attribute by an interning
/// registry and shared read-only from there.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeName {
    kind: AttributeKind,
    prefix: Option<String>,
    local: String,
}

impl AttributeName {
    /// Create an HTML-kind name
    pub fn html(prefix: Option<&str>, local: &str) -> Self {
        Self::new(AttributeKind::Html, prefix, local)
    }

    /// Create an XML-kind name
    pub fn xml(prefix: Option<&str>, local: &str) -> Self {
        Self::new(AttributeKind::Xml, prefix, local)
    }

    fn new(kind: AttributeKind, prefix: Option<&str>, local: &str) -> Self {
        Self {
            kind,
            prefix: prefix.map(str::to_string),
            local: local.to_string(),
        }
    }

    pub const fn kind(&self) -> AttributeKind {
        self.kind
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn local_name(&self) -> &str {
        &self.local
    }
}

impl PartialEq for AttributeName {
    fn eq(&self, other: &Self) -> bool {
        if self.kind != other.kind {
            return false;
        }
        let cs = self.kind.is_case_sensitive();
        let prefix_eq = match (&self.prefix, &other.prefix) {
            (Some(a), Some(b)) => text_eq(cs, a, b),
            (None, None) => true,
            _ => false,
        };
        prefix_eq && text_eq(cs, &self.local, &other.local)
    }
}

impl Eq for AttributeName {}

impl Hash for AttributeName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        let cs = self.kind.is_case_sensitive();
        match &self.prefix {
            Some(p) => {
                state.write_u8(1);
                text_hash(cs, p, state);
            }
            None => state.write_u8(0),
        }
        text_hash(cs, &self.local, state);
    }
}

impl Ord for AttributeName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind
            .cmp(&other.kind)
            .then_with(|| match (&self.prefix, &other.prefix) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(a), Some(b)) => text_cmp(self.kind.is_case_sensitive(), a, b),
            })
            .then_with(|| text_cmp(self.kind.is_case_sensitive(), &self.local, &other.local))
    }
}

impl PartialOrd for AttributeName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AttributeKind {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(kind: AttributeKind) -> u8 {
            match kind {
                AttributeKind::Html => 0,
                AttributeKind::Xml => 1,
            }
        }
        rank(*self).cmp(&rank(*other))
    }
}

impl PartialOrd for AttributeKind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.prefix {
            Some(p) => write!(f, "{p}:{}", self.local),
            None => f.write_str(&self.local),
        }
    }
}
