//! Applicability patterns over attribute names
//!
//! Processors register one [`MatchingAttributeName`] each; the dispatch
//! loop tests every attribute it encounters against these patterns to
//! decide which processors apply.

use std::fmt;

use crate::error::{Error, Result};
use crate::mode::TemplateMode;
use crate::name::{text_eq, AttributeKind, AttributeName};

/// The pattern a matcher holds, exactly one of three forms
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchPattern {
    /// Match one specific attribute name
    Exact(AttributeName),
    /// Match every attribute carrying this prefix; `None` means
    /// "only attributes with no prefix"
    WithPrefix(Option<String>),
    /// Match every attribute of the mode's dialect
    All,
}

/// Pattern matcher deciding whether a processor applies to an attribute
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchingAttributeName {
    mode: TemplateMode,
    pattern: MatchPattern,
}

impl MatchingAttributeName {
    /// Matcher for one exact attribute name.
    ///
    /// The name's kind must agree with the template mode: HTML mode takes
    /// HTML-kind names, XML mode takes XML-kind names.
    pub fn for_attribute_name(mode: TemplateMode, name: AttributeName) -> Result<Self> {
        if mode.is_html() && name.kind() != AttributeKind::Html
            || mode.is_xml() && name.kind() != AttributeKind::Xml
        {
            return Err(Error::KindMismatch {
                mode,
                kind: name.kind(),
            });
        }
        Ok(Self {
            mode,
            pattern: MatchPattern::Exact(name),
        })
    }

    /// Matcher for every attribute with the given prefix; `None` matches
    /// only attributes that carry no prefix at all
    pub fn for_all_attributes_with_prefix(mode: TemplateMode, prefix: Option<&str>) -> Self {
        Self {
            mode,
            pattern: MatchPattern::WithPrefix(prefix.map(str::to_string)),
        }
    }

    /// Matcher for every attribute of the mode's dialect
    pub const fn for_all_attributes(mode: TemplateMode) -> Self {
        Self {
            mode,
            pattern: MatchPattern::All,
        }
    }

    pub const fn template_mode(&self) -> TemplateMode {
        self.mode
    }

    pub const fn pattern(&self) -> &MatchPattern {
        &self.pattern
    }

    /// Test a concrete attribute name against this matcher's pattern
    pub fn matches(&self, candidate: &AttributeName) -> bool {
        match &self.pattern {
            MatchPattern::Exact(name) => name == candidate,
            MatchPattern::All => self.mode_accepts(candidate),
            MatchPattern::WithPrefix(prefix) => {
                if !self.mode_accepts(candidate) {
                    return false;
                }
                match (prefix, candidate.prefix()) {
                    (None, None) => true,
                    // Case rule keyed by the matcher's own mode, not the
                    // candidate's kind; mode_accepts already guarantees
                    // the two agree here.
                    (Some(p), Some(cp)) => text_eq(self.mode.is_xml(), p, cp),
                    _ => false,
                }
            }
        }
    }

    // Wildcard patterns only apply to candidates of the mode's own
    // dialect, and text modes carry no attributes at all.
    fn mode_accepts(&self, candidate: &AttributeName) -> bool {
        if self.mode.is_html() && candidate.kind() != AttributeKind::Html {
            return false;
        }
        if self.mode.is_xml() && candidate.kind() != AttributeKind::Xml {
            return false;
        }
        !self.mode.is_text()
    }
}

impl fmt::Display for MatchingAttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pattern {
            MatchPattern::All => f.write_str("*"),
            MatchPattern::WithPrefix(None) => f.write_str("[^:]*"),
            MatchPattern::WithPrefix(Some(p)) => write!(f, "{p}:*"),
            MatchPattern::Exact(name) => name.fmt(f),
        }
    }
}
