//! Template mode classification

use std::fmt;

/// Parsing dialect a template is processed under
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemplateMode {
    Html,
    Xml,
    Text,
    JavaScript,
    Css,
    Raw,
}

impl TemplateMode {
    /// Returns true for the HTML dialect
    pub const fn is_html(self) -> bool {
        matches!(self, Self::Html)
    }

    /// Returns true for the XML dialect
    pub const fn is_xml(self) -> bool {
        matches!(self, Self::Xml)
    }

    /// Returns true for the textual dialects, which carry no markup
    /// structure and therefore no attributes
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Text | Self::JavaScript | Self::Css)
    }

    /// Text comparison rule for names in this mode. Only HTML compares
    /// case-insensitively.
    pub const fn is_case_sensitive(self) -> bool {
        !matches!(self, Self::Html)
    }
}

impl fmt::Display for TemplateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Html => "HTML",
            Self::Xml => "XML",
            Self::Text => "TEXT",
            Self::JavaScript => "JAVASCRIPT",
            Self::Css => "CSS",
            Self::Raw => "RAW",
        };
        f.write_str(name)
    }
}
