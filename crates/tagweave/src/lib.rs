//! tagweave - attribute-name matching and pooled element-tag nodes for
//! markup template processing
//!
//! Two pieces make up this crate. The matching engine
//! ([`AttributeName`], [`MatchingAttributeName`]) decides which
//! registered processor applies to an attribute encountered during
//! rendering. The tag model ([`OpenElementTag`]) represents open-tag
//! occurrences as rebindable nodes so a render pass over a large
//! document does not pay one allocation per tag.
//!
//! # Quick Start
//!
//! ```
//! use tagweave::{AttributeName, MatchingAttributeName, OpenElementTag, TemplateMode};
//! # fn main() -> Result<(), tagweave::Error> {
//! let matcher = MatchingAttributeName::for_all_attributes_with_prefix(
//!     TemplateMode::Html,
//!     Some("th"),
//! );
//! assert!(matcher.matches(&AttributeName::html(Some("TH"), "each")));
//!
//! let mut tag = OpenElementTag::new();
//! tag.bind("a", 1, 1);
//! tag.attributes_mut().set("href", "/home");
//!
//! let mut out = Vec::new();
//! tag.write(&mut out)?;
//! assert_eq!(out, b"<a href=\"/home\">");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod mode;
pub use mode::TemplateMode;

pub mod name;
pub use name::{text_eq, AttributeKind, AttributeName};

pub mod matching;
pub use matching::{MatchPattern, MatchingAttributeName};

pub mod attrs;
pub use attrs::ElementAttributes;

pub mod tag;
pub use tag::OpenElementTag;
