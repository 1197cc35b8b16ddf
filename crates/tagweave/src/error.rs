//! Error types for tagweave

use thiserror::Error;

use crate::mode::TemplateMode;
use crate::name::AttributeKind;

/// Main error type for tagweave
#[derive(Debug, Error)]
pub enum Error {
    /// An exact matcher was built from an attribute name whose kind
    /// disagrees with the supplied template mode
    #[error("attribute name kind {kind} is not valid for template mode {mode}")]
    KindMismatch {
        mode: TemplateMode,
        kind: AttributeKind,
    },

    /// An element tag operation requires bound content but the node
    /// has never been bound
    #[error("element tag has no bound content")]
    Unbound,

    /// The output sink rejected a write; surfaced unchanged
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for tagweave
pub type Result<T> = std::result::Result<T, Error>;
