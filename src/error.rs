//! Error types for attribute lookup and rendering.

use std::io;

/// Errors raised when an attribute table has no entry for a request.
///
/// The enumerators only produce keys the tables were built with, so any of
/// these surfacing at runtime is an invariant violation, not user input
/// going wrong. Nothing retries a failed lookup; the rendering pass aborts.
#[derive(Debug, thiserror::Error)]
pub enum AttrError {
    #[error("no foreground attribute for '{repr}'")]
    UnknownForeground { repr: String },

    #[error("no background attribute for '{repr}'")]
    UnknownBackground { repr: String },
}

/// Errors from a rendering pass: a bad table lookup or a failed write.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Attr(#[from] AttrError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}
