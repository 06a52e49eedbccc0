//! Clipboard operation errors.

/// Errors that can occur during clipboard operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("No clipboard tool available. On Linux, install xclip, xsel, or wl-copy.")]
    NoToolAvailable,

    #[error("Clipboard tool '{tool}' failed: {message}")]
    ToolFailed { tool: &'static str, message: String },

    #[error("Clipboard is disabled in the configuration")]
    Disabled,

    #[error("Platform not supported (only macOS and Linux)")]
    UnsupportedPlatform,
}
