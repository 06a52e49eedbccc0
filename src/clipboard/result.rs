//! Copy operation results and method identifiers.

/// The result of a clipboard copy operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyResult {
    /// Tool that accepted the text
    pub tool: CopyMethod,
    /// Number of bytes handed to the tool
    pub size_bytes: usize,
}

impl CopyResult {
    pub fn new(tool: CopyMethod, size_bytes: usize) -> Self {
        Self { tool, size_bytes }
    }

    /// User-friendly message describing what happened.
    pub fn message(&self) -> String {
        format!(
            "Copied highlighted markup ({} bytes) to clipboard via {}",
            self.size_bytes,
            self.tool.name()
        )
    }
}

/// Which tool was used for the copy operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// macOS pasteboard
    Pbcopy,
    /// Linux X11
    Xclip,
    /// Linux X11 alternative
    Xsel,
    /// Linux Wayland
    WlCopy,
}

impl CopyMethod {
    /// Tool name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pbcopy => "pbcopy",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
            Self::WlCopy => "wl-copy",
        }
    }
}
