//! Copy orchestrator for clipboard operations.

use super::error::ClipboardError;
use super::result::CopyResult;
use super::tool::{CopyTool, CopyToolError};
use super::tools::platform_tools;

/// Something that can receive text destined for the clipboard.
///
/// [`Copy`] is the real implementation; tests substitute recording sinks.
pub trait ClipboardSink {
    fn set_text(&self, text: &str) -> Result<CopyResult, ClipboardError>;
}

/// Orchestrates clipboard copy operations using available tools.
///
/// Tools are tried in priority order; the first one that succeeds wins.
pub struct Copy {
    tools: Vec<Box<dyn CopyTool>>,
}

impl Copy {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn CopyTool>>) -> Self {
        Self { tools }
    }

    /// Get a reference to the tools list.
    pub fn tools(&self) -> &[Box<dyn CopyTool>] {
        &self.tools
    }

    /// Copy text to the clipboard.
    ///
    /// Falls through to the next tool when one is missing or fails. The last
    /// failure is reported if no tool succeeded.
    pub fn text(&self, text: &str) -> Result<CopyResult, ClipboardError> {
        if self.tools.is_empty() && !cfg!(any(target_os = "macos", target_os = "linux")) {
            return Err(ClipboardError::UnsupportedPlatform);
        }

        let mut last_failure = None;

        for tool in &self.tools {
            if !tool.is_available() {
                continue;
            }
            match tool.try_copy_text(text) {
                Ok(()) => {
                    tracing::debug!(tool = tool.name(), bytes = text.len(), "copied to clipboard");
                    return Ok(CopyResult::new(tool.method(), text.len()));
                }
                Err(CopyToolError::NotFound) => continue,
                Err(CopyToolError::Failed(message)) => {
                    tracing::warn!(tool = tool.name(), %message, "clipboard tool failed");
                    last_failure = Some(ClipboardError::ToolFailed {
                        tool: tool.name(),
                        message,
                    });
                }
            }
        }

        Err(last_failure.unwrap_or(ClipboardError::NoToolAvailable))
    }
}

impl Default for Copy {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for Copy {
    fn set_text(&self, text: &str) -> Result<CopyResult, ClipboardError> {
        self.text(text)
    }
}
