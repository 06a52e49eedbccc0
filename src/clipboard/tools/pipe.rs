//! Clipboard tools that read the text to copy from stdin.

use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

/// A clipboard tool invoked as `program args...` with the text piped to stdin.
///
/// All supported tools (pbcopy, xclip, xsel, wl-copy) work this way and only
/// differ in their binary name, arguments and the platform they run on.
#[derive(Debug, Clone)]
pub struct PipeTool {
    method: CopyMethod,
    program: &'static str,
    args: &'static [&'static str],
}

impl PipeTool {
    /// macOS pasteboard.
    pub fn pbcopy() -> Self {
        Self {
            method: CopyMethod::Pbcopy,
            program: "pbcopy",
            args: &[],
        }
    }

    /// Linux X11 clipboard via xclip.
    pub fn xclip() -> Self {
        Self {
            method: CopyMethod::Xclip,
            program: "xclip",
            args: &["-selection", "clipboard"],
        }
    }

    /// Linux X11 clipboard via xsel.
    pub fn xsel() -> Self {
        Self {
            method: CopyMethod::Xsel,
            program: "xsel",
            args: &["--clipboard", "--input"],
        }
    }

    /// Linux Wayland clipboard.
    pub fn wl_copy() -> Self {
        Self {
            method: CopyMethod::WlCopy,
            program: "wl-copy",
            args: &[],
        }
    }

    /// Command line used to invoke the tool.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program)
            .chain(self.args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn on_supported_platform(&self) -> bool {
        match self.method {
            CopyMethod::Pbcopy => cfg!(target_os = "macos"),
            CopyMethod::Xclip | CopyMethod::Xsel | CopyMethod::WlCopy => {
                cfg!(target_os = "linux")
            }
        }
    }

    /// Check if the binary is installed.
    fn tool_exists(&self) -> bool {
        Command::new("which")
            .arg(self.program)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl CopyTool for PipeTool {
    fn method(&self) -> CopyMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        // pbcopy ships with macOS
        self.on_supported_platform() && (self.method == CopyMethod::Pbcopy || self.tool_exists())
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        let mut child = Command::new(self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => CopyToolError::NotFound,
                _ => CopyToolError::Failed(e.to_string()),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| CopyToolError::Failed(e.to_string()))?;
            // stdin is dropped here so the tool sees EOF
        }

        let status = child
            .wait()
            .map_err(|e| CopyToolError::Failed(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(CopyToolError::Failed(format!("{} failed", self.program)))
        }
    }
}
