//! Platform-specific clipboard tools.

mod pipe;

pub use pipe::PipeTool;

use super::tool::CopyTool;

/// Get the platform-appropriate tools in priority order.
pub fn platform_tools() -> Vec<Box<dyn CopyTool>> {
    #[cfg(target_os = "macos")]
    {
        vec![Box::new(PipeTool::pbcopy())]
    }

    #[cfg(target_os = "linux")]
    {
        vec![
            Box::new(PipeTool::xclip()),
            Box::new(PipeTool::xsel()),
            Box::new(PipeTool::wl_copy()),
        ]
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        vec![]
    }
}
