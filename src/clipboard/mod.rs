//! Clipboard support for highlighted markup.
//!
//! The copy button of the highlight page places the *highlighted* markup on
//! the system clipboard. Here that is done by piping text into one of the
//! platform clipboard tools (`pbcopy`, `xclip`, `xsel`, `wl-copy`).
//!
//! - [`CopyTool`] - one platform tool
//! - [`Copy`] - tries the available tools in priority order
//! - [`ClipboardSink`] - the seam used by [`crate::raw::prepare_raw_source`]

mod copy;
mod error;
mod result;
mod tool;
pub mod tools;

pub use copy::{ClipboardSink, Copy};
pub use error::ClipboardError;
pub use result::{CopyMethod, CopyResult};
pub use tool::{CopyTool, CopyToolError};
