//! Line protocol for driving the FEN editor.

pub mod command;
pub mod editor;
pub mod error;
pub mod render;

pub use command::{Command, EditorOption, parse_command};
pub use editor::{Editor, EditorConfig};
pub use error::EditorError;
pub use render::{RenderFn, RendererRegistry};
