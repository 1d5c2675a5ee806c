pub mod clipboard;

pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
