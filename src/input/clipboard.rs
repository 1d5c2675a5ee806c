use std::cell::RefCell;
use std::rc::Rc;

use crate::engine::AbacusError;

/// Destination for copied results.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), AbacusError>;
}

/// System clipboard via arboard. The handle is opened on first use and kept,
/// since on X11 the contents live only as long as it does.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), AbacusError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(|e| AbacusError::Clipboard(e.to_string()))?,
        };
        self.inner
            .insert(clipboard)
            .set_text(text.to_string())
            .map_err(|e| AbacusError::Clipboard(e.to_string()))
    }
}

/// In-process clipboard; clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Rc<RefCell<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), AbacusError> {
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}
