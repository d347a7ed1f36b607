use crate::domain::ports::{ActivationEvent, CountDisplay, ReactionControl};
use std::cell::{Cell, RefCell};

/// 記憶體中的按鈕，CLI 與測試使用
#[derive(Debug, Default)]
pub struct MemoryControl {
    slug: RefCell<String>,
}

impl MemoryControl {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: RefCell::new(slug.into()),
        }
    }

    pub fn set_slug(&self, slug: impl Into<String>) {
        *self.slug.borrow_mut() = slug.into();
    }
}

impl ReactionControl for MemoryControl {
    fn slug(&self) -> String {
        self.slug.borrow().clone()
    }
}

#[derive(Debug, Default)]
pub struct MemoryDisplay {
    text: RefCell<String>,
    writes: Cell<usize>,
}

impl MemoryDisplay {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(initial.into()),
            writes: Cell::new(0),
        }
    }

    /// How many times the text has been overwritten.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl CountDisplay for MemoryDisplay {
    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
        self.writes.set(self.writes.get() + 1);
    }

    fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

#[derive(Debug, Default)]
pub struct MemoryEvent {
    default_prevented: Cell<bool>,
}

impl MemoryEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl ActivationEvent for MemoryEvent {
    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_display_counts_writes() {
        let display = MemoryDisplay::new("0");
        assert_eq!(display.text(), "0");
        assert_eq!(display.writes(), 0);

        display.set_text("7");
        display.set_text("7");
        assert_eq!(display.text(), "7");
        assert_eq!(display.writes(), 2);
    }

    #[test]
    fn test_memory_control_slug_is_read_live() {
        let control = MemoryControl::new("first-post");
        assert_eq!(control.slug(), "first-post");
        control.set_slug("second-post");
        assert_eq!(control.slug(), "second-post");
        assert_eq!(MemoryControl::default().slug(), "");
    }
}
