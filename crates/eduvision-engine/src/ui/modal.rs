//! Modal overlay state machine with keyboard focus trapping.
//!
//! Show/hide has three triggers: explicit close button, click outside the
//! modal body, and Escape. While the modal is open, Tab focus cycles over a
//! known set of focusable items and wraps at both ends.

/// Why a modal was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    ClickOutside,
    Escape,
}

/// Tab-cycle focus trap over `count` focusable items.
#[derive(Debug, Clone)]
pub struct FocusTrap {
    count: usize,
    focused: usize,
}

impl FocusTrap {
    pub fn new(count: usize) -> Self {
        Self { count, focused: 0 }
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Tab: advance focus, wrapping from the last item to the first.
    pub fn focus_next(&mut self) {
        if self.count > 0 {
            self.focused = (self.focused + 1) % self.count;
        }
    }

    /// Shift-Tab: retreat focus, wrapping from the first item to the last.
    pub fn focus_prev(&mut self) {
        if self.count > 0 {
            self.focused = (self.focused + self.count - 1) % self.count;
        }
    }

    fn reset(&mut self) {
        self.focused = 0;
    }
}

/// Visibility + content for one modal overlay.
pub struct ModalState {
    visible: bool,
    content: String,
    trap: FocusTrap,
}

impl ModalState {
    /// `focusable` is the number of tabbable controls inside the modal
    /// (close button plus any actions).
    pub fn new(focusable: usize) -> Self {
        Self {
            visible: false,
            content: String::new(),
            trap: FocusTrap::new(focusable),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn trap(&self) -> &FocusTrap {
        &self.trap
    }

    /// Open the modal with new content. Focus returns to the first control.
    pub fn show(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.visible = true;
        self.trap.reset();
    }

    /// Dismiss the modal. All three triggers behave identically.
    pub fn close(&mut self, _reason: CloseReason) {
        self.visible = false;
    }

    /// Tab / Shift-Tab while open. No-op when hidden.
    pub fn focus_next(&mut self) {
        if self.visible {
            self.trap.focus_next();
        }
    }

    pub fn focus_prev(&mut self) {
        if self.visible {
            self.trap.focus_prev();
        }
    }
}
