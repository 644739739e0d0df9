//! Display-mode toggle.
//!
//! Only the Bohr view is actually rendered; the other modes are stored and
//! cycled so the host UI can label its toggle button, matching the widget's
//! current feature surface.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Bohr,
    Lewis,
    Compare,
    Edit,
}

impl DisplayMode {
    /// The fixed cycle bohr → lewis → compare → edit → bohr.
    pub fn next(self) -> Self {
        match self {
            DisplayMode::Bohr => DisplayMode::Lewis,
            DisplayMode::Lewis => DisplayMode::Compare,
            DisplayMode::Compare => DisplayMode::Edit,
            DisplayMode::Edit => DisplayMode::Bohr,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Bohr => "bohr",
            DisplayMode::Lewis => "lewis",
            DisplayMode::Compare => "compare",
            DisplayMode::Edit => "edit",
        }
    }
}
