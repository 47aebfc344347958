//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Full sectioned report.
    #[default]
    Normal,
    /// Summary line only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows report details and headers.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
