//! Status glyph vocabulary.
//!
//! `StatusKind` is the single set of status icons and colors used by the
//! report renderer and the terminal UI.

use super::theme::AuditTheme;

/// Outcome of a check as shown in output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// Check found problems.
    Failed,
    /// Non-fatal warning.
    Warning,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &AuditTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &AuditTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [StatusKind; 3] = [StatusKind::Success, StatusKind::Failed, StatusKind::Warning];

    #[test]
    fn icon_returns_unicode_symbols() {
        assert_eq!(StatusKind::Success.icon(), "✓");
        assert_eq!(StatusKind::Failed.icon(), "✗");
        assert_eq!(StatusKind::Warning.icon(), "⚠");
    }

    #[test]
    fn styled_returns_string_with_icon() {
        let theme = AuditTheme::plain();
        for kind in ALL {
            assert_eq!(kind.styled(&theme), kind.icon());
        }
    }

    #[test]
    fn format_includes_icon_and_message() {
        let theme = AuditTheme::plain();
        assert_eq!(
            StatusKind::Failed.format(&theme, "Missing files:"),
            "✗ Missing files:"
        );
    }

    #[test]
    fn all_variants_have_unique_icons() {
        let mut icons: Vec<&str> = ALL.iter().map(|k| k.icon()).collect();
        icons.sort();
        icons.dedup();
        assert_eq!(icons.len(), ALL.len());
    }
}
