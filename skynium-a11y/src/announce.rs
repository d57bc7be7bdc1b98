//! Texts shown or spoken when settings change.

use crate::constants::{ACTIVE_NONE_COLOR, ACTIVE_NONE_LABEL, ACTIVE_SOME_COLOR};
use crate::settings::Mode;

/// What the mini summary next to the panel button shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSummary {
    pub text: String,
    pub color: &'static str,
    pub bold: bool,
}

impl ActiveSummary {
    #[must_use]
    pub fn for_count(count: usize) -> Self {
        match count {
            0 => Self {
                text: ACTIVE_NONE_LABEL.to_string(),
                color: ACTIVE_NONE_COLOR,
                bold: false,
            },
            1 => Self {
                text: "1 mode".to_string(),
                color: ACTIVE_SOME_COLOR,
                bold: true,
            },
            n => Self {
                text: format!("{n} modes"),
                color: ACTIVE_SOME_COLOR,
                bold: true,
            },
        }
    }
}

/// Status message for a mode flip, e.g. `dyslexia font enabled`.
#[must_use]
pub fn mode_changed(mode: Mode, enabled: bool) -> String {
    let state = if enabled { "enabled" } else { "disabled" };
    format!("{} {state}", mode.spoken_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_pluralizes() {
        assert_eq!(ActiveSummary::for_count(0).text, "None");
        assert!(!ActiveSummary::for_count(0).bold);
        assert_eq!(ActiveSummary::for_count(1).text, "1 mode");
        assert_eq!(ActiveSummary::for_count(3).text, "3 modes");
        assert_eq!(ActiveSummary::for_count(3).color, "var(--secondary-dark)");
    }

    #[test]
    fn mode_messages_use_spaces() {
        assert_eq!(
            mode_changed(Mode::DyslexiaFont, true),
            "dyslexia font enabled"
        );
        assert_eq!(
            mode_changed(Mode::EpilepsySafe, false),
            "epilepsy safe disabled"
        );
    }
}
