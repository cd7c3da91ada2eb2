// src/render/theme.rs
//! Shared colours and timing tables for every view

use std::time::Duration;

/// Output flavour. `Plain` emits no escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Ansi,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Brand,
    Heading,
    Accent,
    Muted,
    Role,
    Location,
    Experience,
    High,
    Medium,
    Low,
    Error,
    Skeleton,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Brand => "\x1b[1;38;5;99m",
            Style::Heading => "\x1b[1;97m",
            Style::Accent => "\x1b[38;5;105m",
            Style::Muted => "\x1b[90m",
            Style::Role => "\x1b[38;5;147m",
            Style::Location => "\x1b[36m",
            Style::Experience => "\x1b[35m",
            Style::High => "\x1b[1;32m",
            Style::Medium => "\x1b[1;33m",
            Style::Low => "\x1b[1;31m",
            Style::Error => "\x1b[1;31m",
            Style::Skeleton => "\x1b[38;5;238m",
        }
    }
}

const RESET: &str = "\x1b[0m";

impl Theme {
    pub fn from_plain_flag(plain: bool) -> Self {
        if plain {
            Theme::Plain
        } else {
            Theme::Ansi
        }
    }

    pub fn paint(self, style: Style, text: &str) -> String {
        match self {
            Theme::Ansi => format!("{}{}{}", style.code(), text, RESET),
            Theme::Plain => text.to_string(),
        }
    }
}

// Fixed tables, so two renders of the same state are identical.

/// Offsets of the three loading pulse dots.
pub const PULSE_DELAYS: [Duration; 3] = [
    Duration::from_millis(0),
    Duration::from_millis(200),
    Duration::from_millis(400),
];

pub const PULSE_PERIOD: Duration = Duration::from_millis(1200);

/// Widths (in cells) of the placeholder bars inside a skeleton card.
pub const SKELETON_BARS: [usize; 6] = [42, 28, 56, 47, 37, 16];

pub const SKELETON_CARDS: usize = 4;

/// Pulse dots at `elapsed` into the loading animation.
pub fn pulse_frame(theme: Theme, elapsed: Duration) -> String {
    let period = PULSE_PERIOD.as_millis();
    PULSE_DELAYS
        .iter()
        .map(|delay| {
            let phase = (elapsed.as_millis() + period - delay.as_millis() % period) % period;
            if phase < period / 2 {
                theme.paint(Style::Accent, "●")
            } else {
                theme.paint(Style::Muted, "○")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_has_no_escapes() {
        assert_eq!(Theme::Plain.paint(Style::High, "87%"), "87%");
        assert!(Theme::Ansi.paint(Style::High, "87%").contains('\x1b'));
    }

    #[test]
    fn test_pulse_frame_is_deterministic() {
        let at = Duration::from_millis(300);
        assert_eq!(pulse_frame(Theme::Plain, at), pulse_frame(Theme::Plain, at));
        assert_eq!(pulse_frame(Theme::Plain, Duration::ZERO), "● ○ ○");
        assert_eq!(pulse_frame(Theme::Plain, Duration::from_millis(300)), "● ● ○");
        assert_eq!(pulse_frame(Theme::Plain, Duration::from_millis(700)), "○ ● ●");
    }
}
