//! Presentation themes.
//!
//! A theme only picks colours and decorations. Every screen is rendered by
//! the same code in [`crate::render`], whichever theme is active.

use owo_colors::{OwoColorize, Style};
use serde::{Deserialize, Serialize};

/// Theme selectable from config (`output.theme`) or `--theme`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Default,
    Halloween,
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Halloween => write!(f, "halloween"),
        }
    }
}

/// Resolved colours and decorations.
#[derive(Debug, Clone)]
pub struct Theme {
    name: ThemeName,
    color: bool,
    accent: Style,
    secondary: Style,
    muted: Style,
    /// Appended to the country name on its page.
    pub title_mark: &'static str,
    /// Appended to the "About" heading.
    pub about_mark: &'static str,
    /// Appended to the gallery heading.
    pub gallery_mark: &'static str,
    pub bullet: &'static str,
}

impl Theme {
    pub fn new(name: ThemeName, color: bool) -> Self {
        match name {
            ThemeName::Default => Self {
                name,
                color,
                accent: Style::new().blue().bold(),
                secondary: Style::new().cyan(),
                muted: Style::new().dimmed(),
                title_mark: "",
                about_mark: "",
                gallery_mark: "",
                bullet: "\u{2022}",
            },
            ThemeName::Halloween => Self {
                name,
                color,
                accent: Style::new().truecolor(255, 140, 0).bold(),
                secondary: Style::new().magenta(),
                muted: Style::new().bright_black(),
                title_mark: " \u{1f383}",
                about_mark: " \u{1f47b}",
                gallery_mark: " \u{1f987}\u{1f578}\u{fe0f}",
                bullet: "\u{1f987}",
            },
        }
    }

    pub fn name(&self) -> ThemeName {
        self.name
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(text, self.accent)
    }

    pub fn secondary(&self, text: &str) -> String {
        self.paint(text, self.secondary)
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(text, self.muted)
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colourless_theme_is_plain_text() {
        let theme = Theme::new(ThemeName::Halloween, false);
        assert_eq!(theme.accent("Peru"), "Peru");
    }

    #[test]
    fn coloured_theme_emits_escape_codes() {
        let theme = Theme::new(ThemeName::Default, true);
        assert!(theme.accent("Peru").contains('\u{1b}'));
    }

    #[test]
    fn only_halloween_decorates() {
        assert!(Theme::new(ThemeName::Default, false).title_mark.is_empty());
        assert!(!Theme::new(ThemeName::Halloween, false).title_mark.is_empty());
    }

    #[test]
    fn theme_name_round_trips_through_toml() {
        #[derive(Serialize, Deserialize)]
        struct Holder {
            theme: ThemeName,
        }
        let text = toml::to_string(&Holder {
            theme: ThemeName::Halloween,
        })
        .unwrap();
        assert_eq!(text.trim(), "theme = \"halloween\"");
        let back: Holder = toml::from_str(&text).unwrap();
        assert_eq!(back.theme, ThemeName::Halloween);
    }
}
