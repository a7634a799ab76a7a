//! Built-in colour themes for the prompt row and card list.

use ratatui::style::{Color, Modifier, Style};

/// Styles used across the view. Constructed as consts in the definitions
/// below; callers read the fields directly.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub prompt: Style,
    pub title: Style,
    pub badge_bestseller: Style,
    pub badge_featured: Style,
    pub meta: Style,
    pub description: Style,
    pub price: Style,
    pub tag: Style,
    pub error: Style,
    pub empty: Style,
    pub row_highlight: Style,
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
    pub name: &'static str,
    pub theme: Theme,
    pub aliases: &'static [&'static str],
}

pub const SLATE: ThemeDefinition = ThemeDefinition {
    name: "slate",
    aliases: &["dark"],
    theme: Theme {
        prompt: Style::new().fg(Color::LightCyan),
        title: Style::new()
            .fg(Color::Rgb(226, 232, 240))
            .add_modifier(Modifier::BOLD),
        badge_bestseller: Style::new()
            .fg(Color::Rgb(15, 23, 42))
            .bg(Color::Rgb(250, 204, 21)),
        badge_featured: Style::new()
            .fg(Color::Rgb(15, 23, 42))
            .bg(Color::Rgb(125, 211, 252)),
        meta: Style::new().fg(Color::Rgb(148, 163, 184)),
        description: Style::new().fg(Color::Gray),
        price: Style::new()
            .fg(Color::Rgb(134, 239, 172))
            .add_modifier(Modifier::BOLD),
        tag: Style::new()
            .fg(Color::Rgb(226, 232, 240))
            .bg(Color::Rgb(30, 41, 59)),
        error: Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        empty: Style::new().fg(Color::DarkGray),
        row_highlight: Style::new().bg(Color::Rgb(30, 41, 59)),
    },
};

pub const LIGHT: ThemeDefinition = ThemeDefinition {
    name: "light",
    aliases: &[],
    theme: Theme {
        prompt: Style::new().fg(Color::Blue),
        title: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
        badge_bestseller: Style::new().fg(Color::White).bg(Color::Rgb(202, 138, 4)),
        badge_featured: Style::new().fg(Color::White).bg(Color::Rgb(2, 132, 199)),
        meta: Style::new().fg(Color::Rgb(71, 85, 105)),
        description: Style::new().fg(Color::DarkGray),
        price: Style::new()
            .fg(Color::Rgb(22, 101, 52))
            .add_modifier(Modifier::BOLD),
        tag: Style::new()
            .fg(Color::Rgb(30, 41, 59))
            .bg(Color::Rgb(226, 232, 240)),
        error: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
        empty: Style::new().fg(Color::Gray),
        row_highlight: Style::new().bg(Color::Rgb(226, 232, 240)),
    },
};

const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[SLATE, LIGHT];

/// The theme used when nothing is configured.
#[must_use]
pub fn default_theme() -> Theme {
    SLATE.theme
}

/// Names of the built-in themes, in registration order.
#[must_use]
pub fn names() -> Vec<&'static str> {
    BUILT_IN_DEFINITIONS
        .iter()
        .map(|definition| definition.name)
        .collect()
}

/// Look up a theme by name or alias, case-insensitively.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    let needle = name.trim().to_ascii_lowercase();
    BUILT_IN_DEFINITIONS
        .iter()
        .find(|definition| {
            definition.name == needle
                || definition
                    .aliases
                    .iter()
                    .any(|alias| *alias == needle)
        })
        .map(|definition| definition.theme)
}
