use std::fmt;
use std::str::FromStr;

use ratatui::style::{Modifier, Style};

use crate::term_color::ColorSupport;
use crate::window::IconRef;

// Palette. Kept as RGB triples and mapped through `ColorSupport` when a
// style is resolved.
const BLACK: (u8, u8, u8) = (0, 0, 0);
const WHITE: (u8, u8, u8) = (255, 255, 255);
const GRAY_50: (u8, u8, u8) = (249, 250, 251);
const GRAY_100: (u8, u8, u8) = (243, 244, 246);
const GRAY_200: (u8, u8, u8) = (229, 231, 235);
const GRAY_300: (u8, u8, u8) = (209, 213, 219);
const GRAY_400: (u8, u8, u8) = (156, 163, 175);
const GRAY_500: (u8, u8, u8) = (107, 114, 128);
const GRAY_600: (u8, u8, u8) = (75, 85, 99);
const GRAY_700: (u8, u8, u8) = (55, 65, 81);
const GRAY_800: (u8, u8, u8) = (31, 41, 55);
const BLUE_100: (u8, u8, u8) = (219, 234, 254);
const BLUE_600: (u8, u8, u8) = (37, 99, 235);
const BLUE_800: (u8, u8, u8) = (30, 64, 175);
const GREEN_600: (u8, u8, u8) = (22, 163, 74);
const RED_400: (u8, u8, u8) = (248, 113, 113);
const RED_500: (u8, u8, u8) = (239, 68, 68);
const RED_600: (u8, u8, u8) = (220, 38, 38);
const SLATE_700: (u8, u8, u8) = (51, 65, 85);

/// Visual theme of the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Pixel,
    ThreeD,
    ThreeDRounded,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}` (expected one of: Pixel, 3D, 3D Rounded)")]
pub struct ParseThemeError(String);

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Pixel, Theme::ThreeD, Theme::ThreeDRounded];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Pixel => "Pixel",
            Theme::ThreeD => "3D",
            Theme::ThreeDRounded => "3D Rounded",
        }
    }

    pub fn next(self) -> Theme {
        match self {
            Theme::Pixel => Theme::ThreeD,
            Theme::ThreeD => Theme::ThreeDRounded,
            Theme::ThreeDRounded => Theme::Pixel,
        }
    }

    pub fn icon_path(self, icon: &str) -> String {
        match self {
            Theme::Pixel => format!("/icons/{icon}.png"),
            Theme::ThreeD => format!("/icons/3d-{icon}.png"),
            Theme::ThreeDRounded => format!("/icons/3d-rounded-{icon}.png"),
        }
    }

    /// Pixel-art icons are scaled without smoothing.
    pub fn pixelated(self) -> bool {
        matches!(self, Theme::Pixel)
    }

    pub fn icon_ref(self, icon: &str) -> IconRef {
        IconRef::new(icon, self.icon_path(icon))
    }

    pub fn style(self, colors: ColorSupport) -> ThemeStyle {
        let c = |rgb| colors.map(rgb);
        let on = |fg, bg| Style::default().fg(c(fg)).bg(c(bg));
        match self {
            Theme::Pixel => ThemeStyle {
                border: BorderGlyphs::HEAVY,
                border_style: on(BLACK, GRAY_300),
                title_bar: on(WHITE, BLUE_600).add_modifier(Modifier::BOLD),
                title_bar_inactive: on(GRAY_200, GRAY_600),
                close_button: on(WHITE, RED_600).add_modifier(Modifier::BOLD),
                content: on(GRAY_800, WHITE),
                heading: on(BLACK, WHITE).add_modifier(Modifier::BOLD),
                label: on(GRAY_600, WHITE),
                value: on(BLACK, WHITE),
                accent: on(BLUE_600, WHITE).add_modifier(Modifier::BOLD),
                badge: on(BLACK, GRAY_300),
                muted: on(GRAY_500, WHITE),
                selected: on(WHITE, BLUE_600),
                success: on(WHITE, GREEN_600),
                desktop: Style::default().bg(c(SLATE_700)),
                top_bar: on(BLACK, GRAY_300),
                dock: on(BLACK, GRAY_300),
                dock_selected: on(WHITE, BLUE_600),
                status_bar: on(WHITE, BLACK),
                dropdown: on(BLACK, GRAY_300),
                dropdown_selected: on(WHITE, BLUE_600),
                shadow: Some(Style::default().bg(c(BLACK))),
            },
            Theme::ThreeD => ThemeStyle {
                border: BorderGlyphs::PLAIN,
                border_style: on(GRAY_400, GRAY_100),
                title_bar: on(GRAY_800, GRAY_300).add_modifier(Modifier::BOLD),
                title_bar_inactive: on(GRAY_600, GRAY_200),
                close_button: on(WHITE, RED_500),
                content: on(GRAY_800, WHITE),
                heading: on(GRAY_800, WHITE).add_modifier(Modifier::BOLD),
                label: on(GRAY_600, WHITE),
                value: on(GRAY_800, WHITE),
                accent: on(BLUE_600, WHITE).add_modifier(Modifier::BOLD),
                badge: on(BLUE_800, BLUE_100),
                muted: on(GRAY_500, WHITE),
                selected: on(GRAY_800, BLUE_100),
                success: on(WHITE, GREEN_600),
                desktop: Style::default().bg(c(GRAY_400)),
                top_bar: on(GRAY_800, GRAY_200),
                dock: on(GRAY_800, GRAY_200),
                dock_selected: on(GRAY_800, GRAY_300).add_modifier(Modifier::BOLD),
                status_bar: on(GRAY_100, GRAY_700),
                dropdown: on(GRAY_700, GRAY_200),
                dropdown_selected: on(GRAY_800, GRAY_300),
                shadow: None,
            },
            Theme::ThreeDRounded => ThemeStyle {
                border: BorderGlyphs::ROUNDED,
                border_style: on(GRAY_200, WHITE),
                title_bar: on(GRAY_700, GRAY_100).add_modifier(Modifier::BOLD),
                title_bar_inactive: on(GRAY_500, GRAY_50),
                close_button: on(WHITE, RED_400),
                content: on(GRAY_700, GRAY_50),
                heading: on(GRAY_800, GRAY_50).add_modifier(Modifier::BOLD),
                label: on(GRAY_500, GRAY_50),
                value: on(GRAY_800, GRAY_50),
                accent: on(BLUE_600, GRAY_50).add_modifier(Modifier::BOLD),
                badge: on(BLUE_800, BLUE_100),
                muted: on(GRAY_400, GRAY_50),
                selected: on(GRAY_800, BLUE_100),
                success: on(WHITE, GREEN_600),
                desktop: Style::default().bg(c(GRAY_300)),
                top_bar: on(GRAY_800, GRAY_100),
                dock: on(GRAY_800, GRAY_100),
                dock_selected: on(GRAY_800, GRAY_200).add_modifier(Modifier::BOLD),
                status_bar: on(GRAY_100, GRAY_600),
                dropdown: on(GRAY_700, GRAY_100),
                dropdown_selected: on(GRAY_800, GRAY_300),
                shadow: None,
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    /// Case-insensitive; `-` and `_` are accepted in place of spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], " ");
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ParseThemeError(s.to_string()))
    }
}

/// Box-drawing characters for a window frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

impl BorderGlyphs {
    pub const PLAIN: BorderGlyphs = BorderGlyphs {
        top_left: "┌",
        top_right: "┐",
        bottom_left: "└",
        bottom_right: "┘",
        horizontal: "─",
        vertical: "│",
    };

    pub const HEAVY: BorderGlyphs = BorderGlyphs {
        top_left: "┏",
        top_right: "┓",
        bottom_left: "┗",
        bottom_right: "┛",
        horizontal: "━",
        vertical: "┃",
    };

    pub const ROUNDED: BorderGlyphs = BorderGlyphs {
        top_left: "╭",
        top_right: "╮",
        bottom_left: "╰",
        bottom_right: "╯",
        horizontal: "─",
        vertical: "│",
    };
}

/// Every style the desktop needs for one theme, resolved for the terminal's
/// colour support.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeStyle {
    pub border: BorderGlyphs,
    pub border_style: Style,
    pub title_bar: Style,
    pub title_bar_inactive: Style,
    pub close_button: Style,
    pub content: Style,
    pub heading: Style,
    pub label: Style,
    pub value: Style,
    pub accent: Style,
    pub badge: Style,
    pub muted: Style,
    pub selected: Style,
    pub success: Style,
    pub desktop: Style,
    pub top_bar: Style,
    pub dock: Style,
    pub dock_selected: Style,
    pub status_bar: Style,
    pub dropdown: Style,
    pub dropdown_selected: Style,
    /// Hard drop shadow drawn one cell right and below the window.
    pub shadow: Option<Style>,
}

impl ThemeStyle {
    pub fn title_bar_for(&self, focused: bool) -> Style {
        if focused {
            self.title_bar
        } else {
            self.title_bar_inactive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn names_round_trip_through_from_str() {
        for theme in Theme::ALL {
            assert_eq!(theme.name().parse::<Theme>(), Ok(theme));
        }
        assert_eq!("3d-rounded".parse::<Theme>(), Ok(Theme::ThreeDRounded));
        assert_eq!(" pixel ".parse::<Theme>(), Ok(Theme::Pixel));
        assert!("Glass".parse::<Theme>().is_err());
    }

    #[test]
    fn icon_paths_follow_theme_scheme() {
        assert_eq!(Theme::Pixel.icon_path("house"), "/icons/house.png");
        assert_eq!(Theme::ThreeD.icon_path("house"), "/icons/3d-house.png");
        assert_eq!(
            Theme::ThreeDRounded.icon_path("house"),
            "/icons/3d-rounded-house.png"
        );
        assert!(Theme::Pixel.pixelated());
        assert!(!Theme::ThreeD.pixelated());
    }

    #[test]
    fn next_cycles_all_themes() {
        let mut theme = Theme::default();
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(theme);
            theme = theme.next();
        }
        assert_eq!(theme, Theme::Pixel);
        assert_eq!(seen, Theme::ALL.to_vec());
    }

    #[test]
    fn styles_differ_per_theme() {
        let pixel = Theme::Pixel.style(ColorSupport::TrueColor);
        let rounded = Theme::ThreeDRounded.style(ColorSupport::TrueColor);
        assert_eq!(pixel.border.top_left, "┏");
        assert_eq!(rounded.border.top_left, "╭");
        assert_eq!(pixel.title_bar.bg, Some(Color::Rgb(37, 99, 235)));
        assert!(pixel.shadow.is_some());
        assert!(rounded.shadow.is_none());
    }
}
