//! Context handed to every `Component` call: the active theme, its resolved
//! styles and whether the component's window is the focused (topmost) one.

use crate::term_color::ColorSupport;
use crate::theme::{Theme, ThemeStyle};

#[derive(Debug, Clone, Copy)]
pub struct ComponentContext {
    focused: bool,
    theme: Theme,
    style: ThemeStyle,
}

impl ComponentContext {
    pub const fn new(theme: Theme, style: ThemeStyle) -> Self {
        Self {
            focused: false,
            theme,
            style,
        }
    }

    /// Context with styles resolved for true-colour output.
    pub fn for_theme(theme: Theme) -> Self {
        Self::new(theme, theme.style(ColorSupport::TrueColor))
    }

    pub const fn focused(&self) -> bool {
        self.focused
    }

    pub const fn theme(&self) -> Theme {
        self.theme
    }

    pub const fn style(&self) -> &ThemeStyle {
        &self.style
    }

    pub const fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Default for ComponentContext {
    fn default() -> Self {
        Self::for_theme(Theme::default())
    }
}
