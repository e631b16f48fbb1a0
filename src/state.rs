use crate::theme::Theme;

/// Process-wide desktop state that is not owned by a window.
#[derive(Debug, Default, Clone)]
pub struct AppState {
    theme: Theme,
    theme_dirty: bool,
    quit_requested: bool,
    notice: Option<String>,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme == theme {
            return;
        }
        self.theme = theme;
        self.theme_dirty = true;
    }

    pub fn cycle_theme(&mut self) {
        let next = self.theme.next();
        self.set_theme(next);
    }

    /// Returns the new theme once after each change.
    pub fn take_theme_change(&mut self) -> Option<Theme> {
        if self.theme_dirty {
            self.theme_dirty = false;
            Some(self.theme)
        } else {
            None
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice<T: Into<String>>(&mut self, notice: T) {
        self.notice = Some(notice.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}
