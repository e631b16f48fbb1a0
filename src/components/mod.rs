use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::ui::UiFrame;

pub mod bill_providers;
pub mod photo_gallery;
pub mod placeholder;
pub mod property_info;
pub mod scroll_view;
pub mod status_bar;

pub use bill_providers::{BILL_PROVIDERS, BillProvider, BillProvidersComponent};
pub use photo_gallery::PhotoGalleryComponent;
pub use placeholder::PlaceholderComponent;
pub use property_info::PropertyInfoComponent;
pub use scroll_view::{ScrollState, render_scrolled_lines};
pub use status_bar::StatusBar;

pub use crate::component_context::ComponentContext;

pub trait Component {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext);

    /// Returns true when the event was consumed.
    fn handle_event(&mut self, _event: &Event, _ctx: &ComponentContext) -> bool {
        false
    }

    /// One-shot message for the status bar, e.g. a rejected upload.
    fn take_notice(&mut self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    struct DummyComp;
    impl Component for DummyComp {
        fn render(&mut self, _frame: &mut UiFrame<'_>, _area: Rect, _ctx: &ComponentContext) {}
    }

    #[test]
    fn default_handle_event_returns_false() {
        let mut d = DummyComp;
        assert!(!d.handle_event(
            &Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)),
            &ComponentContext::default()
        ));
    }
}
