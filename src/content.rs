//! Maps a window title to the view drawn inside the window.

use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::components::{
    BillProvidersComponent, Component, ComponentContext, PhotoGalleryComponent,
    PlaceholderComponent, PropertyInfoComponent,
};
use crate::photos::SharedLibrary;
use crate::ui::UiFrame;

#[derive(Debug)]
pub enum WindowContent {
    Property(PropertyInfoComponent),
    Bills(BillProvidersComponent),
    Photos(PhotoGalleryComponent),
    Placeholder(PlaceholderComponent),
}

impl WindowContent {
    pub fn for_title(title: &str, library: &SharedLibrary) -> Self {
        match title {
            "Home" => WindowContent::Property(PropertyInfoComponent::new()),
            "Bills" => WindowContent::Bills(BillProvidersComponent::new()),
            "Photos" => WindowContent::Photos(PhotoGalleryComponent::new(library.clone())),
            other => WindowContent::Placeholder(PlaceholderComponent::new(other)),
        }
    }

    pub fn is_photos(&self) -> bool {
        matches!(self, WindowContent::Photos(_))
    }

    fn component_mut(&mut self) -> &mut dyn Component {
        match self {
            WindowContent::Property(c) => c,
            WindowContent::Bills(c) => c,
            WindowContent::Photos(c) => c,
            WindowContent::Placeholder(c) => c,
        }
    }
}

impl Component for WindowContent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        self.component_mut().render(frame, area, ctx);
    }

    fn handle_event(&mut self, event: &Event, ctx: &ComponentContext) -> bool {
        self.component_mut().handle_event(event, ctx)
    }

    fn take_notice(&mut self) -> Option<String> {
        self.component_mut().take_notice()
    }
}
