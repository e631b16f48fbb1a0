//! The desktop: top bar, floating windows, dock and status bar, plus the
//! routing of terminal events between them.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::components::{Component, ComponentContext, StatusBar};
use crate::content::WindowContent;
use crate::dock::{Dock, DockOutcome, DockRequest, glyph_for_icon};
use crate::keybindings::{Action, KeyBindings};
use crate::layout::{CellRect, rect_contains};
use crate::log_buffer::LogBuffer;
use crate::panel::{Panel, PanelOutcome};
use crate::photos::SharedLibrary;
use crate::state::AppState;
use crate::term_color::ColorSupport;
use crate::theme::{Theme, ThemeStyle};
use crate::ui::UiFrame;
use crate::window::decorator::{ChromeView, ThemedDecorator, WindowDecorator};
use crate::window::{
    IconRef, PlacementSource, PointerOutcome, RandomPlacement, WindowId, WindowManager,
};

pub struct Desktop<P = RandomPlacement> {
    windows: WindowManager<P>,
    contents: HashMap<WindowId, WindowContent>,
    state: AppState,
    colors: ColorSupport,
    style: ThemeStyle,
    dock: Dock,
    panel: Panel,
    status: StatusBar,
    bindings: KeyBindings,
    decorator: Box<dyn WindowDecorator>,
    library: SharedLibrary,
    log: Option<LogBuffer>,
}

impl<P: PlacementSource> Desktop<P> {
    pub fn new(
        windows: WindowManager<P>,
        theme: Theme,
        colors: ColorSupport,
        library: SharedLibrary,
    ) -> Self {
        Self {
            windows,
            contents: HashMap::new(),
            state: AppState::new(theme),
            colors,
            style: theme.style(colors),
            dock: Dock::new(),
            panel: Panel::new(),
            status: StatusBar::new(),
            bindings: KeyBindings::default(),
            decorator: Box::new(ThemedDecorator),
            library,
            log: None,
        }
    }

    /// Show the latest line of `log` in the status bar when there is no
    /// notice.
    pub fn with_log_buffer(mut self, log: LogBuffer) -> Self {
        self.log = Some(log);
        self
    }

    pub fn windows(&self) -> &WindowManager<P> {
        &self.windows
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn theme(&self) -> Theme {
        self.state.theme()
    }

    pub fn dock(&self) -> &Dock {
        &self.dock
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn library(&self) -> &SharedLibrary {
        &self.library
    }

    pub fn content(&self, id: WindowId) -> Option<&WindowContent> {
        self.contents.get(&id)
    }

    pub fn quit_requested(&self) -> bool {
        self.state.quit_requested()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.state.set_theme(theme);
        self.apply_theme_change();
    }

    fn apply_theme_change(&mut self) {
        if let Some(theme) = self.state.take_theme_change() {
            self.style = theme.style(self.colors);
            tracing::info!(%theme, "theme changed");
        }
    }

    pub fn open_window(&mut self, title: &str, icon: IconRef) -> WindowId {
        let id = self.windows.open(title, icon);
        self.contents
            .insert(id, WindowContent::for_title(title, &self.library));
        id
    }

    fn open_request(&mut self, request: DockRequest) -> WindowId {
        self.open_window(&request.title, request.icon)
    }

    /// Open the dock item called `title` with the current theme's icon.
    pub fn open_from_dock(&mut self, title: &str) -> Option<WindowId> {
        let request = self.dock.request_for_title(title, self.theme())?;
        Some(self.open_request(request))
    }

    pub fn close_window(&mut self, id: WindowId) {
        self.windows.close(id);
        self.contents.remove(&id);
    }

    /// Upload files named on the command line. Rejections end up in the
    /// status bar.
    pub fn upload_photos(&mut self, paths: &[impl AsRef<Path>], today: NaiveDate) -> usize {
        let mut accepted = 0;
        for path in paths {
            let path = path.as_ref();
            let result = self.library.borrow_mut().upload(path, today);
            match result {
                Ok(_) => accepted += 1,
                Err(err) => {
                    tracing::warn!(error = %err, "photo rejected");
                    self.state.set_notice(format!("Rejected {err}"));
                }
            }
        }
        accepted
    }

    /// Route one terminal event. Returns true when something consumed it.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let consumed = match event {
            Event::Mouse(mouse) => self.handle_mouse(event, mouse),
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                self.state.clear_notice();
                self.handle_key(event, key)
            }
            Event::Paste(_) => self.handle_paste(event),
            Event::FocusLost => {
                self.windows.handle_event(event);
                false
            }
            _ => false,
        };
        self.collect_notices();
        self.apply_theme_change();
        consumed
    }

    fn handle_mouse(&mut self, event: &Event, mouse: &MouseEvent) -> bool {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            // a press never lands while an earlier drag or resize is still held
            self.windows.abandon_session();
            self.state.clear_notice();
            match self.panel.handle_event(event) {
                PanelOutcome::Selected(theme) => {
                    self.state.set_theme(theme);
                    return true;
                }
                PanelOutcome::Toggled => return true,
                PanelOutcome::Ignored => {}
            }
            if rect_contains(self.panel.area(), mouse.column, mouse.row) {
                return true;
            }
            if rect_contains(self.dock.area(), mouse.column, mouse.row) {
                let theme = self.theme();
                if let DockOutcome::Open(request) = self.dock.handle_event(event, theme) {
                    self.open_request(request);
                }
                return true;
            }
            let point = self
                .windows
                .cell_metrics()
                .cell_to_pixel(mouse.column, mouse.row);
            return match self.windows.pointer_down(point) {
                PointerOutcome::Missed => false,
                PointerOutcome::Closed(id) => {
                    self.contents.remove(&id);
                    true
                }
                PointerOutcome::Focused(id) => {
                    self.forward_mouse(id, mouse);
                    true
                }
                PointerOutcome::DragStarted(_) | PointerOutcome::ResizeStarted(..) => true,
            };
        }
        match mouse.kind {
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let point = self
                    .windows
                    .cell_metrics()
                    .cell_to_pixel(mouse.column, mouse.row);
                match self.windows.window_at(point) {
                    Some(id) if Some(id) == self.windows.topmost() => self.forward_mouse(id, mouse),
                    _ => false,
                }
            }
            _ => self.windows.handle_event(event),
        }
    }

    fn window_cells(&self, id: WindowId) -> Option<CellRect> {
        let record = self.windows.get(id)?;
        Some(self.windows.cell_metrics().rect_to_cells(record.bounds()))
    }

    /// Hand a mouse event to a window's content in window-local cells.
    fn forward_mouse(&mut self, id: WindowId, mouse: &MouseEvent) -> bool {
        let Some((column, row)) = self
            .window_cells(id)
            .and_then(|cells| cells.to_local(mouse.column, mouse.row))
        else {
            return false;
        };
        let local = Event::Mouse(MouseEvent {
            column,
            row,
            ..*mouse
        });
        let ctx = self.context(true);
        self.contents
            .get_mut(&id)
            .is_some_and(|content| content.handle_event(&local, &ctx))
    }

    fn handle_key(&mut self, event: &Event, key: &KeyEvent) -> bool {
        if self.panel.menu_open() && key.code == KeyCode::Esc {
            self.panel.close_menu();
            return true;
        }
        match self.bindings.action_for_key(key) {
            Some(Action::Quit) => {
                self.state.request_quit();
                true
            }
            Some(Action::CycleTheme) => {
                self.state.cycle_theme();
                true
            }
            Some(Action::DockPrev | Action::DockNext | Action::DockOpen) => {
                let theme = self.theme();
                if let DockOutcome::Open(request) = self.dock.handle_event(event, theme) {
                    self.open_request(request);
                }
                true
            }
            Some(Action::CloseTopmost) => match self.windows.topmost() {
                Some(id) => {
                    self.close_window(id);
                    true
                }
                None => false,
            },
            Some(Action::FocusNext) => self.windows.focus_lowest().is_some(),
            None => self.forward_to_topmost(event),
        }
    }

    fn handle_paste(&mut self, event: &Event) -> bool {
        let photos_on_top = self
            .windows
            .topmost()
            .and_then(|id| self.contents.get(&id))
            .is_some_and(WindowContent::is_photos);
        if !photos_on_top {
            self.state
                .set_notice("Focus a Photos window to upload images");
            return false;
        }
        self.forward_to_topmost(event)
    }

    fn forward_to_topmost(&mut self, event: &Event) -> bool {
        let Some(id) = self.windows.topmost() else {
            return false;
        };
        let ctx = self.context(true);
        self.contents
            .get_mut(&id)
            .is_some_and(|content| content.handle_event(event, &ctx))
    }

    fn collect_notices(&mut self) {
        for content in self.contents.values_mut() {
            if let Some(notice) = content.take_notice() {
                self.state.set_notice(notice);
            }
        }
    }

    fn context(&self, focused: bool) -> ComponentContext {
        ComponentContext::new(self.theme(), self.style).with_focus(focused)
    }

    /// Paint the whole desktop for one frame.
    pub fn render(&mut self, frame: &mut UiFrame<'_>) {
        let screen = frame.area();
        if screen.width == 0 || screen.height == 0 {
            return;
        }
        let theme = self.theme();
        let style = self.style;
        frame.fill(screen, style.desktop);
        let (_bar, rest) = self.panel.split_area(screen);
        let status_area = Rect {
            y: rest.y + rest.height.saturating_sub(1),
            height: rest.height.min(1),
            ..rest
        };
        let workspace = Rect {
            height: rest.height.saturating_sub(1),
            ..rest
        };

        let topmost = self.windows.topmost();
        let cells = self.windows.cell_metrics();
        for id in self.windows.registry().stacking_order() {
            let Some(record) = self.windows.get(id) else {
                continue;
            };
            let placed = cells.rect_to_cells(record.bounds());
            if placed.width == 0 || placed.height == 0 {
                continue;
            }
            let local = placed.local();
            let mut buffer = Buffer::empty(local);
            {
                let mut surface = UiFrame::from_parts(local, &mut buffer);
                let focused = Some(id) == topmost;
                let view = ChromeView {
                    title: record.title(),
                    icon_glyph: glyph_for_icon(record.icon().name()),
                    focused,
                };
                let content_area = self
                    .decorator
                    .render_window(&mut surface, local, view, &style);
                if let Some(content) = self.contents.get_mut(&id) {
                    let ctx = ComponentContext::new(theme, style).with_focus(focused);
                    content.render(&mut surface, content_area, &ctx);
                }
            }
            if let Some(shadow) = style.shadow
                && let Some(area) = placed.shifted(1, 1).clip_to(screen)
            {
                frame.fill(area, shadow);
            }
            frame.blit_from_signed(&buffer, placed);
        }

        self.dock.render(frame, workspace, &style);
        self.panel.render(frame, theme, &style);
        self.panel.render_menu(frame, screen, theme, &style);

        let message = self
            .state
            .notice()
            .map(str::to_string)
            .or_else(|| self.log.as_ref().and_then(LogBuffer::latest))
            .unwrap_or_default();
        self.status.set_left(message);
        self.status.set_right(self.bindings.hint_line());
        let ctx = self.context(false);
        self.status.render(frame, status_area, &ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{CellMetrics, Point};
    use crate::photos::PhotoLibrary;
    use crate::window::FixedPlacement;
    use crossterm::event::KeyModifiers;

    fn desktop() -> Desktop<FixedPlacement> {
        let windows = WindowManager::new(
            FixedPlacement::default(),
            CellMetrics::default(),
        );
        Desktop::new(
            windows,
            Theme::Pixel,
            ColorSupport::TrueColor,
            PhotoLibrary::with_samples().shared(),
        )
    }

    fn render(desktop: &mut Desktop<FixedPlacement>, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        desktop.render(&mut frame);
        buffer
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn enter_opens_selected_dock_item_with_content() {
        let mut desktop = desktop();
        desktop.handle_event(&key(KeyCode::Right, KeyModifiers::NONE));
        desktop.handle_event(&key(KeyCode::Right, KeyModifiers::NONE));
        desktop.handle_event(&key(KeyCode::Right, KeyModifiers::NONE));
        assert!(desktop.handle_event(&key(KeyCode::Enter, KeyModifiers::NONE)));
        let id = desktop.windows().topmost().unwrap();
        let record = desktop.windows().get(id).unwrap();
        assert_eq!(record.title(), "Photos");
        assert_eq!(record.icon().path(), "/icons/photos.png");
        assert!(desktop.content(id).unwrap().is_photos());
    }

    #[test]
    fn ctrl_w_closes_topmost_and_drops_content() {
        let mut desktop = desktop();
        let home = desktop.open_from_dock("Home").unwrap();
        let bills = desktop.open_from_dock("Bills").unwrap();
        desktop.handle_event(&key(KeyCode::Char('w'), KeyModifiers::CONTROL));
        assert!(desktop.windows().get(bills).is_none());
        assert!(desktop.content(bills).is_none());
        assert!(desktop.content(home).is_some());
    }

    #[test]
    fn close_button_click_drops_content() {
        let mut desktop = desktop();
        let id = desktop.open_from_dock("Home").unwrap();
        render(&mut desktop, 100, 50);
        // window cells start at (12, 6); `[x]` sits at local column 58, row 1
        assert!(desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 71, 7)));
        assert!(desktop.windows().get(id).is_none());
        assert!(desktop.content(id).is_none());
    }

    #[test]
    fn theme_keys_and_picker_change_theme() {
        let mut desktop = desktop();
        desktop.handle_event(&key(KeyCode::Char('t'), KeyModifiers::NONE));
        assert_eq!(desktop.theme(), Theme::ThreeD);
        render(&mut desktop, 80, 30);
        // " 3D ▾ " is six cells wide and ends one cell before the edge
        assert!(desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 75, 0)));
        assert!(desktop.panel().menu_open());
        render(&mut desktop, 80, 30);
        // options start on the row under the bar; "3D Rounded" is third
        desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 72, 3));
        assert_eq!(desktop.theme(), Theme::ThreeDRounded);
        assert!(!desktop.panel().menu_open());
    }

    #[test]
    fn paste_needs_a_focused_gallery() {
        let mut desktop = desktop();
        desktop.open_from_dock("Home");
        assert!(!desktop.handle_event(&Event::Paste("/tmp/a.png".into())));
        assert_eq!(
            desktop.state().notice(),
            Some("Focus a Photos window to upload images")
        );
        desktop.open_from_dock("Photos");
        assert!(desktop.handle_event(&Event::Paste("/tmp/a.png".into())));
        assert_eq!(desktop.library().borrow().len(), 5);
        assert_eq!(desktop.state().notice(), Some("Added 1 photo"));
    }

    #[test]
    fn rejected_command_line_photos_become_notices() {
        let mut desktop = desktop();
        let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let accepted = desktop.upload_photos(&["/tmp/yard.jpg", "/tmp/deed.pdf"], today);
        assert_eq!(accepted, 1);
        assert_eq!(
            desktop.state().notice(),
            Some("Rejected `/tmp/deed.pdf` is not an image file")
        );
    }

    #[test]
    fn dock_press_releases_a_held_drag() {
        let mut desktop = desktop();
        let id = desktop.open_from_dock("Home").unwrap();
        render(&mut desktop, 100, 40);
        desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 20, 7));
        assert_eq!(desktop.windows().pointer_grabs(), 1);
        // the release went missing; the next press is on the dock
        assert!(desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 37)));
        assert_eq!(desktop.windows().pointer_grabs(), 0);
        assert!(desktop.windows().session().is_none());
        desktop.handle_event(&mouse(MouseEventKind::Moved, 5, 45));
        assert_eq!(desktop.windows().get(id).unwrap().position(), Point::new(100, 100));
    }

    #[test]
    fn panel_press_releases_a_held_resize() {
        let mut desktop = desktop();
        desktop.open_from_dock("Home");
        render(&mut desktop, 100, 40);
        // right edge of the window covering cells 12..74
        desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 74, 20));
        assert!(desktop.windows().session().is_some_and(|s| s.is_resize()));
        desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 30, 0));
        assert_eq!(desktop.windows().pointer_grabs(), 0);
    }

    #[test]
    fn dock_stays_above_windows_that_overlap_it() {
        let mut desktop = desktop();
        let id = desktop.open_from_dock("Home").unwrap();
        let buffer = render(&mut desktop, 100, 40);
        // the window spans rows 6..43 yet the dock row still shows its items
        let dock_row: String = (0..100)
            .map(|x| buffer.cell((x, 37)).unwrap().symbol().to_string())
            .collect();
        assert!(dock_row.contains("Photos"), "{dock_row}");
        assert!(desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 45, 37)));
        assert_eq!(desktop.dock().selected(), 3);
        assert!(desktop.windows().session().is_none());
        assert_eq!(desktop.windows().get(id).unwrap().z_index(), 1000);
    }

    #[test]
    fn quit_keys() {
        let mut desktop = desktop();
        desktop.handle_event(&key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(desktop.quit_requested());
    }

    #[test]
    fn render_paints_windows_bottom_to_top() {
        let mut desktop = desktop();
        desktop.open_from_dock("Home");
        desktop.open_from_dock("Bills");
        let buffer = render(&mut desktop, 100, 50);
        // both windows share an origin; the later one is on top
        let title: String = (14..24)
            .map(|x| buffer.cell((x, 7)).unwrap().symbol().to_string())
            .collect();
        assert_eq!(title, "$ Bills   ");
        let status: String = (0..100)
            .map(|x| buffer.cell((x, 49)).unwrap().symbol().to_string())
            .collect();
        assert!(status.trim_end().ends_with("Tab cycle"), "{status}");
    }
}
