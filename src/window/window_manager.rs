use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};

use super::registry::{PlacementSource, RandomPlacement, WindowRegistry};
use super::session::{DragSession, GrabCounter, PointerSession, ResizeSession, SessionKind};
use super::{IconRef, WindowId, WindowRecord};
use crate::layout::floating::{ChromeHit, ChromeMetrics, ResizeHandle};
use crate::layout::{CellMetrics, Point};

/// What a pointer-down did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// No window under the pointer.
    Missed,
    /// The window was raised; nothing else happened.
    Focused(WindowId),
    DragStarted(WindowId),
    ResizeStarted(WindowId, ResizeHandle),
    Closed(WindowId),
}

impl PointerOutcome {
    pub fn window(&self) -> Option<WindowId> {
        match *self {
            PointerOutcome::Missed => None,
            PointerOutcome::Focused(id)
            | PointerOutcome::DragStarted(id)
            | PointerOutcome::ResizeStarted(id, _)
            | PointerOutcome::Closed(id) => Some(id),
        }
    }
}

/// Floating-window manager: the registry, the single pointer session and
/// the translation from terminal mouse events to pixel pointer events.
#[derive(Debug)]
pub struct WindowManager<P = RandomPlacement> {
    registry: WindowRegistry<P>,
    session: Option<PointerSession>,
    grabs: GrabCounter,
    chrome: ChromeMetrics,
    cells: CellMetrics,
}

impl Default for WindowManager<RandomPlacement> {
    fn default() -> Self {
        Self::new(RandomPlacement::from_entropy(), CellMetrics::default())
    }
}

impl<P: PlacementSource> WindowManager<P> {
    /// Manager whose chrome regions line up with the terminal cell grid.
    pub fn new(placement: P, cells: CellMetrics) -> Self {
        let chrome = ChromeMetrics::cells(cells.cell_width(), cells.cell_height());
        Self::with_chrome(placement, chrome, cells)
    }

    pub fn with_chrome(placement: P, chrome: ChromeMetrics, cells: CellMetrics) -> Self {
        Self {
            registry: WindowRegistry::with_placement(placement),
            session: None,
            grabs: GrabCounter::new(),
            chrome,
            cells,
        }
    }

    pub fn registry(&self) -> &WindowRegistry<P> {
        &self.registry
    }

    pub fn chrome(&self) -> ChromeMetrics {
        self.chrome
    }

    pub fn cell_metrics(&self) -> CellMetrics {
        self.cells
    }

    pub fn open(&mut self, title: impl Into<String>, icon: IconRef) -> WindowId {
        self.registry.open(title, icon)
    }

    pub fn close(&mut self, id: WindowId) {
        if self.session.as_ref().is_some_and(|s| s.window() == id) {
            self.end_session("window closed");
        }
        self.registry.close(id);
    }

    pub fn focus(&mut self, id: WindowId) {
        self.registry.focus(id);
    }

    pub fn list(&self) -> &[WindowRecord] {
        self.registry.list()
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowRecord> {
        self.registry.get(id)
    }

    pub fn topmost(&self) -> Option<WindowId> {
        self.registry.topmost()
    }

    /// Raise the bottom-most window. Repeating this cycles through every
    /// open window.
    pub fn focus_lowest(&mut self) -> Option<WindowId> {
        let lowest = self.registry.stacking_order().first().copied()?;
        self.registry.focus(lowest);
        Some(lowest)
    }

    pub fn session(&self) -> Option<&PointerSession> {
        self.session.as_ref()
    }

    /// Number of pointer grabs currently held. Zero whenever no session is
    /// active.
    pub fn pointer_grabs(&self) -> usize {
        self.grabs.live()
    }

    /// Topmost window whose bounds contain `point`.
    pub fn window_at(&self, point: Point) -> Option<WindowId> {
        self.registry
            .list()
            .iter()
            .filter(|w| w.bounds().contains(point))
            .max_by_key(|w| w.z_index())
            .map(|w| w.id())
    }

    pub fn pointer_down(&mut self, point: Point) -> PointerOutcome {
        if self.session.is_some() {
            // A press while a session is still recorded means the release was
            // never delivered.
            self.end_session("superseded by new press");
        }
        let Some(id) = self.window_at(point) else {
            return PointerOutcome::Missed;
        };
        let Some(record) = self.registry.get(id) else {
            return PointerOutcome::Missed;
        };
        let bounds = record.bounds();
        let position = record.position();
        let size = record.size();
        self.registry.focus(id);

        match self.chrome.hit_test(bounds, point) {
            Some(ChromeHit::Resize(handle)) => {
                let resize = ResizeSession::begin(id, handle, point, position, size);
                self.begin_session(SessionKind::Resize(resize));
                PointerOutcome::ResizeStarted(id, handle)
            }
            Some(ChromeHit::TitleBar) => {
                let drag = DragSession::begin(id, point, position);
                self.begin_session(SessionKind::Drag(drag));
                PointerOutcome::DragStarted(id)
            }
            Some(ChromeHit::Close) => {
                self.registry.close(id);
                PointerOutcome::Closed(id)
            }
            Some(ChromeHit::Body) | None => PointerOutcome::Focused(id),
        }
    }

    /// Apply a pointer move to the active session. Returns the window that
    /// changed, if any.
    pub fn pointer_move(&mut self, point: Point) -> Option<WindowId> {
        let kind = self.session.as_ref()?.kind();
        match kind {
            SessionKind::Drag(drag) => {
                self.registry.move_to(drag.id, drag.position_at(point));
                Some(drag.id)
            }
            SessionKind::Resize(resize) => {
                let (position, size) = resize.bounds_at(point);
                self.registry.set_bounds(resize.id, position, size);
                Some(resize.id)
            }
        }
    }

    pub fn pointer_up(&mut self) -> Option<WindowId> {
        let id = self.session.as_ref()?.window();
        self.end_session("pointer released");
        Some(id)
    }

    /// Drop the active session without applying anything further.
    pub fn abandon_session(&mut self) {
        if self.session.is_some() {
            self.end_session("abandoned");
        }
    }

    fn begin_session(&mut self, kind: SessionKind) {
        let session = PointerSession::new(kind, self.grabs.acquire());
        tracing::debug!(
            window_id = %session.window(),
            drag = session.is_drag(),
            resize = session.is_resize(),
            "pointer session started"
        );
        self.session = Some(session);
    }

    fn end_session(&mut self, reason: &'static str) {
        if let Some(session) = self.session.take() {
            tracing::debug!(window_id = %session.window(), reason, "pointer session ended");
        }
    }

    /// Route a terminal event through the manager. Returns true when the
    /// event was consumed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusLost => {
                self.abandon_session();
                false
            }
            _ => false,
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        let point = self.cells.cell_to_pixel(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pointer_down(point) != PointerOutcome::Missed
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                self.pointer_move(point).is_some()
            }
            MouseEventKind::Up(MouseButton::Left) => self.pointer_up().is_some(),
            _ => false,
        }
    }
}
