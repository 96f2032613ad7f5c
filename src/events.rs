/// Everything the surrounding shell can ask of the core. One enum and
/// one dispatch point instead of a web of per-widget callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum LauncherEvent {
    AppTapped { page: usize, slot: usize },
    AppLongPressed { page: usize, slot: usize },
    PageLongPressed { page: usize },
    DragStarted { page: usize, slot: usize },
    /// Pointer moved while dragging; `x` is in viewport coordinates.
    DragMoved { x: f32, viewport_width: f32 },
    /// Dragged card hovered over another slot on the same page.
    DragOver { page: usize, from: usize, to: usize },
    DragReleased,
    DragCancelled,
    ShowPage { page: usize },
    RemoveFromHome { app_id: String },
    MoveToPage { app_id: String, page: usize },
    CreateFolder { app_id: String, name: String },
    Reload,
}

/// Minimal structural change to one page, for the view to animate
/// without a full rebind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridChange {
    Inserted { slot: usize },
    Removed { slot: usize },
    Moved { from: usize, to: usize },
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    Grid { page: usize, change: GridChange },
    /// Advisory: scroll to this page (edge-drag requested it).
    SwitchPage { page: usize },
    /// The current page actually changed; update indicators.
    PageShown { page: usize },
    Launched { app_id: String, ok: bool },
    ShowAppMenu { app_id: String, page: usize, slot: usize },
    ShowPageMenu { page: usize },
    Notice { text: String },
}
