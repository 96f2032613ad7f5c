//! Home-screen launcher core: a paged app grid with persisted
//! placement and live cross-page drag. The surrounding shell feeds
//! [`events::LauncherEvent`]s into a [`home::HomeScreen`] and renders
//! the [`events::ViewCommand`]s that come back; rendering, gesture
//! recognition and app enumeration stay outside.

pub mod config;
pub mod directory;
pub mod drag;
pub mod events;
pub mod grid;
pub mod home;
pub mod model;
pub mod placement;
pub mod positions;
pub mod worker;

pub use config::{LayoutConfig, SortOrder, GRID_ROWS};
pub use directory::{AppDirectory, Launcher};
pub use events::{GridChange, LauncherEvent, ViewCommand};
pub use home::HomeScreen;
pub use model::AppEntry;
pub use positions::{FilePositionStore, MemoryPositionStore, PositionRecord, PositionStore};
