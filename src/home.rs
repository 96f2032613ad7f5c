use crate::config::LayoutConfig;
use crate::directory::{AppDirectory, Launcher};
use crate::drag::{DragCoordinator, DragOutcome, DragPhase};
use crate::events::{GridChange, LauncherEvent, ViewCommand};
use crate::grid::PageGrid;
use crate::model::{AppEntry, AppFolder};
use crate::placement::distribute;
use crate::positions::{PositionRecord, PositionStore};
use crate::worker::PositionWriter;
use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, warn};
use std::time::Instant;

/// The launcher core. All mutation happens on the caller's (UI) thread
/// through `handle`; only position persistence leaves it, via the
/// single-writer queue. The in-memory record list mirrors what the
/// writer will persist, so lookups never wait on disk.
pub struct HomeScreen {
    config: LayoutConfig,
    pages: Vec<PageGrid>,
    positions: Vec<PositionRecord>,
    writer: PositionWriter,
    directory: Box<dyn AppDirectory>,
    launcher: Box<dyn Launcher>,
    drag: DragCoordinator,
    current_page: usize,
    commands: Sender<ViewCommand>,
}

impl HomeScreen {
    pub fn new(
        config: LayoutConfig,
        directory: Box<dyn AppDirectory>,
        launcher: Box<dyn Launcher>,
        store: Box<dyn PositionStore>,
    ) -> (Self, Receiver<ViewCommand>) {
        let positions = store.load();
        let writer = PositionWriter::spawn(store);
        let pages = (0..config.num_pages).map(|_| PageGrid::new()).collect();
        let (tx, rx) = unbounded();
        let home = Self {
            config,
            pages,
            positions,
            writer,
            directory,
            launcher,
            drag: DragCoordinator::new(),
            current_page: 0,
            commands: tx,
        };
        (home, rx)
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page(&self, page: usize) -> Option<&PageGrid> {
        self.pages.get(page)
    }

    pub fn pages(&self) -> &[PageGrid] {
        &self.pages
    }

    pub fn positions(&self) -> &[PositionRecord] {
        &self.positions
    }

    /// Blocks until queued position writes hit the store. Shutdown and
    /// test hook, not part of the event path.
    pub fn flush(&self) {
        self.writer.flush();
    }

    /// Requery the directory and rebuild every page. Never runs during
    /// an active drag: a full rebind would break gesture continuity, so
    /// the shell retries after the drag settles.
    pub fn reload(&mut self) {
        if self.drag.is_dragging() {
            warn!("reload requested mid-drag; ignoring");
            return;
        }
        let apps = self.directory.all_apps(self.config.show_system_apps);
        let distributed = distribute(&apps, &self.positions, &self.config);
        self.pages = distributed.into_iter().map(page_from).collect();
        for page in 0..self.pages.len() {
            self.emit(ViewCommand::Grid {
                page,
                change: GridChange::Reset,
            });
        }
        if self.current_page >= self.config.num_pages {
            self.current_page = 0;
        }
    }

    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
        self.config.save();
        self.reload();
    }

    pub fn handle(&mut self, event: LauncherEvent) {
        match event {
            LauncherEvent::AppTapped { page, slot } => self.on_tap(page, slot),
            LauncherEvent::AppLongPressed { page, slot } => self.on_long_press(page, slot),
            LauncherEvent::PageLongPressed { page } => {
                if page < self.pages.len() {
                    self.emit(ViewCommand::ShowPageMenu { page });
                }
            }
            LauncherEvent::DragStarted { page, slot } => self.on_drag_start(page, slot),
            LauncherEvent::DragMoved { x, viewport_width } => {
                if let Some(target) =
                    self.drag
                        .update(x, viewport_width, self.config.num_pages, Instant::now())
                {
                    self.emit(ViewCommand::SwitchPage { page: target });
                }
            }
            LauncherEvent::DragOver { page, from, to } => self.on_drag_over(page, from, to),
            LauncherEvent::DragReleased => self.on_drag_release(),
            LauncherEvent::DragCancelled => self.on_drag_cancel(),
            LauncherEvent::ShowPage { page } => self.show_page(page),
            LauncherEvent::RemoveFromHome { app_id } => self.remove_from_home(&app_id),
            LauncherEvent::MoveToPage { app_id, page } => self.move_to_page(&app_id, page),
            LauncherEvent::CreateFolder { app_id, name } => self.create_folder(&app_id, &name),
            LauncherEvent::Reload => self.reload(),
        }
    }

    fn on_tap(&mut self, page: usize, slot: usize) {
        let Some(grid) = self.pages.get(page) else {
            return;
        };
        if grid.is_dragging() {
            return;
        }
        if let Some(app) = grid.app_at(slot) {
            let ok = self.launcher.launch(app);
            let app_id = app.id.clone();
            if !ok {
                warn!("launch failed for {app_id}");
            }
            self.emit(ViewCommand::Launched { app_id, ok });
        }
    }

    fn on_long_press(&mut self, page: usize, slot: usize) {
        let Some(grid) = self.pages.get(page) else {
            return;
        };
        if grid.is_dragging() {
            return;
        }
        if let Some(app) = grid.app_at(slot) {
            let app_id = app.id.clone();
            self.emit(ViewCommand::ShowAppMenu { app_id, page, slot });
        }
    }

    fn on_drag_start(&mut self, page: usize, slot: usize) {
        let Some(grid) = self.pages.get_mut(page) else {
            return;
        };
        if slot >= grid.len() {
            warn!("drag start at empty slot {slot} on page {page}");
            return;
        }
        grid.set_dragging(true);
        self.drag.begin(page, slot);
    }

    fn on_drag_over(&mut self, page: usize, from: usize, to: usize) {
        // Reorders only apply to the page the drag started on.
        let DragPhase::Dragging {
            page: source_page, ..
        } = self.drag.phase()
        else {
            return;
        };
        if page != source_page {
            return;
        }
        let Some(grid) = self.pages.get_mut(page) else {
            return;
        };
        if !grid.move_item(from, to) {
            return;
        }
        self.emit(ViewCommand::Grid {
            page,
            change: GridChange::Moved { from, to },
        });
        // Each reorder immediately persists the moved app's new slot.
        if let Some(app) = self.pages[page].app_at(to) {
            let record = PositionRecord::new(app.id.clone(), page, to);
            self.upsert_position(record);
        }
    }

    fn on_drag_release(&mut self) {
        match self.drag.release() {
            DragOutcome::Idle => {}
            DragOutcome::InPage { page } => {
                if let Some(grid) = self.pages.get_mut(page) {
                    grid.set_dragging(false);
                }
            }
            DragOutcome::CrossPage {
                from_page,
                from_slot,
                to_page,
            } => {
                if let Some(grid) = self.pages.get_mut(from_page) {
                    grid.set_dragging(false);
                }
                self.commit_cross_page(from_page, from_slot, to_page);
            }
        }
    }

    fn commit_cross_page(&mut self, from_page: usize, from_slot: usize, to_page: usize) {
        if to_page >= self.pages.len() {
            warn!("cross-page drop onto missing page {to_page}");
            return;
        }
        let Some(app) = self.pages[from_page].remove_app_at(from_slot) else {
            return;
        };
        self.emit(ViewCommand::Grid {
            page: from_page,
            change: GridChange::Removed { slot: from_slot },
        });
        let to_slot = self.pages[to_page].len();
        self.pages[to_page].insert_app(app.clone(), to_slot);
        self.emit(ViewCommand::Grid {
            page: to_page,
            change: GridChange::Inserted { slot: to_slot },
        });
        self.upsert_position(PositionRecord::new(app.id, to_page, to_slot));
    }

    fn on_drag_cancel(&mut self) {
        if let DragPhase::Dragging { page, .. } = self.drag.phase() {
            if let Some(grid) = self.pages.get_mut(page) {
                grid.set_dragging(false);
            }
        }
        // No rollback of reorders already applied; see the coordinator.
        self.drag.cancel();
    }

    fn show_page(&mut self, page: usize) {
        if page >= self.config.num_pages {
            return;
        }
        self.current_page = page;
        self.emit(ViewCommand::PageShown { page });
    }

    fn remove_from_home(&mut self, app_id: &str) {
        match self.locate(app_id) {
            Some((page, slot)) => {
                let removed = self.pages[page].remove_app_at(slot);
                self.emit(ViewCommand::Grid {
                    page,
                    change: GridChange::Removed { slot },
                });
                self.remove_position(app_id);
                if let Some(app) = removed {
                    self.emit(ViewCommand::Notice {
                        text: format!("{} removed from home screen", app.name),
                    });
                }
            }
            None => {
                self.emit(ViewCommand::Notice {
                    text: "App not found on home screen".to_string(),
                });
            }
        }
    }

    fn move_to_page(&mut self, app_id: &str, target_page: usize) {
        if target_page >= self.pages.len() {
            warn!("move to missing page {target_page}");
            return;
        }
        let Some((page, slot)) = self.locate(app_id) else {
            warn!("move requested for {app_id}, which is not on any page");
            return;
        };
        let Some(app) = self.pages[page].remove_app_at(slot) else {
            return;
        };
        self.emit(ViewCommand::Grid {
            page,
            change: GridChange::Removed { slot },
        });
        let to_slot = self.pages[target_page].len();
        self.pages[target_page].insert_app(app.clone(), to_slot);
        self.emit(ViewCommand::Grid {
            page: target_page,
            change: GridChange::Inserted { slot: to_slot },
        });
        self.upsert_position(PositionRecord::new(app.id, target_page, to_slot));
    }

    fn create_folder(&mut self, app_id: &str, name: &str) {
        let Some((page, slot)) = self.locate(app_id) else {
            return;
        };
        let folder = AppFolder::create_new(name, page, slot);
        debug!("folder {} requested for {app_id}; folders are stubbed", folder.id);
        self.emit(ViewCommand::Notice {
            text: "Folders are not available yet".to_string(),
        });
    }

    /// The grids are the live truth for where an app sits; the record
    /// list can lag them between a structural change and its write.
    fn locate(&self, app_id: &str) -> Option<(usize, usize)> {
        for (page, grid) in self.pages.iter().enumerate() {
            if let Some(slot) = grid.apps().iter().position(|app| app.id == app_id) {
                return Some((page, slot));
            }
        }
        None
    }

    fn upsert_position(&mut self, record: PositionRecord) {
        self.positions.retain(|r| r.app_id != record.app_id);
        self.positions.push(record.clone());
        self.writer.upsert(record);
    }

    fn remove_position(&mut self, app_id: &str) {
        self.positions.retain(|r| r.app_id != app_id);
        self.writer.remove(app_id);
    }

    fn emit(&self, command: ViewCommand) {
        let _ = self.commands.send(command);
    }
}

fn page_from(apps: Vec<AppEntry>) -> PageGrid {
    let mut grid = PageGrid::new();
    grid.set_apps(apps);
    grid
}
