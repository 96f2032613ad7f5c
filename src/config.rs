use log::warn;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Row count is fixed; only the column count is configurable.
pub const GRID_ROWS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Name,
    InstallDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutConfig {
    #[serde(default = "default_num_pages")]
    pub num_pages: usize,
    #[serde(default = "default_grid_columns")]
    pub grid_columns: usize,
    #[serde(default = "default_icon_size")]
    pub icon_size: u32,
    #[serde(default)]
    pub show_system_apps: bool,
    #[serde(default = "default_sort_order")]
    pub sort_by: SortOrder,
}

fn default_num_pages() -> usize {
    3
}

fn default_grid_columns() -> usize {
    4
}

fn default_icon_size() -> u32 {
    80
}

fn default_sort_order() -> SortOrder {
    SortOrder::Name
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            num_pages: default_num_pages(),
            grid_columns: default_grid_columns(),
            icon_size: default_icon_size(),
            show_system_apps: false,
            sort_by: default_sort_order(),
        }
    }
}

impl LayoutConfig {
    pub fn page_capacity(&self) -> usize {
        self.grid_columns * GRID_ROWS
    }

    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "grid_launcher", "grid_launcher")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn load() -> Self {
        if let Some(dir) = Self::config_dir() {
            let config_path = dir.join("config.json");
            if config_path.exists() {
                if let Ok(file) = std::fs::File::open(config_path) {
                    if let Ok(config) = serde_json::from_reader(file) {
                        return config;
                    } else {
                        warn!("Failed to parse layout config, using default");
                    }
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(dir) = Self::config_dir() {
            if std::fs::create_dir_all(&dir).is_ok() {
                let config_path = dir.join("config.json");
                if let Ok(file) = std::fs::File::create(config_path) {
                    let _ = serde_json::to_writer_pretty(file, self);
                }
            }
        }
    }
}
