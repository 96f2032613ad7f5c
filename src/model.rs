use std::time::{SystemTime, UNIX_EPOCH};

/// Opaque icon reference; the app directory owns the actual image data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconHandle(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    pub id: String,
    pub name: String,
    pub icon: Option<IconHandle>,
    pub is_system: bool,
}

impl AppEntry {
    pub fn new<S: Into<String>>(id: S, name: S) -> Self {
        let id = id.into();
        let name = name.into();
        let name = if name.trim().is_empty() {
            "Unknown".to_string()
        } else {
            name
        };
        Self {
            id,
            name,
            icon: None,
            is_system: false,
        }
    }

    pub fn system<S: Into<String>>(id: S, name: S) -> Self {
        Self {
            is_system: true,
            ..Self::new(id, name)
        }
    }

    pub fn with_icon(mut self, icon: IconHandle) -> Self {
        self.icon = Some(icon);
        self
    }
}

// Folder support is a stub: folders can be constructed but are neither
// nested nor placed on the grid yet.
#[derive(Debug, Clone)]
pub struct AppFolder {
    pub id: String,
    pub name: String,
    pub apps: Vec<AppEntry>,
    pub page: usize,
    pub slot: usize,
}

impl AppFolder {
    pub fn create_new<S: Into<String>>(name: S, page: usize, slot: usize) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        Self {
            id: format!("folder_{millis}"),
            name: name.into(),
            apps: Vec::new(),
            page,
            slot,
        }
    }
}
