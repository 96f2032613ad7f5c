use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub app_id: String,
    pub page: usize,
    pub slot: usize,
}

impl PositionRecord {
    pub fn new<S: Into<String>>(app_id: S, page: usize, slot: usize) -> Self {
        Self {
            app_id: app_id.into(),
            page,
            slot,
        }
    }

    /// Legacy `id:page:slot` line format. Identifiers containing `:` or
    /// `|` break it, which is why the store now writes JSON; this codec
    /// only survives for reading old files.
    pub fn parse_line(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split(':').collect();
        if parts.len() != 3 {
            return None;
        }
        let page = parts[1].parse().ok()?;
        let slot = parts[2].parse().ok()?;
        if parts[0].is_empty() {
            return None;
        }
        Some(Self::new(parts[0], page, slot))
    }

    pub fn to_line(&self) -> String {
        format!("{}:{}:{}", self.app_id, self.page, self.slot)
    }
}

pub fn encode_legacy(records: &[PositionRecord]) -> String {
    records
        .iter()
        .map(PositionRecord::to_line)
        .collect::<Vec<_>>()
        .join("|")
}

pub fn parse_legacy(text: &str) -> Vec<PositionRecord> {
    text.split('|')
        .filter_map(PositionRecord::parse_line)
        .collect()
}

/// Durable app-id -> (page, slot) mapping. `load` returns an empty list
/// when nothing has been saved yet; that is the normal first-run state.
pub trait PositionStore: Send {
    fn load(&self) -> Vec<PositionRecord>;
    fn save(&mut self, records: &[PositionRecord]);

    fn upsert(&mut self, record: PositionRecord) {
        let mut records = self.load();
        records.retain(|r| r.app_id != record.app_id);
        records.push(record);
        self.save(&records);
    }

    fn remove(&mut self, app_id: &str) {
        let mut records = self.load();
        records.retain(|r| r.app_id != app_id);
        self.save(&records);
    }
}

pub struct FilePositionStore {
    path: PathBuf,
}

impl FilePositionStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn at_default_location() -> Option<Self> {
        directories::ProjectDirs::from("com", "grid_launcher", "grid_launcher")
            .map(|dirs| Self::new(dirs.data_dir().join("positions.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PositionStore for FilePositionStore {
    fn load(&self) -> Vec<PositionRecord> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&text) {
            Ok(records) => records,
            // Pre-JSON files used pipe-delimited triples.
            Err(_) => parse_legacy(text.trim()),
        }
    }

    fn save(&mut self, records: &[PositionRecord]) {
        if let Some(parent) = self.path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                warn!("Failed to create position store dir {:?}", parent);
                return;
            }
        }
        match std::fs::File::create(&self.path) {
            Ok(file) => {
                let _ = serde_json::to_writer_pretty(file, records);
            }
            Err(err) => warn!("Failed to write position store: {err}"),
        }
    }
}

#[derive(Default)]
pub struct MemoryPositionStore {
    records: Vec<PositionRecord>,
}

impl MemoryPositionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<PositionRecord>) -> Self {
        Self { records }
    }
}

impl PositionStore for MemoryPositionStore {
    fn load(&self) -> Vec<PositionRecord> {
        self.records.clone()
    }

    fn save(&mut self, records: &[PositionRecord]) {
        self.records = records.to_vec();
    }
}
