use crate::positions::{PositionRecord, PositionStore};
use crossbeam_channel::{bounded, unbounded, Sender};
use log::warn;
use std::thread;
use std::time::Duration;

enum StoreCommand {
    Upsert(PositionRecord),
    Remove(String),
    Replace(Vec<PositionRecord>),
    Flush(Sender<()>),
}

/// Owns the position store on its own thread so grid mutation never
/// waits on disk, and so overlapping writes apply strictly in send
/// order. Dropping the writer ends the thread after the queue drains.
pub struct PositionWriter {
    tx: Sender<StoreCommand>,
}

impl PositionWriter {
    pub fn spawn(mut store: Box<dyn PositionStore>) -> Self {
        let (tx, rx) = unbounded::<StoreCommand>();
        thread::spawn(move || {
            while let Ok(command) = rx.recv() {
                match command {
                    StoreCommand::Upsert(record) => store.upsert(record),
                    StoreCommand::Remove(app_id) => store.remove(&app_id),
                    StoreCommand::Replace(records) => store.save(&records),
                    StoreCommand::Flush(ack) => {
                        let _ = ack.send(());
                    }
                }
            }
        });
        Self { tx }
    }

    pub fn upsert(&self, record: PositionRecord) {
        self.send(StoreCommand::Upsert(record));
    }

    pub fn remove(&self, app_id: &str) {
        self.send(StoreCommand::Remove(app_id.to_string()));
    }

    pub fn replace_all(&self, records: Vec<PositionRecord>) {
        self.send(StoreCommand::Replace(records));
    }

    /// Blocks until every previously queued write has been applied.
    /// Meant for shutdown and tests, not the event path.
    pub fn flush(&self) {
        let (ack_tx, ack_rx) = bounded(1);
        self.send(StoreCommand::Flush(ack_tx));
        if ack_rx.recv_timeout(Duration::from_secs(5)).is_err() {
            warn!("position writer did not flush in time");
        }
    }

    fn send(&self, command: StoreCommand) {
        if self.tx.send(command).is_err() {
            warn!("position writer thread is gone; dropping write");
        }
    }
}
