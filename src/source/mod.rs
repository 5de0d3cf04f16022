//! JSON-file data source.
//!
//! The source owns all file I/O. It runs on a dedicated thread with a
//! current-thread tokio runtime, receives [`SourceCommand`]s over a bounded
//! channel and replies through the UI event channel. From the view's
//! perspective every command is fire-and-forget; completion shows up as a
//! store transition.
//!
//! Data files live at `<data_dir>/<collection>.json` and hold a JSON object
//! mapping id → record, the same normalized shape as the store slice.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::Sender;

use thiserror::Error;
use tokio::sync::mpsc;

use crate::store::{ElementId, Record};
use crate::ui::events::AppEvent;

/// Commands accepted by the source task.
#[derive(Debug)]
pub enum SourceCommand {
    /// Read a collection's data file and reply with its elements.
    Load { collection: String },
    /// Persist a snapshot of a collection's elements.
    Save {
        collection: String,
        elements: HashMap<ElementId, Record>,
    },
}

/// Errors from data-file operations.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read data file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse data file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize collection '{collection}': {source}")]
    Serialize {
        collection: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write data file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Sending side of the source channel, held by the app loop.
#[derive(Clone)]
pub struct SourceHandle {
    tx: mpsc::Sender<SourceCommand>,
}

impl SourceHandle {
    /// Fire-and-forget send. A full or closed channel is logged and
    /// otherwise ignored; the UI keeps rendering from the store it has.
    pub fn send(&self, command: SourceCommand) {
        if let Err(err) = self.tx.try_send(command) {
            tracing::warn!(error = %err, "source channel unavailable, command dropped");
        }
    }
}

/// Spawn the source task. Replies arrive on `events`.
pub fn spawn(data_dir: PathBuf, events: Sender<AppEvent>) -> SourceHandle {
    let (tx, rx) = mpsc::channel(32);
    let spawned = std::thread::Builder::new()
        .name("recordesk-source".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread().build() {
                Ok(runtime) => runtime,
                Err(err) => {
                    tracing::error!(error = %err, "failed to build source runtime");
                    return;
                }
            };
            runtime.block_on(run(JsonStore::new(data_dir), rx, events));
        });
    if let Err(err) = spawned {
        tracing::error!(error = %err, "failed to spawn source thread");
    }
    SourceHandle { tx }
}

async fn run(
    store: JsonStore,
    mut rx: mpsc::Receiver<SourceCommand>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = rx.recv().await {
        match command {
            SourceCommand::Load { collection } => match store.load(&collection).await {
                Ok(elements) => {
                    tracing::debug!(collection, count = elements.len(), "collection loaded");
                    let _ = events.send(AppEvent::SourceLoaded {
                        collection,
                        elements,
                    });
                }
                Err(err) => {
                    tracing::warn!(collection, error = %err, "collection load failed");
                    let _ = events.send(AppEvent::SourceFailed {
                        collection,
                        error: err.to_string(),
                    });
                }
            },
            SourceCommand::Save {
                collection,
                elements,
            } => {
                if let Err(err) = store.save(&collection, &elements).await {
                    tracing::warn!(collection, error = %err, "collection save failed");
                    let _ = events.send(AppEvent::SourceFailed {
                        collection,
                        error: err.to_string(),
                    });
                }
            }
        }
    }
}

/// Reads and writes `<data_dir>/<collection>.json`.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn data_path(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{collection}.json"))
    }

    /// Load a collection. A missing file reads as an empty collection.
    ///
    /// The map key is authoritative for the id; records missing their `_id`
    /// field get it back-filled from the key.
    pub async fn load(
        &self,
        collection: &str,
    ) -> Result<HashMap<ElementId, Record>, SourceError> {
        let path = self.data_path(collection);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(HashMap::new());
            }
            Err(err) => {
                return Err(SourceError::Read {
                    path,
                    source: err,
                })
            }
        };

        let mut elements: HashMap<ElementId, Record> =
            serde_json::from_str(&content).map_err(|e| SourceError::Parse {
                path,
                source: e,
            })?;
        for (id, record) in elements.iter_mut() {
            if record.id() != Some(id.as_str()) {
                record.set_id(id);
            }
        }
        Ok(elements)
    }

    /// Persist a collection snapshot, creating the data dir if needed.
    pub async fn save(
        &self,
        collection: &str,
        elements: &HashMap<ElementId, Record>,
    ) -> Result<(), SourceError> {
        let path = self.data_path(collection);
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| SourceError::Write {
                path: path.clone(),
                source: e,
            })?;

        let content =
            serde_json::to_string_pretty(elements).map_err(|e| SourceError::Serialize {
                collection: collection.to_string(),
                source: e,
            })?;
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| SourceError::Write { path, source: e })
    }
}
