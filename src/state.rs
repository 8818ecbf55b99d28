use serde_json::Value;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// In-memory holders for the two resources. `None` means the slot is serving
/// its fallback; `Some` holds the last successfully loaded JSON, whole.
#[derive(Debug, Default)]
pub struct Slots {
    pub user: Option<Value>,
    pub leaderboard: Option<Value>,
}

#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub slots: Arc<Mutex<Slots>>,
}

impl AppState {
    pub fn new(data_dir: PathBuf, slots: Slots) -> Self {
        Self {
            data_dir,
            slots: Arc::new(Mutex::new(slots)),
        }
    }
}
