use crate::state::Slots;
use serde_json::Value;
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::{error, warn};

pub const USER_RESOURCE: &str = "user";
pub const LEADERBOARD_RESOURCE: &str = "leaderboard";

pub fn resolve_data_dir() -> PathBuf {
    env::var("PORTAL_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

/// Reads and parses `<dir>/<name>.json`. Any failure collapses to `None`
/// after logging; the content is passed through unvalidated, so a slot can
/// hold whatever JSON the file contained.
pub async fn load_resource(dir: &Path, name: &str) -> Option<Value> {
    let path = dir.join(format!("{name}.json"));
    match fs::read(&path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(err) => {
                error!("failed to parse {name} resource at {}: {err}", path.display());
                None
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!("{name} resource not found at {}", path.display());
            None
        }
        Err(err) => {
            error!("failed to read {name} resource at {}: {err}", path.display());
            None
        }
    }
}

/// Initial population of both slots, one loader call per resource.
pub async fn load_slots(dir: &Path) -> Slots {
    Slots {
        user: load_resource(dir, USER_RESOURCE).await,
        leaderboard: load_resource(dir, LEADERBOARD_RESOURCE).await,
    }
}
