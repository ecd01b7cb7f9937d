use crate::errors::AppError;
use crate::models::Snapshot;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Reads the activity snapshot at `path`. A missing file is an empty history;
/// unreadable or malformed files are errors.
pub async fn load_snapshot(path: &Path) -> Result<Snapshot, AppError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!("no activity file at {}, starting empty", path.display());
            return Ok(Snapshot::default());
        }
        Err(source) => {
            return Err(AppError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_slice(&bytes).map_err(|source| AppError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub async fn persist_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), AppError> {
    let io_error = |source| AppError::Io {
        path: path.to_path_buf(),
        source,
    };

    let payload = serde_json::to_vec_pretty(snapshot).map_err(|source| AppError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(io_error)?;
    }
    fs::write(path, payload).await.map_err(io_error)?;
    Ok(())
}
