//! JSON file backed settings store
//!
//! The file keeps the layout the admin page has always used:
//!
//! ```json
//! { "settings": { "printers": { ... }, "design": { ... }, "abbreviations": { ... } } }
//! ```
//!
//! Readers take a [`Settings`] snapshot per operation; writers replace the
//! whole record. The file is written first (temp file + rename), then the
//! in-memory copy is swapped, so a failed write leaves both untouched.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument};

use super::types::Settings;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    settings: Option<Settings>,
}

struct Inner {
    /// None = in-memory only
    path: Option<PathBuf>,
    current: RwLock<Settings>,
    /// Serializes file writes
    write_lock: tokio::sync::Mutex<()>,
}

/// Settings store handle (cheap to clone)
#[derive(Clone)]
pub struct SettingsStore {
    inner: Arc<Inner>,
}

impl SettingsStore {
    /// Open the settings file, creating it with bootstrap values when absent
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn open(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref().to_path_buf();

        let settings = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let file: SettingsFile = serde_json::from_slice(&bytes)?;
                match file.settings {
                    Some(settings) => settings,
                    None => {
                        info!("Settings key missing, writing defaults");
                        let settings = Settings::default();
                        write_file(&path, &settings).await?;
                        settings
                    }
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("Settings file not found, creating with defaults");
                let settings = Settings::default();
                write_file(&path, &settings).await?;
                settings
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self::build(Some(path), settings))
    }

    /// Store that never touches disk
    pub fn in_memory(settings: Settings) -> Self {
        Self::build(None, settings)
    }

    fn build(path: Option<PathBuf>, settings: Settings) -> Self {
        Self {
            inner: Arc::new(Inner {
                path,
                current: RwLock::new(settings),
                write_lock: tokio::sync::Mutex::new(()),
            }),
        }
    }

    /// Current settings record
    pub fn snapshot(&self) -> Settings {
        self.inner.current.read().clone()
    }

    /// Replace the settings record wholesale
    pub async fn replace(&self, settings: Settings) -> SettingsResult<()> {
        let _guard = self.inner.write_lock.lock().await;

        if let Some(path) = &self.inner.path {
            write_file(path, &settings).await?;
        }
        *self.inner.current.write() = settings;

        info!("Settings replaced");
        Ok(())
    }
}

async fn write_file(path: &Path, settings: &Settings) -> SettingsResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    let body = serde_json::to_vec_pretty(&SettingsFile {
        settings: Some(settings.clone()),
    })?;

    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, body).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}
