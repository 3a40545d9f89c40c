use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use error_stack::Report;
use tokio::sync::RwLock;

use kernel::interface::storage::KeyValueStore;
use kernel::KernelError;

use crate::env_or;
use crate::error::{ConvertError, DriverError};

const STORAGE_DIR: &str = "BOOKSHELF_STORAGE_DIR";
const DEFAULT_STORAGE_DIR: &str = "./storage";
const IN_MEMORY: &str = "memory";

/// Whole-value storage: one `<key>.json` file per key, or a map for throwaway sessions.
pub enum LocalStorage {
    Directory(PathBuf),
    Memory(RwLock<HashMap<String, String>>),
}

impl LocalStorage {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Self::from_vars(env_or)
    }

    pub(crate) fn from_vars(
        var: impl Fn(&str, &str) -> Result<String, DriverError>,
    ) -> error_stack::Result<Self, KernelError> {
        let dir = var(STORAGE_DIR, DEFAULT_STORAGE_DIR)?;
        if dir == IN_MEMORY {
            tracing::info!("using in-memory storage, nothing will survive a restart");
            return Ok(Self::in_memory());
        }
        Ok(Self::directory(dir))
    }

    pub fn directory(dir: impl Into<PathBuf>) -> Self {
        Self::Directory(dir.into())
    }

    pub fn in_memory() -> Self {
        Self::Memory(RwLock::new(HashMap::new()))
    }

    fn file(dir: &Path, key: &str) -> error_stack::Result<PathBuf, KernelError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(Report::new(KernelError::Invalid)
                .attach_printable(format!("unusable storage key {key:?}")));
        }
        Ok(dir.join(format!("{key}.json")))
    }
}

#[async_trait::async_trait]
impl KeyValueStore for LocalStorage {
    async fn get(&self, key: &str) -> error_stack::Result<Option<String>, KernelError> {
        match self {
            LocalStorage::Directory(dir) => {
                let path = Self::file(dir, key)?;
                match tokio::fs::read_to_string(&path).await {
                    Ok(value) => Ok(Some(value)),
                    Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
                    Err(error) => Err(error).convert_error().map_err(|report| {
                        report.attach_printable(format!("failed to read {}", path.display()))
                    }),
                }
            }
            LocalStorage::Memory(map) => Ok(map.read().await.get(key).cloned()),
        }
    }

    async fn set(&self, key: &str, value: String) -> error_stack::Result<(), KernelError> {
        match self {
            LocalStorage::Directory(dir) => {
                let path = Self::file(dir, key)?;
                let staging = path.with_extension("json.tmp");
                tokio::fs::create_dir_all(dir).await.convert_error()?;
                tokio::fs::write(&staging, value).await.convert_error()?;
                tokio::fs::rename(&staging, &path)
                    .await
                    .convert_error()
                    .map_err(|report| {
                        report.attach_printable(format!("failed to replace {}", path.display()))
                    })
            }
            LocalStorage::Memory(map) => {
                map.write().await.insert(key.to_string(), value);
                Ok(())
            }
        }
    }

}
