use super::KeyValueStore;
use crate::error::{MarqueeError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed key-value store. Each key maps to a single JSON file under the
/// store root, so the favorites payload is inspectable and trivially portable.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Platform data directory for marquee (e.g. `~/.local/share/marquee` on
    /// Linux). Fails only when the platform reports no home directory at all.
    pub fn default_root() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "marquee", "marquee")
            .ok_or_else(|| MarqueeError::Storage("Could not determine data dir".to_string()))?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(MarqueeError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(MarqueeError::Io)?;
        Ok(Some(content))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_root()?;
        fs::write(self.key_path(key), value).map_err(MarqueeError::Io)?;
        Ok(())
    }
}
