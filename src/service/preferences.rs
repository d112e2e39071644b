//! 使用者偏好（深色模式）
//!
//! 與計分無關，只做載入 / 儲存。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("preferences I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("preferences JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub dark_mode: bool,
}

/// JSON 檔案儲存；`path` 為 None 時只存在記憶體
#[derive(Clone, Debug, Default)]
pub struct PreferencesStore {
    path: Option<PathBuf>,
}

impl PreferencesStore {
    pub fn in_memory() -> Self {
        Self { path: None }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 檔案不存在時回傳預設值
    pub fn load(&self) -> Result<Preferences, PreferencesError> {
        let Some(path) = &self.path else {
            return Ok(Preferences::default());
        };
        if !path.exists() {
            return Ok(Preferences::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, prefs: &Preferences) -> Result<(), PreferencesError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        fs::write(path, serde_json::to_string_pretty(prefs)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferencesStore::at(dir.path().join("prefs.json"));
        assert_eq!(store.load().unwrap(), Preferences::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferencesStore::at(dir.path().join("prefs.json"));
        store.save(&Preferences { dark_mode: true }).unwrap();
        assert!(store.load().unwrap().dark_mode);
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();
        let err = PreferencesStore::at(&path).load().unwrap_err();
        assert!(matches!(err, PreferencesError::Json(_)));
    }

    #[test]
    fn test_in_memory_store() {
        let store = PreferencesStore::in_memory();
        store.save(&Preferences { dark_mode: true }).unwrap();
        assert!(!store.load().unwrap().dark_mode);
        assert!(store.path().is_none());
    }
}
