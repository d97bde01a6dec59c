//! Level-progress persistence
//!
//! A single JSON record at a fixed relative path. Anything wrong with it
//! (missing, unreadable, malformed, out-of-range level) degrades to "no
//! save" with a warning rather than an error.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::FINAL_LEVEL;

/// Default save location, relative to the working directory
pub const SAVE_PATH: &str = "save_data.json";

/// The persisted record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    /// Level to resume at (1-10)
    pub level: u32,
}

/// Handle to the save file on disk
#[derive(Debug, Clone)]
pub struct SaveFile {
    path: PathBuf,
}

impl Default for SaveFile {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveFile {
    pub fn new() -> Self {
        Self::at(SAVE_PATH)
    }

    /// Use a custom location (tests, frontends with their own data dir)
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the save, or `None` when there is no usable one
    pub fn load(&self) -> Option<SaveData> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                log::warn!("Save file unreadable ({err}), treating as no save");
                return None;
            }
        };
        match serde_json::from_str::<SaveData>(&text) {
            Ok(data) if (1..=FINAL_LEVEL).contains(&data.level) => Some(data),
            Ok(data) => {
                log::warn!("Save file has invalid level {}, treating as no save", data.level);
                None
            }
            Err(err) => {
                log::warn!("Save file malformed ({err}), treating as no save");
                None
            }
        }
    }

    /// Full overwrite of the record
    pub fn write(&self, level: u32) {
        if let Ok(json) = serde_json::to_string(&SaveData { level }) {
            match fs::write(&self.path, json) {
                Ok(()) => log::info!("Saved progress at level {level}"),
                Err(err) => log::warn!("Failed to write save file: {err}"),
            }
        }
    }

    /// Delete the save; absence is not an error
    pub fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => log::info!("Save file cleared"),
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => log::warn!("Failed to clear save file: {err}"),
        }
    }

    pub fn exists(&self) -> bool {
        self.load().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_save(name: &str) -> SaveFile {
        let path = std::env::temp_dir().join(format!(
            "retro-shooter-save-{}-{}.json",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        SaveFile::at(path)
    }

    #[test]
    fn test_missing_file_is_no_save() {
        let save = temp_save("missing");
        assert_eq!(save.load(), None);
        assert!(!save.exists());
    }

    #[test]
    fn test_round_trip() {
        let save = temp_save("round-trip");
        save.write(7);
        assert_eq!(save.load(), Some(SaveData { level: 7 }));
        save.clear();
        assert_eq!(save.load(), None);
    }

    #[test]
    fn test_overwrite() {
        let save = temp_save("overwrite");
        save.write(3);
        save.write(8);
        assert_eq!(save.load(), Some(SaveData { level: 8 }));
        save.clear();
    }

    #[test]
    fn test_malformed_content_is_no_save() {
        let save = temp_save("malformed");
        fs::write(save.path(), "not json at all").unwrap();
        assert_eq!(save.load(), None);
        fs::write(save.path(), r#"{"score": 12}"#).unwrap();
        assert_eq!(save.load(), None);
        save.clear();
    }

    #[test]
    fn test_out_of_range_level_is_no_save() {
        let save = temp_save("range");
        fs::write(save.path(), r#"{"level": 0}"#).unwrap();
        assert_eq!(save.load(), None);
        fs::write(save.path(), r#"{"level": 11}"#).unwrap();
        assert_eq!(save.load(), None);
        save.clear();
    }

    #[test]
    fn test_clear_when_absent_is_quiet() {
        let save = temp_save("clear-absent");
        save.clear();
        save.clear();
    }
}
