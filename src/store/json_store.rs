use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::errors::Result;
use crate::utils::{app_data_dir, ensure_dir};

use super::{Slot, StorageBackend};

const TMP_SUFFIX: &str = "tmp";

/// Stores each slot as a pretty-printed JSON file under one base directory.
/// Writes land in a temporary sibling first and are renamed into place, so a
/// crash mid-write never leaves a half-written slot behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at the given directory, creating it if needed.
    pub fn new(base: impl Into<PathBuf>) -> Result<Self> {
        let base = base.into();
        ensure_dir(&base)?;
        Ok(Self { base })
    }

    /// Opens the store in the default application directory, honouring the
    /// `FINTRACK_HOME` override.
    pub fn new_default() -> Result<Self> {
        Self::new(app_data_dir())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn slot_path(&self, slot: Slot) -> PathBuf {
        self.base.join(format!("{}.json", slot.as_str()))
    }
}

impl StorageBackend for JsonFileStore {
    fn load(&self, slot: Slot) -> Result<Option<Value>> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&data)?))
    }

    fn save(&self, slot: Slot, value: &Value) -> Result<()> {
        let path = self.slot_path(slot);
        let json = serde_json::to_string_pretty(value)?;
        let tmp = tmp_path(&path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        debug!(slot = slot.as_str(), bytes = json.len(), "slot saved");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    path.with_extension(format!("json.{TMP_SUFFIX}"))
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
