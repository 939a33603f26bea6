use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use session::error::{Error, Result};
use session::SessionStorage;
use tracing::{debug, warn};
use uuid::Uuid;

const SESSION_DIR: &str = ".unistay";
const SESSION_FILE: &str = "session.json";

/// Session entries kept as a flat JSON object in a single file.
///
/// The file is read on every access so separate invocations always see the
/// latest session. Writes go through a temporary file and a rename.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(SESSION_DIR).join(SESSION_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(error) => {
                return Err(Error::storage(format!(
                    "fail to read {path}: {error}",
                    path = self.path.display()
                )))
            }
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn load_for_update(&self) -> BTreeMap<String, String> {
        self.load().unwrap_or_else(|error| {
            warn!(path = ?self.path, %error, "Unreadable session file, starting over");
            BTreeMap::new()
        })
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let io_error = |error: std::io::Error| {
            Error::storage(format!(
                "fail to write {path}: {error}",
                path = self.path.display()
            ))
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        let mut temp_path = self.path.clone().into_os_string();
        temp_path.push(format!(".{}.tmp", Uuid::new_v4().simple()));
        let temp_path = PathBuf::from(temp_path);

        std::fs::write(&temp_path, serde_json::to_vec_pretty(entries)?).map_err(io_error)?;
        std::fs::rename(&temp_path, &self.path).map_err(io_error)?;
        debug!(path = ?self.path, entries = entries.len(), "Session file written");
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load_for_update();
        entries.insert(key.to_owned(), value.to_owned());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.load_for_update();
        if entries.remove(key).is_none() && !self.path.exists() {
            return Ok(());
        }
        self.save(&entries)
    }
}
