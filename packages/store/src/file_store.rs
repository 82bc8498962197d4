//! # Filesystem-backed card storage
//!
//! [`FileStorage`] is a [`CardStorage`] implementation that keeps each storage
//! entry in its own JSON file. It is used on desktop to retain generated cards
//! across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── idcards.toml          # optional configuration
//! └── <key>.json            # e.g. savedCards.json, the full card sequence
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/idcards/` |
//! | Linux | `~/.local/share/idcards/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\idcards\` |
//!
//! [`dirs::data_dir()`]: https://docs.rs/dirs/latest/dirs/fn.data_dir.html

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::archive::CardStorage;
use crate::error::StoreError;

/// Filesystem-backed CardStorage for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl CardStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.entry_path(key);
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base).map_err(|source| StoreError::Io {
            path: self.base.clone(),
            source,
        })?;
        // Write beside the entry and rename over it, so a crash never leaves half a file.
        let path = self.entry_path(key);
        let tmp = self.base.join(format!("{key}.json.tmp"));
        std::fs::write(&tmp, value).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &path).map_err(|source| StoreError::Io { path, source })
    }
}
