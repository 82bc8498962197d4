//! Shared archive constructor for all platforms.
//!
//! Returns a [`store::CardArchive`] backed by the appropriate [`store::CardStorage`]:
//! - **Web** (WASM): `window.localStorage` via `store::LocalStorage`
//! - **Desktop** (native): JSON files via [`store::FileStorage`] under `<data_dir>/idcards/`

use store::{CardArchive, CardsConfig};

#[cfg(target_arch = "wasm32")]
pub type PlatformStorage = store::LocalStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = store::FileStorage;

/// The archive type held in the UI's context.
pub type Archive = CardArchive<PlatformStorage>;

/// Load the platform archive named by `config`. Reads durable storage once.
pub fn make_archive(config: &CardsConfig) -> Archive {
    CardArchive::load(make_storage(), config.storage.key.clone())
}

pub fn make_storage() -> PlatformStorage {
    #[cfg(target_arch = "wasm32")]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileStorage::new(data_dir())
    }
}

/// `<data_dir>/idcards`, or `./idcards` when the platform has no data directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("idcards")
}

/// Read `idcards.toml` from the data directory on desktop; defaults elsewhere.
pub fn load_config() -> CardsConfig {
    #[cfg(target_arch = "wasm32")]
    {
        CardsConfig::default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = data_dir().join(CardsConfig::filename());
        match std::fs::read_to_string(&path) {
            Ok(text) => CardsConfig::from_toml(&text).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), "ignoring invalid config: {e}");
                CardsConfig::default()
            }),
            Err(_) => CardsConfig::default(),
        }
    }
}
