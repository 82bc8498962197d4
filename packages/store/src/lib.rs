pub mod archive;
pub mod config;
pub mod error;
pub mod models;

mod file_store;
mod memory;
pub use file_store::FileStorage;
pub use memory::MemoryStorage;

#[cfg(target_arch = "wasm32")]
mod local;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

pub use archive::{now_millis, CardArchive, CardStorage};
pub use config::CardsConfig;
pub use error::StoreError;
pub use models::{
    Allergy, BusRoute, CardDraft, CardId, CardRecord, ClassDivision, SanitizedCard, TextField,
};
