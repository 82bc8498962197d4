//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod storage;
pub use storage::{load_config, make_archive, make_storage, Archive, PlatformStorage};

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod navbar;
pub use navbar::Navbar;

mod archive;
pub use archive::{use_archive, use_cards_config, ArchiveProvider};

mod form;
pub use form::{use_draft_state, CardForm, DraftState, PhotoReads};

mod preview;
pub use preview::{derive_view, CardFace, CardPreview, TemplateSwitcher};

mod archive_list;
pub use archive_list::SavedCards;

pub mod export;
pub use export::export_card;

pub mod activity_log;
pub use activity_log::{ActivityLog, LogLevel, log_activity, use_activity_log};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
