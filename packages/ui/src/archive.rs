//! Archive context and hooks for the UI.

use dioxus::prelude::*;
use store::CardsConfig;

use crate::storage::{load_config, make_archive, Archive};

/// Get the archive of generated cards.
///
/// The signal is the single owner of the archive; writes go through
/// [`store::CardArchive::submit`], which persists as part of the mutation.
pub fn use_archive() -> Signal<Archive> {
    use_context::<Signal<Archive>>()
}

/// Get the configuration the archive was loaded with.
pub fn use_cards_config() -> CardsConfig {
    use_context::<CardsConfig>()
}

/// Provider component that loads configuration and the archive once.
/// Wrap your app with this component before using [`use_archive`].
#[component]
pub fn ArchiveProvider(children: Element) -> Element {
    let config = use_context_provider(load_config);
    use_context_provider(move || Signal::new(make_archive(&config)));

    rsx! {
        {children}
    }
}
