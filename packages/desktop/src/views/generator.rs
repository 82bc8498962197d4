use dioxus::prelude::*;

use ui::views::CardGenerator;

#[component]
pub fn Generator() -> Element {
    let archive = ui::use_archive();

    use_hook(move || {
        let archive = archive.read();
        tracing::info!(
            dir = %archive.storage().base().display(),
            cards = archive.len(),
            "card archive restored"
        );
    });

    rsx! {
        CardGenerator {}
    }
}
