use dioxus::prelude::*;

use ui::views::CardGenerator;

#[component]
pub fn Generator() -> Element {
    let archive = ui::use_archive();

    use_hook(move || {
        tracing::info!(
            key = archive.read().key(),
            cards = archive.read().len(),
            "card archive restored from localStorage"
        );
    });

    rsx! {
        CardGenerator {}
    }
}
