use card::Template;
use dioxus::prelude::*;

use crate::activity_log::{log_activity, use_activity_log, LogLevel};
use crate::archive::{use_archive, use_cards_config};
use crate::export::export_card;
use crate::icons::FaDownload;
use crate::preview::derive_view;
use crate::Icon;

/// Previously generated cards, newest first, each with its own download.
///
/// Archived cards are exported with the template currently selected for the
/// preview.
#[component]
pub fn SavedCards(template: Template) -> Element {
    let archive = use_archive();
    let config = use_cards_config();
    let mut log = use_activity_log();

    let cards = archive.read().cards().to_vec();
    if cards.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "older-cards",
            h2 { "Previously Generated Cards" }
            div {
                class: "cards-grid",
                for saved in cards {
                    div {
                        key: "{saved.id}",
                        class: "card-item",
                        p { class: "card-header", "{saved.name} ({saved.roll_number})" }
                        button {
                            class: "btn btn-download-small",
                            r#type: "button",
                            onclick: {
                                let saved = saved.clone();
                                let qr_size = config.qr.size;
                                let scale = config.export.scale;
                                move |_| {
                                    let Some(view) = derive_view(&saved, template, qr_size) else {
                                        log_activity(&mut log, LogLevel::Error, &format!("Cannot render card {}", saved.id));
                                        return;
                                    };
                                    let file_name = card::archived_file_name(&saved);
                                    log_activity(&mut log, LogLevel::Info, &format!("Exporting {file_name}"));
                                    export_card(view, file_name, scale, log);
                                }
                            },
                            Icon { icon: FaDownload, width: 12, height: 12 }
                            " Download Card"
                        }
                    }
                }
            }
        }
    }
}
