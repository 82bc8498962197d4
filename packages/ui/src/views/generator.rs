use card::Template;
use dioxus::prelude::*;
use store::{CardDraft, CardRecord};

use crate::activity_log::{log_activity, use_activity_log, LogLevel};
use crate::archive::use_archive;
use crate::{ActivityLogPanel, ActivityLogToggle, CardForm, CardPreview, Navbar, SavedCards, TemplateSwitcher};

/// The single page of the app: form, preview, and archive.
///
/// There is no way back from "preview shown" to "no preview" within a session.
#[component]
pub fn CardGenerator() -> Element {
    let mut archive = use_archive();
    let mut log = use_activity_log();
    let mut preview = use_signal(|| Option::<CardRecord>::None);
    let mut template = use_signal(Template::default);

    let handle_submit = move |draft: CardDraft| {
        let record = archive.write().submit(draft, store::now_millis());
        log_activity(
            &mut log,
            LogLevel::Success,
            &format!("Generated card for {} ({})", record.name, record.roll_number),
        );
        preview.set(Some(record));
    };

    rsx! {
        div {
            class: "container",

            Navbar {
                title: "Student ID Card Generator",
                ActivityLogToggle {}
            }

            CardForm { on_submit: handle_submit }

            if let Some(record) = preview() {
                TemplateSwitcher {
                    template: template(),
                    on_change: move |choice: Template| template.set(choice),
                }
                CardPreview { record, template: template() }
            }

            SavedCards { template: template() }

            ActivityLogPanel {}
        }
    }
}
