use card::{CardView, Template};
use dioxus::prelude::*;
use store::CardRecord;

use crate::activity_log::{log_activity, use_activity_log, LogLevel};
use crate::archive::use_cards_config;
use crate::export::export_card;
use crate::icons::FaDownload;
use crate::Icon;

/// Derive the view of `record`, logging instead of failing.
pub fn derive_view(record: &CardRecord, template: Template, qr_size: u32) -> Option<CardView> {
    match CardView::derive(record, template) {
        Ok(view) => Some(view.with_qr_size(qr_size)),
        Err(e) => {
            tracing::error!(id = %record.id, "cannot derive card view: {e}");
            None
        }
    }
}

/// On-screen rendering of a card.
#[component]
pub fn CardFace(view: CardView) -> Element {
    let palette = view.palette();
    let qr_svg = view.qr.to_svg(view.qr_size);

    rsx! {
        div {
            class: "id-card {palette.css_class}",
            style: "background: {palette.background}; color: {palette.text}; border-color: {palette.border};",
            div { class: "id-card-band", style: "background: {palette.accent};" }
            if let Some(photo) = &view.photo {
                img { class: "card-photo", src: "{photo}", alt: "Student" }
            }
            for line in view.lines.iter() {
                p {
                    key: "{line.label}",
                    strong { "{line.label}:" }
                    " {line.value}"
                }
            }
            div {
                class: "qr-code",
                dangerous_inner_html: "{qr_svg}",
            }
        }
    }
}

/// Template choice shown once a card has been generated.
#[component]
pub fn TemplateSwitcher(template: Template, on_change: EventHandler<Template>) -> Element {
    rsx! {
        div {
            class: "template-switcher",
            label { r#for: "template-select", "Select Template:" }
            select {
                id: "template-select",
                value: "{template.id()}",
                onchange: move |evt: FormEvent| on_change.call(Template::from_id(&evt.value())),
                for choice in Template::ALL {
                    option {
                        key: "{choice.id()}",
                        value: "{choice.id()}",
                        selected: choice == template,
                        "{choice.label()}"
                    }
                }
            }
        }
    }
}

/// The most recently submitted card with its download action.
#[component]
pub fn CardPreview(record: CardRecord, template: Template) -> Element {
    let config = use_cards_config();
    let mut log = use_activity_log();

    let Some(view) = derive_view(&record, template, config.qr.size) else {
        return rsx! {
            div { class: "id-card-section", p { "This card cannot be displayed." } }
        };
    };

    let download = {
        let view = view.clone();
        let file_name = config.export.preview_filename.clone();
        let scale = config.export.scale;
        move |_| {
            log_activity(&mut log, LogLevel::Info, &format!("Exporting {file_name}"));
            export_card(view.clone(), file_name.clone(), scale, log);
        }
    };

    rsx! {
        div {
            class: "id-card-section",
            h2 { "ID Card Preview" }
            CardFace { view }
            button {
                class: "btn btn-download",
                r#type: "button",
                onclick: download,
                Icon { icon: FaDownload, width: 14, height: 14 }
                " Download as PNG"
            }
        }
    }
}
