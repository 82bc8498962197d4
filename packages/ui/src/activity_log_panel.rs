use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, LogEntry, LogLevel};

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

/// Floating panel listing activity, newest first.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();
    let mut errors_only = use_signal(|| false);

    if !log().visible {
        return rsx! {};
    }

    let entries: Vec<LogEntry> = log()
        .entries
        .iter()
        .rev()
        .filter(|entry| !errors_only() || entry.level == LogLevel::Error)
        .cloned()
        .collect();

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        aside {
            class: "activity-log-panel",
            header {
                class: "activity-log-header",
                span { "Activity Log" }
                div {
                    class: "activity-log-header-actions",
                    button {
                        r#type: "button",
                        class: if errors_only() { "active" } else { "" },
                        onclick: move |_| errors_only.toggle(),
                        "Errors"
                    }
                    button {
                        r#type: "button",
                        onclick: move |_| log.write().clear(),
                        "Clear"
                    }
                    button {
                        r#type: "button",
                        onclick: move |_| log.write().visible = false,
                        "Close"
                    }
                }
            }
            ul {
                class: "activity-log-entries",
                if entries.is_empty() {
                    li { class: "activity-log-empty", "Nothing yet." }
                }
                for (i, entry) in entries.into_iter().enumerate() {
                    LogEntryRow { key: "{i}", entry }
                }
            }
        }
    }
}

#[component]
fn LogEntryRow(entry: LogEntry) -> Element {
    rsx! {
        li {
            class: entry.level.css_class(),
            time { class: "activity-log-time", "{entry.timestamp}" }
            span { " {entry.message}" }
        }
    }
}

/// Navbar button that opens the panel; shows the entry count and turns red on errors.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let count = log().entries.len();
    let has_errors = log().has_errors();

    rsx! {
        button {
            class: if has_errors { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            r#type: "button",
            title: "Activity log",
            onclick: move |_| log.write().toggle(),
            if count > 0 { "{count}" } else { "Log" }
        }
    }
}
