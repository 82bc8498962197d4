//! # Card form: the draft being filled in
//!
//! [`DraftState`] holds the in-progress [`CardDraft`] plus the bookkeeping for
//! photo reads that have not finished yet. Each form control writes exactly one field
//! through a `DraftState` mutator. The draft survives submission, so a second
//! card for a sibling only needs the changed fields retyped.
//!
//! While any photo is being read the submit button is disabled, so a submitted
//! card never silently misses a photo the user already picked. When the user
//! picks again before a read finishes, only the latest pick may set the photo.

use dioxus::prelude::*;
use store::{Allergy, BusRoute, CardDraft, ClassDivision, TextField};

use crate::activity_log::{log_activity, use_activity_log, LogLevel};

/// Photo reads in flight, numbered in the order they were started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhotoReads {
    latest: u64,
    in_flight: u32,
}

impl PhotoReads {
    /// Register a new read and return its ticket.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.in_flight += 1;
        self.latest
    }

    /// Mark the read holding `ticket` finished. True when it is still the latest
    /// read, i.e. its result may be applied.
    pub fn finish(&mut self, ticket: u64) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        ticket == self.latest
    }

    pub fn pending(&self) -> bool {
        self.in_flight > 0
    }
}

/// Draft card plus photo-read bookkeeping, shared by the form controls.
#[derive(Clone, Copy, PartialEq)]
pub struct DraftState {
    draft: Signal<CardDraft>,
    photo_reads: Signal<PhotoReads>,
}

impl DraftState {
    pub fn draft(&self) -> CardDraft {
        self.draft.cloned()
    }

    pub fn photo_pending(&self) -> bool {
        self.photo_reads.read().pending()
    }

    pub fn set_text(&mut self, field: TextField, value: String) {
        self.draft.write().set_text(field, value);
    }

    pub fn set_class_division(&mut self, value: &str) {
        self.draft.write().set_class_division(value.parse().unwrap_or_default());
    }

    pub fn set_bus_route(&mut self, value: &str) {
        self.draft.write().set_bus_route(value.parse().unwrap_or_default());
    }

    pub fn toggle_allergy(&mut self, allergy: Allergy) {
        self.draft.write().toggle_allergy(allergy);
    }

    pub fn set_photo(&mut self, photo: String) {
        self.draft.write().set_photo(photo);
    }

    fn begin_photo_read(&mut self) -> u64 {
        self.photo_reads.write().begin()
    }

    fn finish_photo_read(&mut self, ticket: u64) -> bool {
        self.photo_reads.write().finish(ticket)
    }
}

pub fn use_draft_state() -> DraftState {
    DraftState {
        draft: use_signal(CardDraft::default),
        photo_reads: use_signal(PhotoReads::default),
    }
}

/// The student details form. Emits a snapshot of the draft on submit.
#[component]
pub fn CardForm(on_submit: EventHandler<CardDraft>) -> Element {
    let mut state = use_draft_state();
    let mut log = use_activity_log();
    let draft = state.draft();
    let pending = state.photo_pending();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if state.photo_pending() {
            return;
        }
        on_submit.call(state.draft());
    };

    let handle_photo = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(file_name) = engine.files().into_iter().next() else {
            return;
        };

        let ticket = state.begin_photo_read();
        let bytes = engine.read_file(&file_name).await;
        if !state.finish_photo_read(ticket) {
            tracing::debug!(file = %file_name, "dropping photo superseded by a later pick");
            return;
        }
        match bytes {
            Some(bytes) => match card::photo::data_url(&bytes) {
                Some(url) => state.set_photo(url),
                None => tracing::warn!(file = %file_name, "photo file is empty"),
            },
            None => {
                tracing::warn!(file = %file_name, "failed to read photo");
                log_activity(&mut log, LogLevel::Warning, &format!("Could not read {file_name}"));
            }
        }
    };

    rsx! {
        form {
            class: "student-form",
            onsubmit: handle_submit,

            div {
                class: "form-group",
                label { r#for: "card-name", "Name:" }
                input {
                    id: "card-name",
                    r#type: "text",
                    name: "name",
                    required: true,
                    value: "{draft.name}",
                    oninput: move |evt: FormEvent| state.set_text(TextField::Name, evt.value()),
                }
            }

            div {
                class: "form-group",
                label { r#for: "card-roll", "Roll Number:" }
                input {
                    id: "card-roll",
                    r#type: "text",
                    name: "rollNumber",
                    required: true,
                    value: "{draft.roll_number}",
                    oninput: move |evt: FormEvent| state.set_text(TextField::RollNumber, evt.value()),
                }
            }

            div {
                class: "form-group",
                label { r#for: "card-class", "Class & Division:" }
                select {
                    id: "card-class",
                    name: "classDivision",
                    value: "{draft.class_division}",
                    onchange: move |evt: FormEvent| state.set_class_division(&evt.value()),
                    for choice in ClassDivision::ALL {
                        option {
                            key: "{choice}",
                            value: "{choice}",
                            selected: *choice == draft.class_division,
                            "{choice}"
                        }
                    }
                }
            }

            fieldset {
                class: "form-group allergy-picker",
                legend { "Allergies:" }
                for allergy in Allergy::ALL.iter().copied() {
                    label {
                        key: "{allergy}",
                        class: "allergy-option",
                        input {
                            r#type: "checkbox",
                            value: "{allergy}",
                            checked: draft.allergies.contains(&allergy),
                            onchange: move |_| state.toggle_allergy(allergy),
                        }
                        " {allergy}"
                    }
                }
            }

            div {
                class: "form-group",
                label { r#for: "card-photo", "Photo Upload:" }
                input {
                    id: "card-photo",
                    r#type: "file",
                    accept: "image/*",
                    multiple: false,
                    onchange: handle_photo,
                }
                if pending {
                    small { class: "photo-pending", "Reading photo..." }
                }
                if let Some(photo) = &draft.photo {
                    img { class: "photo-preview", src: "{photo}", alt: "Photo Preview" }
                }
            }

            div {
                class: "form-group",
                label { r#for: "card-rack", "Rack Number:" }
                input {
                    id: "card-rack",
                    r#type: "text",
                    name: "rackNumber",
                    required: true,
                    value: "{draft.rack_number}",
                    oninput: move |evt: FormEvent| state.set_text(TextField::RackNumber, evt.value()),
                }
            }

            div {
                class: "form-group",
                label { r#for: "card-bus", "Bus Route Number:" }
                select {
                    id: "card-bus",
                    name: "busRoute",
                    value: "{draft.bus_route}",
                    onchange: move |evt: FormEvent| state.set_bus_route(&evt.value()),
                    for choice in BusRoute::ALL {
                        option {
                            key: "{choice}",
                            value: "{choice}",
                            selected: *choice == draft.bus_route,
                            "{choice}"
                        }
                    }
                }
            }

            button {
                class: "btn btn-submit",
                r#type: "submit",
                disabled: pending,
                "Submit"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_reads_start_idle() {
        assert!(!PhotoReads::default().pending());
    }

    #[test]
    fn test_overlapping_reads_stay_pending_until_all_finish() {
        let mut reads = PhotoReads::default();
        let first = reads.begin();
        let second = reads.begin();

        // the earlier pick finishes first and must not apply or unblock submit
        assert!(!reads.finish(first));
        assert!(reads.pending());

        assert!(reads.finish(second));
        assert!(!reads.pending());
    }

    #[test]
    fn test_stale_read_finishing_last_is_ignored() {
        let mut reads = PhotoReads::default();
        let first = reads.begin();
        let second = reads.begin();

        assert!(reads.finish(second));
        assert!(reads.pending());
        assert!(!reads.finish(first));
        assert!(!reads.pending());
    }
}
