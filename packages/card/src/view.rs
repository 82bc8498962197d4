//! # Preview derivation
//!
//! Turns a submitted [`CardRecord`] and a [`Template`] into a [`CardView`]: the
//! photo, the labelled text lines in their fixed print order, and the QR symbol
//! of the sanitized card. Both the on-screen preview and every exported image
//! are drawn from a `CardView`, so the two can never disagree on content.
//!
//! Line order is fixed: Name, Roll Number, Class & Division, Rack Number, Bus
//! Route, then Allergies only when at least one is selected.

use std::fmt;

use store::{Allergy, CardRecord};

use crate::error::CardError;
use crate::qr::QrSymbol;

/// Default QR edge length in pixels.
pub const DEFAULT_QR_SIZE: u32 = 128;

/// Visual styling applied to a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Template {
    #[default]
    Classic,
    Modern,
}

impl Template {
    pub const ALL: [Template; 2] = [Template::Classic, Template::Modern];

    /// Identifier used by the template `<select>`.
    pub fn id(self) -> &'static str {
        match self {
            Template::Classic => "template1",
            Template::Modern => "template2",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Template::Classic => "Template 1",
            Template::Modern => "Template 2",
        }
    }

    /// Map a `<select>` value to a template. Anything but `template1` is Modern.
    pub fn from_id(id: &str) -> Template {
        match id {
            "template1" => Template::Classic,
            _ => Template::Modern,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Template::Classic => Palette {
                css_class: "template1",
                background: "#ffffff",
                accent: "#1e3a8a",
                text: "#111827",
                border: "#1e3a8a",
            },
            Template::Modern => Palette {
                css_class: "template2",
                background: "#0f172a",
                accent: "#38bdf8",
                text: "#f8fafc",
                border: "#38bdf8",
            },
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Concrete colours of a template, shared by the DOM and SVG renderings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub css_class: &'static str,
    pub background: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

/// One printed `Label: value` line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardLine {
    pub label: &'static str,
    pub value: String,
}

impl CardLine {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Everything needed to draw one card.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub template: Template,
    pub photo: Option<String>,
    pub lines: Vec<CardLine>,
    /// Compact JSON of the sanitized card.
    pub qr_payload: String,
    pub qr: QrSymbol,
    pub qr_size: u32,
}

impl CardView {
    pub fn derive(record: &CardRecord, template: Template) -> Result<Self, CardError> {
        let qr_payload = record.sanitized().to_json()?;
        let qr = QrSymbol::encode(&qr_payload)?;

        let mut lines = vec![
            CardLine::new("Name", record.name.as_str()),
            CardLine::new("Roll Number", record.roll_number.as_str()),
            CardLine::new("Class & Division", record.class_division.label()),
            CardLine::new("Rack Number", record.rack_number.as_str()),
            CardLine::new("Bus Route", record.bus_route.label()),
        ];
        if let Some(allergies) = allergies_line(&record.allergies) {
            lines.push(CardLine::new("Allergies", allergies));
        }

        Ok(Self {
            template,
            photo: record.photo.clone(),
            lines,
            qr_payload,
            qr,
            qr_size: DEFAULT_QR_SIZE,
        })
    }

    pub fn with_qr_size(mut self, size: u32) -> Self {
        self.qr_size = size;
        self
    }

    pub fn palette(&self) -> Palette {
        self.template.palette()
    }
}

/// `"Peanuts, Dairy"`, or `None` when nothing is selected.
pub fn allergies_line(allergies: &[Allergy]) -> Option<String> {
    if allergies.is_empty() {
        return None;
    }
    let labels: Vec<&str> = allergies.iter().map(|a| a.label()).collect();
    Some(labels.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{BusRoute, CardDraft, CardId, ClassDivision, TextField};

    fn asha(allergies: &[Allergy]) -> CardRecord {
        let mut draft = CardDraft::default();
        draft.set_text(TextField::Name, "Asha Rao".to_string());
        draft.set_text(TextField::RollNumber, "21".to_string());
        draft.set_class_division(ClassDivision::TenA);
        draft.set_allergies(allergies.iter().copied());
        draft.set_text(TextField::RackNumber, "14".to_string());
        draft.set_bus_route(BusRoute::Route2);
        draft.into_record(CardId(1))
    }

    fn labels(view: &CardView) -> Vec<&'static str> {
        view.lines.iter().map(|l| l.label).collect()
    }

    #[test]
    fn test_lines_follow_print_order() {
        let view = CardView::derive(&asha(&[Allergy::Gluten]), Template::Classic).unwrap();
        assert_eq!(
            labels(&view),
            vec!["Name", "Roll Number", "Class & Division", "Rack Number", "Bus Route", "Allergies"]
        );
        assert_eq!(view.lines[0].value, "Asha Rao");
        assert_eq!(view.lines[2].value, "10-A");
        assert_eq!(view.lines[4].value, "Route 2");
        assert_eq!(view.lines[5].value, "Gluten");
    }

    #[test]
    fn test_allergies_line_joins_with_comma() {
        let view = CardView::derive(&asha(&[Allergy::Peanuts, Allergy::Dairy]), Template::Classic).unwrap();
        assert_eq!(view.lines.last().unwrap().value, "Peanuts, Dairy");
    }

    #[test]
    fn test_no_allergies_omits_line() {
        let view = CardView::derive(&asha(&[]), Template::Modern).unwrap();
        assert_eq!(view.lines.len(), 5);
        assert!(!labels(&view).contains(&"Allergies"));
    }

    #[test]
    fn test_qr_payload_is_sanitized_card() {
        let mut record = asha(&[Allergy::Gluten]);
        record.photo = Some("data:image/png;base64,AAAA".to_string());
        let view = CardView::derive(&record, Template::Classic).unwrap();

        assert!(!view.qr_payload.contains("photo"));
        assert!(!view.qr_payload.contains("AAAA"));
        let value: serde_json::Value = serde_json::from_str(&view.qr_payload).unwrap();
        assert_eq!(value["name"], "Asha Rao");
        assert_eq!(value["allergies"], serde_json::json!(["Gluten"]));
        assert_eq!(view.photo.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_template_ids_map_to_styling() {
        assert_eq!(Template::from_id("template1"), Template::Classic);
        assert_eq!(Template::from_id("template2"), Template::Modern);
        assert_eq!(Template::from_id("holographic"), Template::Modern);
        assert_eq!(Template::from_id(""), Template::Modern);

        assert_eq!(Template::Classic.palette().css_class, "template1");
        assert_eq!(Template::Modern.palette().css_class, "template2");
        for template in Template::ALL {
            assert_eq!(Template::from_id(template.id()), template);
        }
    }

    #[test]
    fn test_submitted_card_renders_with_sanitized_qr() {
        let mut archive = store::CardArchive::load(store::MemoryStorage::new(), "savedCards");
        let mut draft = CardDraft::default();
        draft.set_text(TextField::Name, "Asha Rao".to_string());
        draft.set_text(TextField::RollNumber, "21".to_string());
        draft.set_class_division(ClassDivision::TenA);
        draft.set_allergies([Allergy::Gluten]);
        draft.set_text(TextField::RackNumber, "14".to_string());
        draft.set_bus_route(BusRoute::Route2);

        let record = archive.submit(draft, 1_717_000_000_000);
        assert_eq!(archive.len(), 1);

        let view = CardView::derive(&record, Template::Classic).unwrap();
        let printed: Vec<String> = view
            .lines
            .iter()
            .map(|line| format!("{}: {}", line.label, line.value))
            .collect();
        assert_eq!(
            printed,
            vec![
                "Name: Asha Rao",
                "Roll Number: 21",
                "Class & Division: 10-A",
                "Rack Number: 14",
                "Bus Route: Route 2",
                "Allergies: Gluten",
            ]
        );

        let payload: serde_json::Value = serde_json::from_str(&view.qr_payload).unwrap();
        let mut keys: Vec<&str> = payload.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["allergies", "busRoute", "classDivision", "name", "rackNumber", "rollNumber"]
        );
        assert_eq!(payload["rollNumber"], "21");
        assert_eq!(payload["busRoute"], "Route 2");
    }

    #[test]
    fn test_qr_size_defaults_and_overrides() {
        let view = CardView::derive(&asha(&[]), Template::Classic).unwrap();
        assert_eq!(view.qr_size, DEFAULT_QR_SIZE);
        assert_eq!(view.with_qr_size(96).qr_size, 96);
    }
}
