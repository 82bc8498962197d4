//! # Domain models for student ID cards
//!
//! Defines the records that the form produces and the archive persists. Every
//! type here is `Serialize + Deserialize` and uses the camelCase key names of
//! the durable `savedCards` entry, so a stored sequence reads back unchanged.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`ClassDivision`], [`BusRoute`], [`Allergy`] | The closed option sets offered by the form's dropdowns and allergy picker. Each serializes as its display label (`"10-A"`, `"Route 2"`, `"Peanuts"`). |
//! | [`CardDraft`] | The in-progress form state. Mutated one field at a time, never carries an id. |
//! | [`CardRecord`] | A submitted card: a frozen draft plus its [`CardId`]. Never edited after creation. |
//! | [`CardId`] | Creation timestamp in milliseconds, bumped when needed so ids stay unique and increasing. |
//! | [`SanitizedCard`] | Borrowed projection of a record without the photo (and without the id), used as the QR payload. |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in the order the form lists them.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The label shown in the form and written to storage.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ALL[0]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = StoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.label() == s)
                    .ok_or_else(|| StoreError::InvalidOption {
                        set: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }
    };
}

closed_set! {
    /// Class and division a student belongs to.
    ClassDivision {
        TenA => "10-A",
        TenB => "10-B",
        ElevenA => "11-A",
        ElevenB => "11-B",
        TwelveA => "12-A",
        TwelveB => "12-B",
    }
}

closed_set! {
    /// School bus route the student rides.
    BusRoute {
        Route1 => "Route 1",
        Route2 => "Route 2",
        Route3 => "Route 3",
        Route4 => "Route 4",
    }
}

closed_set! {
    /// Allergies that can be printed on a card.
    Allergy {
        Peanuts => "Peanuts",
        Gluten => "Gluten",
        Dairy => "Dairy",
        Soy => "Soy",
        Eggs => "Eggs",
    }
}

/// Identifier of a submitted card: milliseconds since the Unix epoch at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u64);

impl CardId {
    /// Id for a card created at `now_ms`, given the newest id already issued.
    ///
    /// Two submissions inside the same millisecond (or a clock that stepped
    /// backwards) still get distinct, increasing ids.
    pub fn next(now_ms: u64, newest: Option<CardId>) -> CardId {
        match newest {
            Some(CardId(last)) if now_ms <= last => CardId(last + 1),
            _ => CardId(now_ms),
        }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-text fields of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    Name,
    RollNumber,
    RackNumber,
}

/// The card currently being filled in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDraft {
    pub name: String,
    pub roll_number: String,
    pub class_division: ClassDivision,
    pub allergies: Vec<Allergy>,
    /// `data:<mime>;base64,<payload>` URL of the uploaded photo.
    pub photo: Option<String>,
    pub rack_number: String,
    pub bus_route: BusRoute,
}

impl CardDraft {
    /// Replace one text field, leaving the others untouched.
    pub fn set_text(&mut self, field: TextField, value: String) {
        match field {
            TextField::Name => self.name = value,
            TextField::RollNumber => self.roll_number = value,
            TextField::RackNumber => self.rack_number = value,
        }
    }

    pub fn set_class_division(&mut self, class_division: ClassDivision) {
        self.class_division = class_division;
    }

    pub fn set_bus_route(&mut self, bus_route: BusRoute) {
        self.bus_route = bus_route;
    }

    /// Replace the allergy selection with exactly `selected`, keeping its order.
    ///
    /// Repeated values are dropped after their first occurrence.
    pub fn set_allergies(&mut self, selected: impl IntoIterator<Item = Allergy>) {
        let mut allergies = Vec::new();
        for allergy in selected {
            if !allergies.contains(&allergy) {
                allergies.push(allergy);
            }
        }
        self.allergies = allergies;
    }

    /// Flip one allergy in or out of the selection. Newly selected values go last.
    pub fn toggle_allergy(&mut self, allergy: Allergy) {
        let selection: Vec<Allergy> = if self.allergies.contains(&allergy) {
            self.allergies.iter().copied().filter(|a| *a != allergy).collect()
        } else {
            self.allergies.iter().copied().chain([allergy]).collect()
        };
        self.set_allergies(selection);
    }

    pub fn set_photo(&mut self, photo: String) {
        self.photo = Some(photo);
    }

    /// Freeze the draft into a record carrying `id`.
    pub fn into_record(self, id: CardId) -> CardRecord {
        CardRecord {
            name: self.name,
            roll_number: self.roll_number,
            class_division: self.class_division,
            allergies: self.allergies,
            photo: self.photo,
            rack_number: self.rack_number,
            bus_route: self.bus_route,
            id,
        }
    }
}

/// One generated student ID card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub name: String,
    pub roll_number: String,
    #[serde(default)]
    pub class_division: ClassDivision,
    #[serde(default)]
    pub allergies: Vec<Allergy>,
    #[serde(default)]
    pub photo: Option<String>,
    pub rack_number: String,
    #[serde(default)]
    pub bus_route: BusRoute,
    pub id: CardId,
}

impl CardRecord {
    /// Projection of this card without its photo, as encoded into the QR symbol.
    pub fn sanitized(&self) -> SanitizedCard<'_> {
        SanitizedCard {
            name: &self.name,
            roll_number: &self.roll_number,
            class_division: self.class_division,
            allergies: &self.allergies,
            rack_number: &self.rack_number,
            bus_route: self.bus_route,
        }
    }
}

/// The six printable fields of a card, without the photo payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedCard<'a> {
    pub name: &'a str,
    pub roll_number: &'a str,
    pub class_division: ClassDivision,
    pub allergies: &'a [Allergy],
    pub rack_number: &'a str,
    pub bus_route: BusRoute,
}

impl SanitizedCard<'_> {
    /// Compact JSON with a fixed key order.
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asha() -> CardDraft {
        CardDraft {
            name: "Asha Rao".to_string(),
            roll_number: "21".to_string(),
            class_division: ClassDivision::TenA,
            allergies: vec![Allergy::Gluten],
            photo: None,
            rack_number: "14".to_string(),
            bus_route: BusRoute::Route2,
        }
    }

    #[test]
    fn test_default_draft_uses_first_options() {
        let draft = CardDraft::default();
        assert_eq!(draft.class_division, ClassDivision::TenA);
        assert_eq!(draft.bus_route, BusRoute::Route1);
        assert!(draft.allergies.is_empty());
        assert!(draft.photo.is_none());
        assert!(draft.name.is_empty());
    }

    #[test]
    fn test_closed_set_labels_parse_back() {
        assert_eq!("11-B".parse::<ClassDivision>().unwrap(), ClassDivision::ElevenB);
        assert_eq!("Route 3".parse::<BusRoute>().unwrap(), BusRoute::Route3);
        assert_eq!("Soy".parse::<Allergy>().unwrap(), Allergy::Soy);

        let err = "13-C".parse::<ClassDivision>().unwrap_err();
        assert_eq!(err.to_string(), "'13-C' is not a valid ClassDivision");
    }

    #[test]
    fn test_set_text_only_touches_one_field() {
        let mut draft = asha();
        draft.set_text(TextField::RackNumber, "7".to_string());
        assert_eq!(draft.rack_number, "7");
        assert_eq!(draft.name, "Asha Rao");
        assert_eq!(draft.roll_number, "21");
    }

    #[test]
    fn test_set_allergies_keeps_order_and_drops_repeats() {
        let mut draft = CardDraft::default();
        draft.set_allergies([Allergy::Dairy, Allergy::Peanuts, Allergy::Dairy]);
        assert_eq!(draft.allergies, vec![Allergy::Dairy, Allergy::Peanuts]);

        draft.set_allergies([]);
        assert!(draft.allergies.is_empty());
    }

    #[test]
    fn test_toggle_allergy_appends_and_removes() {
        let mut draft = CardDraft::default();
        draft.toggle_allergy(Allergy::Peanuts);
        draft.toggle_allergy(Allergy::Dairy);
        assert_eq!(draft.allergies, vec![Allergy::Peanuts, Allergy::Dairy]);

        draft.toggle_allergy(Allergy::Peanuts);
        assert_eq!(draft.allergies, vec![Allergy::Dairy]);
    }

    #[test]
    fn test_card_id_is_monotonic_within_a_millisecond() {
        let first = CardId::next(1_700_000_000_000, None);
        let second = CardId::next(1_700_000_000_000, Some(first));
        let third = CardId::next(1_699_999_999_999, Some(second));
        let later = CardId::next(1_700_000_000_500, Some(third));

        assert_eq!(first, CardId(1_700_000_000_000));
        assert_eq!(second, CardId(1_700_000_000_001));
        assert_eq!(third, CardId(1_700_000_000_002));
        assert_eq!(later, CardId(1_700_000_000_500));
    }

    #[test]
    fn test_record_json_uses_stored_key_names() {
        let record = asha().into_record(CardId(42));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["rollNumber"], "21");
        assert_eq!(value["classDivision"], "10-A");
        assert_eq!(value["busRoute"], "Route 2");
        assert_eq!(value["allergies"], serde_json::json!(["Gluten"]));
        assert!(value["photo"].is_null());
        assert_eq!(value["id"], 42);
    }

    #[test]
    fn test_sanitized_projection_never_has_photo() {
        let mut draft = asha();
        draft.set_photo("data:image/png;base64,iVBORw0KGgo=".to_string());
        let with_photo = draft.into_record(CardId(1));
        let without_photo = asha().into_record(CardId(2));

        for record in [&with_photo, &without_photo] {
            let json = record.sanitized().to_json().unwrap();
            let value: serde_json::Value = serde_json::from_str(&json).unwrap();
            let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
            assert!(!keys.contains(&"photo"));
            assert_eq!(keys.len(), 6);
        }
    }

    #[test]
    fn test_sanitized_json_is_compact_and_ordered() {
        let record = asha().into_record(CardId(7));
        assert_eq!(
            record.sanitized().to_json().unwrap(),
            r#"{"name":"Asha Rao","rollNumber":"21","classDivision":"10-A","allergies":["Gluten"],"rackNumber":"14","busRoute":"Route 2"}"#
        );
    }
}
