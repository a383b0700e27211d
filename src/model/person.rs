use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use crate::consts::consts::PersonId;

/// Kind of a phone number. Text parsing is an exact, case-sensitive match on
/// the lowercase name; `Unspecified` can only be reached as the fallback.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum PhoneType {
    Mobile,
    Home,
    Work,
    #[default]
    #[strum(disabled)]
    Unspecified,
}

impl PhoneType {
    pub const ALL: [PhoneType; 4] = [
        PhoneType::Mobile,
        PhoneType::Home,
        PhoneType::Work,
        PhoneType::Unspecified,
    ];

    /// `None` when the text names no known kind
    pub fn from_text(text: &str) -> Option<PhoneType> {
        text.parse::<PhoneType>().ok()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PhoneNumber {
    pub number: String,
    #[serde(default)]
    pub kind: PhoneType,
}

impl PhoneNumber {
    pub fn new(number: String, kind: PhoneType) -> Self {
        PhoneNumber { number, kind }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Empty when the person has no e-mail address
    pub email: String,
    /// Kept in the order the numbers were entered
    pub phones: Vec<PhoneNumber>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Person {
    pub fn new(id: PersonId, name: String, email: String) -> Self {
        Person {
            id,
            name,
            email,
            phones: vec![],
            last_updated: None,
        }
    }

    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_updated = Some(now);
    }

    pub fn new_test() -> Self {
        Person {
            id: PersonId(1234),
            name: "John Doe".to_string(),
            email: "jdoe@example.com".to_string(),
            phones: vec![PhoneNumber::new("555-4321".to_string(), PhoneType::Home)],
            last_updated: None,
        }
    }
}
