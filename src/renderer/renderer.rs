use std::{
    collections::HashMap,
    io::{self, Write},
};

use chrono::SecondsFormat;

use crate::{
    consts::consts::{
        HOME_PHONE_LABEL, MOBILE_PHONE_LABEL, UNSPECIFIED_PHONE_LABEL, WORK_PHONE_LABEL,
    },
    model::{
        address_book::AddressBook,
        person::{Person, PhoneType},
    },
};

/// Display label for every phone kind
#[derive(Clone, Debug, PartialEq)]
pub struct PhoneLabels {
    labels: HashMap<PhoneType, String>,
}

impl PhoneLabels {
    pub fn set_label(mut self, kind: PhoneType, label: String) -> Self {
        self.labels.insert(kind, label);
        self
    }

    /// Numbers entered with an unknown type have no natural label, so callers pick one
    pub fn set_unspecified_label(self, label: String) -> Self {
        self.set_label(PhoneType::Unspecified, label)
    }

    pub fn label(&self, kind: PhoneType) -> &str {
        self.labels
            .get(&kind)
            .map(String::as_str)
            .unwrap_or(UNSPECIFIED_PHONE_LABEL)
    }
}

impl Default for PhoneLabels {
    fn default() -> Self {
        let labels = HashMap::from([
            (PhoneType::Mobile, MOBILE_PHONE_LABEL.to_string()),
            (PhoneType::Home, HOME_PHONE_LABEL.to_string()),
            (PhoneType::Work, WORK_PHONE_LABEL.to_string()),
            (PhoneType::Unspecified, UNSPECIFIED_PHONE_LABEL.to_string()),
        ]);

        Self { labels }
    }
}

/// Formats records as text. Rendering never performs I/O, the same input
/// always gives the same lines.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    labels: PhoneLabels,
}

impl Renderer {
    pub fn new(labels: PhoneLabels) -> Self {
        Self { labels }
    }

    pub fn render_person(&self, person: &Person) -> Vec<String> {
        let mut lines = vec![
            format!("Person ID: {}", person.id),
            format!("  Name: {}", person.name),
        ];

        if !person.email.is_empty() {
            lines.push(format!("  E-mail address: {}", person.email));
        }

        for phone in &person.phones {
            lines.push(format!(
                "  {}: {}",
                self.labels.label(phone.kind),
                phone.number
            ));
        }

        if let Some(last_updated) = person.last_updated {
            lines.push(format!(
                "  Updated: {}",
                last_updated.to_rfc3339_opts(SecondsFormat::Secs, true)
            ));
        }

        lines
    }

    pub fn render_book(&self, book: &AddressBook) -> Vec<String> {
        book.people()
            .iter()
            .flat_map(|person| self.render_person(person))
            .collect()
    }
}

pub fn render_person(person: &Person) -> Vec<String> {
    Renderer::default().render_person(person)
}

pub fn render_book(book: &AddressBook) -> Vec<String> {
    Renderer::default().render_book(book)
}

pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }

    out.flush()
}
