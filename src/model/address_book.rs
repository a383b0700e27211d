use serde::{Deserialize, Serialize};

use super::person::Person;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AddressBook {
    people: Vec<Person>,
}

impl AddressBook {
    pub fn new(people: Vec<Person>) -> Self {
        AddressBook { people }
    }

    /// The only mutation a book supports, people are never removed or reordered
    pub fn add_person(&mut self, person: Person) {
        self.people.push(person);
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
