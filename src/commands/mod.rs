pub mod add_person;
pub mod list_people;
