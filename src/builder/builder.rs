use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::{
    consts::consts::PersonId,
    model::person::{Person, PhoneNumber, PhoneType},
};

const ID_PROMPT: &str = "Enter person ID number: ";
const NAME_PROMPT: &str = "Enter name: ";
const EMAIL_PROMPT: &str = "Enter email address (blank for none): ";
const PHONE_NUMBER_PROMPT: &str = "Enter a phone number (or leave blank to finish): ";
const PHONE_TYPE_PROMPT: &str = "Is this a mobile, home, or work phone? ";
const UNKNOWN_PHONE_TYPE_WARNING: &str = "Unknown phone type. Using default.";

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Input ended while reading the {field}")]
    UnexpectedEndOfInput { field: &'static str },

    #[error("Person ID must be an integer, got '{value}'")]
    InvalidId { value: String },

    #[error("Unable to read input or write prompt: {0}")]
    Io(#[from] io::Error),
}

pub type BuildResult<T> = Result<T, BuildError>;

/// Assembles one `Person` from line based answers. Prompts go to `prompts`,
/// answers are only ever read from `input`.
pub struct PersonBuilder<R: BufRead, W: Write> {
    input: R,
    prompts: W,
    warnings: Vec<String>,
}

impl<R: BufRead, W: Write> PersonBuilder<R, W> {
    pub fn new(input: R, prompts: W) -> Self {
        Self {
            input,
            prompts,
            warnings: vec![],
        }
    }

    /// Non-fatal anomalies seen so far, in the order they happened
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn build_person(&mut self) -> BuildResult<Person> {
        let id_text = self.ask(ID_PROMPT, "person id")?;

        let id = id_text
            .parse::<PersonId>()
            .map_err(|_| BuildError::InvalidId { value: id_text })?;

        let name = self.ask(NAME_PROMPT, "name")?;
        let email = self.ask(EMAIL_PROMPT, "email address")?;

        let mut person = Person::new(id, name, email);

        loop {
            let number = self.ask(PHONE_NUMBER_PROMPT, "phone number")?;

            if number.is_empty() {
                break;
            }

            let kind_text = self.ask(PHONE_TYPE_PROMPT, "phone type")?;

            person.add_phone(PhoneNumber::new(number, self.phone_type(&kind_text)));
        }

        log::debug!(
            "Built person [id: {}] with {} phone number(s)",
            person.id,
            person.phones.len()
        );

        Ok(person)
    }

    /// Writes the prompt then reads one line, returned with surrounding whitespace removed
    fn ask(&mut self, prompt: &str, field: &'static str) -> BuildResult<String> {
        self.prompts.write_all(prompt.as_bytes())?;
        self.prompts.flush()?;

        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Err(BuildError::UnexpectedEndOfInput { field });
        }

        Ok(line.trim().to_string())
    }

    /// Unknown text is not an error, the number is kept with the default kind
    fn phone_type(&mut self, text: &str) -> PhoneType {
        match PhoneType::from_text(text) {
            Some(kind) => kind,
            None => {
                log::warn!("{}", UNKNOWN_PHONE_TYPE_WARNING);
                self.warnings.push(UNKNOWN_PHONE_TYPE_WARNING.to_string());

                PhoneType::default()
            }
        }
    }
}

/// Convenience wrapper for callers that only need a single person
pub fn build_person<R: BufRead, W: Write>(input: R, prompts: W) -> BuildResult<Person> {
    PersonBuilder::new(input, prompts).build_person()
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};

    use rstest::rstest;

    use super::*;

    fn build_from(input: &str) -> BuildResult<Person> {
        build_person(Cursor::new(input.as_bytes()), io::sink())
    }

    mod happy_path {
        use super::*;

        #[test]
        fn builds_example_person() {
            let person =
                build_from("12345\nExample Name\nname@example.com\n123-456-7890\nhome\n\n")
                    .expect("should build");

            assert_eq!(
                person,
                Person {
                    id: PersonId(12345),
                    name: "Example Name".to_string(),
                    email: "name@example.com".to_string(),
                    phones: vec![PhoneNumber::new(
                        "123-456-7890".to_string(),
                        PhoneType::Home
                    )],
                    last_updated: None,
                }
            );
        }

        #[test]
        fn trims_whitespace_around_every_answer() {
            let person = build_from("  42 \n\t Jane Roe  \n  jane@example.com \n 555 \n work \n   \n")
                .expect("should build");

            assert_eq!(person.id, PersonId(42));
            assert_eq!(person.name, "Jane Roe");
            assert_eq!(person.email, "jane@example.com");
            assert_eq!(
                person.phones,
                vec![PhoneNumber::new("555".to_string(), PhoneType::Work)]
            );
        }

        #[test]
        fn blank_email_and_no_phones() {
            let person = build_from("7\nNo Contact\n\n\n").expect("should build");

            assert_eq!(person.email, "");
            assert!(person.phones.is_empty());
        }

        #[test]
        fn keeps_every_phone_in_entry_order() {
            let person = build_from("1\nMany\n\n111\nmobile\n222\nhome\n333\nwork\n\n")
                .expect("should build");

            assert_eq!(
                person.phones,
                vec![
                    PhoneNumber::new("111".to_string(), PhoneType::Mobile),
                    PhoneNumber::new("222".to_string(), PhoneType::Home),
                    PhoneNumber::new("333".to_string(), PhoneType::Work),
                ]
            );
        }

        #[test]
        fn stops_reading_at_the_blank_phone_line() {
            // Given input with trailing lines after the terminating blank line
            let mut input = Cursor::new("1\nA\n\n\nleftover\n".as_bytes());

            // When we build a person
            let person = build_person(&mut input, io::sink()).expect("should build");

            // Then the leftover line is not consumed
            assert!(person.phones.is_empty());

            let mut rest = String::new();
            input.read_line(&mut rest).expect("should read");
            assert_eq!(rest, "leftover\n");
        }

        #[test]
        fn blank_phone_line_may_end_without_newline() {
            let person = build_from("1\nA\n\n555\nhome\n ").expect("should build");

            assert_eq!(person.phones.len(), 1);
        }
    }

    mod phone_types {
        use super::*;

        #[rstest]
        #[case("mobile", PhoneType::Mobile, false)]
        #[case("home", PhoneType::Home, false)]
        #[case("work", PhoneType::Work, false)]
        #[case("unknown", PhoneType::Unspecified, true)]
        #[case("Home", PhoneType::Unspecified, true)]
        #[case("", PhoneType::Unspecified, true)]
        fn maps_type_text_and_warns_on_unknown(
            #[case] text: &str,
            #[case] expected: PhoneType,
            #[case] warns: bool,
        ) {
            // Given one phone entered with the type text
            let input = format!("1\nA\n\n555\n{}\n\n", text);
            let mut builder = PersonBuilder::new(Cursor::new(input.as_bytes()), io::sink());

            // When we build the person
            let person = builder.build_person().expect("should build");

            // Then the kind is mapped and only unknown text leaves a warning
            assert_eq!(person.phones[0].kind, expected);

            if warns {
                assert_eq!(builder.warnings(), [UNKNOWN_PHONE_TYPE_WARNING]);
            } else {
                assert!(builder.warnings().is_empty());
            }
        }

        #[test_log::test]
        fn unknown_type_does_not_stop_the_loop() {
            let mut builder = PersonBuilder::new(
                Cursor::new("1\nA\n\n111\nunknown\n222\nwork\n\n".as_bytes()),
                io::sink(),
            );

            let person = builder.build_person().expect("should build");

            assert_eq!(builder.warnings().len(), 1);

            assert_eq!(
                person.phones,
                vec![
                    PhoneNumber::new("111".to_string(), PhoneType::Unspecified),
                    PhoneNumber::new("222".to_string(), PhoneType::Work),
                ]
            );
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn id_that_is_not_an_integer() {
            let result = build_from("abc\nA\n\n\n");

            assert!(matches!(
                result,
                Err(BuildError::InvalidId { value }) if value == "abc"
            ));
        }

        #[rstest]
        #[case("", "person id")]
        #[case("1\n", "name")]
        #[case("1\nA\n", "email address")]
        #[case("1\nA\n\n", "phone number")]
        #[case("1\nA\n\n555\n", "phone type")]
        #[case("1\nA\n\n555\nhome", "phone number")]
        fn input_ending_early(#[case] input: &str, #[case] expected_field: &str) {
            let result = build_from(input);

            assert!(matches!(
                result,
                Err(BuildError::UnexpectedEndOfInput { field }) if field == expected_field
            ));
        }
    }

    mod prompts {
        use super::*;

        #[test]
        fn prompts_are_written_to_the_prompt_stream_only() {
            // Given a builder with a captured prompt stream
            let mut prompts: Vec<u8> = vec![];

            // When we build a person with one phone
            let person = build_person(
                Cursor::new("5\nB\n\n555\nmobile\n\n".as_bytes()),
                &mut prompts,
            )
            .expect("should build");

            // Then every prompt was written, in order, and none leaked into the data
            let written = String::from_utf8(prompts).expect("prompts are utf8");

            assert_eq!(
                written,
                [
                    ID_PROMPT,
                    NAME_PROMPT,
                    EMAIL_PROMPT,
                    PHONE_NUMBER_PROMPT,
                    PHONE_TYPE_PROMPT,
                    PHONE_NUMBER_PROMPT,
                ]
                .concat()
            );
            assert_eq!(person.name, "B");
        }
    }
}
