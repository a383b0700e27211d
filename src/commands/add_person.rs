use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use chrono::{DateTime, Utc};

use crate::{
    builder::builder::PersonBuilder,
    model::person::Person,
    options::AppOptions,
    persistence::{storage::Storage, store::AddressBookStore},
    utils::crash::AppCrash,
};

/// Loads the book at `path`, asks for one more person, appends it and
/// rewrites the whole book. Nothing is written if building the person fails.
pub fn add_person<S, R, W>(
    options: &AppOptions,
    storage: &mut S,
    path: &Path,
    input: R,
    prompts: W,
    now: DateTime<Utc>,
) -> Result<Person, AppCrash>
where
    S: Storage,
    R: BufRead,
    W: Write,
{
    let mut store = AddressBookStore::new(storage, options.codec.codec());

    let mut book = store.load(path, options.missing_file)?;

    let mut person = if options.echo_prompts {
        PersonBuilder::new(input, prompts).build_person()?
    } else {
        PersonBuilder::new(input, io::sink()).build_person()?
    };

    person.touch(now);

    book.add_person(person.clone());

    store.save(path, &book)?;

    log::info!(
        "Added person [id: {}], address book now holds {} people",
        person.id,
        book.len()
    );

    Ok(person)
}
