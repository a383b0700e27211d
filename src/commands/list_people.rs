use std::{io::Write, path::Path};

use crate::{
    options::AppOptions,
    persistence::{storage::Storage, store::AddressBookStore},
    renderer::renderer::{write_lines, Renderer},
    utils::crash::AppCrash,
};

/// Prints every person in the book at `path`, in the order they were added
pub fn list_people<S, W>(
    options: &AppOptions,
    storage: &mut S,
    path: &Path,
    out: &mut W,
) -> Result<usize, AppCrash>
where
    S: Storage,
    W: Write,
{
    let store = AddressBookStore::new(storage, options.codec.codec());

    let book = store.load(path, options.missing_file)?;

    let renderer = Renderer::new(options.phone_labels());

    write_lines(out, &renderer.render_book(&book))?;

    Ok(book.len())
}
