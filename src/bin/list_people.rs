use std::io;

use addressbook::{
    commands::list_people::list_people,
    consts::consts::UNSPECIFIED_PHONE_LABEL,
    options::AppOptions,
    persistence::{codec::CodecKind, storage::file::FileStorage, store::MissingFile},
    utils::crash::crash,
};
use clap::Parser;

/// 📇 Reads an address book and prints everyone in it
#[derive(Parser, Debug)]
struct Cli {
    /// Address book file, must already exist
    file: std::path::PathBuf,

    /// Encoding of the address book file
    #[clap(short, long, default_value_t = CodecKind::Binary)]
    codec: CodecKind,

    /// Label for phone numbers that were entered without a known type
    #[clap(short, long, default_value = UNSPECIFIED_PHONE_LABEL)]
    unspecified_label: String,
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let options = AppOptions::default()
        .set_codec(args.codec)
        .set_unspecified_label(args.unspecified_label)
        .set_missing_file(MissingFile::Fail);

    let mut storage = FileStorage::new();

    let mut stdout = io::stdout().lock();

    match list_people(&options, &mut storage, &args.file, &mut stdout) {
        Ok(count) => log::debug!("Listed {} people", count),
        Err(e) => crash(e),
    }
}
