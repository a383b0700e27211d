use std::io;

use addressbook::{
    commands::add_person::add_person,
    options::AppOptions,
    persistence::{codec::CodecKind, storage::file::FileStorage},
    utils::crash::crash,
};
use clap::Parser;

/// 📇 Reads an address book, adds one person entered on stdin, and writes it back out
#[derive(Parser, Debug)]
struct Cli {
    /// Address book file. A missing file is created
    file: std::path::PathBuf,

    /// Encoding of the address book file
    #[clap(short, long, default_value_t = CodecKind::Binary)]
    codec: CodecKind,

    /// Do not print prompts, useful when piping answers in
    #[clap(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let options = AppOptions::default()
        .set_codec(args.codec)
        .set_echo_prompts(!args.quiet);

    let mut storage = FileStorage::new();

    let stdin = io::stdin();

    match add_person(
        &options,
        &mut storage,
        &args.file,
        stdin.lock(),
        io::stdout(),
        chrono::Utc::now(),
    ) {
        Ok(person) => log::debug!("Wrote person [id: {}]", person.id),
        Err(e) => crash(e),
    }
}
