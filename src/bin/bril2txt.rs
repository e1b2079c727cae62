//! Convert the JSON document form of a Bril program to text
//!
//! Usage:
//!   bril2txt [--indent `<string>`] [--config `<file>`] < program.json > program.bril

use briltxt::bril::config::{Loader, DEFAULT_USER_FILE};
use briltxt::bril::formats::from_json;
use briltxt::{Error, FormatRegistry};
use clap::{Arg, ArgMatches, Command};

fn main() {
    let matches = Command::new("bril2txt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read a Bril JSON document on stdin and write the text form to stdout")
        .arg(
            Arg::new("indent")
                .long("indent")
                .value_name("STRING")
                .allow_hyphen_values(true)
                .help("Prefix for every statement line (default: two spaces)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Configuration file layered over the defaults"),
        )
        .get_matches();

    match run(&matches) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(matches: &ArgMatches) -> Result<String, Error> {
    let mut loader = Loader::new().with_optional_file(DEFAULT_USER_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(indent) = matches.get_one::<String>("indent") {
        loader = loader.set_override("text.indent", indent.as_str())?;
    }
    let config = loader.build()?;

    let document = std::io::read_to_string(std::io::stdin())?;
    let program = from_json(&document)?;
    let registry = FormatRegistry::from_config(&config);
    Ok(registry.serialize(&program, "text")?)
}
