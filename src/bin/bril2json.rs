//! Convert Bril text to the JSON document form
//!
//! Usage:
//!   bril2json [--compact] [--config `<file>`] < program.bril > program.json

use briltxt::bril::config::{Loader, DEFAULT_USER_FILE};
use briltxt::{parse_program, Error, FormatRegistry};
use clap::{Arg, ArgAction, ArgMatches, Command};

fn main() {
    let matches = Command::new("bril2json")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read Bril text on stdin and write the JSON form to stdout")
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Write the document on a single line")
                .action(ArgAction::SetTrue),
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
        Ok(output) => println!("{}", output),
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
    if matches.get_flag("compact") {
        loader = loader.set_override("json.pretty", false)?;
    }
    let config = loader.build()?;

    let source = std::io::read_to_string(std::io::stdin())?;
    let program = parse_program(&source)?;
    let registry = FormatRegistry::from_config(&config);
    Ok(registry.serialize(&program, "json")?)
}
