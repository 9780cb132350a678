//! Command-line interface for mdtogo
//!
//! Usage:
//!   mdtogo SOURCE_MD_DIR DEST_GO_DIR [--recursive=true] [--license=license.txt|none]

use std::path::PathBuf;

use clap::{error::ErrorKind, Arg, Command};

use mdtogo::{Config, LicenseSource};

fn main() {
    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return;
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config {
        source_dir: matches
            .get_one::<PathBuf>("source")
            .expect("SOURCE_MD_DIR is required")
            .clone(),
        dest_dir: matches
            .get_one::<PathBuf>("dest")
            .expect("DEST_GO_DIR is required")
            .clone(),
        recursive: matches.get_one::<bool>("recursive").copied().unwrap_or(false),
        license: LicenseSource::from_flag(matches.get_one::<String>("license").map(String::as_str)),
    };

    if let Err(err) = mdtogo::run(&config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn cli() -> Command {
    Command::new("mdtogo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates Go variables containing help text read from markdown docs")
        .arg(
            Arg::new("source")
                .help("Directory to read .md files from")
                .value_name("SOURCE_MD_DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("dest")
                .help("Directory the generated docs.go is written to")
                .value_name("DEST_GO_DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("recursive")
                .long("recursive")
                .help("Scan the directory structure recursively for .md files")
                .value_name("BOOL")
                .num_args(0..=1)
                .default_value("false")
                .default_missing_value("true")
                .value_parser(clap::value_parser!(bool)),
        )
        .arg(
            Arg::new("license")
                .long("license")
                .help("Path to a license header file, or \"none\" to skip the header")
                .value_name("FILE|none"),
        )
}
