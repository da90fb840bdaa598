use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::{Arg, Command};
use log::error;
use sha2_engine::Variant;

use sha2_tooling::{hash_paths, hash_reader, write_reports, FileReport, OutputFormat, SETTINGS};

const STDIN: &str = "-";

fn main() -> Result<()> {
    fil_logger::init();

    let matches = Command::new("sha2sum")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print SHA-256 or SHA-512 checksums")
        .arg(
            Arg::new("variant")
                .long("variant")
                .short('a')
                .help("Hash function to use: \"sha256\" or \"sha512\"")
                .takes_value(true),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: \"hex\", \"raw\" or \"json\"")
                .takes_value(true),
        )
        .arg(
            Arg::new("buffer-size")
                .long("buffer-size")
                .help("Read buffer size in bytes")
                .takes_value(true),
        )
        .arg(
            Arg::new("sequential")
                .long("sequential")
                .help("Hash files one after another instead of in parallel"),
        )
        .arg(
            Arg::new("files")
                .help("Files to hash; standard input when absent or \"-\"")
                .multiple_values(true),
        )
        .get_matches();

    let variant: Variant = match matches.value_of("variant") {
        Some(name) => name.parse()?,
        None => SETTINGS.variant()?,
    };
    let format: OutputFormat = match matches.value_of("format") {
        Some(name) => name.parse()?,
        None => SETTINGS.format()?,
    };
    let buffer_size = match matches.value_of("buffer-size") {
        Some(size) => size
            .parse::<usize>()
            .with_context(|| format!("invalid buffer size: {}", size))?,
        None => SETTINGS.read_buffer_size,
    };
    let parallel = SETTINGS.parallel_files && !matches.is_present("sequential");

    let mut files: Vec<String> = matches
        .values_of("files")
        .map(|values| values.map(str::to_string).collect())
        .unwrap_or_default();
    if files.is_empty() {
        files.push(STDIN.to_string());
    }

    // Real paths are hashed up front, possibly in parallel; `-` entries read
    // stdin in place, so the output keeps the argument order.
    let paths: Vec<&String> = files.iter().filter(|file| *file != STDIN).collect();
    let mut path_results = hash_paths(&paths, variant, buffer_size, parallel).into_iter();

    let stdin = io::stdin();
    let mut reports = Vec::with_capacity(files.len());
    let mut failed = false;

    for file in &files {
        let result = if file == STDIN {
            hash_reader(stdin.lock(), variant, buffer_size)
                .map(|(digest, bytes)| FileReport::new(STDIN, &digest, bytes))
        } else {
            path_results
                .next()
                .with_context(|| format!("no result for {}", file))?
        };

        match result {
            Ok(report) => reports.push(report),
            Err(err) => {
                error!("{:?}", err);
                eprintln!("sha2sum: {:#}", err);
                failed = true;
            }
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_reports(&mut out, &reports, format)?;
    out.flush()?;

    if failed {
        process::exit(1);
    }

    Ok(())
}
