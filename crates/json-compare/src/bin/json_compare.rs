//! `json-compare` — compare two JSON files and print an annotated diff.
//!
//! Usage:
//!   json-compare [--yaml] [--html] [--plain] [--types] <first.json> <second.json>
//!
//! The rendering goes to stdout and the classification to stderr. Colored
//! console output is the default; `--html` emits `<span>` markers instead
//! and `--plain` emits no markers at all. Exit status is 0 for a full
//! match, 1 for any difference and 2 for usage or read errors.

use json_compare::{compare, Difference, Options};

fn usage() -> ! {
    eprintln!("usage: json-compare [--yaml] [--html] [--plain] [--types] <first.json> <second.json>");
    std::process::exit(2);
}

fn read(path: &str) -> Vec<u8> {
    match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(2);
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut yaml = false;
    let mut html = false;
    let mut plain = false;
    let mut types = false;
    let mut files: Vec<&str> = Vec::new();

    for arg in &args {
        match arg.as_str() {
            "--yaml" => yaml = true,
            "--html" => html = true,
            "--plain" => plain = true,
            "--types" => types = true,
            _ if arg.starts_with('-') => usage(),
            _ => files.push(arg),
        }
    }
    if files.len() != 2 {
        usage();
    }

    let mut opts = if html {
        Options::html()
    } else if plain {
        Options {
            indent: "    ".to_owned(),
            ..Options::default()
        }
    } else {
        Options::console()
    };
    if yaml {
        opts = opts.with_yaml_output();
    }
    opts.print_types = types;

    let first = read(files[0]);
    let second = read(files[1]);

    let (diff, text) = compare(&first, &second, &opts);
    println!("{text}");
    eprintln!("{diff}");
    std::process::exit(match diff {
        Difference::FullMatch => 0,
        _ => 1,
    });
}
