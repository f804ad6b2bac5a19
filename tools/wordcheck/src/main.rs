// Copyright 2018 Steven Bosnick
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE-2.0 or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms

extern crate failure;
#[macro_use]
extern crate log;
extern crate quicli;
#[macro_use]
extern crate structopt;
extern crate thompson;

#[cfg(test)]
extern crate tempfile;

mod verdict;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use failure::{Error, ResultExt};
use quicli::prelude::Verbosity;
use structopt::StructOpt;
use thompson::{store, Dfa, StoreFormatError, SyntaxError};

const EXIT_IO: i32 = 2;
const EXIT_SYNTAX: i32 = 3;
const EXIT_STORE_FORMAT: i32 = 4;

/// Decide membership of words in the language of a regular expression.
#[derive(Debug, StructOpt)]
struct Cli {
    #[structopt(subcommand)]
    command: Command,

    #[structopt(flatten)]
    verbosity: Verbosity,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Build the automaton for a pattern and check every word of a file.
    #[structopt(name = "RAW")]
    Raw {
        /// The pattern whose language is checked.
        pattern: String,
        /// File with one word per line.
        #[structopt(parse(from_os_str))]
        words: PathBuf,
    },

    /// Load a persisted automaton and check every word of a file.
    #[structopt(name = "TDA")]
    Tda {
        /// File written by the BUILD command.
        #[structopt(parse(from_os_str))]
        automaton: PathBuf,
        /// File with one word per line.
        #[structopt(parse(from_os_str))]
        words: PathBuf,
    },

    /// Print the canonical form of a pattern.
    #[structopt(name = "PARSE")]
    Parse {
        /// The pattern to print.
        pattern: String,
    },

    /// Build the automaton for a pattern and persist it.
    #[structopt(name = "BUILD")]
    Build {
        /// The pattern whose automaton is built.
        pattern: String,
        /// Destination of the persisted automaton.
        #[structopt(parse(from_os_str))]
        automaton: PathBuf,
    },
}

fn main() {
    let args = Cli::from_args();

    let result = args.verbosity.setup_env_logger("wordcheck").and_then(|_| {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        run(&args.command, &mut out)?;
        out.flush()?;
        Ok(())
    });

    if let Err(err) = result {
        eprintln!("error: {}", err);
        for cause in err.iter_causes() {
            eprintln!("caused by: {}", cause);
        }
        process::exit(exit_code(&err));
    }
}

fn run<W: Write>(command: &Command, mut out: W) -> Result<(), Error> {
    match *command {
        Command::Raw {
            ref pattern,
            ref words,
        } => {
            let words = verdict::read_words(words)?;
            let dfa = thompson::compile(pattern)?;
            check_words(&dfa, &words, &mut out)
        }
        Command::Tda {
            ref automaton,
            ref words,
        } => {
            let words = verdict::read_words(words)?;
            let dfa = load_automaton(automaton)?;
            check_words(&dfa, &words, &mut out)
        }
        Command::Parse { ref pattern } => {
            let tree = thompson::parse(pattern)?;
            writeln!(out, "{}", thompson::render(&tree))?;
            Ok(())
        }
        Command::Build {
            ref pattern,
            ref automaton,
        } => {
            let dfa = thompson::compile(pattern)?;
            save_automaton(&dfa, automaton)
        }
    }
}

fn check_words<W: Write>(dfa: &Dfa, words: &[String], out: &mut W) -> Result<(), Error> {
    info!("checking {} words", words.len());

    verdict::write_verdicts(dfa, words, out)?;
    Ok(())
}

fn load_automaton(path: &Path) -> Result<Dfa, Error> {
    debug!("loading automaton from {}", path.display());

    let file = File::open(path)
        .with_context(|_| format!("unable to open automaton file {}", path.display()))?;
    let dfa = store::load(BufReader::new(file))?;
    Ok(dfa)
}

fn save_automaton(dfa: &Dfa, path: &Path) -> Result<(), Error> {
    debug!("saving automaton to {}", path.display());

    let file = File::create(path)
        .with_context(|_| format!("unable to create automaton file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    store::save(dfa, &mut out)
        .and_then(|_| out.flush())
        .with_context(|_| format!("unable to write automaton file {}", path.display()))?;
    Ok(())
}

// Anything that is neither a pattern nor an automaton problem came from
// reading or writing a file.
fn exit_code(err: &Error) -> i32 {
    if err.downcast_ref::<SyntaxError>().is_some() {
        EXIT_SYNTAX
    } else if err.downcast_ref::<StoreFormatError>().is_some() {
        EXIT_STORE_FORMAT
    } else {
        EXIT_IO
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn output_of(command: &Command) -> String {
        let mut out = Vec::new();
        run(command, &mut out).expect("Unexpected error running command");
        String::from_utf8(out).expect("Unexpected invalid utf-8")
    }

    #[test]
    fn parse_prints_canonical_form() {
        let command = Command::Parse {
            pattern: "(a)|bc*".to_string(),
        };

        assert_eq!(output_of(&command), "a|(bc*)\n");
    }

    #[test]
    fn raw_prints_one_verdict_per_word() {
        let dir = tempdir().expect("Unexpected error creating temp dir");
        let words = dir.path().join("words.txt");
        fs::write(&words, "0aab\naaaa\n\n0ab\n").expect("Unexpected error writing words");

        let command = Command::Raw {
            pattern: "(0|a)(aa(b|a))+".to_string(),
            words,
        };

        assert_eq!(output_of(&command), "True\nTrue\nFalse\nFalse\n");
    }

    #[test]
    fn tda_of_built_automaton_agrees_with_raw() {
        let dir = tempdir().expect("Unexpected error creating temp dir");
        let words = dir.path().join("words.txt");
        let automaton = dir.path().join("automaton.json");
        fs::write(&words, "\na\naa\naaaaa\nb\n").expect("Unexpected error writing words");

        let build = Command::Build {
            pattern: "a{2,4}".to_string(),
            automaton: automaton.clone(),
        };
        assert_eq!(output_of(&build), "");

        let tda = Command::Tda {
            automaton,
            words: words.clone(),
        };
        let raw = Command::Raw {
            pattern: "a{2,4}".to_string(),
            words,
        };

        assert_eq!(output_of(&tda), "False\nFalse\nTrue\nFalse\nFalse\n");
        assert_eq!(output_of(&tda), output_of(&raw));
    }

    #[test]
    fn tda_of_corrupt_automaton_has_store_exit_code() {
        let dir = tempdir().expect("Unexpected error creating temp dir");
        let words = dir.path().join("words.txt");
        let automaton = dir.path().join("automaton.json");
        fs::write(&words, "a\n").expect("Unexpected error writing words");
        fs::write(&automaton, "{\"format\": \"thompson-dfa\"}")
            .expect("Unexpected error writing automaton");

        let command = Command::Tda { automaton, words };
        let err = run(&command, Vec::new()).unwrap_err();

        assert_eq!(exit_code(&err), EXIT_STORE_FORMAT);
    }

    #[test]
    fn raw_with_bad_pattern_has_syntax_exit_code() {
        let dir = tempdir().expect("Unexpected error creating temp dir");
        let words = dir.path().join("words.txt");
        fs::write(&words, "a\n").expect("Unexpected error writing words");

        let command = Command::Raw {
            pattern: ")a".to_string(),
            words,
        };
        let err = run(&command, Vec::new()).unwrap_err();

        assert_eq!(exit_code(&err), EXIT_SYNTAX);
    }

    #[test]
    fn raw_with_missing_words_file_has_io_exit_code() {
        let command = Command::Raw {
            pattern: "a**".to_string(),
            words: PathBuf::from("/nonexistent/words.txt"),
        };
        let err = run(&command, Vec::new()).unwrap_err();

        assert_eq!(exit_code(&err), EXIT_IO);
    }

    #[test]
    fn syntax_error_has_syntax_exit_code() {
        let err: Error = thompson::compile("a**").unwrap_err().into();

        assert_eq!(exit_code(&err), EXIT_SYNTAX);
    }

    #[test]
    fn store_format_error_has_store_exit_code() {
        let err: Error = store::load(&b"{"[..]).unwrap_err().into();

        assert_eq!(exit_code(&err), EXIT_STORE_FORMAT);
    }

    #[test]
    fn missing_automaton_file_has_io_exit_code() {
        let err = load_automaton(Path::new("/nonexistent/automaton.json")).unwrap_err();

        assert_eq!(exit_code(&err), EXIT_IO);
    }
}
