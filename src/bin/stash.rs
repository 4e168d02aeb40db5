//! Stash CLI - password-protected text stashing
//!
//! Command-line interface for sealing content into submission payloads and
//! opening them again, using AES-256-GCM with PBKDF2 key derivation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use stash::ops;
use stash::passgen;
use stash::password::{PasswordReader, ReaderPasswordReader, TerminalPasswordReader};

#[derive(Parser)]
#[command(name = "stash")]
#[command(version)]
#[command(about = "Password-protected text stashing.", long_about = None)]
struct Cli {
    /// Read password from stdin instead of from terminal
    #[arg(long, global = true)]
    password_stdin: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seal a content file into a submission payload
    #[command(alias = "s")]
    Seal {
        /// Path to the file whose contents is to be sealed
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Path to the file to write the payload to
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Open a submission payload into plaintext
    #[command(alias = "o")]
    Open {
        /// Path to the payload file to open
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Path to the file to write the content to
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Generate a random password
    #[command(alias = "p")]
    Password {
        /// Number of characters to generate
        #[arg(short, long, default_value_t = passgen::DEFAULT_LENGTH)]
        length: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Seal { input, output } => {
            let mut reader = get_password_reader(cli.password_stdin);
            ops::seal_file(&input, &output, &mut *reader)
        }
        Commands::Open { input, output } => {
            let mut reader = get_password_reader(cli.password_stdin);
            ops::open_file(&input, &output, &mut *reader)
        }
        Commands::Password { length } => {
            println!("{}", passgen::generate(length));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let mut source = std::error::Error::source(&e);
        while let Some(s) = source {
            eprintln!("  caused by: {}", s);
            source = s.source();
        }
        process::exit(1);
    }
}

fn get_password_reader(use_stdin: bool) -> Box<dyn PasswordReader> {
    if use_stdin {
        Box::new(ReaderPasswordReader::new(Box::new(std::io::stdin())))
    } else {
        Box::new(TerminalPasswordReader)
    }
}
