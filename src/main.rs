use clap::{ArgAction, Parser};
use mpags_cipher::cli::{run_cipher, RunOptions};
use mpags_cipher::{CipherJob, CipherKind, CipherMode, DEFAULT_WORKERS};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("MPAGS_VERSION");
const GIT_HASH: &str = env!("MPAGS_GIT_HASH");

#[derive(Parser)]
#[command(name = "mpags-cipher")]
#[command(
    about = "Encrypts/Decrypts input alphanumeric text using classical ciphers",
    long_about = None
)]
struct Cli {
    /// Print version information
    #[arg(short = 'V', long)]
    version: bool,

    /// Read text to be processed from FILE (stdin if not supplied)
    #[arg(short = 'i', value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write processed text to FILE (stdout if not supplied)
    #[arg(short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Cipher to use: caesar, playfair or vigenere
    #[arg(short = 'c', value_name = "CIPHER", default_value = "caesar", value_parser = parse_cipher)]
    cipher: CipherKind,

    /// Cipher key
    #[arg(short = 'k', value_name = "KEY", required_unless_present = "version")]
    key: Option<String>,

    /// Encrypt the input text (default)
    #[arg(long, conflicts_with = "decrypt")]
    encrypt: bool,

    /// Decrypt the input text
    #[arg(long)]
    decrypt: bool,

    /// Number of segments processed in parallel
    #[arg(
        short = 'j',
        long,
        env = "MPAGS_WORKERS",
        default_value_t = DEFAULT_WORKERS,
        value_parser = parse_workers
    )]
    workers: usize,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_cipher(s: &str) -> Result<CipherKind, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn parse_workers(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("worker count must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("{}", e)),
    }
}

fn setup_logging(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            _ => tracing_subscriber::EnvFilter::new("debug"),
        }
    });

    // stdout carries the cipher output, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("mpags-cipher {} ({})", VERSION, GIT_HASH);
        return ExitCode::SUCCESS;
    }

    setup_logging(cli.verbose);

    // --encrypt and --decrypt conflict, encrypt is the default
    let mode = match (cli.encrypt, cli.decrypt) {
        (_, true) => CipherMode::Decrypt,
        _ => CipherMode::Encrypt,
    };

    let options = RunOptions {
        input: cli.input,
        output: cli.output,
        job: CipherJob {
            kind: cli.cipher,
            key: cli.key.unwrap_or_default(),
            mode,
            workers: cli.workers,
        },
    };

    match run_cipher(&options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
