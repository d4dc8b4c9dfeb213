use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;

use bookdex_core::error::BookdexError;
use bookdex_core::formats::read_book;
use bookdex_core::report::metadata_report;

#[derive(Parser)]
#[command(
    name = "bookmeta",
    about = "Extract title, author, publisher and year from an EPUB or FB2 file",
    version
)]
struct Cli {
    /// Path to a `.epub` or `.fb2` file.
    file: PathBuf,

    /// Output in JSON format (for scripts).
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(_) => {
            println!("Usage: bookmeta <FILE>");
            process::exit(1);
        }
    };

    match read_book(&cli.file) {
        Ok(meta) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&meta)?);
            } else {
                print!("{}", metadata_report(&meta));
            }
        }
        Err(BookdexError::UnsupportedFormat(_)) => {
            println!("Unsupported file format");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }

    Ok(())
}
