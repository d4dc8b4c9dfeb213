use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde_json::json;

use bookdex_core::frequency::{ids_with_multiplicity, occurrence_distribution};
use bookdex_core::report::frequency_report;
use bookdex_core::table::read_id_column;

#[derive(Parser)]
#[command(
    name = "idstats",
    about = "Frequency statistics over the id column of a CSV table",
    version
)]
struct Cli {
    /// CSV file with a header row containing an `id` column.
    #[arg(default_value = "table.csv")]
    file: PathBuf,

    /// Occurrence count the first report section filters by.
    #[arg(long, default_value_t = 3)]
    count: usize,

    /// Output in JSON format (for scripts).
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let ids = read_id_column(&cli.file)?;
    let matching = ids_with_multiplicity(&ids, cli.count);
    let distribution = occurrence_distribution(&ids);

    if cli.json {
        let payload = json!({
            "count": cli.count,
            "matching": matching,
            "distribution": distribution,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!("{}", frequency_report(&matching, &distribution));
    }

    Ok(())
}
