//! bedshelf: filter and reorder BED records by an external chromosome list.
//!
//! Usage: bedshelf [--rules standard_selection.tsv] < in.bed > out.bed

use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use bedshelf::{BucketSorter, Rulebook, ShelfError};

#[derive(Parser)]
#[command(name = "bedshelf")]
#[command(version)]
#[command(
    about = "Filter and reorder BED records by an external chromosome ordering list",
    long_about = None
)]
struct Cli {
    /// Rulebook file: one chromosome name per line; output groups follow
    /// this order and chromosomes not listed are dropped
    #[arg(short = 'r', long = "rules", default_value = "standard_selection.tsv")]
    rules: PathBuf,

    /// Input BED file (use - for stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print ingest statistics to stderr
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ShelfError> {
    // The rulebook loads before any input is consumed; a missing rulebook
    // is fatal.
    let rulebook = Rulebook::from_file(&cli.rules)?;
    let mut sorter = BucketSorter::new(&rulebook);

    match &cli.input {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)?;
            sorter.ingest(BufReader::new(file))?;
        }
        _ => {
            let stdin = io::stdin();
            sorter.ingest(stdin.lock())?;
        }
    }

    let stdout = io::stdout();
    let mut writer = BufWriter::with_capacity(256 * 1024, stdout.lock());
    sorter.emit(&mut writer)?;
    writer.flush()?;

    if cli.stats {
        eprintln!("bedshelf stats: {}", sorter.stats());
    }

    Ok(())
}
