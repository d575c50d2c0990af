//! Command-line entrypoint: count or project duplicate rows in a JSON Lines file.
//! Duplicate reports go to stdout; tracing output goes to stderr.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Args, Parser};
use dupkey::{
    count_duplicates, extract_key_columns, read_json_lines, DedupOptions, KeySchema,
    WriterReporter,
};
use tracing_subscriber::EnvFilter;

#[derive(Args, Debug)]
struct Input {
    /// Key column; repeat in nesting order.
    #[arg(short, long = "key", value_name = "COLUMN", required = true)]
    keys: Vec<String>,
    /// JSON Lines input; stdin when omitted or `-`.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Composite-key duplicate detection")]
enum Command {
    /// Report every row whose key tuple already appeared, then print the total.
    Count {
        #[command(flatten)]
        input: Input,
        /// Count only; do not print one line per duplicate.
        #[arg(short, long)]
        quiet: bool,
    },
    /// Print each row projected onto the key columns, as JSON Lines.
    Extract {
        #[command(flatten)]
        input: Input,
    },
}

fn open(file: Option<&PathBuf>) -> anyhow::Result<Box<dyn BufRead>> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cmd = Command::parse();

    match cmd {
        Command::Count { input, quiet } => {
            let schema = KeySchema::new(input.keys)?;
            let rows = read_json_lines(open(input.file.as_ref())?).context("reading rows")?;
            let options = DedupOptions::default().quiet(quiet);
            let mut reporter = WriterReporter::new(io::stdout().lock());

            let count = count_duplicates(&rows, &schema, &options, &mut reporter)?;
            reporter.flush()?;
            let mut stdout = reporter.into_inner();
            writeln!(stdout, "duplicates: {count}")?;
        }
        Command::Extract { input } => {
            let rows = read_json_lines(open(input.file.as_ref())?).context("reading rows")?;
            let mut stdout = io::stdout().lock();
            for projected in extract_key_columns(&rows, &input.keys) {
                serde_json::to_writer(&mut stdout, &projected)?;
                writeln!(stdout)?;
            }
        }
    }

    Ok(())
}
