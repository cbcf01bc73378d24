//! src/main.rs
use clap::{Parser, Subcommand};
use std::io::BufWriter;
use wordfreq::configuration::{get_configuration, AggregationMode};
use wordfreq::pipeline::{run_aggregator, run_grouped_aggregator, run_local, run_tokenizer};
use wordfreq::telemetry::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "wordfreq", about = "Streaming word-count map/reduce stages")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tokenize raw text from stdin into word\t1 records on stdout.
    Map,
    /// Total sorted word\tcount records from stdin onto stdout.
    Reduce {
        /// Aggregate in memory instead of the streaming fold, lifting the
        /// sorted-input requirement.
        #[arg(long)]
        grouped: bool,
    },
    /// Run map, an in-memory sort, and reduce in one process.
    Local,
}

fn main() -> anyhow::Result<()> {
    init_tracing("wordfreq")?;
    let configuration = get_configuration()?;

    let cli = Cli::parse();
    let stdin = std::io::stdin().lock();
    let stdout = BufWriter::with_capacity(
        configuration.io.write_buffer_bytes,
        std::io::stdout().lock(),
    );

    match cli.command {
        Command::Map => run_tokenizer(stdin, stdout),
        Command::Reduce { grouped } => {
            let mode = if grouped {
                AggregationMode::Grouped
            } else {
                configuration.aggregation.mode
            };
            match mode {
                AggregationMode::Sorted => run_aggregator(stdin, stdout),
                AggregationMode::Grouped => run_grouped_aggregator(stdin, stdout),
            }
        }
        Command::Local => run_local(stdin, stdout),
    }
}
