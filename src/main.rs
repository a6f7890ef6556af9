//! Wordplay - CLI
//!
//! Reads a word list, finds anagrams and Wordle similarity totals for every
//! word, and writes the results as JSON (and optionally a binary snapshot).

use anyhow::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::thread;
use tracing::{Level, debug, info, warn};
use tracing_subscriber::FmtSubscriber;
use wordplay::{
    WordsError,
    analysis::{AnalysisConfig, CancelToken, PairwiseAnalyzer},
    commands::{RunConfig, run_analysis},
    output::print_run_result,
    wordlists::LoadConfig,
};

#[derive(Parser)]
#[command(
    name = "wordplay",
    about = "Find anagrams and Wordle letter similarity across a word list",
    version,
    author
)]
struct Cli {
    /// Word list, one word per line
    source: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// JSON output file
    #[arg(short, long, default_value = "words.json")]
    output: PathBuf,

    /// Also write a binary snapshot of the analysed collection
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Read at most this many lines from the source
    #[arg(short, long)]
    max_words: Option<usize>,

    /// Shortest word to keep
    #[arg(short = 'l', long, default_value_t = LoadConfig::DEFAULT_MIN_LEN)]
    min_len: usize,

    /// Log a trace every this many pairs within a length class (with -vv)
    #[arg(long, default_value_t = PairwiseAnalyzer::DEFAULT_PAGINATION)]
    pagination: u64,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        let mut config = RunConfig::new(&self.source);
        config.load = LoadConfig::new(self.min_len).with_max_words(self.max_words);
        config.analysis = AnalysisConfig::new(self.pagination).with_progress(!self.no_progress);
        config.json_output = Some(self.output.clone());
        config.snapshot_output.clone_from(&self.snapshot);
        config
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    // A subscriber may already be installed when embedded
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Exit status for a forced quit: 128 + SIGINT
const FORCED_EXIT: i32 = 130;

/// Trip `cancel` on the first Ctrl+C, exit on the second
fn watch_interrupt(cancel: CancelToken) {
    let spawned = thread::Builder::new()
        .name("ctrl-c".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    debug!("Signal handler unavailable: {e}");
                    return;
                }
            };

            runtime.block_on(async {
                if tokio::signal::ctrl_c().await.is_err() {
                    return;
                }
                warn!("Interrupt received, stopping after the current rows (Ctrl+C again to quit)");
                cancel.cancel();

                if tokio::signal::ctrl_c().await.is_ok() {
                    eprintln!("Interrupted");
                    std::process::exit(FORCED_EXIT);
                }
            });
        });

    if let Err(e) = spawned {
        debug!("Signal thread not started: {e}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cancel = CancelToken::new();
    watch_interrupt(cancel.clone());

    let outcome = run_analysis(&cli.run_config(), &cancel);
    info!("Done");

    match outcome {
        Ok(result) => {
            print_run_result(&result);
            Ok(())
        }
        Err(err @ (WordsError::SourceNotFound { .. } | WordsError::Interrupted)) => {
            println!("{err}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
