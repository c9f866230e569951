//! Octordle Solver - CLI
//!
//! Suggests guesses for every board of a multi-board Wordle game and narrows
//! each board down from the CPA codes the player reports back.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use octordle_solver::{
    board::LetterCounting,
    commands::{Octordle, run_best_start, run_play, run_showdown},
    core::Word,
    logging,
    output::{print_best_start_result, print_showdown_result},
    session::SessionConfig,
    wordlists::{self, EMBEDDED},
};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "octordle_solver",
    about = "Multi-board Wordle solver driven by CPA feedback codes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = EMBEDDED)]
    wordlist: String,

    /// TOML file with session options; flags override it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log engine decisions to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a live game board by board (default)
    Solve(SolveArgs),

    /// Play a casual game against a random word
    Play,

    /// Measure openers over many simulated single-board games
    Showdown {
        /// Number of matches to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Openers to test instead of the configured ones
        openers: Vec<String>,
    },

    /// Rate every word as a lone opener against every solution
    BestStart {
        /// Number of openers to print
        #[arg(short = 'n', long, default_value = "20")]
        top: usize,

        /// Write every score to this JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Default)]
struct SolveArgs {
    /// Number of boards
    #[arg(short, long)]
    boards: Option<usize>,

    /// Type the opening guesses instead of using the configured openers
    #[arg(long)]
    manual_openers: bool,

    /// Accept opening guesses that are not in the word list
    #[arg(long)]
    allow_non_dictionary: bool,

    /// Stay on the current board after every guess
    #[arg(long)]
    no_auto_advance: bool,

    /// Start a new game whenever one finishes
    #[arg(long)]
    endless: bool,

    /// How present letters are counted when filtering
    #[arg(long, value_enum)]
    letter_counting: Option<LetterCounting>,

    /// Save file used by `ss` and `ll`
    #[arg(long)]
    save_path: Option<PathBuf>,
}

impl SolveArgs {
    fn apply(self, config: &mut SessionConfig) {
        if let Some(boards) = self.boards {
            config.board_count = boards;
        }
        config.manual_openers |= self.manual_openers;
        config.allow_non_dictionary_guesses |= self.allow_non_dictionary;
        config.auto_advance &= !self.no_auto_advance;
        config.endless_replay |= self.endless;
        if let Some(counting) = self.letter_counting {
            config.letter_counting = counting;
        }
        if let Some(path) = self.save_path {
            config.save_path = path;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let universe = wordlists::universe(&cli.wordlist)
        .with_context(|| format!("failed to load word list '{}'", cli.wordlist))?;
    let mut config = match &cli.config {
        Some(path) => SessionConfig::from_file(path)?,
        None => SessionConfig::default(),
    };

    // Default to solving if no command given
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Solve(SolveArgs::default()));

    match command {
        Commands::Solve(args) => {
            args.apply(&mut config);
            config.validate()?;
            run_solve_command(&universe, config)
        }
        Commands::Play => run_play_command(&universe),
        Commands::Showdown { count, openers } => {
            if !openers.is_empty() {
                config.openers = openers;
            }
            run_showdown_command(&universe, &config, count)
        }
        Commands::BestStart { top, output } => {
            run_best_start_command(&universe, &config, top, output.as_deref())
        }
    }
}

fn run_solve_command(universe: &[Word], config: SessionConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut solver = Octordle::new(universe, config, stdin.lock(), io::stdout(), rand::rng());
    solver.run()?;
    Ok(())
}

fn run_play_command(universe: &[Word]) -> Result<()> {
    let stdin = io::stdin();
    run_play(universe, &mut stdin.lock(), &mut io::stdout(), &mut rand::rng())?;
    Ok(())
}

fn run_showdown_command(universe: &[Word], config: &SessionConfig, count: usize) -> Result<()> {
    let openers = config.opener_words()?;
    println!(
        "Running showdown on {count} random words with {} openers...",
        openers.len()
    );

    let result = run_showdown(universe, &openers, config.letter_counting, count, true);
    print_showdown_result(&result);
    Ok(())
}

fn run_best_start_command(
    universe: &[Word],
    config: &SessionConfig,
    top: usize,
    output: Option<&Path>,
) -> Result<()> {
    println!("Scoring {} openers against every solution...", universe.len());

    let result = run_best_start(universe, config.letter_counting, true);
    print_best_start_result(&result, top);

    if let Some(path) = output {
        let file = File::create(path)
            .with_context(|| format!("failed to create '{}'", path.display()))?;
        result
            .write_json(BufWriter::new(file))
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        println!("\nScores written to {}", path.display());
    }
    Ok(())
}
