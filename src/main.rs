use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use wordsearch::cli::output::{self, OutputFormat};
use wordsearch::config::Overrides;
use wordsearch::grid::upper_char;
use wordsearch::{puzzle, BoundsCheck, Config, SearchReport, WordFinder};

#[derive(Parser, Debug)]
#[command(name = "wordsearch")]
#[command(version, about = "Find words hidden in a letter grid", long_about = None)]
struct Cli {
    /// Puzzle file (.csv with a word list header, or plain grid rows)
    #[arg(value_name = "PUZZLE", required_unless_present = "completion")]
    puzzle: Option<PathBuf>,

    /// Word to search for; overrides the puzzle's word list
    #[arg(short, long = "word", value_name = "WORD")]
    words: Vec<String>,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Bounds check to use (strict, legacy); overrides config files
    #[arg(long, value_name = "MODE")]
    bounds: Option<BoundsCheck>,

    /// Shorthand for --bounds legacy (down vs. column count, forward vs. row count)
    #[arg(long, conflicts_with = "bounds")]
    legacy_bounds: bool,

    /// Match regardless of letter case
    #[arg(short, long)]
    ignore_case: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if words are missing
    #[arg(long)]
    no_fail: bool,

    /// Log search details to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "wordsearch", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(&Overrides {
        bounds: if cli.legacy_bounds {
            Some(BoundsCheck::Legacy)
        } else {
            cli.bounds
        },
        ignore_case: cli.ignore_case,
        format: cli.format.map(|f| f.to_string()),
    })?;
    let format: OutputFormat = config
        .format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let Some(puzzle_path) = cli.puzzle else {
        anyhow::bail!("No puzzle specified. Use --help for usage information.");
    };
    let puzzle = puzzle::load(&puzzle_path)?;
    log::info!(
        "loaded {}x{} grid from {}",
        puzzle.grid.rows(),
        puzzle.grid.columns(),
        puzzle_path.display()
    );

    let mut words = if cli.words.is_empty() {
        puzzle.words
    } else {
        cli.words
    };
    if words.is_empty() {
        anyhow::bail!("No words to search for. Pass --word or add a word list to the puzzle.");
    }

    let grid = if config.ignore_case {
        words = words
            .iter()
            .map(|w| w.chars().map(upper_char).collect())
            .collect();
        puzzle.grid.to_uppercase()
    } else {
        puzzle.grid
    };

    let mut finder = WordFinder::with_bounds(config.bounds);
    finder.load_grid(&grid);
    log::debug!("searching {} words with {} bounds", words.len(), finder.bounds());

    let report = SearchReport::run(&finder, words)?;

    let colored = !cli.no_color;
    output::print_report(&report, colored, format)?;
    output::print_summary(&report, colored);

    if report.missing > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}
